//! Event type
//!
//! An event is an opaque mapping from attribute name to a typed scalar
//! value. Events are owned by the caller; the engine only reads attributes
//! and never mutates them.

use super::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single event in an ordered sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    attributes: HashMap<String, Value>,
}

impl Event {
    /// Create an event with no attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute insertion
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set or replace an attribute
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Look up an attribute; `None` when the event does not carry it
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Number of attributes on this event
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the event carries no attributes
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
