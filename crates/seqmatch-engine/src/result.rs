//! Match results

use seqmatch_core::Event;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A finalized match: term name to the ordered list of events it bound.
///
/// Terms satisfied through a zero-count quantifier (optional terms, or a
/// zero-or-more term over no matching events) are omitted from the
/// mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMatch {
    bindings: HashMap<String, Vec<Event>>,
}

impl PatternMatch {
    pub(crate) fn new(bindings: HashMap<String, Vec<Event>>) -> Self {
        Self { bindings }
    }

    /// Events bound to `term`, if it bound any
    pub fn events(&self, term: &str) -> Option<&[Event]> {
        self.bindings.get(term).map(Vec::as_slice)
    }

    /// Whether `term` bound at least one event
    pub fn contains(&self, term: &str) -> bool {
        self.bindings.contains_key(term)
    }

    /// Number of terms that bound at least one event
    pub fn term_count(&self) -> usize {
        self.bindings.len()
    }

    /// Iterate over the (term, events) bindings
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Event])> {
        self.bindings
            .iter()
            .map(|(name, events)| (name.as_str(), events.as_slice()))
    }
}
