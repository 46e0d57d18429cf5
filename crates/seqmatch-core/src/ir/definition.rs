//! Compiled pattern definitions

use super::predicate::Predicate;
use crate::ast::Contiguity;
use serde::{Deserialize, Serialize};

/// Canonical quantifier specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantifierSpec {
    /// Minimum number of bound events
    pub min: u32,
    /// Maximum number of bound events; `None` = unbounded
    pub max: Option<u32>,
    /// Prefer the largest satisfying count before backtracking
    pub greedy: bool,
    /// The term may bind zero events regardless of `min`
    pub optional: bool,
}

impl QuantifierSpec {
    /// The implicit quantifier of a term written without one
    pub fn once() -> Self {
        Self {
            min: 1,
            max: Some(1),
            greedy: false,
            optional: false,
        }
    }

    /// Whether a zero-event binding is permitted
    pub fn allows_zero(&self) -> bool {
        self.optional || self.min == 0
    }
}

/// One fully compiled term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledTerm {
    pub name: String,
    pub predicate: Predicate,
    pub quantifier: QuantifierSpec,
    pub contiguity: Contiguity,
}

/// The compiler's public artifact: an immutable, ordered, non-empty
/// sequence of compiled terms.
///
/// A definition is safe to share across threads and reuse for any number
/// of concurrent matching runs; all per-run state lives in the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternDefinition {
    terms: Vec<CompiledTerm>,
}

impl PatternDefinition {
    /// Assemble a definition from compiled terms
    pub fn new(terms: Vec<CompiledTerm>) -> Self {
        debug_assert!(!terms.is_empty(), "pattern definitions are non-empty");
        Self { terms }
    }

    /// The compiled terms, in pattern order
    pub fn terms(&self) -> &[CompiledTerm] {
        &self.terms
    }

    /// Number of terms in the definition
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Index of the term named `name`, if present
    pub fn term_index(&self, name: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.name == name)
    }
}
