//! Compiled condition predicates

use crate::ast::Operator;
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Operand of a compiled comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CompiledOperand {
    /// Literal value
    Literal(Value),

    /// Attribute of the candidate event
    Attribute(String),

    /// Attribute of the last event bound to the term at index `term`.
    /// The index always refers to a term strictly earlier in the
    /// definition than the term owning this predicate.
    Bound { term: usize, attribute: String },
}

/// Evaluable predicate over (candidate event, match context)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Single comparison
    Compare {
        left: CompiledOperand,
        op: Operator,
        right: CompiledOperand,
    },

    /// Conjunction, short-circuiting left to right
    And(Box<Predicate>, Box<Predicate>),
}
