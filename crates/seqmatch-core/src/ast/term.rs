//! Pattern and term AST nodes

use super::condition::ConditionExpr;
use serde::{Deserialize, Serialize};

/// Contiguity of a term relative to the preceding term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contiguity {
    /// Must match immediately after the previous term (bare whitespace)
    Strict,
    /// May skip past non-matching events to the first satisfying one (`->`)
    Relaxed,
    /// Forks one match attempt per satisfying event (`->>`)
    RelaxedAny,
}

/// Quantifier kinds as written in the pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantifierKind {
    /// `{n}`
    Exact(u32),
    /// `{min,max}`, or `{min,+}` when `max` is `None`
    Range { min: u32, max: Option<u32> },
    /// `*`
    ZeroOrMore,
}

/// Raw quantifier syntax, before normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantifierSyntax {
    pub kind: QuantifierKind,
    /// `?` attached directly to the quantifier
    pub question: bool,
}

/// One named, conditioned, quantified unit in the pattern sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub name: String,
    /// Byte offset of the term name in the pattern source
    pub position: usize,
    pub quantifier: Option<QuantifierSyntax>,
    /// `?` after the closing condition paren: the term may be skipped
    pub optional: bool,
    pub contiguity: Contiguity,
    pub condition: ConditionExpr,
}

/// An ordered, non-empty sequence of terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub terms: Vec<Term>,
}
