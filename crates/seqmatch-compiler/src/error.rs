//! Compiler error types

use seqmatch_parser::{LexError, ParseError};
use thiserror::Error;

/// Quantifier normalization error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantifierError {
    /// `{min,max}` with `max < min`
    #[error("Invalid quantifier range {{{min},{max}}} for term at position {position}")]
    InvalidRange {
        position: usize,
        min: u32,
        max: u32,
    },
}

impl QuantifierError {
    /// Byte offset of the owning term in the pattern source
    pub fn position(&self) -> usize {
        match self {
            QuantifierError::InvalidRange { position, .. } => *position,
        }
    }
}

/// Condition compilation error
///
/// Structural issues only; runtime attribute values never fail compilation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConditionCompileError {
    /// Bound reference to a term that is not declared strictly earlier
    #[error("Condition of term at position {position} references term '{term}', which is not bound earlier in the pattern")]
    UnknownTerm { position: usize, term: String },
}

impl ConditionCompileError {
    /// Byte offset of the owning term in the pattern source
    pub fn position(&self) -> usize {
        match self {
            ConditionCompileError::UnknownTerm { position, .. } => *position,
        }
    }
}

/// Any failure while compiling a pattern string
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// Lexical error
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Grammar error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Condition compilation error
    #[error(transparent)]
    Condition(#[from] ConditionCompileError),

    /// Quantifier normalization error
    #[error(transparent)]
    Quantifier(#[from] QuantifierError),
}

impl CompileError {
    /// Byte offset of the offending syntax in the pattern source
    pub fn position(&self) -> usize {
        match self {
            CompileError::Lex(e) => e.position(),
            CompileError::Parse(e) => e.position(),
            CompileError::Condition(e) => e.position(),
            CompileError::Quantifier(e) => e.position(),
        }
    }
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
