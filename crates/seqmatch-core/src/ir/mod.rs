//! Compiled pattern representation
//!
//! The compiled form is a lower-level representation the matching engine
//! executes directly: quantifiers normalized to canonical specifications
//! and bound-term references resolved to term indices, so the engine never
//! re-interprets raw syntax.

pub mod definition;
pub mod predicate;

pub use definition::{CompiledTerm, PatternDefinition, QuantifierSpec};
pub use predicate::{CompiledOperand, Predicate};
