//! Abstract Syntax Tree (AST) definitions for the pattern language
//!
//! This module contains the AST node definitions for:
//! - Patterns and terms
//! - Quantifier syntax
//! - Condition expressions
//! - Comparison operators

pub mod condition;
pub mod operator;
pub mod term;

pub use condition::{ConditionExpr, Operand};
pub use operator::Operator;
pub use term::{Contiguity, Pattern, QuantifierKind, QuantifierSyntax, Term};
