//! Condition expression AST nodes

use super::operator::Operator;
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Operand of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// Literal value (string, number or boolean)
    Literal(Value),

    /// Attribute of the event currently being tested
    Attribute(String),

    /// Attribute of the event bound to an earlier term in the same match
    /// (e.g. `A.correlation_id`)
    BoundAttribute { term: String, attribute: String },
}

/// Condition expression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConditionExpr {
    /// Single comparison
    Comparison {
        left: Operand,
        op: Operator,
        right: Operand,
    },

    /// Conjunction, short-circuiting left to right
    And(Box<ConditionExpr>, Box<ConditionExpr>),
}

impl ConditionExpr {
    /// Create a comparison expression
    pub fn comparison(left: Operand, op: Operator, right: Operand) -> Self {
        ConditionExpr::Comparison { left, op, right }
    }

    /// Create a conjunction of two expressions
    pub fn and(left: ConditionExpr, right: ConditionExpr) -> Self {
        ConditionExpr::And(Box::new(left), Box::new(right))
    }
}
