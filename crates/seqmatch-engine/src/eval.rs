//! Predicate evaluation
//!
//! Evaluation is total over the input domain: missing attributes, unbound
//! term references and cross-type comparisons are non-matches, never
//! errors.

use crate::context::MatchContext;
use seqmatch_core::ast::Operator;
use seqmatch_core::ir::{CompiledOperand, Predicate};
use seqmatch_core::{Event, Value};

/// Evaluate a predicate against a candidate event and the in-progress match
pub(crate) fn evaluate(predicate: &Predicate, event: &Event, ctx: &MatchContext<'_>) -> bool {
    match predicate {
        Predicate::And(left, right) => {
            evaluate(left, event, ctx) && evaluate(right, event, ctx)
        }
        Predicate::Compare { left, op, right } => {
            match (resolve(left, event, ctx), resolve(right, event, ctx)) {
                (Some(l), Some(r)) => compare(l, *op, r),
                // missing attribute or unbound term reference
                _ => false,
            }
        }
    }
}

fn resolve<'v>(
    operand: &'v CompiledOperand,
    event: &'v Event,
    ctx: &MatchContext<'v>,
) -> Option<&'v Value> {
    match operand {
        CompiledOperand::Literal(value) => Some(value),
        CompiledOperand::Attribute(name) => event.attribute(name),
        CompiledOperand::Bound { term, attribute } => {
            ctx.last_event(*term)?.attribute(attribute)
        }
    }
}

/// Compare two values: numeric ordering for numbers, equality/inequality
/// for other same-typed values, false for anything else.
fn compare(left: &Value, op: Operator, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, _) | (_, Value::Null) => {
            tracing::debug!(
                "null comparison {:?} {:?} {:?}, treating as non-match",
                left,
                op,
                right
            );
            false
        }
        (Value::Number(l), Value::Number(r)) => match op {
            Operator::Eq => l == r,
            Operator::Ne => l != r,
            Operator::Gt => l > r,
            Operator::Ge => l >= r,
            Operator::Lt => l < r,
            Operator::Le => l <= r,
        },
        (Value::String(l), Value::String(r)) => match op {
            Operator::Eq => l == r,
            Operator::Ne => l != r,
            _ => false,
        },
        (Value::Bool(l), Value::Bool(r)) => match op {
            Operator::Eq => l == r,
            Operator::Ne => l != r,
            _ => false,
        },
        _ => false,
    }
}
