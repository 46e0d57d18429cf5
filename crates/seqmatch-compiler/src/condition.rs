//! Condition compilation
//!
//! Walks a term's condition AST and emits a `Predicate` with every
//! bound-term reference resolved to its term index. Only structural
//! problems fail here; runtime attribute values never do.

use crate::error::ConditionCompileError;
use seqmatch_core::ast::{ConditionExpr, Operand, Term};
use seqmatch_core::ir::{CompiledOperand, Predicate};

/// Compile one term's condition against the names declared before it.
///
/// `earlier` holds the names of all preceding terms in declaration order;
/// their positions double as term indices in the final definition.
pub fn compile(term: &Term, earlier: &[String]) -> Result<Predicate, ConditionCompileError> {
    compile_expr(&term.condition, term, earlier)
}

fn compile_expr(
    expr: &ConditionExpr,
    term: &Term,
    earlier: &[String],
) -> Result<Predicate, ConditionCompileError> {
    match expr {
        ConditionExpr::And(left, right) => Ok(Predicate::And(
            Box::new(compile_expr(left, term, earlier)?),
            Box::new(compile_expr(right, term, earlier)?),
        )),
        ConditionExpr::Comparison { left, op, right } => Ok(Predicate::Compare {
            left: compile_operand(left, term, earlier)?,
            op: *op,
            right: compile_operand(right, term, earlier)?,
        }),
    }
}

fn compile_operand(
    operand: &Operand,
    term: &Term,
    earlier: &[String],
) -> Result<CompiledOperand, ConditionCompileError> {
    match operand {
        Operand::Literal(value) => Ok(CompiledOperand::Literal(value.clone())),
        Operand::Attribute(name) => Ok(CompiledOperand::Attribute(name.clone())),
        Operand::BoundAttribute {
            term: target,
            attribute,
        } => {
            let index = earlier.iter().position(|name| name == target).ok_or_else(|| {
                ConditionCompileError::UnknownTerm {
                    position: term.position,
                    term: target.clone(),
                }
            })?;
            Ok(CompiledOperand::Bound {
                term: index,
                attribute: attribute.clone(),
            })
        }
    }
}
