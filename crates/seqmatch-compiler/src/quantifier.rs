//! Quantifier resolution
//!
//! Normalizes raw quantifier syntax into the canonical `QuantifierSpec`.
//! The trailing `?` is overloaded: attached to a ranged quantifier it
//! selects greedy repetition; attached to an exact count it marks the term
//! optional (there is no range to be greedy about). A `?` after the term's
//! condition always marks the term optional. Both resolutions happen here,
//! once, so the matching engine never re-interprets raw syntax.

use crate::error::QuantifierError;
use seqmatch_core::ast::{QuantifierKind, Term};
use seqmatch_core::ir::QuantifierSpec;

/// Resolve a term's quantifier syntax into its canonical specification
pub fn resolve(term: &Term) -> Result<QuantifierSpec, QuantifierError> {
    let mut spec = match term.quantifier {
        None => QuantifierSpec::once(),
        Some(syntax) => match syntax.kind {
            QuantifierKind::Exact(n) => QuantifierSpec {
                min: n,
                max: Some(n),
                greedy: false,
                optional: syntax.question,
            },
            QuantifierKind::Range { min, max } => {
                if let Some(max) = max {
                    if max < min {
                        return Err(QuantifierError::InvalidRange {
                            position: term.position,
                            min,
                            max,
                        });
                    }
                }
                QuantifierSpec {
                    min,
                    max,
                    greedy: syntax.question,
                    optional: false,
                }
            }
            QuantifierKind::ZeroOrMore => QuantifierSpec {
                min: 0,
                max: None,
                greedy: syntax.question,
                optional: false,
            },
        },
    };
    if term.optional {
        spec.optional = true;
    }
    Ok(spec)
}
