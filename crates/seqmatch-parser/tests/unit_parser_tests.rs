//! Unit tests for the seqmatch pattern front end
//!
//! Exercises the lexer and parser together through the public API.

use seqmatch_core::ast::{ConditionExpr, Contiguity, Operand, Operator, QuantifierKind};
use seqmatch_core::Value;
use seqmatch_parser::{LexError, Lexer, ParseError, PatternParser, TokenKind};

fn parse(input: &str) -> Result<seqmatch_core::ast::Pattern, ParseError> {
    PatternParser::parse(Lexer::tokenize(input).expect("lexable input"))
}

// ========== Lexer ==========

#[test]
fn test_tokenizes_full_pattern() {
    let tokens = Lexer::tokenize("A(attribute='testabc') -> B{2,4}?(attribute=A.correlation_id)")
        .unwrap();
    let kinds: Vec<&TokenKind> = tokens.iter().map(|t| &t.kind).collect();

    assert!(kinds.contains(&&TokenKind::Arrow));
    assert!(kinds.contains(&&TokenKind::Dot));
    assert!(kinds.contains(&&TokenKind::Question));
    assert_eq!(kinds.last(), Some(&&TokenKind::Eof));
}

#[test]
fn test_lexer_reports_position() {
    let err = Lexer::tokenize("A(attribute=@)").unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedCharacter {
            position: 12,
            character: '@',
        }
    );
}

// ========== Parser: structure ==========

#[test]
fn test_parses_correlation_pattern() {
    let pattern =
        parse("A(attribute='testabc') -> B(attribute='testabc2' and correlation_id=A.correlation_id)")
            .unwrap();

    assert_eq!(pattern.terms.len(), 2);
    assert_eq!(pattern.terms[0].name, "A");
    assert_eq!(pattern.terms[1].name, "B");
    assert_eq!(pattern.terms[1].contiguity, Contiguity::Relaxed);

    match &pattern.terms[1].condition {
        ConditionExpr::And(_, right) => match &**right {
            ConditionExpr::Comparison { left, op, right } => {
                assert_eq!(*left, Operand::Attribute("correlation_id".to_string()));
                assert_eq!(*op, Operator::Eq);
                assert_eq!(
                    *right,
                    Operand::BoundAttribute {
                        term: "A".to_string(),
                        attribute: "correlation_id".to_string(),
                    }
                );
            }
            _ => panic!("Expected Comparison"),
        },
        _ => panic!("Expected And"),
    }
}

#[test]
fn test_parses_numeric_literal_condition() {
    let pattern = parse("B(attribute=30)").unwrap();
    match &pattern.terms[0].condition {
        ConditionExpr::Comparison { right, .. } => {
            assert_eq!(*right, Operand::Literal(Value::Number(30.0)));
        }
        _ => panic!("Expected Comparison"),
    }
}

#[test]
fn test_parses_zero_or_more_quantifier() {
    let pattern = parse("A*(attribute='testabc') B(attribute=30)").unwrap();
    let quantifier = pattern.terms[0].quantifier.unwrap();
    assert_eq!(quantifier.kind, QuantifierKind::ZeroOrMore);
    assert!(!quantifier.question);
    assert_eq!(pattern.terms[1].contiguity, Contiguity::Strict);
}

#[test]
fn test_parses_unbounded_range() {
    let pattern = parse("A{2,+}?(attribute='testabc')").unwrap();
    let quantifier = pattern.terms[0].quantifier.unwrap();
    assert_eq!(quantifier.kind, QuantifierKind::Range { min: 2, max: None });
    assert!(quantifier.question);
}

// ========== Parser: rejection ==========

#[test]
fn test_rejects_empty_pattern() {
    let err = parse("").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
    assert_eq!(err.position(), 0);
}

#[test]
fn test_rejects_missing_operator() {
    let err = parse("A(attribute 30)").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

#[test]
fn test_rejects_trailing_arrow() {
    let err = parse("A(a=1) ->").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
}

#[test]
fn test_rejects_reference_to_later_term() {
    let err = parse("A(attribute=B.attribute) -> B(attribute=30)").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownTermReference {
            position: 12,
            term: "B".to_string(),
        }
    );
}

#[test]
fn test_rejects_unclosed_condition() {
    let err = parse("A(attribute=30").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
}
