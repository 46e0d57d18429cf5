//! Pattern grammar parser
//!
//! Single-pass LL(1) recursive descent over the token stream:
//!
//! ```text
//! pattern     := term (contiguity? term)*
//! contiguity  := '->>' | '->'                 // absence = strict
//! term        := IDENT quantifier? '(' condition ')' '?'?
//! quantifier  := '{' INT (',' (INT | '+'))? '}' '?'?
//!              | '*' '?'?
//! condition   := comparison ('and' comparison)*
//! comparison  := operand OP operand
//! operand     := literal | IDENT | IDENT '.' IDENT
//! ```
//!
//! Dotted references are validated against the terms declared so far, so a
//! condition can only reach events bound strictly earlier in the pattern.

use crate::error::{ParseError, Result};
use crate::lexer::{Token, TokenKind};
use seqmatch_core::ast::{
    ConditionExpr, Contiguity, Operand, Operator, Pattern, QuantifierKind, QuantifierSyntax, Term,
};
use seqmatch_core::Value;

/// Recursive-descent parser over a lexed token stream
pub struct PatternParser {
    tokens: Vec<Token>,
    pos: usize,
    /// Names of terms parsed so far, in declaration order
    declared: Vec<String>,
}

impl PatternParser {
    /// Parse a full pattern from its token stream
    pub fn parse(tokens: Vec<Token>) -> Result<Pattern> {
        let mut parser = Self {
            tokens,
            pos: 0,
            declared: Vec::new(),
        };
        parser.parse_pattern()
    }

    fn parse_pattern(&mut self) -> Result<Pattern> {
        if matches!(self.peek().kind, TokenKind::Arrow | TokenKind::ArrowAny) {
            return Err(ParseError::LeadingContiguity {
                position: self.peek().position,
            });
        }
        let mut terms = vec![self.parse_term(Contiguity::Strict)?];
        loop {
            let contiguity = match self.peek().kind {
                TokenKind::Eof => break,
                TokenKind::Arrow => {
                    self.advance();
                    Contiguity::Relaxed
                }
                TokenKind::ArrowAny => {
                    self.advance();
                    Contiguity::RelaxedAny
                }
                _ => Contiguity::Strict,
            };
            terms.push(self.parse_term(contiguity)?);
        }
        log::debug!("parsed pattern with {} terms", terms.len());
        Ok(Pattern { terms })
    }

    fn parse_term(&mut self, contiguity: Contiguity) -> Result<Term> {
        let (name, position) = self.expect_ident("a term name")?;
        if self.declared.iter().any(|declared| declared == &name) {
            return Err(ParseError::DuplicateTerm { position, name });
        }
        let quantifier = self.parse_quantifier()?;
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::RParen)?;
        let optional = self.eat(&TokenKind::Question);
        self.declared.push(name.clone());
        Ok(Term {
            name,
            position,
            quantifier,
            optional,
            contiguity,
            condition,
        })
    }

    fn parse_quantifier(&mut self) -> Result<Option<QuantifierSyntax>> {
        let kind = match self.peek().kind {
            TokenKind::Star => {
                self.advance();
                QuantifierKind::ZeroOrMore
            }
            TokenKind::LBrace => {
                let open = self.peek().position;
                self.advance();
                let min = self.expect_count()?;
                let kind = if self.eat(&TokenKind::Comma) {
                    if self.eat(&TokenKind::Plus) {
                        QuantifierKind::Range { min, max: None }
                    } else {
                        let max = self.expect_count()?;
                        QuantifierKind::Range {
                            min,
                            max: Some(max),
                        }
                    }
                } else {
                    QuantifierKind::Exact(min)
                };
                if !self.eat(&TokenKind::RBrace) {
                    return Err(ParseError::UnterminatedQuantifier { position: open });
                }
                kind
            }
            _ => return Ok(None),
        };
        let question = self.eat(&TokenKind::Question);
        Ok(Some(QuantifierSyntax { kind, question }))
    }

    fn parse_condition(&mut self) -> Result<ConditionExpr> {
        let mut expr = self.parse_comparison()?;
        while self.eat(&TokenKind::And) {
            let right = self.parse_comparison()?;
            expr = ConditionExpr::and(expr, right);
        }
        Ok(expr)
    }

    fn parse_comparison(&mut self) -> Result<ConditionExpr> {
        let left = self.parse_operand()?;
        let op = self.expect_operator()?;
        let right = self.parse_operand()?;
        Ok(ConditionExpr::comparison(left, op, right))
    }

    fn parse_operand(&mut self) -> Result<Operand> {
        let token = self.advance();
        match token.kind {
            TokenKind::Str(value) => Ok(Operand::Literal(Value::String(value))),
            TokenKind::Number(value) => Ok(Operand::Literal(Value::Number(value))),
            TokenKind::Ident(name) => {
                if self.eat(&TokenKind::Dot) {
                    let (attribute, _) = self.expect_ident("an attribute name")?;
                    if !self.declared.iter().any(|declared| declared == &name) {
                        return Err(ParseError::UnknownTermReference {
                            position: token.position,
                            term: name,
                        });
                    }
                    Ok(Operand::BoundAttribute {
                        term: name,
                        attribute,
                    })
                } else if name == "true" {
                    Ok(Operand::Literal(Value::Bool(true)))
                } else if name == "false" {
                    Ok(Operand::Literal(Value::Bool(false)))
                } else {
                    Ok(Operand::Attribute(name))
                }
            }
            _ => Err(Self::unexpected(&token, "a literal or attribute")),
        }
    }

    fn expect_operator(&mut self) -> Result<Operator> {
        let token = self.advance();
        match token.kind {
            TokenKind::Eq => Ok(Operator::Eq),
            TokenKind::Ne => Ok(Operator::Ne),
            TokenKind::Lt => Ok(Operator::Lt),
            TokenKind::Le => Ok(Operator::Le),
            TokenKind::Gt => Ok(Operator::Gt),
            TokenKind::Ge => Ok(Operator::Ge),
            _ => Err(Self::unexpected(&token, "a comparison operator")),
        }
    }

    fn expect_count(&mut self) -> Result<u32> {
        let token = self.advance();
        match token.kind {
            TokenKind::Number(value)
                if value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) =>
            {
                Ok(value as u32)
            }
            _ => Err(Self::unexpected(&token, "a non-negative integer count")),
        }
    }

    fn expect_ident(&mut self, expected: &str) -> Result<(String, usize)> {
        let token = self.advance();
        match token.kind {
            TokenKind::Ident(name) => Ok((name, token.position)),
            _ => Err(Self::unexpected(&token, expected)),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        let token = self.advance();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(Self::unexpected(&token, &kind.describe()))
        }
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if &self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    fn peek(&self) -> &Token {
        // the lexer guarantees a trailing Eof token
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    fn unexpected(token: &Token, expected: &str) -> ParseError {
        match token.kind {
            TokenKind::Eof => ParseError::UnexpectedEnd {
                position: token.position,
                expected: expected.to_string(),
            },
            _ => ParseError::UnexpectedToken {
                position: token.position,
                expected: expected.to_string(),
                found: token.kind.describe(),
            },
        }
    }
}
