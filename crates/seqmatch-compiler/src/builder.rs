//! Pattern definition builder
//!
//! Drives the full compile pipeline: lex, parse, resolve quantifiers,
//! compile conditions, assemble the immutable definition.

use crate::condition;
use crate::error::Result;
use crate::quantifier;
use seqmatch_core::ast::Pattern;
use seqmatch_core::ir::{CompiledTerm, PatternDefinition};
use seqmatch_parser::{Lexer, PatternParser};

/// The pattern compiler
#[derive(Debug, Default)]
pub struct PatternCompiler;

impl PatternCompiler {
    /// Create a new compiler instance
    pub fn new() -> Self {
        Self
    }

    /// Compile a pattern string
    pub fn compile(&self, pattern: &str) -> Result<PatternDefinition> {
        let tokens = Lexer::tokenize(pattern)?;
        let ast = PatternParser::parse(tokens)?;
        self.compile_pattern(&ast)
    }

    /// Compile an already-parsed pattern AST
    pub fn compile_pattern(&self, pattern: &Pattern) -> Result<PatternDefinition> {
        let mut compiled = Vec::with_capacity(pattern.terms.len());
        let mut earlier: Vec<String> = Vec::new();
        for term in &pattern.terms {
            let quantifier = quantifier::resolve(term)?;
            let predicate = condition::compile(term, &earlier)?;
            earlier.push(term.name.clone());
            compiled.push(CompiledTerm {
                name: term.name.clone(),
                predicate,
                quantifier,
                contiguity: term.contiguity,
            });
        }
        Ok(PatternDefinition::new(compiled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqmatch_core::ast::Contiguity;

    #[test]
    fn test_compile_two_term_pattern() {
        let definition = PatternCompiler::new()
            .compile("A(attribute='testabc') -> B(attribute=30)")
            .unwrap();

        assert_eq!(definition.term_count(), 2);
        assert_eq!(definition.terms()[0].name, "A");
        assert_eq!(definition.terms()[0].contiguity, Contiguity::Strict);
        assert_eq!(definition.terms()[1].name, "B");
        assert_eq!(definition.terms()[1].contiguity, Contiguity::Relaxed);
    }

    #[test]
    fn test_compile_quantifier_flags() {
        let definition = PatternCompiler::new()
            .compile("A{2,4}?(attribute='testabc') B{3}(attribute=30)?")
            .unwrap();

        let a = definition.terms()[0].quantifier;
        assert_eq!((a.min, a.max), (2, Some(4)));
        assert!(a.greedy);
        assert!(!a.optional);

        let b = definition.terms()[1].quantifier;
        assert_eq!((b.min, b.max), (3, Some(3)));
        assert!(!b.greedy);
        assert!(b.optional);
    }

    #[test]
    fn test_compile_is_deterministic() {
        let pattern = "A(attribute='x') -> B{2,4}(attribute=A.correlation_id)";
        let first = PatternCompiler::new().compile(pattern).unwrap();
        let second = PatternCompiler::new().compile(pattern).unwrap();
        assert_eq!(first, second);
    }
}
