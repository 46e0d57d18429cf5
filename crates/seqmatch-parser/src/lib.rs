//! Seqmatch Parser - pattern language front end
//!
//! Turns a textual pattern such as
//! `A(attribute='x') -> B{2,4}?(attribute=A.correlation_id)` into the AST
//! defined in seqmatch-core. Lexing and parsing are separate stages so
//! callers can surface lexical and grammatical failures distinctly.

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{LexError, ParseError};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::PatternParser;
