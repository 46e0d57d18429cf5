//! Pattern language lexer
//!
//! Produces a flat token stream from the pattern source. Whitespace is
//! insignificant except as a token separator. The stream always ends with
//! an `Eof` token positioned one past the last input byte.

use crate::error::LexError;

/// A classified lexeme with its byte offset in the pattern source
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Token kinds of the pattern language
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Term or attribute name
    Ident(String),
    /// Single-quoted string literal
    Str(String),
    /// Numeric literal
    Number(f64),
    /// `and`
    And,
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `+`
    Plus,
    /// `*`
    Star,
    /// `?`
    Question,
    /// `.`
    Dot,
    /// `->`
    Arrow,
    /// `->>`
    ArrowAny,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Human-readable description used in error messages
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(name) => format!("identifier '{name}'"),
            TokenKind::Str(value) => format!("string '{value}'"),
            TokenKind::Number(value) => format!("number {value}"),
            TokenKind::And => "'and'".to_string(),
            TokenKind::Eq => "'='".to_string(),
            TokenKind::Ne => "'!='".to_string(),
            TokenKind::Lt => "'<'".to_string(),
            TokenKind::Le => "'<='".to_string(),
            TokenKind::Gt => "'>'".to_string(),
            TokenKind::Ge => "'>='".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::LBrace => "'{'".to_string(),
            TokenKind::RBrace => "'}'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Star => "'*'".to_string(),
            TokenKind::Question => "'?'".to_string(),
            TokenKind::Dot => "'.'".to_string(),
            TokenKind::Arrow => "'->'".to_string(),
            TokenKind::ArrowAny => "'->>'".to_string(),
            TokenKind::Eof => "end of pattern".to_string(),
        }
    }
}

/// Pattern language lexer
pub struct Lexer {
    chars: Vec<(usize, char)>,
    index: usize,
    end: usize,
}

impl Lexer {
    /// Create a lexer over a pattern source
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.char_indices().collect(),
            index: 0,
            end: input.len(),
        }
    }

    /// Tokenize a pattern source in one call
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
        Lexer::new(input).run()
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some((position, c)) = self.peek() {
            if c.is_whitespace() {
                self.advance();
                continue;
            }
            let kind = self.scan_token(position, c)?;
            tokens.push(Token { kind, position });
        }
        tokens.push(Token {
            kind: TokenKind::Eof,
            position: self.end,
        });
        Ok(tokens)
    }

    fn scan_token(&mut self, position: usize, c: char) -> Result<TokenKind, LexError> {
        if c.is_alphabetic() || c == '_' {
            return Ok(self.scan_identifier());
        }
        if c.is_ascii_digit() {
            return Ok(self.scan_number(false));
        }
        self.advance();
        let kind = match c {
            '\'' => return self.scan_string(position),
            '=' => TokenKind::Eq,
            '!' => {
                if self.eat('=') {
                    TokenKind::Ne
                } else {
                    return Err(LexError::UnexpectedCharacter {
                        position,
                        character: '!',
                    });
                }
            }
            '<' => {
                if self.eat('=') {
                    TokenKind::Le
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                if self.eat('=') {
                    TokenKind::Ge
                } else {
                    TokenKind::Gt
                }
            }
            '-' => {
                if self.eat('>') {
                    if self.eat('>') {
                        TokenKind::ArrowAny
                    } else {
                        TokenKind::Arrow
                    }
                } else if matches!(self.peek(), Some((_, d)) if d.is_ascii_digit()) {
                    return Ok(self.scan_number(true));
                } else {
                    return Err(LexError::UnexpectedCharacter {
                        position,
                        character: '-',
                    });
                }
            }
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Plus,
            '*' => TokenKind::Star,
            '?' => TokenKind::Question,
            '.' => TokenKind::Dot,
            other => {
                return Err(LexError::UnexpectedCharacter {
                    position,
                    character: other,
                })
            }
        };
        Ok(kind)
    }

    fn scan_identifier(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some((_, c)) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }
        if text == "and" {
            TokenKind::And
        } else {
            TokenKind::Ident(text)
        }
    }

    fn scan_number(&mut self, negative: bool) -> TokenKind {
        let mut text = String::new();
        if negative {
            text.push('-');
        }
        while let Some((_, c)) = self.peek() {
            if c.is_ascii_digit() {
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }
        // a '.' is only part of the number when a digit follows; otherwise
        // it is the dotted-reference separator
        if matches!(self.peek(), Some((_, '.')))
            && matches!(self.peek_at(1), Some((_, d)) if d.is_ascii_digit())
        {
            text.push('.');
            self.advance();
            while let Some((_, c)) = self.peek() {
                if c.is_ascii_digit() {
                    text.push(c);
                    self.advance();
                } else {
                    break;
                }
            }
        }
        // the scanned text is digits with an optional sign and fraction,
        // which always parses as f64
        TokenKind::Number(text.parse().unwrap_or_default())
    }

    fn scan_string(&mut self, start: usize) -> Result<TokenKind, LexError> {
        let mut text = String::new();
        loop {
            match self.peek() {
                Some((_, '\'')) => {
                    self.advance();
                    return Ok(TokenKind::Str(text));
                }
                Some((_, c)) => {
                    text.push(c);
                    self.advance();
                }
                None => return Err(LexError::UnterminatedString { position: start }),
            }
        }
    }

    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.index).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<(usize, char)> {
        self.chars.get(self.index + offset).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn eat(&mut self, expected: char) -> bool {
        if matches!(self.peek(), Some((_, c)) if c == expected) {
            self.advance();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_lex_simple_term() {
        let tokens = kinds("A(attribute='testabc')");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Ident("A".to_string()),
                TokenKind::LParen,
                TokenKind::Ident("attribute".to_string()),
                TokenKind::Eq,
                TokenKind::Str("testabc".to_string()),
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_quantifier_and_arrows() {
        let tokens = kinds("{2,4}? -> ->> * +");
        assert_eq!(
            tokens,
            vec![
                TokenKind::LBrace,
                TokenKind::Number(2.0),
                TokenKind::Comma,
                TokenKind::Number(4.0),
                TokenKind::RBrace,
                TokenKind::Question,
                TokenKind::Arrow,
                TokenKind::ArrowAny,
                TokenKind::Star,
                TokenKind::Plus,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_comparison_operators() {
        let tokens = kinds("= != < <= > >=");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Eq,
                TokenKind::Ne,
                TokenKind::Lt,
                TokenKind::Le,
                TokenKind::Gt,
                TokenKind::Ge,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_dotted_reference() {
        let tokens = kinds("A.correlation_id");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Ident("A".to_string()),
                TokenKind::Dot,
                TokenKind::Ident("correlation_id".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_numbers() {
        assert_eq!(
            kinds("30 3.25 -7"),
            vec![
                TokenKind::Number(30.0),
                TokenKind::Number(3.25),
                TokenKind::Number(-7.0),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_and_keyword() {
        assert_eq!(
            kinds("a and android"),
            vec![
                TokenKind::Ident("a".to_string()),
                TokenKind::And,
                TokenKind::Ident("android".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_positions() {
        let tokens = Lexer::tokenize("A -> B").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 2, 5, 6]);
    }

    #[test]
    fn test_lex_unexpected_character() {
        let err = Lexer::tokenize("A(#)").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                position: 2,
                character: '#',
            }
        );
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn test_lex_bare_bang() {
        let err = Lexer::tokenize("a ! b").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                position: 2,
                character: '!',
            }
        );
    }

    #[test]
    fn test_lex_unterminated_string() {
        let err = Lexer::tokenize("A(attribute='abc").unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { position: 12 });
    }

    #[test]
    fn test_lex_bare_dash() {
        let err = Lexer::tokenize("A - B").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                position: 2,
                character: '-',
            }
        );
    }
}
