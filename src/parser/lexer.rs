//! Lexer (tokenizer) for arithmetic source
//!
//! Converts raw source text into a flat [`Token`] sequence consumed by the
//! parser. The sequence always ends with exactly one [`TokenKind::Eof`].
//! Newlines only advance the line counter; spaces and tabs are skipped.

use super::cursor::Cursor;
use super::diagnostic::Diagnostic;
use std::fmt;
use tracing::{debug, trace};

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Int,
    Float,

    // Operators
    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /
    Mod,      // %

    // Grouping
    LParen, // (
    RParen, // )

    // End of input
    Eof,
}

impl TokenKind {
    /// Kind for a single-character operator or parenthesis
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Multiply),
            '/' => Some(TokenKind::Divide),
            '%' => Some(TokenKind::Mod),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            _ => None,
        }
    }

    /// Upper-case tag used in token listings, e.g. `INT` or `LPAREN`
    pub fn tag(self) -> &'static str {
        match self {
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Mod => "MOD",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Eof => "EOF",
        }
    }

    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Float)
    }
}

/// A scanned token.
///
/// `lexeme` is the exact text span the token came from (empty for `Eof`)
/// and `line` is the 1-based line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    /// Human readable description for error messages
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Int => format!("int literal {}", self.lexeme),
            TokenKind::Float => format!("float literal {}", self.lexeme),
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.tag(), self.lexeme)
    }
}

/// Tokenize `source` in one call.
///
/// `source_name` only appears in diagnostics.
pub fn lex(source_name: &str, source: &str) -> Result<Vec<Token>, Diagnostic> {
    Lexer::new(source_name, source).tokenize()
}

/// Lexer state for a single call; consumed by [`Lexer::tokenize`].
pub struct Lexer<'a> {
    source_name: &'a str,
    chars: Cursor<char>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source_name: &'a str, source: &str) -> Self {
        Self {
            source_name,
            chars: Cursor::from_source(source),
            line: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(mut self) -> Result<Vec<Token>, Diagnostic> {
        let mut tokens = Vec::new();

        while !self.chars.is_at_end() {
            let ch = *self.chars.peek();
            match ch {
                '\n' => {
                    self.chars.advance();
                    self.line += 1;
                }
                ' ' | '\t' => {
                    self.chars.advance();
                }
                '0'..='9' => {
                    let token = self.number_literal();
                    trace!(token = %token, line = token.line, "token");
                    tokens.push(token);
                }
                _ => {
                    let Some(kind) = TokenKind::from_char(ch) else {
                        debug!(
                            source = self.source_name,
                            line = self.line,
                            offset = self.chars.position(),
                            character = ?ch,
                            "lexing failed"
                        );
                        return Err(Diagnostic::lexical(self.source_name, self.line, ch));
                    };
                    self.chars.advance();
                    let token = Token::new(kind, ch.to_string(), self.line);
                    trace!(token = %token, line = token.line, "token");
                    tokens.push(token);
                }
            }
        }

        tokens.push(Token::eof(self.line));
        debug!(
            source = self.source_name,
            tokens = tokens.len(),
            "lexed source"
        );
        Ok(tokens)
    }

    /// Scan digits with at most one decimal point.
    ///
    /// A second `.` ends the scan and is left for the main loop.
    fn number_literal(&mut self) -> Token {
        let line = self.line;
        let mut text = String::new();
        let mut seen_dot = false;

        while !self.chars.is_at_end() {
            let ch = *self.chars.peek();
            if ch.is_ascii_digit() {
                text.push(self.chars.advance());
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                text.push(self.chars.advance());
            } else {
                break;
            }
        }

        let kind = if seen_dot {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        Token::new(kind, text, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::diagnostic::DiagnosticKind;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex("test", source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = lex("test", "(1 + 2) * 3").unwrap();

        assert_eq!(tokens[0].kind, TokenKind::LParen);
        assert_eq!(tokens[1], Token::new(TokenKind::Int, "1", 1));
        assert_eq!(tokens[2].kind, TokenKind::Plus);
        assert_eq!(tokens[3], Token::new(TokenKind::Int, "2", 1));
        assert_eq!(tokens[4].kind, TokenKind::RParen);
        assert_eq!(tokens[5].kind, TokenKind::Multiply);
        assert_eq!(tokens[6], Token::new(TokenKind::Int, "3", 1));
        assert_eq!(tokens[7], Token::eof(1));
        assert_eq!(tokens.len(), 8);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("+-*/%()"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Multiply,
                TokenKind::Divide,
                TokenKind::Mod,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_number_classification() {
        let tokens = lex("test", "314 3.14 7.").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Int, "314", 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Float, "3.14", 1));
        assert_eq!(tokens[2], Token::new(TokenKind::Float, "7.", 1));
    }

    #[test]
    fn test_second_dot_is_lexical_error() {
        let err = lex("test", "1.2.3").unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Lexical);
        assert_eq!(err.line, 1);
        assert!(err.message.contains("'.'"));
    }

    #[test]
    fn test_line_tracking() {
        let tokens = lex("test", "1\n+\t2\n\n*3").unwrap();
        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 2, 4, 4, 4]);
    }

    #[test]
    fn test_empty_input_is_single_eof() {
        assert_eq!(lex("test", "").unwrap(), vec![Token::eof(1)]);
        assert_eq!(lex("test", "  \t ").unwrap(), vec![Token::eof(1)]);
    }

    #[test]
    fn test_unknown_character_reports_its_line() {
        let err = lex("calc", "1 +\n\n @").unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Lexical);
        assert_eq!(err.line, 3);
        assert_eq!(err.source_name, "calc");
    }

    #[test]
    fn test_leading_dot_is_rejected() {
        let err = lex("test", ".5").unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Lexical);
    }

    #[test]
    fn test_token_display() {
        let tokens = lex("test", "42+").unwrap();
        let shown: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        assert_eq!(shown, vec!["INT:42", "PLUS:+", "EOF:"]);
        assert_eq!(tokens[0].describe(), "int literal 42");
        assert_eq!(tokens[2].describe(), "end of input");
    }
}
