//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its token helpers and the
//! top-level [`Parser::parse`] entry point. The grammar productions live in
//! `expressions`, which extends `Parser` with a second `impl` block.
//!
//! A parser is built once per token sequence and consumed by `parse`, so no
//! state survives between calls.

use crate::config::ParserConfig;
use crate::parser::ast::AstNode;
use crate::parser::cursor::Cursor;
use crate::parser::diagnostic::Diagnostic;
use crate::parser::lexer::{lex, Token, TokenKind};
use tracing::debug;

/// Recursive descent parser for arithmetic expressions
pub struct Parser<'a> {
    pub(crate) source_name: &'a str,
    pub(crate) tokens: Cursor<Token>,
    pub(crate) depth: usize,
    pub(crate) config: ParserConfig,
}

impl<'a> Parser<'a> {
    pub fn new(source_name: &'a str, tokens: Vec<Token>) -> Self {
        Self::with_config(source_name, tokens, ParserConfig::default())
    }

    pub fn with_config(source_name: &'a str, tokens: Vec<Token>, config: ParserConfig) -> Self {
        // The lexer always terminates with Eof; hand-built sequences may not.
        let end = match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => last.clone(),
            Some(last) => Token::eof(last.line),
            None => Token::eof(1),
        };
        Self {
            source_name,
            tokens: Cursor::new(tokens, end),
            depth: 0,
            config,
        }
    }

    /// Lex `source` and wrap the result in a parser.
    pub fn from_source(source_name: &'a str, source: &str) -> Result<Self, Diagnostic> {
        let tokens = lex(source_name, source)?;
        Ok(Self::new(source_name, tokens))
    }

    /// Parse one complete expression.
    ///
    /// Anything other than end of input after the expression is rejected.
    pub fn parse(mut self) -> Result<AstNode, Diagnostic> {
        let result = self.parse_expression().and_then(|root| {
            if self.check(TokenKind::Eof) {
                Ok(root)
            } else {
                Err(Diagnostic::syntax(
                    self.source_name,
                    self.current_line(),
                    format_args!(
                        "unexpected {} after complete expression",
                        self.peek().describe()
                    ),
                ))
            }
        });

        match &result {
            Ok(root) => debug!(
                source = self.source_name,
                nodes = root.node_count(),
                "parsed expression"
            ),
            Err(diag) => debug!(
                source = self.source_name,
                token = self.tokens.position(),
                error = %diag,
                "parsing failed"
            ),
        }
        result
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> &Token {
        self.tokens.peek()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consume the current token if its kind is one of `kinds`.
    pub(crate) fn match_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.contains(&self.peek().kind) {
            Some(self.tokens.advance())
        } else {
            None
        }
    }

    pub(crate) fn current_line(&self) -> usize {
        self.peek().line
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, Diagnostic> {
        if self.check(kind) {
            Ok(self.tokens.advance())
        } else {
            Err(Diagnostic::syntax(
                self.source_name,
                self.current_line(),
                format_args!("expected {} but found {}", expected, self.peek().describe()),
            ))
        }
    }

    pub(crate) fn unexpected(&self) -> Diagnostic {
        Diagnostic::syntax(
            self.source_name,
            self.current_line(),
            format_args!("unexpected {}", self.peek().describe()),
        )
    }

    /// Run `production` one nesting level deeper, failing past the limit.
    pub(crate) fn nested<F>(&mut self, production: F) -> Result<AstNode, Diagnostic>
    where
        F: FnOnce(&mut Self) -> Result<AstNode, Diagnostic>,
    {
        if self.depth >= self.config.max_depth {
            return Err(Diagnostic::nesting_too_deep(
                self.source_name,
                self.current_line(),
                self.config.max_depth,
            ));
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{BinOp, UnOp};
    use crate::parser::diagnostic::DiagnosticKind;

    fn parse(source: &str) -> Result<AstNode, Diagnostic> {
        Parser::from_source("test", source)?.parse()
    }

    #[test]
    fn test_parse_simple_expression() {
        let root = parse("1 + 2").unwrap();
        match &root {
            AstNode::BinaryOp {
                op: BinOp::Add,
                left,
                right,
                line,
            } => {
                assert_eq!(*line, 1);
                assert!(matches!(&**left, AstNode::IntLiteral { text, .. } if text == "1"));
                assert!(matches!(&**right, AstNode::IntLiteral { text, .. } if text == "2"));
            }
            other => panic!("Expected addition, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unary_chain() {
        let root = parse("-+3").unwrap();
        match &root {
            AstNode::UnaryOp {
                op: UnOp::Minus,
                operand,
                ..
            } => assert!(matches!(**operand, AstNode::UnaryOp { op: UnOp::Plus, .. })),
            other => panic!("Expected unary minus, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_token_rejected() {
        let err = parse("1 2").unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Syntax);
        assert!(err.message.contains("after complete expression"));
    }

    #[test]
    fn test_hand_built_tokens_without_eof() {
        let tokens = vec![Token::new(TokenKind::Int, "5", 3)];
        let root = Parser::new("test", tokens).parse().unwrap();
        assert_eq!(root.line(), 3);
    }

    #[test]
    fn test_empty_token_sequence() {
        let err = Parser::new("test", Vec::new()).parse().unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Syntax);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_depth_limit_counts_parens_and_prefixes() {
        let config = ParserConfig::default().with_max_depth(3);
        let tokens = lex("test", "-((1))").unwrap();
        assert!(Parser::with_config("test", tokens, config).parse().is_ok());

        let tokens = lex("test", "-(-(1))").unwrap();
        let err = Parser::with_config("test", tokens, config)
            .parse()
            .unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::NestingTooDeep);
    }
}
