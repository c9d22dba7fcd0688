//! Expression parsing implementation
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expression := term (("+" | "-") term)*
//! term       := unary (("*" | "/" | "%") unary)*
//! unary      := ("+" | "-") unary | primary
//! primary    := "(" expression ")" | INT | FLOAT
//! ```
//!
//! Binary levels fold left, so `1-2-3` is `(1-2)-3`. Parentheses and prefix
//! operators are the only recursion that grows with the input, and both go
//! through [`Parser::nested`] to stay under the configured depth.

use crate::parser::ast::{AstNode, BinOp, UnOp};
use crate::parser::diagnostic::Diagnostic;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser<'_> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<AstNode, Diagnostic> {
        let mut left = self.parse_term()?;

        while let Some(token) = self.match_any(&[TokenKind::Plus, TokenKind::Minus]) {
            let op = if token.kind == TokenKind::Plus {
                BinOp::Add
            } else {
                BinOp::Sub
            };
            let right = self.parse_term()?;
            left = AstNode::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse multiplicative (* / %)
    fn parse_term(&mut self) -> Result<AstNode, Diagnostic> {
        let mut left = self.parse_unary()?;

        while let Some(token) = self.match_any(&[
            TokenKind::Multiply,
            TokenKind::Divide,
            TokenKind::Mod,
        ]) {
            let op = match token.kind {
                TokenKind::Multiply => BinOp::Mul,
                TokenKind::Divide => BinOp::Div,
                _ => BinOp::Mod,
            };
            let right = self.parse_unary()?;
            left = AstNode::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse prefix + and -
    fn parse_unary(&mut self) -> Result<AstNode, Diagnostic> {
        let Some(token) = self.match_any(&[TokenKind::Plus, TokenKind::Minus]) else {
            return self.parse_primary();
        };

        let op = if token.kind == TokenKind::Plus {
            UnOp::Plus
        } else {
            UnOp::Minus
        };
        let operand = self.nested(|parser| parser.parse_unary())?;
        Ok(AstNode::unary(op, operand))
    }

    /// Parse a literal or a parenthesized expression
    fn parse_primary(&mut self) -> Result<AstNode, Diagnostic> {
        if self.match_any(&[TokenKind::LParen]).is_some() {
            let inner = self.nested(|parser| parser.parse_expression())?;
            self.expect(TokenKind::RParen, "')'")?;
            return Ok(inner);
        }

        if let Some(token) = self.match_any(&[TokenKind::Int, TokenKind::Float]) {
            let text = token.lexeme;
            let line = token.line;
            return Ok(if token.kind == TokenKind::Int {
                AstNode::IntLiteral { text, line }
            } else {
                AstNode::FloatLiteral { text, line }
            });
        }

        Err(self.unexpected())
    }
}
