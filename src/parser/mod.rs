//! Arithmetic expression front-end
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`cursor`]: single-element lookahead shared by both stages
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`] and `expressions`: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//! - [`diagnostic`]: the error value every failed call returns
//!
//! # Supported Language
//!
//! Integer and float literals, prefix `+`/`-`, binary `+ - * / %` and
//! parentheses. Exactly one expression per source; trailing input is an error.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with one function per precedence level.
//! No external parser generator dependencies.

pub mod ast;
pub mod cursor;
pub mod diagnostic;
mod expressions;
pub mod lexer;
pub mod parse;

pub use ast::{AstNode, BinOp, UnOp};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use lexer::{lex, Token, TokenKind};
pub use parse::Parser;

use crate::config::{ParserConfig, ANONYMOUS_SOURCE};

/// Parse an already lexed token sequence.
pub fn parse_tokens(
    source_name: &str,
    tokens: Vec<Token>,
    config: ParserConfig,
) -> Result<AstNode, Diagnostic> {
    Parser::with_config(source_name, tokens, config).parse()
}

/// Lex and parse `source` with the default limits.
pub fn parse_source(source_name: &str, source: &str) -> Result<AstNode, Diagnostic> {
    parse_source_with(source_name, source, ParserConfig::default())
}

pub fn parse_source_with(
    source_name: &str,
    source: &str,
    config: ParserConfig,
) -> Result<AstNode, Diagnostic> {
    let tokens = lex(source_name, source)?;
    parse_tokens(source_name, tokens, config)
}

/// Parse a string under the `<anonymous>` source name.
pub fn run_string(source: &str) -> Result<AstNode, Diagnostic> {
    parse_source(ANONYMOUS_SOURCE, source)
}
