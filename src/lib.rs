//! # Introduction
//!
//! Skink turns arithmetic source text into an abstract syntax tree. Literals,
//! prefix `+`/`-`, binary `+ - * / %` and parentheses are supported, and every
//! failure comes back as a single [`parser::Diagnostic`] naming the source and
//! line. The tree is only built, never evaluated.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//! ```
//!
//! 1. [`parser`]: the front-end. [`parser::lex`] produces tokens,
//!    [`parser::Parser`] builds the tree, [`parser::parse_source`] does both.
//! 2. [`config`]: nesting limit and log level, overridable from the
//!    environment.
//! 3. [`ui`]: ratatui-based explorer showing source, tokens and tree side by
//!    side; not part of the stable library API.
//!
//! ```
//! use skink::parser::parse_source;
//!
//! let tree = parse_source("<example>", "(1 + 2) * 3").unwrap();
//! assert_eq!(tree.to_string(), "(multiply (add (int 1) (int 2)) (int 3))");
//! ```

pub mod config;
pub mod parser;
pub mod ui;
