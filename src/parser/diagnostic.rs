//! Error type shared by the lexer and the parser
//!
//! Every failed front-end call produces exactly one [`Diagnostic`]. It is
//! returned to the caller as a value; deciding whether to print it or exit
//! the process is left to the driver.

use std::fmt;
use thiserror::Error;

/// Which stage rejected the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A character that does not start any token
    Lexical,
    /// A token the grammar does not allow at that point
    Syntax,
    /// Parentheses or prefix operators nested beyond the configured limit
    NestingTooDeep,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Lexical => write!(f, "lexical error"),
            DiagnosticKind::Syntax => write!(f, "syntax error"),
            DiagnosticKind::NestingTooDeep => write!(f, "nesting too deep"),
        }
    }
}

/// Structured failure carrying the source name and 1-based line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source_name}:{line}: error: {message}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub source_name: String,
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        source_name: &str,
        line: usize,
        detail: impl fmt::Display,
    ) -> Self {
        Self {
            kind,
            source_name: source_name.to_string(),
            line,
            message: format!("{}: {}", kind, detail),
        }
    }

    /// Unrecognised character `ch` on `line`
    pub fn lexical(source_name: &str, line: usize, ch: char) -> Self {
        Self::new(
            DiagnosticKind::Lexical,
            source_name,
            line,
            format_args!("unexpected character {:?}", ch),
        )
    }

    pub fn syntax(source_name: &str, line: usize, detail: impl fmt::Display) -> Self {
        Self::new(DiagnosticKind::Syntax, source_name, line, detail)
    }

    pub fn nesting_too_deep(source_name: &str, line: usize, limit: usize) -> Self {
        Self::new(
            DiagnosticKind::NestingTooDeep,
            source_name,
            line,
            format_args!("expression nested deeper than {} levels", limit),
        )
    }
}
