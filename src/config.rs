//! Front-end limits and logging settings
//!
//! Defaults live in constants; [`ParserConfig::from_env`] and [`log_level`]
//! let the driver override them through the environment.

use std::env;
use tracing::Level;

/// Deepest nesting of parentheses and prefix operators the parser accepts
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Source name used when parsing a string that did not come from a file
pub const ANONYMOUS_SOURCE: &str = "<anonymous>";

pub const MAX_DEPTH_ENV: &str = "SKINK_MAX_DEPTH";
pub const LOG_LEVEL_ENV: &str = "SKINK_LOG";

/// Tunables for a single parse call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Defaults, with `SKINK_MAX_DEPTH` applied when it holds a positive integer.
    pub fn from_env() -> Self {
        let config = Self::default();
        match env::var(MAX_DEPTH_ENV).ok().as_deref().and_then(parse_max_depth) {
            Some(depth) => config.with_max_depth(depth),
            None => config,
        }
    }
}

fn parse_max_depth(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|depth| *depth > 0)
}

/// Log level from `SKINK_LOG`, `WARN` when unset or unrecognised.
pub fn log_level() -> Level {
    env::var(LOG_LEVEL_ENV)
        .ok()
        .as_deref()
        .and_then(parse_log_level)
        .unwrap_or(Level::WARN)
}

fn parse_log_level(raw: &str) -> Option<Level> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
