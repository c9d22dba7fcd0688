//! Explorer application state and logic

use crate::config::ParserConfig;
use crate::parser::{lex, parse_tokens, AstNode, Diagnostic, Token};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Tree,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> tokens -> tree)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tree,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Tree => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    pub source_name: String,

    /// The source text being explored
    pub source_code: String,

    /// Tokens from the lexer; empty when lexing failed
    pub tokens: Vec<Token>,

    /// Parse result shown in the syntax tree pane
    pub outcome: Result<AstNode, Diagnostic>,

    /// Token indices grouped by source line
    pub tokens_by_line: FxHashMap<usize, Vec<usize>>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Line shared by every pane: highlighted in the source, and used to mark
    /// tokens and tree nodes that start on it
    pub current_line: usize,

    pub selected_token: usize,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub token_scroll: usize,
    pub tree_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Lex and parse `source_code`, keeping every intermediate result for display
    pub fn new(source_name: &str, source_code: String, config: ParserConfig) -> Self {
        let (tokens, outcome) = match lex(source_name, &source_code) {
            Ok(tokens) => {
                let outcome = parse_tokens(source_name, tokens.clone(), config);
                (tokens, outcome)
            }
            Err(diag) => (Vec::new(), Err(diag)),
        };

        let mut tokens_by_line: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for (index, token) in tokens.iter().enumerate() {
            tokens_by_line.entry(token.line).or_default().push(index);
        }

        let (current_line, status_message) = match &outcome {
            Ok(root) => (
                1,
                format!(
                    "Parsed {} nodes (height {}) from {} tokens",
                    root.node_count(),
                    root.height(),
                    tokens.len()
                ),
            ),
            Err(diag) => (diag.line, diag.to_string()),
        };

        // Start on the first token of the current line so both panes agree
        let selected_token = tokens_by_line
            .get(&current_line)
            .and_then(|indices| indices.first().copied())
            .unwrap_or(0);

        App {
            source_name: source_name.to_string(),
            source_code,
            tokens,
            outcome,
            tokens_by_line,
            focused_pane: FocusedPane::Source,
            current_line,
            selected_token,
            source_scroll: 0,
            token_scroll: 0,
            tree_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Token indices starting on the current line
    pub fn tokens_on_current_line(&self) -> &[usize] {
        self.tokens_by_line
            .get(&self.current_line)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of selectable source lines (at least one, even for empty input)
    pub fn line_count(&self) -> usize {
        super::panes::source_lines(&self.source_code).len().max(1)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Three panes side by side, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(25),
                Constraint::Percentage(35),
            ])
            .split(main_chunks[0]);

        let error_line = self.outcome.as_ref().err().map(|diag| diag.line);

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.source_name,
            &self.source_code,
            self.current_line,
            error_line,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        let highlighted = self.tokens_on_current_line().to_vec();
        super::panes::render_tokens_pane(
            frame,
            columns[1],
            &self.tokens,
            self.selected_token,
            &highlighted,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.token_scroll,
        );

        super::panes::render_tree_pane(
            frame,
            columns[2],
            &self.outcome,
            self.current_line,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.outcome.is_err(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => self.move_line(-1),
                FocusedPane::Tokens => {
                    if self.selected_token > 0 {
                        self.select_token(self.selected_token - 1);
                    }
                }
                FocusedPane::Tree => {
                    self.tree_scroll = self.tree_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => self.move_line(1),
                FocusedPane::Tokens => {
                    if self.selected_token + 1 < self.tokens.len() {
                        self.select_token(self.selected_token + 1);
                    }
                }
                FocusedPane::Tree => {
                    self.tree_scroll = self.tree_scroll.saturating_add(1);
                }
            },
            _ => {}
        }
    }

    fn move_line(&mut self, delta: isize) {
        let last = self.line_count();
        self.current_line = self
            .current_line
            .saturating_add_signed(delta)
            .clamp(1, last);

        let first = self.tokens_on_current_line().first().copied();
        if let Some(first) = first {
            self.selected_token = first;
        }
        self.status_message = format!("Line {}", self.current_line);
    }

    fn select_token(&mut self, index: usize) {
        self.selected_token = index;
        if let Some(token) = self.tokens.get(index) {
            self.current_line = token.line;
            self.status_message = format!("Token {} on line {}", token, token.line);
        }
    }
}
