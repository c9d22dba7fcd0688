//! Rendering logic for each TUI pane

use crate::parser::{AstNode, Diagnostic, Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Syntax highlighting for one line of arithmetic source
fn highlight_source_code(line: &str) -> Line<'_> {
    let spans: Vec<Span> = line
        .chars()
        .map(|c| {
            let style = match c {
                '0'..='9' | '.' => Style::default().fg(DEFAULT_THEME.number),
                '+' | '-' | '*' | '/' | '%' => Style::default().fg(DEFAULT_THEME.operator),
                '(' | ')' => Style::default().fg(DEFAULT_THEME.primary),
                ' ' | '\t' => Style::default(),
                // Anything else is a lexical error waiting to happen
                _ => Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::UNDERLINED),
            };
            Span::styled(c.to_string(), style)
        })
        .collect();

    Line::from(spans)
}

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `scroll_offset` so that `selected` stays inside a window of
/// `visible_height` rows over `total` rows.
fn follow_selection(selected: usize, total: usize, visible_height: usize, scroll_offset: &mut usize) {
    if selected < *scroll_offset {
        *scroll_offset = selected;
    } else if selected >= *scroll_offset + visible_height {
        *scroll_offset = selected + 1 - visible_height;
    }

    if total > visible_height {
        *scroll_offset = (*scroll_offset).min(total - visible_height);
    } else {
        *scroll_offset = 0;
    }
}

/// Source split the way the lexer counts lines: a trailing newline opens
/// one more (empty) line, since that is where end of input is reported.
pub fn source_lines(source_code: &str) -> Vec<&str> {
    if source_code.is_empty() {
        return Vec::new();
    }
    source_code.split('\n').collect()
}

/// Render the source code pane
#[allow(clippy::too_many_arguments)]
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_name: &str,
    source_code: &str,
    current_line: usize,
    error_line: Option<usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Source: {} ", source_name))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines = source_lines(source_code);
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    follow_selection(
        current_line.saturating_sub(1),
        lines.len(),
        visible_height,
        scroll_offset,
    );

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;
            let is_error = error_line == Some(line_num);

            let num_style = if is_error {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment) // Line numbers
            };

            let mut content_line = highlight_source_code(line);

            // Apply background if current line
            if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content_line.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut final_spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    if visible_lines.is_empty() {
        let paragraph = Paragraph::new("(empty source)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the token list, one `KIND:lexeme` row per token
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    selected: usize,
    highlighted: &[usize],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Tokens ({}) ", tokens.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if tokens.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    follow_selection(selected, tokens.len(), visible_height, scroll_offset);

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, token)| {
            let kind_style = match token.kind {
                kind if kind.is_literal() => Style::default().fg(DEFAULT_THEME.number),
                TokenKind::LParen | TokenKind::RParen => Style::default().fg(DEFAULT_THEME.primary),
                TokenKind::Eof => Style::default().fg(DEFAULT_THEME.comment),
                _ => Style::default().fg(DEFAULT_THEME.operator),
            };

            let mut row_style = Style::default();
            if highlighted.contains(&idx) {
                row_style = row_style.bg(DEFAULT_THEME.current_line_bg);
            }
            if idx == selected && is_focused {
                row_style = row_style.add_modifier(Modifier::REVERSED);
            }

            let line = Line::from(vec![
                Span::styled(
                    format!("{:4} ", token.line),
                    Style::default().fg(DEFAULT_THEME.line_marker),
                ),
                Span::styled(token.to_string(), kind_style),
            ]);
            ListItem::new(line).style(row_style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the syntax tree as an indented preorder outline, or the diagnostic
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    outcome: &Result<AstNode, Diagnostic>,
    current_line: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Syntax Tree ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let root = match outcome {
        Ok(root) => root,
        Err(diag) => {
            let lines = vec![
                Line::from(Span::styled(
                    "No tree: parsing failed",
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    diag.message.clone(),
                    Style::default().fg(DEFAULT_THEME.fg),
                )),
                Line::from(Span::styled(
                    format!("at {}:{}", diag.source_name, diag.line),
                    Style::default().fg(DEFAULT_THEME.line_marker),
                )),
            ];
            let paragraph = Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let nodes = root.preorder();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if nodes.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(nodes.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_lines: Vec<Line> = nodes
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(depth, node)| {
            let label_style = match node {
                AstNode::IntLiteral { .. } | AstNode::FloatLiteral { .. } => {
                    Style::default().fg(DEFAULT_THEME.number)
                }
                _ => Style::default().fg(DEFAULT_THEME.node),
            };

            let mut spans = vec![
                Span::raw("  ".repeat(*depth)),
                Span::styled(node.label(), label_style),
                Span::styled(
                    format!("  [line {}]", node.line()),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ];

            if node.line() == current_line {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut spans {
                    span.style = span.style.patch(bg);
                }
            }

            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, is_error: bool) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (badge, badge_bg) = if is_error {
        (" ERROR ", DEFAULT_THEME.error)
    } else {
        (" OK ", DEFAULT_THEME.success)
    };

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" move ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⇥ ", key_style),
        Span::styled(" focus ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
