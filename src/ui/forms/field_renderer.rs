//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line text field.
///
/// `is_invalid` turns the border red regardless of focus.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    is_invalid: bool,
) {
    let border_style = if is_invalid {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let value = if field.is_empty() {
        Span::styled(field.placeholder.as_str(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(field.as_text())
    };
    // Cursor sits before a placeholder and after typed text
    let spans = if field.is_empty() {
        vec![Span::styled(cursor, Style::default().fg(Color::Cyan)), value]
    } else {
        vec![value, Span::styled(cursor, Style::default().fg(Color::Cyan))]
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a help line of `key: description` pairs
pub fn draw_help_text(frame: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (key, description) in entries {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {description}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
