//! Layout components (header, form area, status bar)

use super::BRAND_COLOR;
use crate::app::App;
use crate::state::SubmitStatus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form panel is allowed to grow
const FORM_MAX_WIDTH: u16 = 64;
/// Form panel height: 3 + 1 + 3 + 1 + 3 + 3 + 1 rows of content plus borders
const FORM_HEIGHT: u16 = 17;
const HEADER_HEIGHT: u16 = 5;

/// Split the screen into (header, form, status bar)
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Form
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let [form_column] = Layout::horizontal([Constraint::Max(FORM_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(rows[1]);
    let [form_area] = Layout::vertical([Constraint::Max(FORM_HEIGHT)])
        .flex(Flex::Start)
        .areas(form_column);

    (rows[0], form_area, rows[2])
}

/// Draw the brand header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Boris Boarman",
            Style::default().fg(BRAND_COLOR).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Fund What Matters",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Merit & Data-Based Funding",
            Style::default().fg(BRAND_COLOR),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Store connection status
    let conn_status = if app.state.store_configured {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(conn_status);

    let status_text = match app.state.signup.status {
        SubmitStatus::Idle if app.state.store_configured => "ready",
        SubmitStatus::Idle => "no store configured",
        SubmitStatus::Submitting => "submitting",
        SubmitStatus::Success => "subscribed",
        SubmitStatus::Error => "submission failed",
    };
    spans.push(Span::styled(status_text, Style::default().fg(Color::Gray)));

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
