//! Error dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const MAX_WIDTH: u16 = 60;

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let area = frame.area();
    let width = MAX_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(4).max(1) as usize;

    // Rough wrapped height: message lines + blank + hint + borders
    let message_rows: usize = error_message
        .lines()
        .map(|l| l.chars().count().max(1).div_ceil(inner_width))
        .sum();
    let height = (message_rows as u16 + 4).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut content: Vec<Line> = error_message.lines().map(Line::from).collect();
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ]));

    let block = Block::default()
        .title(Span::styled(
            " Error ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(block),
        dialog_area,
    );
}
