//! Waiting-list signup form rendering

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::state::{Form, SubmitStatus, EMAIL_FIELD, HANDLE_FIELD};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::BRAND_COLOR;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SUBMIT_LABEL: &str = "Subscribe for Updates";
const SUBMITTING_LABEL: &str = "Subscribing...";

/// Draw the signup form panel
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.signup;

    let block = Block::default()
        .title(Span::styled(
            " Join the Waiting List ",
            Style::default().fg(BRAND_COLOR).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BRAND_COLOR));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email error
            Constraint::Length(3),             // Twitter handle
            Constraint::Length(1),             // Handle error or profile link
            Constraint::Length(3),             // Submission notice
            Constraint::Length(BUTTON_HEIGHT), // Submit button
            Constraint::Min(0),
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    // A missing email is only reported once the user reaches the button
    let email_error = form.email_error();
    let email_invalid =
        !email_error.is_empty() && (!form.email.is_empty() || form.is_buttons_row_active());
    let handle_error = form.handle_error();
    let handle_invalid = !form.handle.is_empty() && !handle_error.is_empty();

    for (index, field_area, invalid) in [
        (EMAIL_FIELD, chunks[0], email_invalid),
        (HANDLE_FIELD, chunks[2], handle_invalid),
    ] {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, field_area, field, form.active_field() == index, invalid);
        }
    }

    if email_invalid {
        frame.render_widget(
            Paragraph::new(Span::styled(email_error, Style::default().fg(Color::Red))),
            chunks[1],
        );
    }

    let hint = if handle_invalid {
        Line::from(Span::styled(handle_error, Style::default().fg(Color::Red)))
    } else if let Some(url) = form.profile_url() {
        Line::from(vec![
            Span::styled("Verify profile: ", Style::default().fg(Color::DarkGray)),
            Span::styled(url, Style::default().fg(BRAND_COLOR)),
        ])
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(hint), chunks[3]);

    if let Some(notice) = form.status.notice() {
        let color = if form.status == SubmitStatus::Success {
            Color::Green
        } else {
            Color::Red
        };
        frame.render_widget(
            Paragraph::new(notice)
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: true }),
            chunks[4],
        );
    }

    let label = if form.status.is_submitting() {
        SUBMITTING_LABEL
    } else {
        SUBMIT_LABEL
    };
    render_button(
        frame,
        chunks[5],
        label,
        form.is_buttons_row_active(),
        form.can_submit(),
    );

    let mut help = vec![("Tab", "next field"), (crate::platform::SUBMIT_SHORTCUT, "subscribe")];
    if form.profile_url().is_some() {
        help.push((crate::platform::COPY_LINK_SHORTCUT, "copy link"));
    }
    help.push(("Esc", "quit"));
    draw_help_text(frame, chunks[7], &help);
}
