//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::{style::Color, Frame};

/// Accent color used for the brand and the submit button
pub const BRAND_COLOR: Color = Color::Rgb(0xff, 0x6b, 0x6c);

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, form_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_signup(frame, form_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Error dialog overlays everything
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Form, SubmitStatus};
    use crate::store::MockSubscriberStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        App::with_store(Box::new(MockSubscriberStore::new()), "subscribers", true)
    }

    /// Render the app and return the screen as one string
    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_header_and_form() {
        let screen = render(&test_app());
        assert!(screen.contains("Boris Boarman"));
        assert!(screen.contains("Join the Waiting List"));
        assert!(screen.contains("Email Address"));
        assert!(screen.contains("Twitter Profile"));
        assert!(screen.contains("Subscribe for Updates"));
    }

    #[test]
    fn test_form_panel_fits_every_row() {
        let mut app = test_app();
        app.state.signup.email.set_text("not-an-email");
        app.state.signup.handle.set_text("@boris");
        app.state.signup.status = SubmitStatus::Error;
        let screen = render(&app);
        assert!(screen.contains("Please enter a valid email address"));
        assert!(screen.contains("https://twitter.com/boris"));
        assert!(screen.contains("There was an error"));
        assert!(screen.contains("Subscribe for Updates"));
        assert!(screen.contains("Tab: next field"));
    }

    #[test]
    fn test_invalid_handle_shows_message() {
        let mut app = test_app();
        app.state.signup.handle.set_text("@bad-handle");
        let screen = render(&app);
        assert!(screen.contains("Invalid Twitter handle format"));
    }

    #[test]
    fn test_malformed_email_shows_message() {
        let mut app = test_app();
        app.state.signup.email.set_text("not-an-email");
        let screen = render(&app);
        assert!(screen.contains("Please enter a valid email address"));
    }

    #[test]
    fn test_missing_email_reported_on_button() {
        let mut app = test_app();
        assert!(!render(&app).contains("Please enter your email address"));
        app.state.signup.set_active_field(crate::state::SUBMIT_BUTTON);
        assert!(render(&app).contains("Please enter your email address"));
    }

    #[test]
    fn test_valid_handle_shows_profile_link() {
        let mut app = test_app();
        app.state.signup.handle.set_text("@boris");
        let screen = render(&app);
        assert!(screen.contains("https://twitter.com/boris"));
    }

    #[test]
    fn test_submitting_label() {
        let mut app = test_app();
        app.state.signup.status = SubmitStatus::Submitting;
        let screen = render(&app);
        assert!(screen.contains("Subscribing..."));
        assert!(!screen.contains("Subscribe for Updates"));
    }

    #[test]
    fn test_notices() {
        let mut app = test_app();
        app.state.signup.status = SubmitStatus::Success;
        assert!(render(&app).contains("Thank you for subscribing!"));

        app.state.signup.status = SubmitStatus::Error;
        assert!(render(&app).contains("There was an error"));
    }

    #[test]
    fn test_error_dialog_overlay() {
        let mut app = test_app();
        app.push_error("Clipboard unavailable");
        let screen = render(&app);
        assert!(screen.contains("Clipboard unavailable"));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_renders_in_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        let app = test_app();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
