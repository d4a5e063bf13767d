//! Application state and core logic

use crate::config::WaitlistConfig;
use crate::state::{AppState, Form, SubscriberRecord};
use crate::store::{StoreClient, SubscriberStore};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Store that signups are inserted into
    store: Box<dyn SubscriberStore>,
    /// Collection passed to every insert
    collection: String,
    /// Whether the app should quit
    quit: bool,
    /// Record accepted by the guard and waiting to be sent
    pending: Option<SubscriberRecord>,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create an App talking to the store described by `config`
    pub fn new(config: &WaitlistConfig) -> Self {
        let (store, endpoint_error) = match StoreClient::from_config(config) {
            Ok(client) => (client, None),
            Err(e) => (StoreClient::unconfigured(), Some(e)),
        };
        let configured = store.is_configured();
        if !configured {
            tracing::warn!("No subscriber store configured; submissions will fail");
        }

        let mut app = Self::with_store(Box::new(store), config.collection(), configured);
        if let Some(e) = endpoint_error {
            app.push_error(e.to_string());
        }
        app
    }

    /// Create an App over any store implementation
    pub fn with_store(
        store: Box<dyn SubscriberStore>,
        collection: impl Into<String>,
        store_configured: bool,
    ) -> Self {
        Self {
            state: AppState::new(store_configured),
            store,
            collection: collection.into(),
            quit: false,
            pending: None,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        // Clear any status messages on key press
        self.copy_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        // AltGr arrives as Ctrl+Alt on Windows and produces printable text
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => self.request_quit(),
            KeyCode::Char('c') if ctrl => self.request_quit(),
            KeyCode::Char('s') if ctrl => self.request_submit(),
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_profile_link();
            }
            KeyCode::Tab | KeyCode::Down => self.state.signup.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.signup.prev_field(),
            KeyCode::Enter | KeyCode::Char(' ') if self.state.signup.is_buttons_row_active() => {
                self.request_submit();
            }
            KeyCode::Enter => self.state.signup.next_field(),
            KeyCode::Char(c) if !ctrl || alt => self.state.signup.input_char(c),
            KeyCode::Backspace => self.state.signup.backspace(),
            _ => {}
        }
    }

    /// Quit unless an insert is in flight (it cannot be cancelled)
    fn request_quit(&mut self) {
        if self.state.signup.status.is_submitting() {
            return;
        }
        self.quit = true;
    }

    /// Run the submit guard; on success the insert is queued for
    /// [`Self::process_pending_submission`].
    pub fn request_submit(&mut self) {
        match self.state.signup.begin_submit() {
            Some(record) => self.pending = Some(record),
            None => tracing::debug!("Submit refused: email or handle invalid, or insert in flight"),
        }
    }

    pub fn has_pending_submission(&self) -> bool {
        self.pending.is_some()
    }

    /// Send the queued record, if any, and apply the outcome to the form
    pub async fn process_pending_submission(&mut self) {
        let Some(record) = self.pending.take() else {
            return;
        };

        let result = self.store.insert(&self.collection, &record).await;
        match &result {
            Ok(()) => tracing::info!("Subscriber added to {}", self.collection),
            Err(e) => tracing::error!("Error submitting form: {e}"),
        }
        self.state.signup.finish_submit(result.is_ok());
    }

    /// Guard, insert and apply the outcome in one step
    #[cfg(test)]
    pub async fn submit(&mut self) {
        self.request_submit();
        self.process_pending_submission().await;
    }

    fn copy_profile_link(&mut self) {
        let Some(url) = self.state.signup.profile_url() else {
            self.copy_message = Some("No profile link to copy".to_string());
            return;
        };
        match self.copy_to_clipboard(&url) {
            Ok(()) => self.copy_message = Some(format!("Copied {url}")),
            Err(e) => self.push_error(format!("Failed to copy profile link: {e}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
