//! Application state and core logic

use crate::api::{OrderClientTrait, SubmitError};
use crate::state::{
    next_size, prev_size, AppState, FieldInput, FieldName, MountedForm, StatusMessage, View,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Result of a spawned submission, tagged with the form mount that started it
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub mount_id: u64,
    pub ticket: u64,
    pub result: Result<serde_json::Value, SubmitError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client used for order submission
    client: Arc<dyn OrderClientTrait>,
    /// Endpoint shown on the home view
    pub endpoint: String,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn OrderClientTrait>, endpoint: impl Into<String>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            client,
            endpoint: endpoint.into(),
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Form => self.handle_form_key(key),
        }
    }

    /// Navigate to the order form, mounting a fresh controller
    pub fn open_form(&mut self) {
        let mount_id = self.state.mount_form();
        self.state.current_view = View::Form;
        tracing::debug!(mount_id, "form mounted");
    }

    /// Navigate home, tearing the form down
    pub fn go_home(&mut self) {
        if let Some(form) = &self.state.form {
            tracing::debug!(mount_id = form.mount_id, "form unmounted");
        }
        self.state.unmount_form();
        self.state.current_view = View::Home;
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('f') => self.open_form(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in the form view
    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.go_home();
                return;
            }
            KeyCode::Char('s') if ctrl => {
                self.submit();
                return;
            }
            _ => {}
        }

        let submit_active = match self.state.form.as_ref() {
            Some(form) => form.is_submit_active(),
            None => return,
        };
        if submit_active && matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.submit();
            return;
        }

        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_control(),
            KeyCode::BackTab | KeyCode::Up => form.prev_control(),
            _ => {
                if let (Some(field), false) = (form.active_field(), ctrl) {
                    edit_field(form, field, key.code);
                }
            }
        }
    }

    /// Start a submission if the form allows it
    pub fn submit(&mut self) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        let pending = match form.controller.begin_submit() {
            Ok(pending) => pending,
            Err(rejected) => {
                tracing::debug!("submit ignored: {rejected}");
                return;
            }
        };

        let mount_id = form.mount_id;
        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tracing::info!(ticket = pending.ticket, "submitting order");

        tokio::spawn(async move {
            let result = client.submit_order(pending.values).await;
            // The receiver lives as long as the App; a closed channel means shutdown
            let _ = tx.send(SubmissionOutcome {
                mount_id,
                ticket: pending.ticket,
                result,
            });
        });
    }

    /// Apply every submission outcome that has arrived since the last tick
    pub fn drain_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_submission(outcome);
        }
    }

    /// Apply one submission outcome to the form that started it
    pub fn apply_submission(&mut self, outcome: SubmissionOutcome) {
        let SubmissionOutcome {
            mount_id,
            ticket,
            result,
        } = outcome;

        let Some(form) = self.state.form_for_mount(mount_id) else {
            tracing::debug!(mount_id, ticket, "discarding outcome for unmounted form");
            return;
        };

        let status = match &result {
            Ok(_) => StatusMessage::info("Order submitted!"),
            Err(err) => {
                tracing::warn!("something went wrong when submitting your form: {err}");
                StatusMessage::error(format!("Submission failed: {err}"))
            }
        };

        if form.controller.finish_submit(ticket, result) {
            self.state.status_message = Some(status);
        }
    }

    /// Wait for the next submission outcome
    #[cfg(test)]
    pub async fn next_outcome(&mut self) -> Option<SubmissionOutcome> {
        self.outcome_rx.recv().await
    }
}

/// Translate a key press into an edit of the focused field
fn edit_field(form: &mut MountedForm, field: FieldName, code: KeyCode) {
    let controller = &mut form.controller;
    let current = controller.values().text(field).to_string();

    let input = match field {
        FieldName::Terms => match code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                FieldInput::Checked(!controller.values().terms)
            }
            _ => return,
        },
        FieldName::Size => match code {
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Right => {
                FieldInput::Text(next_size(&current).to_string())
            }
            KeyCode::Left => FieldInput::Text(prev_size(&current).to_string()),
            _ => return,
        },
        _ => match code {
            KeyCode::Char(c) => FieldInput::Text(format!("{current}{c}")),
            KeyCode::Enter if field.is_multiline() => FieldInput::Text(format!("{current}\n")),
            KeyCode::Backspace => {
                let mut value = current;
                if value.pop().is_none() {
                    return;
                }
                FieldInput::Text(value)
            }
            _ => return,
        },
    };

    controller.edit(field, input);
}
