//! Application state definitions

use super::forms::{FieldName, FormController};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Form,
}

impl View {
    /// Route path shown in the status bar
    pub fn path(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::Form => "/form",
        }
    }
}

/// Number of focusable controls on the form: six fields plus the Submit button
pub const FORM_CONTROL_COUNT: usize = FieldName::ALL.len() + 1;

/// A mounted order form with its focus position
#[derive(Debug, Clone)]
pub struct MountedForm {
    /// Identifies this mount; outcomes for other mounts are discarded
    pub mount_id: u64,
    pub controller: FormController,
    /// Index into the field list, or `FieldName::ALL.len()` for Submit
    pub active_control: usize,
}

impl MountedForm {
    fn new(mount_id: u64) -> Self {
        Self {
            mount_id,
            controller: FormController::new(),
            active_control: 0,
        }
    }

    /// The field with focus, or None when the Submit button is focused
    pub fn active_field(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_control).copied()
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_control == FieldName::ALL.len()
    }

    pub fn next_control(&mut self) {
        self.active_control = (self.active_control + 1) % FORM_CONTROL_COUNT;
    }

    pub fn prev_control(&mut self) {
        if self.active_control == 0 {
            self.active_control = FORM_CONTROL_COUNT - 1;
        } else {
            self.active_control -= 1;
        }
    }
}

/// Transient message for the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    /// Present only while the form view is mounted
    pub form: Option<MountedForm>,
    pub status_message: Option<StatusMessage>,
    next_mount_id: u64,
}

impl AppState {
    /// Mount a fresh form and return its mount id
    pub fn mount_form(&mut self) -> u64 {
        self.next_mount_id += 1;
        self.form = Some(MountedForm::new(self.next_mount_id));
        self.next_mount_id
    }

    /// Tear down the form; any in-flight submission becomes orphaned
    pub fn unmount_form(&mut self) {
        self.form = None;
    }

    /// The live form, if its mount id matches
    pub fn form_for_mount(&mut self, mount_id: u64) -> Option<&mut MountedForm> {
        self.form.as_mut().filter(|form| form.mount_id == mount_id)
    }
}
