//! Order form controller: values, errors, the submission gate and the
//! submission lifecycle.

use super::field::{FieldErrors, FieldInput, FieldName, FormValues};
use super::validator::{validate_all, validate_field};
use chrono::{DateTime, Utc};

/// Whether a submission is currently outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
}

/// Last successful response from the order endpoint, kept for display
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    pub body: serde_json::Value,
    pub received_at: DateTime<Utc>,
}

impl SubmissionResult {
    pub fn new(body: serde_json::Value) -> Self {
        Self {
            body,
            received_at: Utc::now(),
        }
    }
}

/// Why a submission could not start
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("the form has invalid fields")]
    Invalid,
    #[error("a submission is already in flight")]
    InFlight,
}

/// Snapshot of the values handed to the client for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: u64,
    pub values: FormValues,
}

/// Stateful coordinator of the order form
#[derive(Debug, Clone, Default)]
pub struct FormController {
    values: FormValues,
    errors: FieldErrors,
    can_submit: bool,
    submission_result: Option<SubmissionResult>,
    phase: FormPhase,
    next_ticket: u64,
    in_flight: Option<u64>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn can_submit(&self) -> bool {
        self.can_submit
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submission_result(&self) -> Option<&SubmissionResult> {
        self.submission_result.as_ref()
    }

    /// Apply a user edit to one field.
    ///
    /// The edited field is revalidated for its message; the submission gate
    /// is recomputed over the whole form.
    pub fn edit(&mut self, field: FieldName, input: FieldInput) {
        let value = input.normalize(field);
        let message = match validate_field(field, &value) {
            Ok(()) => String::new(),
            Err(message) => message,
        };
        self.errors.set(field, message);
        self.update_values(|values| values.set(field, value));
    }

    /// Start a submission of the current values
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitRejected> {
        if self.phase == FormPhase::Submitting {
            return Err(SubmitRejected::InFlight);
        }
        if !self.can_submit {
            return Err(SubmitRejected::Invalid);
        }

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.in_flight = Some(ticket);
        self.phase = FormPhase::Submitting;

        Ok(PendingSubmission {
            ticket,
            values: self.values.clone(),
        })
    }

    /// Apply the outcome of a submission.
    ///
    /// Success stores the response and resets the values; error messages
    /// are left as they were. Failure leaves the form untouched. Returns
    /// false when the ticket does not match the outstanding submission.
    pub fn finish_submit<E>(&mut self, ticket: u64, outcome: Result<serde_json::Value, E>) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        self.phase = FormPhase::Editing;

        if let Ok(body) = outcome {
            self.submission_result = Some(SubmissionResult::new(body));
            self.update_values(|values| *values = FormValues::default());
        }
        true
    }

    /// Every change to the value set passes through here so the gate never
    /// goes stale.
    fn update_values(&mut self, mutate: impl FnOnce(&mut FormValues)) {
        mutate(&mut self.values);
        self.can_submit = validate_all(&self.values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_into(form: &mut FormController, field: FieldName, text: &str) {
        for c in text.chars() {
            let mut current = form.values().text(field).to_string();
            current.push(c);
            form.edit(field, FieldInput::Text(current));
        }
    }

    fn filled_form() -> FormController {
        let mut form = FormController::new();
        type_into(&mut form, FieldName::Name, "Chelsea");
        type_into(&mut form, FieldName::Email, "chelsea@gmail.com");
        type_into(&mut form, FieldName::Address, "1 Main St");
        type_into(&mut form, FieldName::Flavor, "Cherry Coke");
        form.edit(FieldName::Size, FieldInput::Text("medium".to_string()));
        form.edit(FieldName::Terms, FieldInput::Checked(true));
        form
    }

    #[test]
    fn test_new_form_is_empty_and_blocked() {
        let form = FormController::new();
        assert_eq!(form.values(), &FormValues::default());
        assert!(!form.can_submit());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.submission_result().is_none());
        for field in FieldName::ALL {
            assert!(!form.errors().has_error(field));
        }
    }

    #[test]
    fn test_typing_reads_back_exactly() {
        let mut form = FormController::new();
        type_into(&mut form, FieldName::Name, "Chelsea");
        type_into(&mut form, FieldName::Email, "123@gmail");
        type_into(&mut form, FieldName::Flavor, "Cherry Coke");

        assert_eq!(form.values().name, "Chelsea");
        assert_eq!(form.values().email, "123@gmail");
        assert_eq!(form.values().flavor, "Cherry Coke");
        // address, size and terms are still unset
        assert!(!form.can_submit());
    }

    #[test]
    fn test_edit_only_updates_that_fields_error() {
        let mut form = FormController::new();
        form.edit(FieldName::Name, FieldInput::Text("C".to_string()));
        assert_eq!(
            form.errors().get(FieldName::Name),
            "name must be more than 2 characters"
        );
        assert_eq!(form.errors().get(FieldName::Email), "");
        assert_eq!(form.errors().get(FieldName::Address), "");

        form.edit(FieldName::Name, FieldInput::Text("Ch".to_string()));
        assert_eq!(form.errors().get(FieldName::Name), "");
    }

    #[test]
    fn test_clearing_a_field_shows_required_message() {
        let mut form = FormController::new();
        form.edit(FieldName::Address, FieldInput::Text("x".to_string()));
        form.edit(FieldName::Address, FieldInput::Text(String::new()));
        assert_eq!(
            form.errors().get(FieldName::Address),
            "address is a required field"
        );
    }

    #[test]
    fn test_gate_tracks_whole_form() {
        let mut form = filled_form();
        assert!(form.can_submit());

        form.edit(FieldName::Terms, FieldInput::Checked(false));
        assert!(!form.can_submit());
        assert_eq!(form.errors().get(FieldName::Terms), "must agree to terms");

        form.edit(FieldName::Terms, FieldInput::Checked(true));
        assert!(form.can_submit());
    }

    #[test]
    fn test_gate_equals_validate_all_after_every_edit() {
        let mut form = FormController::new();
        let edits = [
            (FieldName::Terms, FieldInput::Checked(true)),
            (FieldName::Name, FieldInput::Text("Al".to_string())),
            (FieldName::Size, FieldInput::Text("small".to_string())),
            (FieldName::Email, FieldInput::Text("al@x.io".to_string())),
            (FieldName::Address, FieldInput::Text("here".to_string())),
            (FieldName::Flavor, FieldInput::Text("mint".to_string())),
            (FieldName::Name, FieldInput::Text("A".to_string())),
        ];
        for (field, input) in edits {
            form.edit(field, input);
            assert_eq!(form.can_submit(), validate_all(form.values()));
        }
    }

    #[test]
    fn test_begin_submit_rejected_when_invalid() {
        let mut form = FormController::new();
        assert_eq!(form.begin_submit(), Err(SubmitRejected::Invalid));
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_begin_submit_rejected_while_in_flight() {
        let mut form = filled_form();
        let pending = form.begin_submit().unwrap();
        assert_eq!(pending.values, form.values().clone());
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn test_success_resets_values_but_keeps_errors() {
        let mut form = filled_form();
        // leave a stale message on name, then fix the value without retyping
        form.edit(FieldName::Name, FieldInput::Text("C".to_string()));
        form.edit(FieldName::Name, FieldInput::Text("Chelsea".to_string()));
        form.edit(FieldName::Email, FieldInput::Text("bad".to_string()));
        form.edit(FieldName::Email, FieldInput::Text("good@mail.com".to_string()));
        let errors_before = form.errors().clone();

        let pending = form.begin_submit().unwrap();
        let body = serde_json::json!({"id": "42", "createdAt": "2026-10-19T00:00:00Z"});
        assert!(form.finish_submit::<()>(pending.ticket, Ok(body.clone())));

        assert_eq!(form.values(), &FormValues::default());
        assert!(!form.can_submit());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.submission_result().map(|r| &r.body), Some(&body));
        assert_eq!(form.errors(), &errors_before);
    }

    #[test]
    fn test_success_keeps_stale_error_text() {
        let mut form = filled_form();
        let pending = form.begin_submit().unwrap();
        // an invalid edit lands while the request is outstanding
        form.edit(FieldName::Name, FieldInput::Text("C".to_string()));
        form.finish_submit::<()>(pending.ticket, Ok(serde_json::json!({})));

        assert_eq!(form.values().name, "");
        assert_eq!(
            form.errors().get(FieldName::Name),
            "name must be more than 2 characters"
        );
    }

    #[test]
    fn test_failure_leaves_form_unchanged() {
        let mut form = filled_form();
        let values_before = form.values().clone();
        let pending = form.begin_submit().unwrap();

        assert!(form.finish_submit(pending.ticket, Err("connection refused")));

        assert_eq!(form.values(), &values_before);
        assert!(form.can_submit());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.submission_result().is_none());
    }

    #[test]
    fn test_edits_allowed_while_submitting() {
        let mut form = filled_form();
        let pending = form.begin_submit().unwrap();
        form.edit(FieldName::Flavor, FieldInput::Text("Root Beer".to_string()));
        assert_eq!(form.values().flavor, "Root Beer");
        assert_eq!(pending.values.flavor, "Cherry Coke");
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut form = filled_form();
        let first = form.begin_submit().unwrap();
        form.finish_submit(first.ticket, Err("timeout"));
        let second = form.begin_submit().unwrap();

        assert!(!form.finish_submit::<()>(first.ticket, Ok(serde_json::json!({}))));
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert_eq!(form.values().name, "Chelsea");

        assert!(form.finish_submit::<()>(second.ticket, Ok(serde_json::json!({}))));
        assert_eq!(form.values().name, "");
    }
}
