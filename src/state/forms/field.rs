//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// T-shirt sizes offered by the size selector
pub const SIZE_OPTIONS: [&str; 3] = ["small", "medium", "large"];

/// The fields of the order form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    Email,
    Address,
    Flavor,
    Size,
    Terms,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Address,
        FieldName::Flavor,
        FieldName::Size,
        FieldName::Terms,
    ];

    /// Wire name used in the submitted JSON body
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Address => "address",
            Self::Flavor => "flavor",
            Self::Size => "size",
            Self::Terms => "terms",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::Flavor => "What flavor do you identify as?",
            Self::Size => "What size t-shirt would you like?",
            Self::Terms => "No refunds!",
        }
    }

    /// Checkbox fields hold booleans, everything else holds text
    pub fn is_checkbox(&self) -> bool {
        matches!(self, Self::Terms)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Flavor)
    }

    /// Fields edited by typing characters
    pub fn is_text_input(&self) -> bool {
        matches!(
            self,
            Self::Name | Self::Email | Self::Address | Self::Flavor
        )
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a field name does not belong to the form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl FieldValue {
    /// Get the text value (returns empty string for boolean values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Bool(_) => "",
        }
    }

    /// Get the boolean value (text values are never checked)
    pub fn as_bool(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Text(_) => false,
        }
    }
}

/// Raw input coming from an edit event, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Checked(bool),
}

impl FieldInput {
    /// Normalize the input for the target field: checkbox fields become
    /// booleans, all other fields keep the raw string.
    pub fn normalize(self, field: FieldName) -> FieldValue {
        match (field.is_checkbox(), self) {
            (true, FieldInput::Checked(checked)) => FieldValue::Bool(checked),
            (true, FieldInput::Text(raw)) => FieldValue::Bool(matches!(raw.as_str(), "true" | "on")),
            (false, FieldInput::Text(raw)) => FieldValue::Text(raw),
            (false, FieldInput::Checked(checked)) => FieldValue::Text(checked.to_string()),
        }
    }
}

/// Current values of every form field
///
/// Serializes to the JSON body sent to the order endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub address: String,
    pub flavor: String,
    pub size: String,
    pub terms: bool,
}

impl FormValues {
    pub fn get(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::Name => FieldValue::Text(self.name.clone()),
            FieldName::Email => FieldValue::Text(self.email.clone()),
            FieldName::Address => FieldValue::Text(self.address.clone()),
            FieldName::Flavor => FieldValue::Text(self.flavor.clone()),
            FieldName::Size => FieldValue::Text(self.size.clone()),
            FieldName::Terms => FieldValue::Bool(self.terms),
        }
    }

    /// Borrow a text field without cloning (empty for the checkbox)
    pub fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Address => &self.address,
            FieldName::Flavor => &self.flavor,
            FieldName::Size => &self.size,
            FieldName::Terms => "",
        }
    }

    pub(crate) fn set(&mut self, field: FieldName, value: FieldValue) {
        match field {
            FieldName::Name => self.name = value.as_text().to_string(),
            FieldName::Email => self.email = value.as_text().to_string(),
            FieldName::Address => self.address = value.as_text().to_string(),
            FieldName::Flavor => self.flavor = value.as_text().to_string(),
            FieldName::Size => self.size = value.as_text().to_string(),
            FieldName::Terms => self.terms = value.as_bool(),
        }
    }
}

/// Per-field error messages; an empty string means no error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: [String; 6],
}

impl FieldErrors {
    fn index(field: FieldName) -> usize {
        field as usize
    }

    pub fn get(&self, field: FieldName) -> &str {
        &self.messages[Self::index(field)]
    }

    pub fn has_error(&self, field: FieldName) -> bool {
        !self.get(field).is_empty()
    }

    pub(crate) fn set(&mut self, field: FieldName, message: String) {
        self.messages[Self::index(field)] = message;
    }
}

/// Next size option after `current`, wrapping around. An unset size selects
/// the first option.
pub fn next_size(current: &str) -> &'static str {
    match SIZE_OPTIONS.iter().position(|s| *s == current) {
        Some(i) => SIZE_OPTIONS[(i + 1) % SIZE_OPTIONS.len()],
        None => SIZE_OPTIONS[0],
    }
}

/// Previous size option before `current`, wrapping around. An unset size
/// selects the last option.
pub fn prev_size(current: &str) -> &'static str {
    match SIZE_OPTIONS.iter().position(|s| *s == current) {
        Some(0) | None => SIZE_OPTIONS[SIZE_OPTIONS.len() - 1],
        Some(i) => SIZE_OPTIONS[i - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_name_round_trips_through_str() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        let err = "favorite_color".parse::<FieldName>().unwrap_err();
        assert_eq!(err, UnknownField("favorite_color".to_string()));
        assert_eq!(err.to_string(), "unknown form field: favorite_color");
    }

    #[test]
    fn test_checkbox_normalizes_to_bool() {
        assert_eq!(
            FieldInput::Checked(true).normalize(FieldName::Terms),
            FieldValue::Bool(true)
        );
        assert_eq!(
            FieldInput::Text("on".to_string()).normalize(FieldName::Terms),
            FieldValue::Bool(true)
        );
        assert_eq!(
            FieldInput::Text("nope".to_string()).normalize(FieldName::Terms),
            FieldValue::Bool(false)
        );
    }

    #[test]
    fn test_text_fields_keep_raw_string() {
        assert_eq!(
            FieldInput::Text("  Cherry Coke ".to_string()).normalize(FieldName::Flavor),
            FieldValue::Text("  Cherry Coke ".to_string())
        );
        assert_eq!(
            FieldInput::Checked(false).normalize(FieldName::Name),
            FieldValue::Text("false".to_string())
        );
    }

    #[test]
    fn test_default_values_are_empty() {
        let values = FormValues::default();
        for field in FieldName::ALL {
            if field.is_checkbox() {
                assert_eq!(values.get(field), FieldValue::Bool(false));
            } else {
                assert_eq!(values.get(field), FieldValue::Text(String::new()));
            }
        }
    }

    #[test]
    fn test_values_serialize_with_wire_names() {
        let values = FormValues {
            name: "Chelsea".to_string(),
            email: "chelsea@example.com".to_string(),
            address: "1 Main St".to_string(),
            flavor: "Cherry Coke".to_string(),
            size: "medium".to_string(),
            terms: true,
        };
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Chelsea",
                "email": "chelsea@example.com",
                "address": "1 Main St",
                "flavor": "Cherry Coke",
                "size": "medium",
                "terms": true
            })
        );
    }

    #[test]
    fn test_errors_are_independent_per_field() {
        let mut errors = FieldErrors::default();
        errors.set(FieldName::Email, "must be a valid email".to_string());
        assert!(errors.has_error(FieldName::Email));
        assert!(!errors.has_error(FieldName::Name));
        assert_eq!(errors.get(FieldName::Name), "");
    }

    #[test]
    fn test_size_cycles_through_options() {
        assert_eq!(next_size(""), "small");
        assert_eq!(next_size("small"), "medium");
        assert_eq!(next_size("large"), "small");
        assert_eq!(prev_size(""), "large");
        assert_eq!(prev_size("small"), "large");
        assert_eq!(prev_size("large"), "medium");
    }
}
