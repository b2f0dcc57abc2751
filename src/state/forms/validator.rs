//! Declarative per-field validation rules for the order form

use super::field::{FieldName, FieldValue, FormValues};
use regex::Regex;
use std::sync::LazyLock;

/// A single predicate a field value must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// Text must be non-empty
    Required,
    /// Text must have at least this many characters
    MinLength(usize),
    /// Non-empty text must look like an email address
    Email,
    /// Boolean must be checked
    MustBeTrue,
}

impl CheckKind {
    fn passes(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (CheckKind::Required, FieldValue::Text(s)) => !s.is_empty(),
            (CheckKind::Required, FieldValue::Bool(_)) => true,
            (CheckKind::MinLength(min), FieldValue::Text(s)) => s.chars().count() >= *min,
            (CheckKind::Email, FieldValue::Text(s)) => s.is_empty() || is_email(s),
            (CheckKind::MustBeTrue, FieldValue::Bool(b)) => *b,
            _ => false,
        }
    }
}

/// A check paired with the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub kind: CheckKind,
    pub message: &'static str,
}

impl Check {
    const fn new(kind: CheckKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

/// The rule for one field: checks evaluated in order, first failure wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub checks: Vec<Check>,
}

impl FieldRule {
    pub fn validate(&self, value: &FieldValue) -> Result<(), String> {
        match self.checks.iter().find(|check| !check.kind.passes(value)) {
            Some(check) => Err(check.message.to_string()),
            None => Ok(()),
        }
    }
}

/// The rule associated with each form field
pub fn rule_for(field: FieldName) -> FieldRule {
    let checks = match field {
        FieldName::Name => vec![
            Check::new(CheckKind::Required, "please input a name"),
            Check::new(CheckKind::MinLength(2), "name must be more than 2 characters"),
        ],
        FieldName::Email => vec![
            Check::new(CheckKind::Email, "must be a valid email"),
            Check::new(CheckKind::Required, "email is a required field"),
        ],
        FieldName::Address => vec![Check::new(
            CheckKind::Required,
            "address is a required field",
        )],
        FieldName::Flavor => vec![Check::new(
            CheckKind::Required,
            "we need to know your flavor!!!",
        )],
        FieldName::Size => vec![Check::new(
            CheckKind::Required,
            "must include a size for your shirt",
        )],
        FieldName::Terms => vec![Check::new(CheckKind::MustBeTrue, "must agree to terms")],
    };
    FieldRule { checks }
}

/// Validate one field value, returning the message of the first failing check
pub fn validate_field(field: FieldName, value: &FieldValue) -> Result<(), String> {
    rule_for(field).validate(value)
}

/// True iff every field independently satisfies its rule
pub fn validate_all(values: &FormValues) -> bool {
    FieldName::ALL
        .iter()
        .all(|field| validate_field(*field, &values.get(*field)).is_ok())
}

/// Letters outside ASCII that are allowed anywhere a letter is
const UNICODE_LETTERS: &str = r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";

/// Same accept/reject set as the browser form's `yup` email check:
/// dot-atom or quoted local part, dotted domain whose labels start and end
/// with a letter or digit, and a top-level label that starts and ends with
/// a letter.
fn email_pattern() -> String {
    let u = UNICODE_LETTERS;
    let atom = format!(r"[a-z0-9!#$%&'*+\-/=?^_`{{|}}~{u}]");
    let dot_atom = format!(r"{atom}+(?:\.{atom}+)*");

    let fws = r"(?:(?:[ \t]*\r\n)?[ \t]+)";
    let qtext = format!(r"[\x01-\x08\x0b\x0c\x0e-\x1f\x7f\x21\x23-\x5b\x5d-\x7e{u}]");
    let quoted_pair = format!(r"\\[\x01-\x09\x0b\x0c\x0d-\x7f{u}]");
    let quoted = format!(r#""(?:{fws}?(?:{qtext}|{quoted_pair}))*{fws}?""#);

    let alnum = format!(r"[a-z0-9{u}]");
    let inner = format!(r"[a-z0-9\-._~{u}]");
    let label = format!(r"(?:{alnum}|{alnum}{inner}*{alnum})");
    let alpha = format!(r"[a-z{u}]");
    let tld = format!(r"(?:{alpha}|{alpha}{inner}*{alpha})");

    format!(r"(?i)^(?:{dot_atom}|{quoted})@(?:{label}\.)+{tld}$")
}

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(&email_pattern()).ok());

fn is_email(s: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(s))
}
