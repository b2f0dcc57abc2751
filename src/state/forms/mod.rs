//! Form domain layer
//!
//! This module provides the order form: typed field values, the validation
//! schema, and the controller that ties them to submission.

mod controller;
mod field;
mod validator;

pub use controller::{FormController, FormPhase};
pub use field::{next_size, prev_size, FieldInput, FieldName, FormValues};
