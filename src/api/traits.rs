//! Trait abstraction for the order client to enable mocking in tests

use super::SubmitError;
use crate::state::FormValues;
use async_trait::async_trait;

/// Trait for order submission, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderClientTrait: Send + Sync {
    /// POST the form values and return the parsed response body
    async fn submit_order(&self, values: FormValues) -> Result<serde_json::Value, SubmitError>;
}
