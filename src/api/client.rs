//! HTTP client for posting orders
//!
//! Sends the form values as a JSON body with default headers. No retries
//! and no timeout beyond what the transport imposes.

use super::{OrderClientTrait, SubmitError};
use crate::state::FormValues;
use async_trait::async_trait;

/// Default order endpoint
pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/orders";

/// Client for the order endpoint
#[derive(Debug, Clone)]
pub struct OrderClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OrderClient {
    /// Create a new client posting to `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for OrderClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl OrderClientTrait for OrderClient {
    async fn submit_order(&self, values: FormValues) -> Result<serde_json::Value, SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, "posting order");

        let response = self.http.post(&self.endpoint).json(&values).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SubmitError::http(status.as_u16(), body));
        }

        Ok(parse_body(body))
    }
}

/// Parse a response body as JSON, keeping non-JSON bodies as a string
fn parse_body(body: String) -> serde_json::Value {
    match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) => serde_json::Value::String(body),
    }
}
