//! HTTP client module for submitting orders

mod client;
mod error;
mod traits;

pub use client::{OrderClient, DEFAULT_ENDPOINT};
pub use error::SubmitError;
pub use traits::OrderClientTrait;

#[cfg(test)]
pub use traits::MockOrderClientTrait;
