//! Error types for the gateway.

use crate::ports::ProviderError;

/// Request validation errors (client-caused, the provider is never contacted).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: amount, currency")]
    MissingFields,

    #[error("Invalid amount: expected an integer in the smallest currency unit")]
    InvalidAmount,

    #[error("Invalid currency: expected a currency code string")]
    InvalidCurrency,
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A provider call failed. `context` is the caller-facing summary.
    #[error("{context}: {source}")]
    Provider {
        context: &'static str,
        #[source]
        source: ProviderError,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
