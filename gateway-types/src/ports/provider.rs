//! Payment provider port.
//!
//! This trait defines the interface to the remote payment processor.
//! Implementations can be HTTP clients, in-memory fakes, etc.

use crate::domain::{CreateIntentParams, PaymentIntent};

/// Error type for payment provider operations.
///
/// The `Display` output of every variant is the provider's own message, so it
/// can be relayed to callers as opaque detail text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered with an error (invalid amount, unknown id, ...).
    #[error("{message}")]
    Rejected {
        status: u16,
        kind: Option<String>,
        code: Option<String>,
        message: String,
    },

    /// No usable credential was available to authenticate with the provider.
    #[error("{0}")]
    Authentication(String),

    /// The provider could not be reached.
    #[error("{0}")]
    Connection(String),

    /// The provider answered with something that could not be understood.
    #[error("{0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// HTTP status the provider answered with, for rejected calls.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Provider error type, e.g. `invalid_request_error`.
    pub fn kind(&self) -> Option<&str> {
        match self {
            ProviderError::Rejected { kind, .. } => kind.as_deref(),
            _ => None,
        }
    }

    /// Provider error code, e.g. `resource_missing`.
    pub fn code(&self) -> Option<&str> {
        match self {
            ProviderError::Rejected { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

/// Port trait for payment providers.
#[async_trait::async_trait]
pub trait PaymentProvider: Send + Sync + 'static {
    /// Create a payment intent with automatic payment method selection.
    async fn create_intent(
        &self,
        params: CreateIntentParams,
    ) -> Result<PaymentIntent, ProviderError>;

    /// Retrieve a previously created payment intent by its provider id.
    async fn retrieve_intent(&self, id: &str) -> Result<PaymentIntent, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_exposes_provider_details() {
        let err = ProviderError::Rejected {
            status: 404,
            kind: Some("invalid_request_error".into()),
            code: Some("resource_missing".into()),
            message: "No such payment_intent: 'pi_x'".into(),
        };

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.kind(), Some("invalid_request_error"));
        assert_eq!(err.code(), Some("resource_missing"));
        assert_eq!(err.to_string(), "No such payment_intent: 'pi_x'");
    }

    #[test]
    fn test_local_failures_have_no_provider_details() {
        let err = ProviderError::Connection("connection refused".into());

        assert_eq!(err.status(), None);
        assert_eq!(err.kind(), None);
        assert_eq!(err.code(), None);
    }
}
