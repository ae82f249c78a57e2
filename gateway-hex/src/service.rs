//! Gateway Application Service
//!
//! Validates requests and delegates to the payment provider port.
//! Contains NO infrastructure logic and keeps no state between requests.

use std::future::Future;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use gateway_types::{
    AppError, CreatePaymentIntentRequest, CreatePaymentIntentResponse, HealthResponse,
    PaymentIntentStatusResponse, PaymentProvider,
};

/// Message reported by the health check.
pub const HEALTH_MESSAGE: &str = "Stripe Payment Backend is running";

/// Application service for payment intent operations.
///
/// Generic over `P: PaymentProvider` - the adapter is injected at compile time.
/// This enables:
/// - Swapping providers without code changes
/// - Testing with in-memory fakes
/// - Compile-time checks for port implementation
pub struct GatewayService<P: PaymentProvider> {
    provider: Arc<P>,
}

impl<P: PaymentProvider> GatewayService<P> {
    /// Creates a new gateway service with the given provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Reports liveness. Never touches the provider.
    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "ok".into(),
            message: HEALTH_MESSAGE.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Creates a payment intent with the provider.
    ///
    /// Validation failures return before the provider is contacted. No
    /// idempotency key is sent, so a retried request creates a second intent.
    pub async fn create_payment_intent(
        &self,
        req: CreatePaymentIntentRequest,
    ) -> Result<CreatePaymentIntentResponse, AppError> {
        let params = req.validate()?;

        let provider = Arc::clone(&self.provider);
        let outcome = detached(async move { provider.create_intent(params).await }).await?;

        match outcome {
            Ok(intent) => {
                tracing::info!(payment_intent_id = %intent.id, "✅ Payment intent created");
                Ok(intent.into())
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    status = e.status(),
                    kind = e.kind(),
                    code = e.code(),
                    "❌ Error creating payment intent"
                );
                Err(AppError::Provider {
                    context: "Failed to create payment intent",
                    source: e,
                })
            }
        }
    }

    /// Retrieves a payment intent and relays its current state.
    pub async fn get_payment_intent(
        &self,
        id: String,
    ) -> Result<PaymentIntentStatusResponse, AppError> {
        let provider = Arc::clone(&self.provider);
        let outcome = detached(async move { provider.retrieve_intent(&id).await }).await?;

        outcome.map(Into::into).map_err(|e| {
            tracing::error!(
                error = %e,
                status = e.status(),
                kind = e.kind(),
                code = e.code(),
                "❌ Error retrieving payment intent"
            );
            AppError::Provider {
                context: "Failed to retrieve payment intent",
                source: e,
            }
        })
    }
}

/// Runs a provider call on its own task so it completes even if the
/// caller's connection (and with it the handler future) goes away.
async fn detached<F>(call: F) -> Result<F::Output, AppError>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::spawn(call).await.map_err(|e| {
        tracing::error!(error = %e, "Provider task did not complete");
        AppError::Internal(e.to_string())
    })
}
