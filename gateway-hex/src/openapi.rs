//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use gateway_types::dto::{
    CreatePaymentIntentRequest, CreatePaymentIntentResponse, ErrorResponse, HealthResponse,
    PaymentIntentStatusResponse,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
async fn health() {}

/// Create a payment intent with the payment provider
#[utoipa::path(
    post,
    path = "/api/create-payment-intent",
    tag = "payment-intents",
    request_body = CreatePaymentIntentRequest,
    responses(
        (status = 200, description = "Payment intent created", body = CreatePaymentIntentResponse),
        (status = 400, description = "Missing amount or currency", body = ErrorResponse),
        (status = 500, description = "Provider rejected or failed the request", body = ErrorResponse)
    )
)]
async fn create_payment_intent() {}

/// Get the current status of a payment intent
#[utoipa::path(
    get,
    path = "/api/payment-intent/{id}",
    tag = "payment-intents",
    params(
        ("id" = String, Path, description = "Provider payment intent ID")
    ),
    responses(
        (status = 200, description = "Payment intent status", body = PaymentIntentStatusResponse),
        (status = 500, description = "Provider rejected or failed the request", body = ErrorResponse)
    )
)]
async fn get_payment_intent() {}

/// OpenAPI documentation for the gateway API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Intent Gateway API",
        version = "1.0.0",
        description = "Thin gateway that creates and inspects payment intents with the payment provider.\n\nProvider failures are returned as `500` with the provider's message in `details`. Requests are not authenticated and are never retried.",
    ),
    paths(health, create_payment_intent, get_payment_intent),
    components(
        schemas(
            HealthResponse,
            CreatePaymentIntentRequest,
            CreatePaymentIntentResponse,
            PaymentIntentStatusResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payment-intents", description = "Payment intent creation and lookup"),
    )
)]
pub struct ApiDoc;
