//! HTTP request handlers.

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use gateway_types::{AppError, CreatePaymentIntentRequest, ErrorResponse, PaymentProvider};

use crate::GatewayService;

/// Body returned whenever the failure must not leak details.
const INTERNAL_ERROR: &str = "Internal server error";

/// Application state shared across handlers.
pub struct AppState<P: PaymentProvider> {
    pub service: GatewayService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg,
                    details: None,
                },
            ),
            AppError::Provider { context, source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: context.into(),
                    details: Some(source.to_string()),
                },
            ),
            AppError::Internal(msg) => {
                tracing::error!("Server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: INTERNAL_ERROR.into(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> impl IntoResponse {
    Json(state.service.health())
}

/// Create a payment intent with the provider.
///
/// A body without a JSON content type is read as an empty request. A body
/// that claims JSON but cannot be decoded is an internal error.
#[tracing::instrument(skip(state, payload))]
pub async fn create_payment_intent<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
    payload: Result<Json<CreatePaymentIntentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => CreatePaymentIntentRequest::default(),
        Err(rejection) => {
            return Err(AppError::Internal(format!(
                "Unreadable request body: {}",
                rejection.body_text()
            ))
            .into());
        }
    };
    let created = state.service.create_payment_intent(req).await?;
    Ok(Json(created))
}

/// Get the current status of a payment intent.
#[tracing::instrument(skip(state), fields(payment_intent_id = %id))]
pub async fn get_payment_intent<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let status = state.service.get_payment_intent(id).await?;
    Ok(Json(status))
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".into(),
            details: None,
        }),
    )
}

/// Last-resort response for a panic raised while handling a request.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    ApiError(AppError::Internal(detail.to_string())).into_response()
}
