//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{
    AutomaticPaymentMethods, CreateIntentParams, IntentMetadata, Metadata, PaymentIntent,
};
use crate::error::ValidationError;

/// Description used when the caller does not provide one.
pub const DEFAULT_DESCRIPTION: &str = "Payment for booking";

// ─────────────────────────────────────────────────────────────────────────────
// Health
// ─────────────────────────────────────────────────────────────────────────────

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "Stripe Payment Backend is running")]
    pub message: String,
    /// Current server time (ISO 8601, UTC)
    #[schema(example = "2024-01-01T00:00:00.000Z")]
    pub timestamp: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment Intent DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a payment intent.
///
/// Fields are kept loosely typed so that presence and coercion rules are
/// applied by [`CreatePaymentIntentRequest::validate`] rather than by the
/// JSON decoder. Only a JSON object supplies fields; a JSON array decodes
/// to an empty request and any other value is rejected.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    /// Amount in smallest currency unit (integer or integer string)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>, example = 500)]
    pub amount: Option<Value>,
    /// Currency code, any case
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "EUR")]
    pub currency: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "Deluxe room, 2 nights")]
    pub description: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub user_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "b1")]
    pub booking_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub room_id: Option<Value>,
}

impl CreatePaymentIntentRequest {
    /// Creates a request with the two required fields.
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount: Some(Value::from(amount)),
            currency: Some(Value::String(currency.into())),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Value::String(description.into()));
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(Value::String(user_id.into()));
        self
    }

    pub fn with_booking_id(mut self, booking_id: impl Into<String>) -> Self {
        self.booking_id = Some(Value::String(booking_id.into()));
        self
    }

    pub fn with_room_id(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(Value::String(room_id.into()));
        self
    }

    /// Checks required fields and normalizes the request for the provider.
    ///
    /// `null`, `0`, `false` and `""` count as absent, the same as a missing key.
    pub fn validate(self) -> Result<CreateIntentParams, ValidationError> {
        let (Some(amount), Some(currency)) = (present(self.amount), present(self.currency)) else {
            return Err(ValidationError::MissingFields);
        };

        let amount = coerce_amount(&amount).ok_or(ValidationError::InvalidAmount)?;
        let currency = match currency {
            Value::String(code) => code.to_lowercase(),
            _ => return Err(ValidationError::InvalidCurrency),
        };

        Ok(CreateIntentParams {
            amount,
            currency,
            description: text_or(self.description, DEFAULT_DESCRIPTION),
            metadata: IntentMetadata {
                user_id: text_or(self.user_id, ""),
                booking_id: text_or(self.booking_id, ""),
                room_id: text_or(self.room_id, ""),
            },
            automatic_payment_methods: AutomaticPaymentMethods { enabled: true },
        })
    }
}

impl<'de> Deserialize<'de> for CreatePaymentIntentRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(mut fields) => Ok(Self {
                amount: fields.remove("amount"),
                currency: fields.remove("currency"),
                description: fields.remove("description"),
                user_id: fields.remove("userId"),
                booking_id: fields.remove("bookingId"),
                room_id: fields.remove("roomId"),
            }),
            Value::Array(_) => Ok(Self::default()),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(json_kind(&other)),
                &"a JSON object",
            )),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Response after creating a payment intent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    /// Secret used client-side to complete the payment
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "pi_3Nx_secret_abc")]
    pub client_secret: Option<String>,
    #[schema(example = "pi_3Nx")]
    pub payment_intent_id: String,
}

impl From<PaymentIntent> for CreatePaymentIntentResponse {
    fn from(intent: PaymentIntent) -> Self {
        Self {
            client_secret: intent.client_secret,
            payment_intent_id: intent.id,
        }
    }
}

/// Current state of a payment intent, relayed from the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaymentIntentStatusResponse {
    #[schema(example = "pi_3Nx")]
    pub id: String,
    /// Provider-defined status
    #[schema(example = "requires_payment_method")]
    pub status: String,
    #[schema(example = 500)]
    pub amount: i64,
    #[schema(example = "eur")]
    pub currency: String,
    pub metadata: Metadata,
}

impl From<PaymentIntent> for PaymentIntentStatusResponse {
    fn from(intent: PaymentIntent) -> Self {
        Self {
            id: intent.id,
            status: intent.status,
            amount: intent.amount,
            currency: intent.currency,
            metadata: intent.metadata,
        }
    }
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Failed to create payment intent")]
    pub error: String,
    /// Provider message, when the failure came from the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Coercion helpers
// ─────────────────────────────────────────────────────────────────────────────

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn present(value: Option<Value>) -> Option<Value> {
    value.filter(|v| !is_blank(v))
}

/// Truncates toward zero; `None` when the result does not fit an `i64`.
fn truncate(value: f64) -> Option<i64> {
    let whole = value.trunc();
    (whole.is_finite() && whole >= i64::MIN as f64 && whole < i64::MAX as f64)
        .then(|| whole as i64)
}

/// Reads the integer at the start of `text`: leading whitespace, an optional
/// sign, then decimal digits (hex after `0x`). Parsing stops at the first
/// character that is not a digit, so `"12abc"` is 12 and `"1e3"` is 1.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

fn coerce_amount(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => leading_integer(s),
        _ => None,
    }
}

fn text_or(value: Option<Value>, default: &str) -> String {
    match present(value) {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => default.to_string(),
    }
}
