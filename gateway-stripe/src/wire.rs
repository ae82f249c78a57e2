//! Stripe wire format: form encoding and response decoding.

use serde::Deserialize;

use gateway_types::{CreateIntentParams, PaymentIntent, ProviderError};

/// Encodes creation parameters as Stripe form fields.
pub(crate) fn encode_create_params(params: &CreateIntentParams) -> Vec<(String, String)> {
    let mut form = vec![
        ("amount".to_string(), params.amount.to_string()),
        ("currency".to_string(), params.currency.clone()),
        ("description".to_string(), params.description.clone()),
    ];

    for (key, value) in params.metadata.entries() {
        form.push((format!("metadata[{key}]"), value.to_string()));
    }

    form.push((
        "automatic_payment_methods[enabled]".to_string(),
        params.automatic_payment_methods.enabled.to_string(),
    ));

    form
}

pub(crate) fn decode_intent(body: &str) -> Result<PaymentIntent, ProviderError> {
    serde_json::from_str(body).map_err(|e| {
        ProviderError::InvalidResponse(format!("Invalid JSON received from the Stripe API: {e}"))
    })
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: StripeError,
}

#[derive(Deserialize)]
struct StripeError {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    code: Option<String>,
}

/// Turns a non-2xx Stripe response into a provider error.
pub(crate) fn decode_error(status: u16, body: &str) -> ProviderError {
    let fallback = || format!("Stripe API request failed with status {status}");

    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => ProviderError::Rejected {
            status,
            kind: error.kind,
            code: error.code,
            message: error.message.unwrap_or_else(fallback),
        },
        Err(_) => ProviderError::Rejected {
            status,
            kind: None,
            code: None,
            message: fallback(),
        },
    }
}
