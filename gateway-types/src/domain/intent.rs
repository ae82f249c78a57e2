//! Payment intent domain model.
//!
//! A payment intent lives entirely on the provider side. The gateway only
//! ever holds one for the duration of a single request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Opaque key/value annotations attached to a payment intent.
pub type Metadata = BTreeMap<String, String>;

/// A payment intent as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Provider-assigned identifier (e.g. `pi_...`)
    pub id: String,
    /// Token the caller uses to complete the payment with the provider
    pub client_secret: Option<String>,
    /// Provider-defined status, passed through untouched
    pub status: String,
    /// Amount in smallest currency unit
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Booking identifiers carried verbatim as intent metadata.
///
/// Absent identifiers are always forwarded as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntentMetadata {
    pub user_id: String,
    pub booking_id: String,
    pub room_id: String,
}

impl IntentMetadata {
    /// Metadata entries as sent to the provider, keyed by their wire names.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("userId", self.user_id.as_str()),
            ("bookingId", self.booking_id.as_str()),
            ("roomId", self.room_id.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AutomaticPaymentMethods {
    pub enabled: bool,
}

/// Validated, normalized parameters for creating a payment intent.
///
/// Built from a [`crate::CreatePaymentIntentRequest`] by
/// [`crate::CreatePaymentIntentRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateIntentParams {
    pub amount: i64,
    /// Lowercase currency code
    pub currency: String,
    pub description: String,
    pub metadata: IntentMetadata,
    pub automatic_payment_methods: AutomaticPaymentMethods,
}
