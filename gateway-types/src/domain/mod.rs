//! Domain models for the gateway.

pub mod intent;

pub use intent::{
    AutomaticPaymentMethods, CreateIntentParams, IntentMetadata, Metadata, PaymentIntent,
};
