//! # Gateway Stripe
//!
//! Outbound adapter that implements the `PaymentProvider` port against
//! Stripe's REST API.
//!
//! Requests are form-encoded with Stripe's bracketed keys
//! (`metadata[bookingId]=...`) and authenticated with the secret key as a
//! Bearer token. Error envelopes are decoded so that the caller sees
//! Stripe's own message.

mod client;
mod wire;

pub use client::{DEFAULT_API_BASE, DEFAULT_TIMEOUT, StripeConfig, StripeProvider};
