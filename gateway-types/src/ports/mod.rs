//! Port traits (interfaces for adapters).
//!
//! The application layer depends on these traits, not concrete implementations.

mod provider;

pub use provider::{PaymentProvider, ProviderError};
