//! # Gateway Types
//!
//! Domain types and port traits for the payment intent gateway.
//! This crate has ZERO external IO dependencies - only data structures,
//! request validation, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Payment intent shapes exchanged with the provider
//! - `ports/` - Trait definitions that provider adapters must implement
//! - `dto/` - Data Transfer Objects for the HTTP boundary
//! - `error/` - Validation and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AutomaticPaymentMethods, CreateIntentParams, IntentMetadata, Metadata, PaymentIntent,
};
pub use dto::*;
pub use error::{AppError, ValidationError};
pub use ports::{PaymentProvider, ProviderError};
