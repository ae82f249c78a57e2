//! # Gateway Hex
//!
//! Application service layer and HTTP adapter for the payment intent gateway.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validates, delegates to the provider)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served alongside the API
//!
//! The service is generic over `P: PaymentProvider`, allowing
//! different provider implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::GatewayService;
