//! Application layer - use cases over the outbound ports
//!
//! `api` adapts the raw JSON port into the typed `PersonaApiPort`; `services`
//! holds the conversation state machine and the management use cases.

pub mod api;
pub mod error;
pub mod services;

pub use api::Api;
pub use error::ServiceError;
