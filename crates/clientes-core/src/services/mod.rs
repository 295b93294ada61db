//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod cliente_service;

pub use cliente_service::{ClienteService, ClienteServiceError};
