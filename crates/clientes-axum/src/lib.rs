//! Axum web adapter for the clientes service.
//!
//! Exposes the `/clientes` resource over HTTP. `bootstrap` is the
//! composition root; handlers only translate between HTTP and
//! [`clientes_core::ClienteService`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used only by the integration suites under tests/
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use hyper as _;
#[cfg(test)]
use tokio_test as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::{HttpError, ProblemDetails};
pub use routes::create_router;
pub use state::AppState;
