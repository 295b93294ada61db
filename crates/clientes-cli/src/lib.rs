//! Command-line front end for the clientes service.
//!
//! `main.rs` is the composition root; this library holds the argument
//! parser and the command handlers so they can be tested.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tokio_test as _;

// Used by the binary only
use dotenvy as _;
use tokio as _;

pub mod commands;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use logging::init_tracing;
pub use parser::Cli;
