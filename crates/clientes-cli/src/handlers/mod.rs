//! Command handlers.
//!
//! Each submodule handles one subcommand.

pub mod migrate;
pub mod paths;
pub mod serve;
