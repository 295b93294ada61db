//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clientes_core::paths::database_path;

use crate::commands::Commands;

/// Command-line interface for the clientes service.
#[derive(Parser)]
#[command(name = "clientes")]
#[command(about = "Customer records over HTTP")]
#[command(version)]
pub struct Cli {
    /// `SQLite` database file (defaults to the platform data directory)
    #[arg(long, env = "CLIENTES_DATABASE", global = true)]
    pub database: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The database file to use: `--database` if given, else the default location.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => Ok(database_path()?),
        }
    }
}
