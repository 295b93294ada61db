//! Path utilities for the clientes data directory.
//!
//! Provides the canonical resolution of the application data root and the
//! `SQLite` database file location.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod database;
mod error;
mod platform;

pub use database::{DATABASE_ENV, DATABASE_FILE_NAME, database_path};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root};
