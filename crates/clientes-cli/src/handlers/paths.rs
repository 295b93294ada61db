//! Paths command handler.
//!
//! Displays resolved paths in `key = value` format for diagnostics.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clientes_core::paths::data_root;

/// Paths the service would use with the current arguments and environment.
#[derive(Debug)]
pub struct ResolvedPaths {
    pub data_root: Option<PathBuf>,
    pub database: PathBuf,
}

impl ResolvedPaths {
    pub fn resolve(database: &Path) -> Self {
        Self {
            data_root: data_root().ok(),
            database: database.to_path_buf(),
        }
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data_root {
            Some(root) => writeln!(f, "data_root = {}", root.display())?,
            None => writeln!(f, "data_root = <unavailable>")?,
        }
        write!(f, "database = {}", self.database.display())
    }
}

/// Execute the paths command.
pub fn execute(database: &Path) -> Result<()> {
    println!("{}", ResolvedPaths::resolve(database));
    Ok(())
}
