//! Platform-specific data root resolution.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "CLIENTES_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `CLIENTES_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/clientes`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV) {
        if dir.is_empty() {
            return Err(PathError::EmptyPath);
        }
        return Ok(PathBuf::from(dir));
    }

    dirs::data_local_dir()
        .map(|dir| dir.join("clientes"))
        .ok_or(PathError::NoDataDir)
}
