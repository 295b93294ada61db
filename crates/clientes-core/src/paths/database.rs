//! Database path resolution.
//!
//! Provides the canonical path to the clientes `SQLite` database file.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// Environment variable pointing straight at a database file.
pub const DATABASE_ENV: &str = "CLIENTES_DATABASE";

/// File name of the database inside `<data_root>/data`.
pub const DATABASE_FILE_NAME: &str = "clientes.db";

/// Get the path to the clientes database file.
///
/// `CLIENTES_DATABASE` wins when set. Otherwise the file lives in the
/// `data/` subdirectory of [`data_root`], which is created if missing.
pub fn database_path() -> Result<PathBuf, PathError> {
    if let Some(path) = env::var_os(DATABASE_ENV) {
        if path.is_empty() {
            return Err(PathError::EmptyPath);
        }
        return Ok(PathBuf::from(path));
    }

    let data_dir = data_root()?.join("data");

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join(DATABASE_FILE_NAME))
}
