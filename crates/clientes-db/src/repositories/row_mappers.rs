//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, Utc};
use clientes_core::{Cliente, RepositoryError};
use uuid::Uuid;

/// Shared SELECT column list for cliente queries.
pub const CLIENTE_SELECT_COLUMNS: &str =
    "id, nombre, apellido, email, telefono, direccion, created_at, updated_at";

#[derive(sqlx::FromRow)]
pub struct ClienteRow {
    id: String,
    nombre: String,
    apellido: Option<String>,
    email: Option<String>,
    telefono: Option<String>,
    direccion: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Convert a `ClienteRow` to the domain `Cliente`.
pub fn row_to_cliente(row: ClienteRow) -> Result<Cliente, RepositoryError> {
    let id = Uuid::parse_str(&row.id)
        .map_err(|e| RepositoryError::Storage(format!("Invalid cliente id '{}': {e}", row.id)))?;

    Ok(Cliente {
        id,
        nombre: row.nombre,
        apellido: row.apellido,
        email: row.email,
        telefono: row.telefono,
        direccion: row.direccion,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

/// Normalized form of a name used for case-insensitive search.
pub fn search_key(nombre: &str) -> String {
    nombre.to_lowercase()
}

/// `LIKE` pattern matching `term` anywhere, with wildcards taken literally.
///
/// Must be used with `ESCAPE '\'`.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in search_key(term).chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Map `SQLx` errors to `RepositoryError`.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db) = &e {
        if !matches!(db.kind(), sqlx::error::ErrorKind::Other) {
            return RepositoryError::Constraint(db.message().to_string());
        }
    }
    RepositoryError::Storage(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_key_folds_unicode() {
        assert_eq!(search_key("ÁNGELA"), "ángela");
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("Ana"), "%ana%");
        assert_eq!(contains_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
