//! The `Cliente` entity.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Editable attributes of a customer.
///
/// This is the fixed schema that validation rules and patch paths are
/// checked against; identity and timestamps are deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClienteField {
    Nombre,
    Apellido,
    Email,
    Telefono,
    Direccion,
}

impl ClienteField {
    pub const ALL: [Self; 5] = [
        Self::Nombre,
        Self::Apellido,
        Self::Email,
        Self::Telefono,
        Self::Direccion,
    ];

    /// Wire name of the field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nombre => "nombre",
            Self::Apellido => "apellido",
            Self::Email => "email",
            Self::Telefono => "telefono",
            Self::Direccion => "direccion",
        }
    }

    /// Look a field up by wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for ClienteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A persisted customer.
///
/// `id`, `created_at` and `updated_at` are owned by storage: they are
/// assigned when the row is inserted (and `updated_at` again on every
/// committed update) and never by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cliente {
    pub id: Uuid,
    pub nombre: String,
    pub apellido: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A customer that has not been persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCliente {
    pub nombre: String,
    pub apellido: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
}

impl NewCliente {
    /// Create a new customer with only the required name set.
    pub fn new(nombre: impl Into<String>) -> Self {
        Self {
            nombre: nombre.into(),
            ..Default::default()
        }
    }
}
