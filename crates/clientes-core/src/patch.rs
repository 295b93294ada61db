//! Patch documents for partial updates.
//!
//! The wire format follows JSON Patch (`[{"op", "path", "value"}]`), but
//! only a closed subset is accepted: `add`, `replace` and `remove` on the
//! editable fields in [`ClienteField`]. Raw operations are parsed against
//! that schema up front, so applying a [`PatchDocument`] cannot fail.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::ClienteField;
use crate::dto::UpdateClienteDto;
use crate::validation::ValidationErrors;

/// One operation exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPatchOperation {
    pub op: String,
    pub path: String,
    /// `None` when the member is absent, `Some(Value::Null)` for explicit null.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl RawPatchOperation {
    pub fn new(op: impl Into<String>, path: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            op: op.into(),
            path: path.into(),
            value,
        }
    }
}

/// Field-level mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOp {
    Set(String),
    Clear,
}

/// A parsed operation bound to a known field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOperation {
    pub field: ClienteField,
    pub op: PatchOp,
}

impl PatchOperation {
    pub fn set(field: ClienteField, value: impl Into<String>) -> Self {
        Self {
            field,
            op: PatchOp::Set(value.into()),
        }
    }

    pub const fn clear(field: ClienteField) -> Self {
        Self {
            field,
            op: PatchOp::Clear,
        }
    }

    /// Parse one raw operation, reporting problems under `key`.
    fn parse(raw: &RawPatchOperation, key: &str, errors: &mut ValidationErrors) -> Option<Self> {
        let field = parse_path(&raw.path);
        if field.is_none() {
            errors.add(
                key,
                format!("The target location '{}' is not a patchable field.", raw.path),
            );
        }

        let op = match raw.op.to_ascii_lowercase().as_str() {
            "add" | "replace" => match &raw.value {
                None => {
                    errors.add(key, format!("The '{}' operation requires a value.", raw.op));
                    None
                }
                Some(Value::Null) => Some(PatchOp::Clear),
                Some(Value::String(s)) => Some(PatchOp::Set(s.clone())),
                Some(other) => {
                    errors.add(
                        key,
                        format!("The value for '{}' must be a string, got {other}.", raw.path),
                    );
                    None
                }
            },
            "remove" => Some(PatchOp::Clear),
            other => {
                errors.add(key, format!("The operation '{other}' is not supported."));
                None
            }
        };

        Some(Self { field: field?, op: op? })
    }

    fn apply(&self, target: &mut UpdateClienteDto) {
        let value = match &self.op {
            PatchOp::Set(v) => Some(v.clone()),
            PatchOp::Clear => None,
        };

        let slot = match self.field {
            ClienteField::Nombre => &mut target.nombre,
            ClienteField::Apellido => &mut target.apellido,
            ClienteField::Email => &mut target.email,
            ClienteField::Telefono => &mut target.telefono,
            ClienteField::Direccion => &mut target.direccion,
        };
        *slot = value;
    }
}

/// `/nombre` -> `ClienteField::Nombre`. Only single-segment paths exist.
fn parse_path(path: &str) -> Option<ClienteField> {
    let segment = path.strip_prefix('/')?;
    if segment.contains('/') {
        return None;
    }
    ClienteField::from_name(&segment.to_ascii_lowercase())
}

/// Ordered list of validated field operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchDocument {
    operations: Vec<PatchOperation>,
}

impl PatchDocument {
    pub const fn new(operations: Vec<PatchOperation>) -> Self {
        Self { operations }
    }

    /// Validate raw operations against the field schema.
    ///
    /// Every bad operation is reported, keyed by its path (or its index when
    /// the path is empty).
    pub fn parse(raw: &[RawPatchOperation]) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut operations = Vec::with_capacity(raw.len());

        for (index, op) in raw.iter().enumerate() {
            let key = if op.path.is_empty() {
                format!("[{index}]")
            } else {
                op.path.clone()
            };
            if let Some(parsed) = PatchOperation::parse(op, &key, &mut errors) {
                operations.push(parsed);
            }
        }

        errors.into_result().map(|()| Self { operations })
    }

    pub fn operations(&self) -> &[PatchOperation] {
        &self.operations
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Apply all operations in order; later operations win.
    pub fn apply_to(&self, target: &mut UpdateClienteDto) {
        for op in &self.operations {
            op.apply(target);
        }
    }
}
