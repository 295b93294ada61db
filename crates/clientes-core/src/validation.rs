//! Declarative input validation.
//!
//! Constraints are data ([`CLIENTE_RULES`]), evaluated by the [`Validate`]
//! trait for every input DTO before any mapping happens.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::domain::ClienteField;
use crate::dto::{CreateClienteDto, UpdateClienteDto};

/// Extra format check applied to any present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// `local@domain` with no whitespace.
    Email,
}

/// Constraint set for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: ClienteField,
    pub required: bool,
    /// Maximum length in characters.
    pub max_len: usize,
    pub format: Option<FieldFormat>,
}

impl FieldRule {
    const fn optional(field: ClienteField, max_len: usize) -> Self {
        Self {
            field,
            required: false,
            max_len,
            format: None,
        }
    }
}

/// Constraints for customer input, shared by create and update shapes.
pub const CLIENTE_RULES: &[FieldRule] = &[
    FieldRule {
        field: ClienteField::Nombre,
        required: true,
        max_len: 100,
        format: None,
    },
    FieldRule::optional(ClienteField::Apellido, 100),
    FieldRule {
        field: ClienteField::Email,
        required: false,
        max_len: 150,
        format: Some(FieldFormat::Email),
    },
    FieldRule::optional(ClienteField::Telefono, 30),
    FieldRule::optional(ClienteField::Direccion, 200),
];

/// Field-level validation failures, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("validation failed for {} field(s)", .0.len())]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field (or patch path).
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Types whose fields are checked against [`CLIENTE_RULES`].
pub trait Validate {
    /// Value currently held for `field`.
    fn field_value(&self, field: ClienteField) -> Option<&str>;

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for rule in CLIENTE_RULES {
            check_rule(rule, self.field_value(rule.field), &mut errors);
        }
        errors.into_result()
    }
}

/// `local@domain`: no whitespace and exactly one `@` with text on both sides.
static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$"));

/// A present value is always checked, even when blank; only a required
/// field treats blank as missing.
fn check_rule(rule: &FieldRule, value: Option<&str>, errors: &mut ValidationErrors) {
    let name = rule.field.name();

    let value = match value {
        Some(v) if rule.required && v.trim().is_empty() => None,
        other => other,
    };
    let Some(value) = value else {
        if rule.required {
            errors.add(name, format!("The {name} field is required."));
        }
        return;
    };

    let len = value.chars().count();
    if len > rule.max_len {
        errors.add(
            name,
            format!(
                "The {name} field must be at most {} characters long (got {len}).",
                rule.max_len
            ),
        );
    }

    if let Some(FieldFormat::Email) = rule.format {
        if !is_email(value) {
            errors.add(name, format!("The {name} field is not a valid e-mail address."));
        }
    }
}

fn is_email(value: &str) -> bool {
    match &*EMAIL_PATTERN {
        Ok(pattern) => pattern.is_match(value),
        Err(e) => {
            tracing::error!(error = %e, "e-mail pattern failed to compile");
            false
        }
    }
}

impl Validate for CreateClienteDto {
    fn field_value(&self, field: ClienteField) -> Option<&str> {
        match field {
            ClienteField::Nombre => self.nombre.as_deref(),
            ClienteField::Apellido => self.apellido.as_deref(),
            ClienteField::Email => self.email.as_deref(),
            ClienteField::Telefono => self.telefono.as_deref(),
            ClienteField::Direccion => self.direccion.as_deref(),
        }
    }
}

impl Validate for UpdateClienteDto {
    fn field_value(&self, field: ClienteField) -> Option<&str> {
        match field {
            ClienteField::Nombre => self.nombre.as_deref(),
            ClienteField::Apellido => self.apellido.as_deref(),
            ClienteField::Email => self.email.as_deref(),
            ClienteField::Telefono => self.telefono.as_deref(),
            ClienteField::Direccion => self.direccion.as_deref(),
        }
    }
}
