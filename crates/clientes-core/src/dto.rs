//! Data Transfer Objects for the HTTP API contract.
//!
//! These types define the wire representation with explicit serialization
//! control (camelCase). They are decoupled from the persisted [`Cliente`]
//! shape; [`ClienteMapper`](crate::mapper::ClienteMapper) converts between
//! the two.
//!
//! [`Cliente`]: crate::domain::Cliente

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /clientes`.
///
/// `nombre` is optional at the serde level so a missing name surfaces as a
/// field-level validation error rather than a JSON parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClienteDto {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub apellido: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
}

/// Update-shaped view of a customer.
///
/// Patch documents are applied to this shape, which is then re-validated
/// before being mapped back onto the entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClienteDto {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub apellido: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
}

/// Representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteDto {
    pub id: Uuid,
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    pub creado_en: DateTime<Utc>,
    pub actualizado_en: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_tolerates_missing_fields() {
        let dto: CreateClienteDto = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(dto.nombre, None);
        assert_eq!(dto.email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn output_dto_uses_camel_case_and_omits_empty_optionals() {
        let now = Utc::now();
        let dto = ClienteDto {
            id: Uuid::new_v4(),
            nombre: "Ana".to_string(),
            apellido: None,
            email: None,
            telefono: Some("555".to_string()),
            direccion: None,
            creado_en: now,
            actualizado_en: now,
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("creadoEn").is_some());
        assert!(json.get("actualizadoEn").is_some());
        assert!(json.get("created_at").is_none());
        assert!(json.get("apellido").is_none());
        assert_eq!(json["telefono"], "555");
    }
}
