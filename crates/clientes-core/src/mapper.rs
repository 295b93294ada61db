//! Entity <-> DTO projections.
//!
//! Pure field-by-field copies. Validation happens before mapping, never here.

use crate::domain::{Cliente, NewCliente};
use crate::dto::{ClienteDto, CreateClienteDto, UpdateClienteDto};

/// Stateless mapper between [`Cliente`] and its wire shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClienteMapper;

impl ClienteMapper {
    /// Creation input to a not-yet-persisted entity.
    pub fn to_new(dto: CreateClienteDto) -> NewCliente {
        NewCliente {
            nombre: dto.nombre.unwrap_or_default(),
            apellido: dto.apellido,
            email: dto.email,
            telefono: dto.telefono,
            direccion: dto.direccion,
        }
    }

    /// Entity to the representation returned by the API.
    pub fn to_dto(cliente: &Cliente) -> ClienteDto {
        ClienteDto {
            id: cliente.id,
            nombre: cliente.nombre.clone(),
            apellido: cliente.apellido.clone(),
            email: cliente.email.clone(),
            telefono: cliente.telefono.clone(),
            direccion: cliente.direccion.clone(),
            creado_en: cliente.created_at,
            actualizado_en: cliente.updated_at,
        }
    }

    /// Entity to the update-shaped intermediate that patches operate on.
    pub fn to_update(cliente: &Cliente) -> UpdateClienteDto {
        UpdateClienteDto {
            nombre: Some(cliente.nombre.clone()),
            apellido: cliente.apellido.clone(),
            email: cliente.email.clone(),
            telefono: cliente.telefono.clone(),
            direccion: cliente.direccion.clone(),
        }
    }

    /// Copy every editable field of `dto` onto `cliente`.
    ///
    /// Identity and timestamps are left alone.
    pub fn apply_update(dto: UpdateClienteDto, cliente: &mut Cliente) {
        cliente.nombre = dto.nombre.unwrap_or_default();
        cliente.apellido = dto.apellido;
        cliente.email = dto.email;
        cliente.telefono = dto.telefono;
        cliente.direccion = dto.direccion;
    }
}

impl From<&Cliente> for ClienteDto {
    fn from(cliente: &Cliente) -> Self {
        ClienteMapper::to_dto(cliente)
    }
}

impl From<CreateClienteDto> for NewCliente {
    fn from(dto: CreateClienteDto) -> Self {
        ClienteMapper::to_new(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample() -> Cliente {
        let now = Utc::now();
        Cliente {
            id: Uuid::new_v4(),
            nombre: "Ana".to_string(),
            apellido: Some("Pérez".to_string()),
            email: Some("ana@example.com".to_string()),
            telefono: None,
            direccion: Some("Calle 1".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn create_dto_maps_to_new_cliente() {
        let dto = CreateClienteDto {
            nombre: Some("Luis".to_string()),
            telefono: Some("099".to_string()),
            ..Default::default()
        };

        let new: NewCliente = dto.into();
        assert_eq!(new.nombre, "Luis");
        assert_eq!(new.telefono.as_deref(), Some("099"));
        assert_eq!(new.email, None);
    }

    #[test]
    fn dto_carries_identity_and_timestamps() {
        let cliente = sample();
        let dto = ClienteDto::from(&cliente);
        assert_eq!(dto.id, cliente.id);
        assert_eq!(dto.apellido, cliente.apellido);
        assert_eq!(dto.creado_en, cliente.created_at);
    }

    #[test]
    fn update_shape_applies_back_without_touching_identity() {
        let mut cliente = sample();
        let original_id = cliente.id;
        let created = cliente.created_at;

        let mut update = ClienteMapper::to_update(&cliente);
        update.nombre = Some("Ana María".to_string());
        update.apellido = None;
        ClienteMapper::apply_update(update, &mut cliente);

        assert_eq!(cliente.id, original_id);
        assert_eq!(cliente.created_at, created);
        assert_eq!(cliente.nombre, "Ana María");
        assert_eq!(cliente.apellido, None);
        assert_eq!(cliente.email.as_deref(), Some("ana@example.com"));
    }
}
