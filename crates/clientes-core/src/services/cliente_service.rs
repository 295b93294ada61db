//! Cliente service - orchestrates the customer request flows.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::{ChangeSet, Cliente, ClienteFilter};
use crate::dto::{ClienteDto, CreateClienteDto};
use crate::mapper::ClienteMapper;
use crate::patch::{PatchDocument, RawPatchOperation};
use crate::ports::{ClienteRepository, RepositoryError};
use crate::validation::{Validate, ValidationErrors};

/// Errors surfaced by [`ClienteService`].
///
/// Adapters map each variant to a fixed response (HTTP status, exit code).
#[derive(Debug, Error)]
pub enum ClienteServiceError {
    /// Input failed declarative validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// No customer with this id exists.
    #[error("Cliente {0} not found")]
    NotFound(Uuid),

    /// Storage failed to read or commit.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Commit errors for a change set that targets the existing row `id`.
///
/// The row may vanish between load and commit; that is still "not found".
fn commit_error(id: Uuid, err: RepositoryError) -> ClienteServiceError {
    match err {
        RepositoryError::NotFound(_) => ClienteServiceError::NotFound(id),
        other => ClienteServiceError::Repository(other),
    }
}

/// Service for customer operations.
pub struct ClienteService {
    repo: Arc<dyn ClienteRepository>,
}

impl ClienteService {
    /// Create a new cliente service.
    pub fn new(repo: Arc<dyn ClienteRepository>) -> Self {
        Self { repo }
    }

    /// Validate, stage and commit a new customer.
    pub async fn create(&self, input: CreateClienteDto) -> Result<ClienteDto, ClienteServiceError> {
        input.validate()?;

        let mut changes = ChangeSet::new();
        changes.add_cliente(ClienteMapper::to_new(input));
        let report = self.repo.save(changes).await?;

        let created = report.inserted.first().ok_or_else(|| {
            RepositoryError::Storage("insert reported no created row".to_string())
        })?;
        tracing::debug!(id = %created.id, "cliente created");
        Ok(ClienteMapper::to_dto(created))
    }

    /// List customers matching `filter`.
    pub async fn list(&self, filter: &ClienteFilter) -> Result<Vec<ClienteDto>, ClienteServiceError> {
        let clientes = self.repo.list(filter).await?;
        Ok(clientes.iter().map(ClienteMapper::to_dto).collect())
    }

    /// Get one customer.
    pub async fn get(&self, id: Uuid) -> Result<ClienteDto, ClienteServiceError> {
        let cliente = self.load(id).await?;
        Ok(ClienteMapper::to_dto(&cliente))
    }

    /// Delete one customer.
    pub async fn delete(&self, id: Uuid) -> Result<(), ClienteServiceError> {
        let cliente = self.load(id).await?;

        let mut changes = ChangeSet::new();
        changes.delete_cliente(&cliente);
        self.repo
            .save(changes)
            .await
            .map_err(|e| commit_error(id, e))?;
        tracing::debug!(%id, "cliente deleted");
        Ok(())
    }

    /// Apply raw patch operations to one customer.
    ///
    /// The customer is looked up first, so an unknown id is reported as
    /// not found even when the operations are malformed.
    pub async fn patch(
        &self,
        id: Uuid,
        operations: &[RawPatchOperation],
    ) -> Result<(), ClienteServiceError> {
        let cliente = self.load(id).await?;
        let patch = PatchDocument::parse(operations)?;
        self.apply_patch(cliente, &patch).await
    }

    /// Apply an already parsed patch document to one customer.
    pub async fn patch_document(
        &self,
        id: Uuid,
        patch: &PatchDocument,
    ) -> Result<(), ClienteServiceError> {
        let cliente = self.load(id).await?;
        self.apply_patch(cliente, patch).await
    }

    async fn load(&self, id: Uuid) -> Result<Cliente, ClienteServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(ClienteServiceError::NotFound(id))
    }

    /// The patched update shape is re-validated before anything is staged,
    /// so a rejected patch leaves storage untouched.
    async fn apply_patch(
        &self,
        mut cliente: Cliente,
        patch: &PatchDocument,
    ) -> Result<(), ClienteServiceError> {
        let id = cliente.id;
        let mut update = ClienteMapper::to_update(&cliente);
        patch.apply_to(&mut update);
        update.validate()?;

        ClienteMapper::apply_update(update, &mut cliente);
        let mut changes = ChangeSet::new();
        changes.update_cliente(cliente);
        self.repo
            .save(changes)
            .await
            .map_err(|e| commit_error(id, e))?;
        tracing::debug!(%id, operations = patch.operations().len(), "cliente patched");
        Ok(())
    }
}
