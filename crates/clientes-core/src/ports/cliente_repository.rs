//! Cliente repository trait definition.
//!
//! This port defines the interface for customer persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::{ChangeSet, Cliente, ClienteFilter, SaveReport};

/// Repository for customer persistence.
///
/// Reads go straight to storage. Writes are staged in a per-request
/// [`ChangeSet`] and committed together by [`save`](Self::save), so the
/// repository itself holds no mutable state and can be shared freely.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - "Not found" on a read is `Ok(None)`, never an error
/// - Identifiers are generated by the implementation on insert
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    /// List customers matching `filter`, in insertion order.
    ///
    /// Pages past the end yield an empty list.
    async fn list(&self, filter: &ClienteFilter) -> Result<Vec<Cliente>, RepositoryError>;

    /// Get a customer by id.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Cliente>, RepositoryError>;

    /// Commit every staged change atomically.
    ///
    /// On error nothing is persisted. An update or delete whose row no
    /// longer exists fails with `RepositoryError::NotFound`.
    async fn save(&self, changes: ChangeSet) -> Result<SaveReport, RepositoryError>;
}
