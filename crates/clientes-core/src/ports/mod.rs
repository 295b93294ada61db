//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Repositories are CRUD-focused; orchestration lives in services

pub mod cliente_repository;

use thiserror::Error;

pub use cliente_repository::ClienteRepository;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A staged update or delete targeted a row that no longer exists.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (connectivity, I/O, malformed rows).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., unique or check constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}
