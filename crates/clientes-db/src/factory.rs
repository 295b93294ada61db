//! Composition utilities for building the clientes service with `SQLite`.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use clientes_core::{ClienteRepository, ClienteService};

use crate::repositories::SqliteClienteRepository;

/// Factory for creating repository instances with `SQLite` backends.
///
/// This struct provides composition utilities only, no domain logic.
pub struct ClientesFactory;

impl ClientesFactory {
    /// Create a `SQLite` connection pool without touching the schema.
    ///
    /// # Arguments
    ///
    /// * `db_url` - `SQLite` connection URL (e.g., "sqlite:clientes.db")
    pub async fn create_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect(db_url).await?;
        Ok(pool)
    }

    /// Create a cliente repository from a pool.
    pub fn cliente_repository(pool: SqlitePool) -> Arc<SqliteClienteRepository> {
        Arc::new(SqliteClienteRepository::new(pool))
    }

    /// Build a complete `ClienteService` backed by `pool`.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repo = ClientesFactory::cliente_repository(pool);
    /// let service = ClienteService::new(repo);
    /// ```
    pub fn build_service(pool: SqlitePool) -> ClienteService {
        let repo: Arc<dyn ClienteRepository> = Self::cliente_repository(pool);
        ClienteService::new(repo)
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a cliente repository using this test database.
    pub fn cliente_repository(&self) -> SqliteClienteRepository {
        SqliteClienteRepository::new(self.pool.clone())
    }

    /// Build a service using this test database.
    pub fn service(&self) -> ClienteService {
        ClientesFactory::build_service(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientes_core::{ClienteFilter, CreateClienteDto};

    #[tokio::test]
    async fn service_and_repository_share_the_database() {
        let db = TestDb::new().await.unwrap();
        let service = db.service();

        let created = service
            .create(CreateClienteDto {
                nombre: Some("Ana".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let listed = db
            .cliente_repository()
            .list(&ClienteFilter::default())
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
    }
}
