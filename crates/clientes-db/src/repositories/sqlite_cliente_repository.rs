//! `SQLite` implementation of the `ClienteRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

use clientes_core::{
    ChangeSet, Cliente, ClienteFilter, ClienteRepository, NewCliente, RepositoryError, SaveReport,
    StagedChange,
};

use super::row_mappers::{
    CLIENTE_SELECT_COLUMNS, ClienteRow, contains_pattern, map_sqlx_error, row_to_cliente,
    search_key,
};

/// `SQLite` implementation of the `ClienteRepository` trait.
///
/// Identifiers are v4 UUIDs generated here on insert and stored as text.
/// Listing follows `rowid`, i.e. insertion order.
pub struct SqliteClienteRepository {
    pool: SqlitePool,
}

impl SqliteClienteRepository {
    /// Create a new `SQLite` cliente repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for testing only).
    #[cfg(test)]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

async fn insert(
    tx: &mut Transaction<'_, Sqlite>,
    new: NewCliente,
) -> Result<Cliente, RepositoryError> {
    let now = Utc::now();
    let cliente = Cliente {
        id: Uuid::new_v4(),
        nombre: new.nombre,
        apellido: new.apellido,
        email: new.email,
        telefono: new.telefono,
        direccion: new.direccion,
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO clientes (
            id, nombre, nombre_busqueda, apellido, email, telefono, direccion,
            created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(cliente.id.to_string())
    .bind(&cliente.nombre)
    .bind(search_key(&cliente.nombre))
    .bind(&cliente.apellido)
    .bind(&cliente.email)
    .bind(&cliente.telefono)
    .bind(&cliente.direccion)
    .bind(cliente.created_at)
    .bind(cliente.updated_at)
    .execute(&mut **tx)
    .await
    .map_err(map_sqlx_error)?;

    Ok(cliente)
}

async fn update(tx: &mut Transaction<'_, Sqlite>, cliente: &Cliente) -> Result<(), RepositoryError> {
    let result = sqlx::query(
        r#"
        UPDATE clientes SET
            nombre = ?, nombre_busqueda = ?, apellido = ?, email = ?,
            telefono = ?, direccion = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&cliente.nombre)
    .bind(search_key(&cliente.nombre))
    .bind(&cliente.apellido)
    .bind(&cliente.email)
    .bind(&cliente.telefono)
    .bind(&cliente.direccion)
    .bind(Utc::now())
    .bind(cliente.id.to_string())
    .execute(&mut **tx)
    .await
    .map_err(map_sqlx_error)?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound(format!("Cliente {}", cliente.id)));
    }
    Ok(())
}

async fn delete(tx: &mut Transaction<'_, Sqlite>, id: Uuid) -> Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM clientes WHERE id = ?")
        .bind(id.to_string())
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound(format!("Cliente {id}")));
    }
    Ok(())
}

#[async_trait]
impl ClienteRepository for SqliteClienteRepository {
    async fn list(&self, filter: &ClienteFilter) -> Result<Vec<Cliente>, RepositoryError> {
        let term = filter.search_term();
        let page = filter.page_request();

        let mut sql = format!("SELECT {CLIENTE_SELECT_COLUMNS} FROM clientes");
        if term.is_some() {
            sql.push_str(r" WHERE nombre_busqueda LIKE ? ESCAPE '\'");
        }
        sql.push_str(" ORDER BY rowid");
        if page.is_some() {
            sql.push_str(" LIMIT ? OFFSET ?");
        }

        let mut query = sqlx::query_as::<_, ClienteRow>(&sql);
        if let Some(term) = term {
            query = query.bind(contains_pattern(term));
        }
        if let Some(page) = page {
            // Offsets beyond i64 can only mean "past the end".
            query = query
                .bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
                .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));
        }

        let rows = query.fetch_all(&self.pool).await.map_err(map_sqlx_error)?;
        rows.into_iter().map(row_to_cliente).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Cliente>, RepositoryError> {
        let sql = format!("SELECT {CLIENTE_SELECT_COLUMNS} FROM clientes WHERE id = ?");

        sqlx::query_as::<_, ClienteRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .map(row_to_cliente)
            .transpose()
    }

    async fn save(&self, changes: ChangeSet) -> Result<SaveReport, RepositoryError> {
        let mut report = SaveReport::default();
        if changes.is_empty() {
            return Ok(report);
        }

        let staged = changes.len();
        // Dropping the transaction on an early return rolls it back.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        for change in changes.into_changes() {
            match change {
                StagedChange::Add(new) => {
                    report.inserted.push(insert(&mut tx, new).await?);
                }
                StagedChange::Update(cliente) => {
                    update(&mut tx, &cliente).await?;
                    report.updated += 1;
                }
                StagedChange::Delete(id) => {
                    delete(&mut tx, id).await?;
                    report.deleted += 1;
                }
            }
        }

        tx.commit().await.map_err(map_sqlx_error)?;

        tracing::debug!(
            staged,
            inserted = report.inserted.len(),
            updated = report.updated,
            deleted = report.deleted,
            "clientes change set committed"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    async fn repo() -> SqliteClienteRepository {
        SqliteClienteRepository::new(setup_test_database().await.unwrap())
    }

    async fn add(repo: &SqliteClienteRepository, nombre: &str) -> Cliente {
        let mut changes = ChangeSet::new();
        changes.add_cliente(NewCliente {
            email: Some(format!("{}@example.com", nombre.to_lowercase())),
            ..NewCliente::new(nombre)
        });
        repo.save(changes).await.unwrap().inserted.remove(0)
    }

    async fn names(repo: &SqliteClienteRepository, filter: &ClienteFilter) -> Vec<String> {
        repo.list(filter)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.nombre)
            .collect()
    }

    #[tokio::test]
    async fn insert_assigns_id_and_roundtrips() {
        let repo = repo().await;
        let created = add(&repo, "Ana").await;

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let repo = repo().await;
        assert!(repo.get_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn staging_has_no_effect_until_saved() {
        let repo = repo().await;
        let mut changes = ChangeSet::new();
        changes.add_cliente(NewCliente::new("Ana"));

        assert!(names(&repo, &ClienteFilter::default()).await.is_empty());
        repo.save(changes).await.unwrap();
        assert_eq!(names(&repo, &ClienteFilter::default()).await, vec!["Ana"]);
    }

    #[tokio::test]
    async fn list_filters_case_insensitively_in_insertion_order() {
        let repo = repo().await;
        for nombre in ["Ana", "Luis", "MARIANA", "Ángela", "Juana"] {
            add(&repo, nombre).await;
        }

        assert_eq!(
            names(&repo, &ClienteFilter::by_nombre("ana")).await,
            vec!["Ana", "MARIANA", "Juana"]
        );
        assert_eq!(
            names(&repo, &ClienteFilter::by_nombre("ÁNG")).await,
            vec!["Ángela"]
        );
        assert!(names(&repo, &ClienteFilter::by_nombre("zzz")).await.is_empty());
        assert_eq!(names(&repo, &ClienteFilter::default()).await.len(), 5);
    }

    #[tokio::test]
    async fn surrounding_spaces_in_the_term_are_significant() {
        let repo = repo().await;
        for nombre in ["Mariana", "María Ana", "Ana Pérez"] {
            add(&repo, nombre).await;
        }

        assert_eq!(
            names(&repo, &ClienteFilter::by_nombre(" ana")).await,
            vec!["María Ana"]
        );
        assert_eq!(
            names(&repo, &ClienteFilter::by_nombre("ana ")).await,
            vec!["Ana Pérez"]
        );
        assert_eq!(names(&repo, &ClienteFilter::by_nombre("  ")).await.len(), 3);
    }

    #[tokio::test]
    async fn like_wildcards_are_literal() {
        let repo = repo().await;
        add(&repo, "Ana").await;
        add(&repo, "100% Ana").await;

        assert_eq!(
            names(&repo, &ClienteFilter::by_nombre("%")).await,
            vec!["100% Ana"]
        );
        assert!(names(&repo, &ClienteFilter::by_nombre("_")).await.is_empty());
    }

    #[tokio::test]
    async fn paging_windows_and_out_of_range_pages() {
        let repo = repo().await;
        for nombre in ["A1", "A2", "A3", "A4", "A5"] {
            add(&repo, nombre).await;
        }

        let filter = ClienteFilter::default().with_page(2, 2);
        assert_eq!(names(&repo, &filter).await, vec!["A3", "A4"]);

        let filter = ClienteFilter::default().with_page(3, 2);
        assert_eq!(names(&repo, &filter).await, vec!["A5"]);

        let filter = ClienteFilter::default().with_page(99, 2);
        assert!(names(&repo, &filter).await.is_empty());

        let filter = ClienteFilter::default().with_page(u32::MAX, 100);
        assert!(names(&repo, &filter).await.is_empty());
    }

    #[tokio::test]
    async fn update_changes_fields_and_touches_updated_at() {
        let repo = repo().await;
        let mut cliente = add(&repo, "Ana").await;

        cliente.nombre = "Ana María".to_string();
        cliente.telefono = Some("0991234567".to_string());
        let mut changes = ChangeSet::new();
        changes.update_cliente(cliente.clone());
        let report = repo.save(changes).await.unwrap();
        assert_eq!(report.updated, 1);

        let fetched = repo.get_by_id(cliente.id).await.unwrap().unwrap();
        assert_eq!(fetched.nombre, "Ana María");
        assert_eq!(fetched.telefono.as_deref(), Some("0991234567"));
        assert_eq!(fetched.email, cliente.email);
        assert_eq!(fetched.created_at, cliente.created_at);
        assert!(fetched.updated_at >= cliente.updated_at);

        // The search key follows the new name.
        assert_eq!(
            names(&repo, &ClienteFilter::by_nombre("maría")).await,
            vec!["Ana María"]
        );
    }

    #[tokio::test]
    async fn delete_removes_row_and_missing_rows_are_not_found() {
        let repo = repo().await;
        let cliente = add(&repo, "Ana").await;

        let mut changes = ChangeSet::new();
        changes.delete_cliente(&cliente);
        assert_eq!(repo.save(changes.clone()).await.unwrap().deleted, 1);
        assert!(repo.get_by_id(cliente.id).await.unwrap().is_none());

        let err = repo.save(changes).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn failed_save_rolls_back_everything() {
        let repo = repo().await;
        let ghost = Cliente {
            id: Uuid::new_v4(),
            ..add(&repo, "Temporal").await
        };

        let mut changes = ChangeSet::new();
        changes.add_cliente(NewCliente::new("Nuevo"));
        changes.update_cliente(ghost);
        assert!(repo.save(changes).await.is_err());

        assert_eq!(
            names(&repo, &ClienteFilter::default()).await,
            vec!["Temporal"]
        );
    }

    #[tokio::test]
    async fn check_constraint_maps_to_constraint_error() {
        let repo = repo().await;
        let mut changes = ChangeSet::new();
        changes.add_cliente(NewCliente::new("   "));

        let err = repo.save(changes).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Constraint(_)));
    }

    #[tokio::test]
    async fn empty_change_set_is_a_no_op() {
        let repo = repo().await;
        let report = repo.save(ChangeSet::new()).await.unwrap();
        assert_eq!(report, SaveReport::default());

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clientes")
            .fetch_one(repo.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
