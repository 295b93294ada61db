//! Migrate command handler.

use std::path::Path;

use anyhow::Result;
use clientes_db::setup_database;

/// Create the database file and apply the schema.
pub async fn execute(database_path: &Path) -> Result<()> {
    let pool = setup_database(database_path).await?;
    pool.close().await;
    println!("Database ready at {}", database_path.display());
    Ok(())
}
