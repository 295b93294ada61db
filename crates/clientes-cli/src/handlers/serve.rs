//! Serve command handler.

use std::path::PathBuf;

use anyhow::Result;
use clientes_axum::{ServerConfig, start_server};

use crate::commands::cors_config;

/// Run the HTTP API until interrupted.
pub async fn execute(database_path: PathBuf, port: u16, allow_origin: &[String]) -> Result<()> {
    let config = ServerConfig {
        port,
        database_path,
        cors: cors_config(allow_origin),
    };
    tracing::info!(port = config.port, cors = ?config.cors, "starting clientes API");
    start_server(config).await
}
