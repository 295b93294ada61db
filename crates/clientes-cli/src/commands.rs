//! Subcommand definitions.

use clap::Subcommand;
use clientes_axum::{CorsConfig, ServerConfig};

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "CLIENTES_PORT", default_value_t = ServerConfig::DEFAULT_PORT)]
        port: u16,
        /// Allowed CORS origin; repeat or comma-separate. All origins when omitted.
        #[arg(
            long = "allow-origin",
            env = "CLIENTES_ALLOWED_ORIGINS",
            value_delimiter = ','
        )]
        allow_origin: Vec<String>,
    },

    /// Create the database and schema, then exit
    Migrate,

    /// Show resolved data paths
    Paths,
}

/// CORS policy for a list of `--allow-origin` values.
pub fn cors_config(origins: &[String]) -> CorsConfig {
    let origins: Vec<String> = origins
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .map(str::to_owned)
        .collect();
    if origins.is_empty() {
        CorsConfig::AllowAll
    } else {
        CorsConfig::AllowOrigins(origins)
    }
}
