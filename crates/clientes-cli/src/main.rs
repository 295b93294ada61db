//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers; only `serve` wires up the web stack.

use clap::{CommandFactory, Parser};

use clientes_cli::{Cli, Commands, handlers, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let database = cli.database_path()?;
    match command {
        Commands::Serve { port, allow_origin } => {
            handlers::serve::execute(database, *port, allow_origin).await
        }
        Commands::Migrate => handlers::migrate::execute(&database).await,
        Commands::Paths => handlers::paths::execute(&database),
    }
}
