//! HTTP server command

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use fyyur_server::db::{create_pool_with_options, migrations};
use fyyur_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "FYYUR_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Request timeout in seconds
    #[arg(long, env = "FYYUR_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout: u64,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args.database.url()?;

    tracing::info!("Starting fyyur server on {}", args.bind);

    let pool = create_pool_with_options(database_url, args.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run schema migrations")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        request_timeout: Duration::from_secs(args.timeout),
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
