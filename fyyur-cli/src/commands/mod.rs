//! Subcommand implementations

pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;

pub use migrate::run_migrate;
pub use serve::run_serve;

/// Database connection arguments shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides .env)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "FYYUR_MAX_CONNECTIONS", default_value_t = fyyur_server::db::pool::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub fn url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
    }
}
