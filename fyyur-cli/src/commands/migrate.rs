//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use fyyur_server::db::{create_pool_with_options, migrations};

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool_with_options(args.database.url()?, args.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run schema migrations")?;

    pool.close().await;
    Ok(())
}
