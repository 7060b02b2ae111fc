//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use carlot_server::{Database, PoolConfig};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = PoolConfig {
        max_connections: 1,
        ..PoolConfig::default()
    };
    let db = Database::connect_with(&args.database_url, &config)
        .await
        .context("Failed to connect to database")?;

    let result = db.migrate().await;
    db.close().await;
    result.context("Migration failed")?;

    tracing::info!("Migrations applied successfully");
    Ok(())
}
