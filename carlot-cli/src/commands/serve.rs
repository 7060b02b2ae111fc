//! HTTP server command
//!
//! Owns the pool lifecycle: connect, optionally migrate, serve until a
//! shutdown signal, then close the pool.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use carlot_server::{run_server, Database, PoolConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Only allow localhost origins instead of any origin
    #[arg(long)]
    pub cors_localhost: bool,

    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,

    /// Seconds to wait for a free connection before failing a request
    #[arg(long, default_value_t = 30)]
    pub acquire_timeout_secs: u64,

    /// Do not create missing tables on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

impl ServeArgs {
    fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: !self.cors_localhost,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting carlot server on {}", args.bind);

    let db = Database::connect_with(&args.database_url, &args.pool_config())
        .await
        .context("Failed to create database pool")?;

    if !args.skip_migrations {
        db.migrate().await.context("Failed to apply schema")?;
    }

    // Close the pool whether or not the server exited cleanly
    let served = run_server(db.clone(), args.server_config()).await;
    db.close().await;

    served.context("Server error")?;
    Ok(())
}
