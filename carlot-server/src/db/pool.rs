//! Database connection pool management
//!
//! `Database` is the gateway every repository goes through. It owns the
//! `PgPool` and its lifecycle; repositories only borrow it.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::migrations;
use super::repos::{CarRepo, ClientRepo, SalesOrderRepo};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Pool tuning knobs
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl PoolConfig {
    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Shared handle to the store.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect with default pool settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the first connection cannot be established.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        Self::connect_with(database_url, &PoolConfig::default()).await
    }

    /// Connect with custom pool settings.
    pub async fn connect_with(database_url: &str, config: &PoolConfig) -> Result<Self, sqlx::Error> {
        let pool = config.options().connect(database_url).await?;
        tracing::info!(
            max_connections = config.max_connections,
            "database pool ready"
        );
        Ok(Self { pool })
    }

    /// Build a pool that only connects on first use.
    ///
    /// Fails only when the URL cannot be parsed.
    pub fn connect_lazy(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PoolConfig::default().options().connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn cars(&self) -> CarRepo<'_> {
        CarRepo::new(&self.pool)
    }

    pub fn clients(&self) -> ClientRepo<'_> {
        ClientRepo::new(&self.pool)
    }

    pub fn sales_orders(&self) -> SalesOrderRepo<'_> {
        SalesOrderRepo::new(&self.pool)
    }

    /// Create the tables if they do not exist yet.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        migrations::run(&self.pool).await
    }

    /// Round-trip a trivial query. Used by the health endpoint.
    pub async fn ping(&self) -> bool {
        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "database ping failed");
                false
            }
        }
    }

    /// Close every connection and refuse new acquisitions.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
