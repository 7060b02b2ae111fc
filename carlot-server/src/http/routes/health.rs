//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Whether `SELECT 1` succeeded
    pub database: bool,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database: state.db.ping().await,
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Database, PoolConfig};
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;

    #[tokio::test]
    async fn health_reports_unreachable_database() {
        let pool = PgPoolOptions::new()
            .max_connections(PoolConfig::default().max_connections)
            .acquire_timeout(Duration::from_millis(200))
            .connect_lazy("postgres://carlot@127.0.0.1:1/carlot")
            .unwrap();
        let state = Arc::new(AppState::new(Database::from_pool(pool)));

        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "ok");
        assert!(!body.database);
    }
}
