//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS by default (localhost-only on request)
//! - Request tracing
//! - Graceful shutdown
//! - JSON message bodies for every outcome

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
