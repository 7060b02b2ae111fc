//! carlot-server: REST API for cars, clients and sales orders
//!
//! Three Postgres-backed repositories behind an axum router. The
//! repositories are usable on their own through [`Database`].

pub mod db;
pub mod http;
pub mod models;

#[cfg(test)]
mod test_support;

pub use db::{Database, DbError, PoolConfig};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{Car, Client, SalesOrder};
