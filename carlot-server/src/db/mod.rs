//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - One pool per process, opened at startup and closed at shutdown
//! - Every repository call is a single parameterized statement
//! - Zero affected rows is an error variant of its own, never `Ok`

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{Database, PoolConfig};
pub use repos::*;
