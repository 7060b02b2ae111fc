//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the shared pool, never owns a connection
//! - Binds every value as a statement parameter
//! - Reports zero affected rows as `DbError::NotFound`
//! - Logs store failures where they happen, then returns them

pub mod cars;
pub mod clients;
pub mod sales_orders;

pub use cars::CarRepo;
pub use clients::ClientRepo;
pub use sales_orders::SalesOrderRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i32 },

    #[error("{resource} insert returned no identifier")]
    NotInserted { resource: &'static str },

    #[error("{resource} '{id}' has not been persisted")]
    Transient { resource: &'static str, id: i32 },

    #[error("cannot decode column {column}: '{value}'")]
    Decode { column: &'static str, value: String },
}

impl DbError {
    /// True when the statement ran but matched nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Log a failed statement and wrap the driver error.
pub(crate) fn store_failure(
    resource: &'static str,
    operation: &'static str,
) -> impl FnOnce(sqlx::Error) -> DbError {
    move |e| {
        tracing::error!(resource, operation, error = %e, "statement failed");
        DbError::Sqlx(e)
    }
}

/// Log a row that could not be mapped into an entity.
pub(crate) fn row_failure(resource: &'static str) -> impl FnOnce(DbError) -> DbError {
    move |e| {
        tracing::error!(resource, error = %e, "row mapping failed");
        e
    }
}

/// Update and delete address stored rows only.
pub(crate) fn ensure_persisted(resource: &'static str, id: i32) -> Result<(), DbError> {
    if id > 0 {
        Ok(())
    } else {
        Err(DbError::Transient { resource, id })
    }
}

pub(crate) fn require_affected(
    resource: &'static str,
    id: i32,
    rows_affected: u64,
) -> Result<u64, DbError> {
    if rows_affected == 0 {
        tracing::warn!(resource, id, "no row matched");
        return Err(DbError::NotFound { resource, id });
    }
    Ok(rows_affected)
}
