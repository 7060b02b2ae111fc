//! API error types with IntoResponse
//!
//! Every failure answers 400 with a `mensagem` the client can show. The
//! `erro` field tells validation problems, missing rows and store
//! failures apart; the underlying store error never leaves the server.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Input rejected before reaching the store
    Validation(ValidationError),

    /// A repository call failed; `message` is what the client sees
    Operation {
        message: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Adapter for `map_err` that attaches the client-facing message.
    ///
    /// ```ignore
    /// repo.delete(id).await.map_err(ApiError::operation("Erro ao remover"))?;
    /// ```
    pub fn operation(message: &'static str) -> impl FnOnce(DbError) -> Self {
        move |source| Self::Operation { message, source }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Operation { source, .. } => match source {
                DbError::NotFound { .. } => "not_found",
                DbError::Transient { .. } => "validation_error",
                DbError::Sqlx(_) | DbError::NotInserted { .. } | DbError::Decode { .. } => {
                    "database_error"
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let message = match &self {
            Self::Validation(e) => e.to_string(),
            Self::Operation { message, source } => {
                if kind == "database_error" {
                    tracing::error!(error = %source, kind, "request failed");
                } else {
                    tracing::warn!(error = %source, kind, "request failed");
                }
                (*message).to_owned()
            }
        };

        let body = Json(json!({
            "erro": kind,
            "mensagem": message
        }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(ValidationError::MalformedBody {
            reason: rejection.body_text(),
        })
    }
}
