//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::validation::{parse_id, ValidationError};

/// Extract a positive integer id from the single path parameter.
///
/// Non-numeric and non-positive ids are rejected here, so they never
/// reach a repository.
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Missing { field: "id" }))?;

        Ok(Self(parse_id("id", &raw)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    async fn echo(ValidId(id): ValidId) -> String {
        id.to_string()
    }

    fn app() -> Router {
        Router::new().route("/items/{id}", get(echo))
    }

    async fn status_of(uri: &str) -> StatusCode {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn accepts_positive_id() {
        assert_eq!(status_of("/items/12").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_text_zero_and_negative() {
        assert_eq!(status_of("/items/abc").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("/items/0").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("/items/-1").await, StatusCode::BAD_REQUEST);
    }
}
