//! Root greeting

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
pub struct Greeting {
    pub mensagem: &'static str,
}

/// GET /
async fn greeting() -> Json<Greeting> {
    Json(Greeting {
        mensagem: "Olá, mundo!",
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(greeting))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn greets() {
        let Json(body) = greeting().await;
        assert_eq!(body.mensagem, "Olá, mundo!");
    }
}
