//! Client endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use super::MessageResponse;
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::{Client, ClientPayload};

const LIST_FAILED: &str = "Não foi possível acessar a listagem de clientes";
const CREATE_FAILED: &str =
    "Erro ao cadastrar o cliente. Entre em contato com o administrador do sistema.";
const DELETE_FAILED: &str =
    "Erro ao remover o cliente. Entre em contato com o administrador do sistema.";
const UPDATE_FAILED: &str =
    "Não foi possível atualizar o cliente. Entre em contato com o administrador.";

/// GET /lista/clientes
async fn list_clients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Client>>, ApiError> {
    let clients = state
        .db
        .clients()
        .list()
        .await
        .map_err(ApiError::operation(LIST_FAILED))?;
    Ok(Json(clients))
}

/// POST /novo/clientes
async fn create_client(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ClientPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload?;
    let mut client = Client::try_from(payload)?;

    let id = state
        .db
        .clients()
        .create(&mut client)
        .await
        .map_err(ApiError::operation(CREATE_FAILED))?;

    Ok(Json(MessageResponse::created("Cliente cadastrado com sucesso!", id)))
}

/// DELETE /delete/clientes/{id}
async fn delete_client(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .db
        .clients()
        .delete(id)
        .await
        .map_err(ApiError::operation(DELETE_FAILED))?;

    Ok(Json(MessageResponse::new("O cliente foi removido com sucesso!")))
}

/// PUT /atualizar/clientes/{id}
async fn update_client(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    payload: Result<Json<ClientPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload?;
    let mut client = Client::try_from(payload)?;
    client.id = id;

    state
        .db
        .clients()
        .update(&client)
        .await
        .map_err(ApiError::operation(UPDATE_FAILED))?;

    Ok(Json(MessageResponse::new("Cliente atualizado com sucesso!")))
}

/// Client routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lista/clientes", get(list_clients))
        .route("/novo/clientes", post(create_client))
        .route("/delete/clientes/{id}", delete(delete_client))
        .route("/atualizar/clientes/{id}", put(update_client))
}
