//! Sales order endpoints
//!
//! Singular `pedido` on write routes, plural `pedidos` on the listing.

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
use crate::models::{SalesOrder, SalesOrderPayload};

const LIST_FAILED: &str = "Não foi possível acessar a listagem de pedidos";
const CREATE_FAILED: &str =
    "Erro ao cadastrar o Pedido de Venda. Entre em contato com o administrador do sistema.";
const DELETE_FAILED: &str =
    "Erro ao remover o pedido. Entre em contato com o administrador do sistema.";
const UPDATE_FAILED: &str =
    "Não foi possível atualizar o pedido. Entre em contato com o administrador.";

/// GET /lista/pedidos
async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SalesOrder>>, ApiError> {
    let orders = state
        .db
        .sales_orders()
        .list()
        .await
        .map_err(ApiError::operation(LIST_FAILED))?;
    Ok(Json(orders))
}

/// POST /novo/pedido
async fn create_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SalesOrderPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload?;
    let mut order = SalesOrder::from(payload);

    let id = state
        .db
        .sales_orders()
        .create(&mut order)
        .await
        .map_err(ApiError::operation(CREATE_FAILED))?;

    Ok(Json(MessageResponse::created(
        "Pedido de Venda cadastrado com sucesso!",
        id,
    )))
}

/// DELETE /delete/pedido/{id}
async fn delete_order(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .db
        .sales_orders()
        .delete(id)
        .await
        .map_err(ApiError::operation(DELETE_FAILED))?;

    Ok(Json(MessageResponse::new("O pedido foi removido com sucesso!")))
}

/// PUT /atualizar/pedido/{id}
async fn update_order(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    payload: Result<Json<SalesOrderPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload?;
    let mut order = SalesOrder::from(payload);
    order.id = id;

    state
        .db
        .sales_orders()
        .update(&order)
        .await
        .map_err(ApiError::operation(UPDATE_FAILED))?;

    Ok(Json(MessageResponse::new("Pedido atualizado com sucesso!")))
}

/// Sales order routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lista/pedidos", get(list_orders))
        .route("/novo/pedido", post(create_order))
        .route("/delete/pedido/{id}", delete(delete_order))
        .route("/atualizar/pedido/{id}", put(update_order))
}
