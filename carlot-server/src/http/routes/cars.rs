//! Car endpoints

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
use crate::models::{Car, CarPayload};

const LIST_FAILED: &str = "Não foi possível acessar a listagem de carros";
const CREATE_FAILED: &str =
    "Erro ao cadastrar o carro. Entre em contato com o administrador do sistema.";
const DELETE_FAILED: &str =
    "Erro ao remover o carro. Entre em contato com o administrador do sistema.";
const UPDATE_FAILED: &str =
    "Não foi possível atualizar o carro. Entre em contato com o administrador.";

/// GET /lista/carros
async fn list_cars(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Car>>, ApiError> {
    let cars = state
        .db
        .cars()
        .list()
        .await
        .map_err(ApiError::operation(LIST_FAILED))?;
    Ok(Json(cars))
}

/// POST /novo/carros
async fn create_car(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CarPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload?;
    let mut car = Car::try_from(payload)?;

    let id = state
        .db
        .cars()
        .create(&mut car)
        .await
        .map_err(ApiError::operation(CREATE_FAILED))?;

    Ok(Json(MessageResponse::created("Carro cadastrado com sucesso!", id)))
}

/// DELETE /delete/carros/{id}
async fn delete_car(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .db
        .cars()
        .delete(id)
        .await
        .map_err(ApiError::operation(DELETE_FAILED))?;

    Ok(Json(MessageResponse::new("O carro foi removido com sucesso!")))
}

/// PUT /atualizar/carros/{id}
async fn update_car(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    payload: Result<Json<CarPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload?;
    let mut car = Car::try_from(payload)?;
    car.id = id;

    state
        .db
        .cars()
        .update(&car)
        .await
        .map_err(ApiError::operation(UPDATE_FAILED))?;

    Ok(Json(MessageResponse::new("Carro atualizado com sucesso!")))
}

/// Car routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lista/carros", get(list_cars))
        .route("/novo/carros", post(create_car))
        .route("/delete/carros/{id}", delete(delete_car))
        .route("/atualizar/carros/{id}", put(update_car))
}
