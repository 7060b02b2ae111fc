//! Route handlers organized by resource
//!
//! Paths keep the historical Portuguese names: `/lista/...`, `/novo/...`,
//! `/delete/.../{id}` and `/atualizar/.../{id}`.

pub mod cars;
pub mod clients;
pub mod health;
pub mod root;
pub mod sales_orders;

use serde::Serialize;

/// Success body for writes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensagem: &'static str,
    /// Identifier assigned by the store, only on create
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl MessageResponse {
    pub fn new(mensagem: &'static str) -> Self {
        Self { mensagem, id: None }
    }

    pub fn created(mensagem: &'static str, id: i32) -> Self {
        Self {
            mensagem,
            id: Some(id),
        }
    }
}
