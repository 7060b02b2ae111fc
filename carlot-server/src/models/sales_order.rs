//! Sales order entity (`pedido_venda` table)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::wire::flexible_date;

/// A sale of one car to one client.
///
/// `car_id` and `client_id` are expected to name existing rows, but nothing
/// in this crate checks that.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesOrder {
    #[serde(rename = "idPedido")]
    pub id: i32,
    #[serde(rename = "idCarro")]
    pub car_id: i32,
    #[serde(rename = "idCliente")]
    pub client_id: i32,
    #[serde(rename = "dataPedido")]
    pub order_date: NaiveDate,
    #[serde(rename = "valorPedido")]
    pub amount: f64,
}

impl SalesOrder {
    pub fn new(car_id: i32, client_id: i32, order_date: NaiveDate, amount: f64) -> Self {
        Self {
            id: 0,
            car_id,
            client_id,
            order_date,
            amount,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

/// Body of `POST /novo/pedido` and `PUT /atualizar/pedido/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderPayload {
    pub id_carro: i32,
    pub id_cliente: i32,
    #[serde(deserialize_with = "flexible_date")]
    pub data_pedido: NaiveDate,
    pub valor_pedido: f64,
}

impl From<SalesOrderPayload> for SalesOrder {
    fn from(p: SalesOrderPayload) -> Self {
        SalesOrder::new(p.id_carro, p.id_cliente, p.data_pedido, p.valor_pedido)
    }
}
