//! Sales order repository
//!
//! `valor_pedido` is NUMERIC in the store. It is written as a float
//! parameter and read back through its text form, then parsed, so the
//! driver never needs a decimal type.

use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{ensure_persisted, require_affected, row_failure, store_failure, DbError};
use crate::models::SalesOrder;

const RESOURCE: &str = "pedido_venda";

/// Sales order repository
pub struct SalesOrderRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SalesOrderRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<SalesOrder>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id_pedido, id_carro, id_cliente, data_pedido,
                   valor_pedido::TEXT AS valor_pedido
            FROM pedido_venda
            ORDER BY id_pedido
            "#,
        )
        .fetch_all(self.pool)
        .await
        .map_err(store_failure(RESOURCE, "list"))?;

        let orders = rows
            .iter()
            .map(order_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(row_failure(RESOURCE))?;
        tracing::debug!(count = orders.len(), "listed sales orders");
        Ok(orders)
    }

    /// Insert an order and write the generated id back onto it.
    ///
    /// The referenced car and client are not checked.
    pub async fn create(&self, order: &mut SalesOrder) -> Result<i32, DbError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO pedido_venda (id_carro, id_cliente, data_pedido, valor_pedido)
            VALUES ($1, $2, $3, $4)
            RETURNING id_pedido
            "#,
        )
        .bind(order.car_id)
        .bind(order.client_id)
        .bind(order.order_date)
        .bind(order.amount)
        .fetch_optional(self.pool)
        .await
        .map_err(store_failure(RESOURCE, "create"))?
        .ok_or(DbError::NotInserted { resource: RESOURCE })?;

        order.id = id;
        tracing::info!(id, car_id = order.car_id, client_id = order.client_id, "sales order created");
        Ok(id)
    }

    pub async fn update(&self, order: &SalesOrder) -> Result<u64, DbError> {
        ensure_persisted(RESOURCE, order.id)?;

        let result = sqlx::query(
            r#"
            UPDATE pedido_venda
            SET id_carro = $1, id_cliente = $2, data_pedido = $3, valor_pedido = $4
            WHERE id_pedido = $5
            "#,
        )
        .bind(order.car_id)
        .bind(order.client_id)
        .bind(order.order_date)
        .bind(order.amount)
        .bind(order.id)
        .execute(self.pool)
        .await
        .map_err(store_failure(RESOURCE, "update"))?;

        let affected = require_affected(RESOURCE, order.id, result.rows_affected())?;
        tracing::info!(id = order.id, "sales order updated");
        Ok(affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        ensure_persisted(RESOURCE, id)?;

        let result = sqlx::query("DELETE FROM pedido_venda WHERE id_pedido = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(store_failure(RESOURCE, "delete"))?;

        let affected = require_affected(RESOURCE, id, result.rows_affected())?;
        tracing::info!(id, "sales order removed");
        Ok(affected)
    }

    pub async fn count(&self) -> Result<i64, DbError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pedido_venda")
            .fetch_one(self.pool)
            .await
            .map_err(store_failure(RESOURCE, "count"))
    }
}

fn order_from_row(row: &PgRow) -> Result<SalesOrder, DbError> {
    let raw_amount: String = row.try_get("valor_pedido")?;
    let mut order = SalesOrder::new(
        row.try_get("id_carro")?,
        row.try_get("id_cliente")?,
        row.try_get::<NaiveDate, _>("data_pedido")?,
        parse_amount(&raw_amount)?,
    );
    order.id = row.try_get("id_pedido")?;
    Ok(order)
}

fn parse_amount(raw: &str) -> Result<f64, DbError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DbError::Decode {
            column: "valor_pedido",
            value: raw.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_text_parses_to_float() {
        assert_eq!(parse_amount("45000.00").unwrap(), 45000.0);
        assert_eq!(parse_amount("0.10").unwrap(), 0.1);
        assert_eq!(parse_amount(" 12.5 ").unwrap(), 12.5);
    }

    #[test]
    fn unparseable_amount_is_decode_error() {
        assert!(matches!(
            parse_amount("NaN"),
            Err(DbError::Decode { column: "valor_pedido", .. })
        ));
        assert!(parse_amount("R$ 10").is_err());
    }
}
