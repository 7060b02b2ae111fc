//! Client repository

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{ensure_persisted, require_affected, row_failure, store_failure, DbError};
use crate::models::Client;

const RESOURCE: &str = "cliente";

/// Client repository
pub struct ClientRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ClientRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Client>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id_cliente, nome, cpf, telefone
            FROM cliente
            ORDER BY id_cliente
            "#,
        )
        .fetch_all(self.pool)
        .await
        .map_err(store_failure(RESOURCE, "list"))?;

        let clients = rows
            .iter()
            .map(client_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(row_failure(RESOURCE))?;
        tracing::debug!(count = clients.len(), "listed clients");
        Ok(clients)
    }

    /// Insert a client and write the generated id back onto it.
    pub async fn create(&self, client: &mut Client) -> Result<i32, DbError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO cliente (nome, cpf, telefone)
            VALUES ($1, $2, $3)
            RETURNING id_cliente
            "#,
        )
        .bind(&client.name)
        .bind(&client.cpf)
        .bind(&client.phone)
        .fetch_optional(self.pool)
        .await
        .map_err(store_failure(RESOURCE, "create"))?
        .ok_or(DbError::NotInserted { resource: RESOURCE })?;

        client.id = id;
        tracing::info!(id, "client created");
        Ok(id)
    }

    pub async fn update(&self, client: &Client) -> Result<u64, DbError> {
        ensure_persisted(RESOURCE, client.id)?;

        let result = sqlx::query(
            r#"
            UPDATE cliente
            SET nome = $1, cpf = $2, telefone = $3
            WHERE id_cliente = $4
            "#,
        )
        .bind(&client.name)
        .bind(&client.cpf)
        .bind(&client.phone)
        .bind(client.id)
        .execute(self.pool)
        .await
        .map_err(store_failure(RESOURCE, "update"))?;

        let affected = require_affected(RESOURCE, client.id, result.rows_affected())?;
        tracing::info!(id = client.id, "client updated");
        Ok(affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        ensure_persisted(RESOURCE, id)?;

        let result = sqlx::query("DELETE FROM cliente WHERE id_cliente = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(store_failure(RESOURCE, "delete"))?;

        let affected = require_affected(RESOURCE, id, result.rows_affected())?;
        tracing::info!(id, "client removed");
        Ok(affected)
    }

    pub async fn count(&self) -> Result<i64, DbError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cliente")
            .fetch_one(self.pool)
            .await
            .map_err(store_failure(RESOURCE, "count"))
    }
}

fn client_from_row(row: &PgRow) -> Result<Client, DbError> {
    let mut client = Client::new(
        row.try_get::<String, _>("nome")?,
        row.try_get::<String, _>("cpf")?,
        row.try_get::<String, _>("telefone")?,
    );
    client.id = row.try_get("id_cliente")?;
    Ok(client)
}
