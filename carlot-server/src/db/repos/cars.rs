//! Car repository
//!
//! CRUD over `carro`. Rows are mapped through `Car::new` and the id is set
//! afterwards, exactly like a freshly created car.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{ensure_persisted, require_affected, row_failure, store_failure, DbError};
use crate::models::Car;

const RESOURCE: &str = "carro";

/// Car repository
pub struct CarRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CarRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every car, oldest first.
    pub async fn list(&self) -> Result<Vec<Car>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id_carro, marca, modelo, ano, cor
            FROM carro
            ORDER BY id_carro
            "#,
        )
        .fetch_all(self.pool)
        .await
        .map_err(store_failure(RESOURCE, "list"))?;

        let cars = rows
            .iter()
            .map(car_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(row_failure(RESOURCE))?;
        tracing::debug!(count = cars.len(), "listed cars");
        Ok(cars)
    }

    /// Insert a car and write the generated id back onto it.
    pub async fn create(&self, car: &mut Car) -> Result<i32, DbError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO carro (marca, modelo, ano, cor)
            VALUES ($1, $2, $3, $4)
            RETURNING id_carro
            "#,
        )
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.year)
        .bind(&car.color)
        .fetch_optional(self.pool)
        .await
        .map_err(store_failure(RESOURCE, "create"))?
        .ok_or(DbError::NotInserted { resource: RESOURCE })?;

        car.id = id;
        tracing::info!(id, "car created");
        Ok(id)
    }

    /// Overwrite every column of the row addressed by `car.id`.
    pub async fn update(&self, car: &Car) -> Result<u64, DbError> {
        ensure_persisted(RESOURCE, car.id)?;

        let result = sqlx::query(
            r#"
            UPDATE carro
            SET marca = $1, modelo = $2, ano = $3, cor = $4
            WHERE id_carro = $5
            "#,
        )
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.year)
        .bind(&car.color)
        .bind(car.id)
        .execute(self.pool)
        .await
        .map_err(store_failure(RESOURCE, "update"))?;

        let affected = require_affected(RESOURCE, car.id, result.rows_affected())?;
        tracing::info!(id = car.id, "car updated");
        Ok(affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        ensure_persisted(RESOURCE, id)?;

        let result = sqlx::query("DELETE FROM carro WHERE id_carro = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(store_failure(RESOURCE, "delete"))?;

        let affected = require_affected(RESOURCE, id, result.rows_affected())?;
        tracing::info!(id, "car removed");
        Ok(affected)
    }

    pub async fn count(&self) -> Result<i64, DbError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM carro")
            .fetch_one(self.pool)
            .await
            .map_err(store_failure(RESOURCE, "count"))
    }
}

fn car_from_row(row: &PgRow) -> Result<Car, DbError> {
    let mut car = Car::new(
        row.try_get::<String, _>("marca")?,
        row.try_get::<String, _>("modelo")?,
        row.try_get("ano")?,
        row.try_get::<String, _>("cor")?,
    );
    car.id = row.try_get("id_carro")?;
    Ok(car)
}
