//! Shared fixtures for database-backed tests
//!
//! Each test gets its own schema so tables start empty and tests can run
//! in parallel against one database.

#![allow(dead_code)]

use carlot_server::Database;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

pub struct TestDb {
    pub db: Database,
    schema: String,
    url: String,
}

impl TestDb {
    pub async fn new() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let schema = format!("carlot_test_{}", Uuid::new_v4().simple());

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("admin connection failed");
        sqlx::query(&format!("CREATE SCHEMA {schema}"))
            .execute(&admin)
            .await
            .expect("create schema failed");
        admin.close().await;

        let search_path = format!("SET search_path TO {schema}");
        let pool = PgPoolOptions::new()
            .max_connections(3)
            .after_connect(move |conn, _meta| {
                let sql = search_path.clone();
                Box::pin(async move {
                    sqlx::query(&sql).execute(&mut *conn).await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .expect("test pool failed");

        let db = Database::from_pool(pool);
        db.migrate().await.expect("migrations failed");

        Self { db, schema, url }
    }

    /// Close the pool and drop the schema.
    pub async fn cleanup(self) {
        self.db.close().await;

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&self.url)
            .await
            .expect("admin connection failed");
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&admin)
            .await
            .expect("drop schema failed");
        admin.close().await;
    }
}
