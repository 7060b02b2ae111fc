//! Schema bootstrap for the three tables

use sqlx::PgPool;

const CREATE_CARRO: &str = r#"
    CREATE TABLE IF NOT EXISTS carro (
        id_carro SERIAL PRIMARY KEY,
        marca VARCHAR(50) NOT NULL,
        modelo VARCHAR(50) NOT NULL,
        ano INTEGER NOT NULL,
        cor VARCHAR(20) NOT NULL
    )
"#;

const CREATE_CLIENTE: &str = r#"
    CREATE TABLE IF NOT EXISTS cliente (
        id_cliente SERIAL PRIMARY KEY,
        nome VARCHAR(80) NOT NULL,
        cpf VARCHAR(20) NOT NULL,
        telefone VARCHAR(20) NOT NULL
    )
"#;

// id_carro / id_cliente are plain integers: references are not enforced.
// valor_pedido has no scale so amounts come back exactly as written.
const CREATE_PEDIDO_VENDA: &str = r#"
    CREATE TABLE IF NOT EXISTS pedido_venda (
        id_pedido SERIAL PRIMARY KEY,
        id_carro INTEGER NOT NULL,
        id_cliente INTEGER NOT NULL,
        data_pedido DATE NOT NULL,
        valor_pedido NUMERIC NOT NULL,
        CONSTRAINT valor_pedido_numerico CHECK (valor_pedido <> 'NaN')
    )
"#;

/// Run all migrations. Safe to call on every startup.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema migrations...");

    for statement in [CREATE_CARRO, CREATE_CLIENTE, CREATE_PEDIDO_VENDA] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Schema migrations complete");
    Ok(())
}
