//! Client entity (`cliente` table)

use serde::{Deserialize, Serialize};

use super::validation::{check_length, ValidationError};
use super::wire::opaque_string;

pub const MAX_NAME_LEN: usize = 80;
/// Width of both `cpf` and `telefone`.
pub const MAX_DOCUMENT_LEN: usize = 20;

/// A customer.
///
/// `cpf` and `phone` are opaque digit strings: they are never used in
/// arithmetic, and storing them as text keeps leading zeros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    #[serde(rename = "idCliente")]
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    pub cpf: String,
    #[serde(rename = "telefone")]
    pub phone: String,
}

impl Client {
    pub fn new(
        name: impl Into<String>,
        cpf: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            cpf: cpf.into(),
            phone: phone.into(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

/// Body of `POST /novo/clientes` and `PUT /atualizar/clientes/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientPayload {
    pub nome: String,
    #[serde(deserialize_with = "opaque_string")]
    pub cpf: String,
    #[serde(deserialize_with = "opaque_string")]
    pub telefone: String,
}

impl TryFrom<ClientPayload> for Client {
    type Error = ValidationError;

    fn try_from(p: ClientPayload) -> Result<Self, Self::Error> {
        check_length("nome", &p.nome, MAX_NAME_LEN)?;
        check_length("cpf", &p.cpf, MAX_DOCUMENT_LEN)?;
        check_length("telefone", &p.telefone, MAX_DOCUMENT_LEN)?;
        Ok(Client::new(p.nome, p.cpf, p.telefone))
    }
}
