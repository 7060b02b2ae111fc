//! Entity types and request payloads
//!
//! Entities are plain data: constructors never take the identifier, which
//! stays `0` until the store assigns one. JSON keys follow the camelCase
//! names the API has always exposed (`idCarro`, `marca`, `dataPedido`, ...).

pub mod car;
pub mod client;
pub mod sales_order;
pub mod validation;
mod wire;

pub use car::{Car, CarPayload};
pub use client::{Client, ClientPayload};
pub use sales_order::{SalesOrder, SalesOrderPayload};
pub use validation::ValidationError;
