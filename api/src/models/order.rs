// loja_api/src/models/order.rs

use super::OrderItemInput;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Order {
  pub id: i64,
  pub created_at: DateTime<Utc>,
  pub delivery_address: String,
  pub client_id: i64,
}

/// Header row written by the create-order workflow.
#[derive(Debug, Clone)]
pub struct NewOrder {
  pub created_at: DateTime<Utc>,
  pub delivery_address: String,
  pub client_id: i64,
}

/// Body of `POST /pedidos`. Entries are kept in input order and never merged.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
  #[serde(alias = "cliente_id")]
  pub client_id: i64,
  #[serde(alias = "endereco", alias = "delivery_address")]
  pub address: String,
  #[serde(default, alias = "produtos")]
  pub products: Vec<OrderItemInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderPatch {
  #[serde(default, alias = "horario")]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(default, alias = "endereco", alias = "address")]
  pub delivery_address: Option<String>,
  #[serde(default, alias = "cliente_id")]
  pub client_id: Option<i64>,
}

impl OrderPatch {
  pub fn is_empty(&self) -> bool {
    self.created_at.is_none() && self.delivery_address.is_none() && self.client_id.is_none()
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderFilter {
  #[serde(default, alias = "cliente_id")]
  pub client_id: Option<i64>,
}
