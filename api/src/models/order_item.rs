// loja_api/src/models/order_item.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored line item. `unit_price` is the product price at order time and is never refreshed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderLineItem {
  pub id: i64,
  pub order_id: i64,
  pub product_id: i64,
  pub quantity: i64,
  pub unit_price: f64,
}

/// One `{product_id, quantity}` entry of a create-order request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderItemInput {
  #[serde(alias = "produto_id")]
  pub product_id: i64,
  #[serde(alias = "quantidade")]
  pub quantity: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct NewOrderItem {
  pub order_id: i64,
  pub product_id: i64,
  pub quantity: i64,
  pub unit_price: f64,
}
