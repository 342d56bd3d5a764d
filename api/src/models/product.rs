// loja_api/src/models/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product as read from the store, with its category name joined in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub price: f64,
  pub category_id: Option<i64>,
  /// `None` when the product has no category or the category row is gone.
  pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
  #[serde(alias = "nome")]
  pub name: String,
  #[serde(alias = "preco")]
  pub price: f64,
  #[serde(default, alias = "categoria_id")]
  pub category_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
  #[serde(default, alias = "nome")]
  pub name: Option<String>,
  #[serde(default, alias = "preco")]
  pub price: Option<f64>,
  #[serde(default, alias = "categoria_id", deserialize_with = "super::nullable")]
  pub category_id: Option<Option<i64>>,
}

impl ProductPatch {
  pub fn is_empty(&self) -> bool {
    self.name.is_none() && self.price.is_none() && self.category_id.is_none()
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
  #[serde(default, alias = "categoria_id")]
  pub category_id: Option<i64>,
}
