// loja_api/src/models/category.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
  pub id: i64,
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCategory {
  #[serde(alias = "nome")]
  pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryPatch {
  #[serde(default, alias = "nome")]
  pub name: Option<String>,
}

impl CategoryPatch {
  pub fn is_empty(&self) -> bool {
    self.name.is_none()
  }
}
