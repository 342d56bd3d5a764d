// loja_api/src/models/client.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Client {
  pub id: i64,
  pub name: String,
  pub city_id: Option<i64>,
  pub city: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewClient {
  #[serde(alias = "nome")]
  pub name: String,
  #[serde(default, alias = "cidade_id")]
  pub city_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientFilter {
  #[serde(default, alias = "cidade_id")]
  pub city_id: Option<i64>,
}
