// tests/common/mod.rs
#![allow(dead_code)]

use loja_api::config::{AppConfig, LogFormat, WriteStrategy};
use loja_api::db;
use loja_api::models::{NewCategory, NewClient, NewProduct};
use loja_api::state::AppState;
use loja_api::store::{CategoryStore, ClientStore, ProductStore};
use once_cell::sync::Lazy;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;
use tracing::Level;

pub fn test_config(write_strategy: WriteStrategy) -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    database_url: "sqlite::memory:".to_string(),
    db_max_connections: 1,
    write_strategy,
    ensure_schema: true,
    log_format: LogFormat::Text,
  }
}

/// A private in-memory database with the bootstrap schema applied.
///
/// An in-memory SQLite database lives as long as its connection, so the pool
/// holds exactly one connection and never recycles it.
pub async fn memory_pool() -> SqlitePool {
  let options = SqliteConnectOptions::from_str("sqlite::memory:")
    .expect("valid sqlite url")
    .foreign_keys(true);
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .idle_timeout(None)
    .max_lifetime(None)
    .connect_with(options)
    .await
    .expect("in-memory pool");
  db::ensure_schema(&pool).await.expect("schema applies");
  pool
}

pub async fn test_state(write_strategy: WriteStrategy) -> AppState {
  setup_tracing();
  AppState::new(memory_pool().await, Arc::new(test_config(write_strategy)))
}

pub async fn seed_category(pool: &SqlitePool, name: &str) -> i64 {
  CategoryStore::insert(pool, &NewCategory { name: name.to_string() })
    .await
    .expect("category insert")
}

pub async fn seed_product(pool: &SqlitePool, name: &str, price: f64, category_id: Option<i64>) -> i64 {
  let new = NewProduct {
    name: name.to_string(),
    price,
    category_id,
  };
  ProductStore::insert(pool, &new).await.expect("product insert")
}

/// Cities have no store of their own; they are only referenced by clients.
pub async fn seed_city(pool: &SqlitePool, name: &str) -> i64 {
  sqlx::query("INSERT INTO cities (name) VALUES (?)")
    .bind(name)
    .execute(pool)
    .await
    .expect("city insert")
    .last_insert_rowid()
}

pub async fn delete_city(pool: &SqlitePool, id: i64) {
  sqlx::query("DELETE FROM cities WHERE id = ?")
    .bind(id)
    .execute(pool)
    .await
    .expect("city delete");
}

pub async fn seed_client(pool: &SqlitePool, name: &str) -> i64 {
  seed_client_in(pool, name, None).await
}

pub async fn seed_client_in(pool: &SqlitePool, name: &str, city_id: Option<i64>) -> i64 {
  let new = NewClient {
    name: name.to_string(),
    city_id,
  };
  ClientStore::insert(pool, &new).await.expect("client insert")
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
  sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
    .fetch_one(pool)
    .await
    .expect("count query")
}

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  let subscriber = tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .finish();
  let _ = tracing::subscriber::set_global_default(subscriber);
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
