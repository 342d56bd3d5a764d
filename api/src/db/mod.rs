// loja_api/src/db/mod.rs

//! Pool lifecycle: created once at startup, closed explicitly at shutdown.

use crate::config::AppConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{info, instrument};

const SCHEMA: &str = include_str!("schema.sql");

#[instrument(name = "db::connect", skip(config), fields(max_connections = config.db_max_connections))]
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
  let options = SqliteConnectOptions::from_str(&config.database_url)?.foreign_keys(true);
  let pool = SqlitePoolOptions::new()
    .max_connections(config.db_max_connections)
    .connect_with(options)
    .await?;
  info!("Database pool ready.");
  Ok(pool)
}

/// Creates missing tables. Safe to run on every start.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
  sqlx::raw_sql(SCHEMA).execute(pool).await?;
  info!("Database schema ensured.");
  Ok(())
}

pub async fn close(pool: &SqlitePool) {
  info!("Closing database pool...");
  pool.close().await;
  info!("Database pool closed.");
}
