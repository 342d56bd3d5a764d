// loja_api/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::fmt;
use std::str::FromStr;

/// How the order workflows persist their rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStrategy {
  /// One transaction per workflow; a failure leaves nothing behind.
  Atomic,
  /// Every statement commits on its own. A failed create keeps the order row
  /// and the line items written before the failure.
  Sequential,
}

impl FromStr for WriteStrategy {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "atomic" => Ok(WriteStrategy::Atomic),
      "sequential" => Ok(WriteStrategy::Sequential),
      other => Err(AppError::Config(format!(
        "Invalid ORDER_WRITE_STRATEGY '{}': expected 'atomic' or 'sequential'",
        other
      ))),
    }
  }
}

impl fmt::Display for WriteStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      WriteStrategy::Atomic => f.write_str("atomic"),
      WriteStrategy::Sequential => f.write_str("sequential"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Text,
  Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub db_max_connections: u32,
  pub write_strategy: WriteStrategy,
  /// Run the bootstrap schema at startup.
  pub ensure_schema: bool,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; `from_env` passes the process environment.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "127.0.0.1");
    let server_port = get_or("SERVER_PORT", "8001")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_or("DATABASE_URL", "sqlite://loja.db?mode=rwc");
    let db_max_connections = get_or("DB_MAX_CONNECTIONS", "5")
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DB_MAX_CONNECTIONS: {}", e)))?;
    if db_max_connections == 0 {
      return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
    }
    let write_strategy = get_or("ORDER_WRITE_STRATEGY", "atomic").parse::<WriteStrategy>()?;
    let ensure_schema = get_or("ENSURE_SCHEMA", "true")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid ENSURE_SCHEMA value: {}", e)))?;
    let log_format = match get_or("LOG_FORMAT", "text").to_ascii_lowercase().as_str() {
      "text" => LogFormat::Text,
      "json" => LogFormat::Json,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT '{}'", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      database_url,
      db_max_connections,
      write_strategy,
      ensure_schema,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
