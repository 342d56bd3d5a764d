// loja_api/src/state.rs

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::pipelines;
use loja_flow::Registry;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared by every request handler. Cloning is cheap: the pool and the
/// registry are reference counted.
#[derive(Clone)]
pub struct AppState {
  pub db_pool: SqlitePool,
  pub flow: Arc<Registry<AppError>>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  /// Builds the workflow registry with every order pipeline registered.
  pub fn new(db_pool: SqlitePool, config: Arc<AppConfig>) -> Self {
    let flow = Registry::<AppError>::new();
    pipelines::register_all_pipelines(&flow);
    Self {
      db_pool,
      flow: Arc::new(flow),
      config,
    }
  }
}
