// loja_api/src/pipelines/mod.rs

//! The order workflows, expressed as `loja_flow` pipelines.

use crate::errors::AppError;
use loja_flow::Registry;

pub mod common_steps;
pub mod contexts;
pub mod writer;

pub mod create_order_pipeline;
pub mod delete_order_pipeline;

/// Registers every pipeline. Called once while building the application state.
pub fn register_all_pipelines(registry: &Registry<AppError>) {
  tracing::info!("Registering order pipelines...");
  create_order_pipeline::register_create_order_pipeline(registry);
  delete_order_pipeline::register_delete_order_pipeline(registry);
  tracing::info!("All order pipelines registered.");
}
