// loja_api/src/services/order_service.rs

//! Entry points for the multi-table order workflows. Builds the pipeline
//! context, runs it through the registry and reads the outcome back.

use crate::errors::{AppError, Result};
use crate::models::{CreateOrderRequest, NewOrderItem};
use crate::pipelines::contexts::{CreateOrderCtxData, DeleteOrderCtxData};
use crate::state::AppState;
use loja_flow::{ContextData, PipelineResult};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct CreatedOrder {
  pub order_id: i64,
  /// One entry per requested product, in request order.
  pub line_items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedOrder {
  pub order_id: i64,
  pub line_items_removed: u64,
}

/// Creates an order header and one line item per requested product, pricing
/// each item at the product's current price.
#[instrument(
  name = "order_service::create_order",
  skip(state, request),
  fields(client_id = request.client_id, items = request.products.len(), strategy = %state.config.write_strategy),
  err(Display)
)]
pub async fn create_order(state: &AppState, request: CreateOrderRequest) -> Result<CreatedOrder> {
  let ctx_data = ContextData::new(CreateOrderCtxData::new(
    state.db_pool.clone(),
    state.config.write_strategy,
    request.client_id,
    request.address,
    request.products,
  ));

  match state.flow.run(ctx_data.clone()).await? {
    PipelineResult::Completed => {}
    PipelineResult::Stopped => {
      warn!("Create-order pipeline stopped before completion.");
      return Err(AppError::Internal("create-order workflow stopped early".to_string()));
    }
  }

  let created = ctx_data.with(|data| {
    data.order_id.map(|order_id| CreatedOrder {
      order_id,
      line_items: std::mem::take(&mut data.line_items),
    })
  });
  let created = created.ok_or_else(|| AppError::Internal("create-order workflow produced no order id".to_string()))?;
  info!(order_id = created.order_id, line_items = created.line_items.len(), "Order created.");
  Ok(created)
}

/// Removes every line item of the order, then the order itself.
#[instrument(
  name = "order_service::delete_order",
  skip(state),
  fields(strategy = %state.config.write_strategy),
  err(Display)
)]
pub async fn delete_order(state: &AppState, order_id: i64) -> Result<DeletedOrder> {
  let ctx_data = ContextData::new(DeleteOrderCtxData::new(
    state.db_pool.clone(),
    state.config.write_strategy,
    order_id,
  ));

  match state.flow.run(ctx_data.clone()).await? {
    PipelineResult::Completed => {}
    PipelineResult::Stopped => {
      warn!("Delete-order pipeline stopped before completion.");
      return Err(AppError::Internal("delete-order workflow stopped early".to_string()));
    }
  }

  let deleted = ctx_data.with(|data| DeletedOrder {
    order_id: data.order_id,
    line_items_removed: data.line_items_removed,
  });
  info!(line_items_removed = deleted.line_items_removed, "Order deleted.");
  Ok(deleted)
}
