// loja_api/src/pipelines/delete_order_pipeline.rs

use crate::errors::AppError;
use crate::pipelines::common_steps::{self, COMMIT_ORDER_WRITES, OPEN_ORDER_WRITER};
use crate::pipelines::contexts::DeleteOrderCtxData;
use crate::store::{OrderItemStore, OrderStore};
use loja_flow::{ContextData, Pipeline, PipelineControl, Registry};
use tracing::{info, warn};

pub const DELETE_LINE_ITEMS: &str = "delete_line_items";
pub const DELETE_ORDER_ROW: &str = "delete_order_row";

pub fn register_delete_order_pipeline(registry: &Registry<AppError>) {
  let mut p = Pipeline::<DeleteOrderCtxData, AppError>::new(&[
    OPEN_ORDER_WRITER,
    DELETE_LINE_ITEMS,
    DELETE_ORDER_ROW,
    COMMIT_ORDER_WRITES,
  ]);

  p.on_root(OPEN_ORDER_WRITER, common_steps::open_order_writer::<DeleteOrderCtxData>);

  // Runs even when the order has no items, or does not exist.
  p.on_root(DELETE_LINE_ITEMS, |ctx_data: ContextData<DeleteOrderCtxData>| async move {
    let order_id = ctx_data.with(|data| data.order_id);

    let mut writer = common_steps::take_writer(&ctx_data)?;
    let deleted = OrderItemStore::delete_by_order(writer.conn(), order_id).await;
    common_steps::restore_writer(&ctx_data, writer);
    let removed = deleted?;

    ctx_data.with(|data| data.line_items_removed = removed);
    info!(order_id, line_items_removed = removed, "Line items deleted.");
    Ok::<_, AppError>(PipelineControl::Continue)
  });

  p.on_root(DELETE_ORDER_ROW, |ctx_data: ContextData<DeleteOrderCtxData>| async move {
    let order_id = ctx_data.with(|data| data.order_id);

    let mut writer = common_steps::take_writer(&ctx_data)?;
    let deleted = OrderStore::delete(writer.conn(), order_id).await;
    common_steps::restore_writer(&ctx_data, writer);

    if deleted? == 0 {
      warn!(order_id, "Order to delete does not exist.");
      return Err(AppError::NotFound("Pedido não encontrado".to_string()));
    }
    ctx_data.with(|data| data.order_removed = true);
    info!(order_id, "Order row deleted.");
    Ok::<_, AppError>(PipelineControl::Continue)
  });

  p.on_root(COMMIT_ORDER_WRITES, common_steps::commit_order_writes::<DeleteOrderCtxData>);
  p.on_failure(common_steps::release_writer_after_failure::<DeleteOrderCtxData>);

  registry.register(p);
  info!("Delete-order pipeline registered.");
}
