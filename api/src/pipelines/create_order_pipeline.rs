// loja_api/src/pipelines/create_order_pipeline.rs

use crate::errors::{AppError, Result};
use crate::models::{NewOrder, NewOrderItem, OrderItemInput};
use crate::pipelines::common_steps::{self, COMMIT_ORDER_WRITES, OPEN_ORDER_WRITER};
use crate::pipelines::contexts::CreateOrderCtxData;
use crate::store::{OrderItemStore, OrderStore, ProductStore};
use chrono::Utc;
use loja_flow::{ContextData, Pipeline, PipelineControl, Registry};
use sqlx::SqliteConnection;
use std::sync::Arc;
use tracing::{info, warn};

pub const INSERT_ORDER_HEADER: &str = "insert_order_header";
pub const INSERT_LINE_ITEMS: &str = "insert_line_items";

pub fn register_create_order_pipeline(registry: &Registry<AppError>) {
  let mut p = Pipeline::<CreateOrderCtxData, AppError>::new(&[
    OPEN_ORDER_WRITER,
    INSERT_ORDER_HEADER,
    INSERT_LINE_ITEMS,
    COMMIT_ORDER_WRITES,
  ]);

  p.on_root(OPEN_ORDER_WRITER, common_steps::open_order_writer::<CreateOrderCtxData>);

  // Step 1: order header with a server-side timestamp.
  p.on_root(INSERT_ORDER_HEADER, |ctx_data: ContextData<CreateOrderCtxData>| async move {
    let new_order = ctx_data.with(|data| NewOrder {
      created_at: Utc::now(),
      delivery_address: data.delivery_address.clone(),
      client_id: data.client_id,
    });

    let mut writer = common_steps::take_writer(&ctx_data)?;
    let inserted = OrderStore::insert(writer.conn(), &new_order).await;
    common_steps::restore_writer(&ctx_data, writer);
    let order_id = inserted?;

    ctx_data.with(|data| data.order_id = Some(order_id));
    info!(order_id, client_id = new_order.client_id, "Order header inserted.");
    Ok::<_, AppError>(PipelineControl::Continue)
  });

  // Step 2: one row per input entry, priced at insertion time.
  p.set_skip_condition(
    INSERT_LINE_ITEMS,
    Some(Arc::new(|data: &CreateOrderCtxData| data.items.is_empty())),
  );
  p.on_root(INSERT_LINE_ITEMS, |ctx_data: ContextData<CreateOrderCtxData>| async move {
    let (order_id, items) = ctx_data.with(|data| (data.order_id, data.items.clone()));
    let order_id = order_id.ok_or_else(|| AppError::Internal("order header was not written".to_string()))?;

    let mut writer = common_steps::take_writer(&ctx_data)?;
    let written = write_line_items(&ctx_data, writer.conn(), order_id, &items).await;
    common_steps::restore_writer(&ctx_data, writer);
    written?;

    info!(order_id, line_items = items.len(), "Line items inserted.");
    Ok::<_, AppError>(PipelineControl::Continue)
  });

  p.on_root(COMMIT_ORDER_WRITES, common_steps::commit_order_writes::<CreateOrderCtxData>);
  p.on_failure(common_steps::release_writer_after_failure::<CreateOrderCtxData>);

  registry.register(p);
  info!("Create-order pipeline registered.");
}

/// Resolves each product's current price, then inserts the line item with it.
/// Every written row is recorded in the context as soon as it exists.
async fn write_line_items(
  ctx_data: &ContextData<CreateOrderCtxData>,
  conn: &mut SqliteConnection,
  order_id: i64,
  items: &[OrderItemInput],
) -> Result<()> {
  for item in items {
    let unit_price = match ProductStore::find_price(&mut *conn, item.product_id).await? {
      Some(price) => price,
      None => {
        warn!(order_id, product_id = item.product_id, "Line item references an unknown product.");
        return Err(AppError::Validation(format!(
          "Produto {} não encontrado",
          item.product_id
        )));
      }
    };
    let line_item = NewOrderItem {
      order_id,
      product_id: item.product_id,
      quantity: item.quantity,
      unit_price,
    };
    OrderItemStore::insert(&mut *conn, &line_item).await?;
    ctx_data.with(|data| data.line_items.push(line_item));
  }
  Ok(())
}
