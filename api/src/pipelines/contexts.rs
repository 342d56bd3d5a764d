// loja_api/src/pipelines/contexts.rs

//! Context data for the order workflows. Handlers receive these wrapped in
//! `loja_flow::ContextData`.

use crate::config::WriteStrategy;
use crate::models::{NewOrderItem, OrderItemInput};
use crate::pipelines::writer::{HoldsOrderWriter, OrderWriter};
use sqlx::SqlitePool;

pub struct CreateOrderCtxData {
  pub pool: SqlitePool,
  pub strategy: WriteStrategy,
  pub client_id: i64,
  pub delivery_address: String,
  pub items: Vec<OrderItemInput>,
  pub writer: Option<OrderWriter>,
  pub order_id: Option<i64>,
  /// Line items written so far, in input order, with their resolved prices.
  pub line_items: Vec<NewOrderItem>,
}

impl CreateOrderCtxData {
  pub fn new(
    pool: SqlitePool,
    strategy: WriteStrategy,
    client_id: i64,
    delivery_address: String,
    items: Vec<OrderItemInput>,
  ) -> Self {
    Self {
      pool,
      strategy,
      client_id,
      delivery_address,
      items,
      writer: None,
      order_id: None,
      line_items: Vec::new(),
    }
  }
}

impl HoldsOrderWriter for CreateOrderCtxData {
  fn pool(&self) -> &SqlitePool {
    &self.pool
  }

  fn strategy(&self) -> WriteStrategy {
    self.strategy
  }

  fn writer_slot(&mut self) -> &mut Option<OrderWriter> {
    &mut self.writer
  }

  fn partial_writes(&self) -> String {
    match self.order_id {
      Some(order_id) => format!("order {} with {} line item(s)", order_id, self.line_items.len()),
      None => "nothing".to_string(),
    }
  }
}

pub struct DeleteOrderCtxData {
  pub pool: SqlitePool,
  pub strategy: WriteStrategy,
  pub order_id: i64,
  pub writer: Option<OrderWriter>,
  pub line_items_removed: u64,
  pub order_removed: bool,
}

impl DeleteOrderCtxData {
  pub fn new(pool: SqlitePool, strategy: WriteStrategy, order_id: i64) -> Self {
    Self {
      pool,
      strategy,
      order_id,
      writer: None,
      line_items_removed: 0,
      order_removed: false,
    }
  }
}

impl HoldsOrderWriter for DeleteOrderCtxData {
  fn pool(&self) -> &SqlitePool {
    &self.pool
  }

  fn strategy(&self) -> WriteStrategy {
    self.strategy
  }

  fn writer_slot(&mut self) -> &mut Option<OrderWriter> {
    &mut self.writer
  }

  fn partial_writes(&self) -> String {
    format!(
      "{} line item(s) of order {} already removed",
      self.line_items_removed, self.order_id
    )
  }
}
