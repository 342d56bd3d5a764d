// loja_api/src/pipelines/common_steps.rs

//! Steps shared by the create-order and delete-order pipelines.

use crate::config::WriteStrategy;
use crate::errors::{AppError, Result};
use crate::pipelines::writer::{HoldsOrderWriter, OrderWriter};
use loja_flow::{ContextData, PipelineControl};
use tracing::{error, info, warn};

pub const OPEN_ORDER_WRITER: &str = "open_order_writer";
pub const COMMIT_ORDER_WRITES: &str = "commit_order_writes";

/// Moves the writer out of the context so it can be used across awaits.
/// Callers must put it back with [`restore_writer`] before propagating errors,
/// otherwise the failure hook has nothing to roll back.
pub fn take_writer<T: HoldsOrderWriter>(ctx: &ContextData<T>) -> Result<OrderWriter> {
  ctx
    .with(|data| data.writer_slot().take())
    .ok_or_else(|| AppError::Internal("order writer is not open".to_string()))
}

pub fn restore_writer<T: HoldsOrderWriter>(ctx: &ContextData<T>, writer: OrderWriter) {
  ctx.with(|data| *data.writer_slot() = Some(writer));
}

pub async fn open_order_writer<T: HoldsOrderWriter>(ctx: ContextData<T>) -> Result<PipelineControl> {
  let (pool, strategy) = ctx.with(|data| (data.pool().clone(), data.strategy()));
  let writer = OrderWriter::open(&pool, strategy).await?;
  restore_writer(&ctx, writer);
  info!(%strategy, "Order writer opened.");
  Ok(PipelineControl::Continue)
}

pub async fn commit_order_writes<T: HoldsOrderWriter>(ctx: ContextData<T>) -> Result<PipelineControl> {
  let writer = take_writer(&ctx)?;
  let strategy = writer.strategy();
  writer.finish().await?;
  info!(%strategy, "Order writes committed.");
  Ok(PipelineControl::Continue)
}

/// Failure hook: rolls back an atomic writer, or reports what a sequential run left behind.
pub async fn release_writer_after_failure<T: HoldsOrderWriter>(ctx: ContextData<T>, failed_step: String) {
  let Some(writer) = ctx.with(|data| data.writer_slot().take()) else {
    return;
  };
  match writer.strategy() {
    WriteStrategy::Atomic => match writer.abandon().await {
      Ok(()) => info!(%failed_step, "Order writes rolled back."),
      Err(e) => error!(%failed_step, error = %e, "Rollback of order writes failed."),
    },
    WriteStrategy::Sequential => {
      let left_behind = ctx.with(|data| data.partial_writes());
      drop(writer);
      warn!(%failed_step, %left_behind, "Sequential order workflow failed; rows already written were kept.");
    }
  }
}
