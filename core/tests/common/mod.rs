// tests/common/mod.rs
#![allow(dead_code)]

use loja_flow::{ContextData, FlowError, PipelineControl};
use once_cell::sync::Lazy;
use std::future::Future;
use std::pin::Pin;
use tracing::Level;

/// Stand-in for an order workflow context: records which steps ran and which
/// rows would have been written.
#[derive(Clone, Debug, Default)]
pub struct LedgerContext {
  pub rows_written: Vec<String>,
  pub steps_executed: Vec<String>,
  pub stop_at: Option<String>,
  pub released_after: Vec<String>,
  pub items: Vec<u32>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("workflow error: {0}")]
  Flow(String),

  #[error("step failed: {0}")]
  Step(String),
}

impl From<FlowError> for TestError {
  fn from(fe: FlowError) -> Self {
    TestError::Flow(format!("{:?}", fe))
  }
}

pub type TestFuture = Pin<Box<dyn Future<Output = Result<PipelineControl, TestError>> + Send>>;

/// Handler that records its step, writes one row and honours `stop_at`.
pub fn write_row_handler(
  step_name: &'static str,
  row: &'static str,
) -> impl Fn(ContextData<LedgerContext>) -> TestFuture + Send + Sync + 'static {
  move |ctx: ContextData<LedgerContext>| -> TestFuture {
    Box::pin(async move {
      let mut guard = ctx.lock();
      guard.steps_executed.push(step_name.to_string());
      guard.rows_written.push(row.to_string());
      tracing::debug!(target: "test_handlers", step = step_name, row, "row written");
      if guard.stop_at.as_deref() == Some(step_name) {
        return Ok(PipelineControl::Stop);
      }
      Ok(PipelineControl::Continue)
    })
  }
}

pub fn failing_handler(
  step_name: &'static str,
  message: &'static str,
) -> impl Fn(ContextData<LedgerContext>) -> TestFuture + Send + Sync + 'static {
  move |ctx: ContextData<LedgerContext>| -> TestFuture {
    Box::pin(async move {
      ctx.lock().steps_executed.push(step_name.to_string());
      tracing::warn!(target: "test_handlers", step = step_name, "failing with: '{}'", message);
      Err(TestError::Step(message.to_string()))
    })
  }
}

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
