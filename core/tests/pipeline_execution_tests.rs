// tests/pipeline_execution_tests.rs
mod common;

use common::*;
use loja_flow::{ContextData, Pipeline, PipelineControl, PipelineResult};
use serial_test::serial;
use std::sync::Arc;

#[tokio::test]
#[serial]
async fn test_pipeline_runs_steps_in_order() {
  setup_tracing();
  let mut pipeline = Pipeline::<LedgerContext, TestError>::new(&["header", "lines", "commit"]);

  pipeline.on_root("header", write_row_handler("header", "order#1"));
  pipeline.on_root("lines", write_row_handler("lines", "item#1"));
  pipeline.on_root("commit", write_row_handler("commit", "commit"));

  let ctx = ContextData::new(LedgerContext::default());
  let result = pipeline.run(ctx.clone()).await;

  assert_eq!(result.unwrap(), PipelineResult::Completed);
  let guard = ctx.lock();
  assert_eq!(guard.steps_executed, vec!["header", "lines", "commit"]);
  assert_eq!(guard.rows_written, vec!["order#1", "item#1", "commit"]);
}

#[tokio::test]
#[serial]
async fn test_before_on_after_run_in_phase_order() {
  setup_tracing();
  let mut pipeline = Pipeline::<LedgerContext, TestError>::new(&["lines"]);

  pipeline.after_root("lines", write_row_handler("after", "audit"));
  pipeline.on_root("lines", write_row_handler("on", "item"));
  pipeline.before_root("lines", write_row_handler("before", "resolve"));

  let ctx = ContextData::new(LedgerContext::default());
  pipeline.run(ctx.clone()).await.unwrap();

  assert_eq!(ctx.lock().steps_executed, vec!["before", "on", "after"]);
}

#[tokio::test]
#[serial]
async fn test_multiple_handlers_for_one_step_run_in_registration_order() {
  setup_tracing();
  let mut pipeline = Pipeline::<LedgerContext, TestError>::new(&["lines"]);
  pipeline.on_root("lines", write_row_handler("first", "item#1"));
  pipeline.on_root("lines", write_row_handler("second", "item#2"));

  let ctx = ContextData::new(LedgerContext::default());
  pipeline.run(ctx.clone()).await.unwrap();

  assert_eq!(ctx.lock().rows_written, vec!["item#1", "item#2"]);
}

#[tokio::test]
#[serial]
async fn test_pipeline_stops_on_pipeline_control_stop() {
  setup_tracing();
  let mut pipeline = Pipeline::<LedgerContext, TestError>::new(&["header", "lines", "commit"]);
  pipeline.on_root("header", write_row_handler("header", "order#1"));
  pipeline.on_root("lines", write_row_handler("lines", "item#1"));
  pipeline.on_root("commit", write_row_handler("commit", "commit"));

  let ctx = ContextData::new(LedgerContext {
    stop_at: Some("lines".to_string()),
    ..Default::default()
  });
  let result = pipeline.run(ctx.clone()).await;

  assert_eq!(result.unwrap(), PipelineResult::Stopped);
  assert_eq!(ctx.lock().steps_executed, vec!["header", "lines"]);
}

#[tokio::test]
#[serial]
async fn test_skip_condition_reads_context() {
  setup_tracing();
  let mut pipeline = Pipeline::<LedgerContext, TestError>::new(&["header", "lines", "commit"]);
  pipeline.on_root("header", write_row_handler("header", "order#1"));
  pipeline.on_root("lines", write_row_handler("lines", "item#1"));
  pipeline.on_root("commit", write_row_handler("commit", "commit"));
  pipeline.set_skip_condition("lines", Some(Arc::new(|data: &LedgerContext| data.items.is_empty())));

  let empty = ContextData::new(LedgerContext::default());
  assert_eq!(pipeline.run(empty.clone()).await.unwrap(), PipelineResult::Completed);
  assert_eq!(empty.lock().steps_executed, vec!["header", "commit"]);

  let with_items = ContextData::new(LedgerContext {
    items: vec![5, 5],
    ..Default::default()
  });
  pipeline.run(with_items.clone()).await.unwrap();
  assert_eq!(with_items.lock().steps_executed, vec!["header", "lines", "commit"]);
}

#[tokio::test]
#[serial]
async fn test_optional_step_without_handlers_is_skipped() {
  setup_tracing();
  let mut pipeline = Pipeline::<LedgerContext, TestError>::new(&["header", "notify", "commit"]);
  pipeline.on_root("header", write_row_handler("header", "order#1"));
  pipeline.on_root("commit", write_row_handler("commit", "commit"));
  pipeline.set_optional("notify", true);

  let ctx = ContextData::new(LedgerContext::default());
  assert_eq!(pipeline.run(ctx.clone()).await.unwrap(), PipelineResult::Completed);
  assert_eq!(ctx.lock().steps_executed, vec!["header", "commit"]);
}

#[tokio::test]
#[serial]
async fn test_context_can_be_recovered_after_run() {
  setup_tracing();
  let mut pipeline = Pipeline::<LedgerContext, TestError>::new(&["header"]);
  pipeline.on_root("header", |ctx: ContextData<LedgerContext>| async move {
    ctx.with(|data| data.rows_written.push("order#9".to_string()));
    Ok::<_, TestError>(PipelineControl::Continue)
  });

  let ctx = ContextData::new(LedgerContext::default());
  pipeline.run(ctx.clone()).await.unwrap();

  let data = ctx.try_into_inner().expect("pipeline dropped its clones");
  assert_eq!(data.rows_written, vec!["order#9"]);
}

#[test]
#[should_panic(expected = "Step not found: missing")]
fn test_registering_handler_for_unknown_step_panics() {
  let mut pipeline = Pipeline::<LedgerContext, TestError>::new(&["header"]);
  pipeline.on_root("missing", write_row_handler("missing", "never"));
}

#[test]
#[should_panic(expected = "declared twice")]
fn test_duplicate_step_names_panic() {
  let _ = Pipeline::<LedgerContext, TestError>::new(&["header", "header"]);
}

#[test]
fn test_step_names_preserve_declaration_order() {
  let pipeline = Pipeline::<LedgerContext, TestError>::new(&["open", "header", "lines", "commit"]);
  assert_eq!(pipeline.step_names(), vec!["open", "header", "lines", "commit"]);
}
