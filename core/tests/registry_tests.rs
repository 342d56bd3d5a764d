// tests/registry_tests.rs
mod common;

use common::*;
use loja_flow::{ContextData, Pipeline, PipelineResult, Registry};
use serial_test::serial;

#[derive(Debug, Default)]
struct OtherContext;

#[tokio::test]
#[serial]
async fn test_registry_runs_pipeline_for_context_type() {
  setup_tracing();
  let registry = Registry::<TestError>::new();
  let mut pipeline = Pipeline::<LedgerContext, TestError>::new(&["header"]);
  pipeline.on_root("header", write_row_handler("header", "order#1"));
  registry.register(pipeline);

  assert!(registry.is_registered::<LedgerContext>());
  assert!(!registry.is_registered::<OtherContext>());

  let ctx = ContextData::new(LedgerContext::default());
  let result = registry.run(ctx.clone()).await;
  assert_eq!(result.unwrap(), PipelineResult::Completed);
  assert_eq!(ctx.lock().rows_written, vec!["order#1"]);
}

#[tokio::test]
#[serial]
async fn test_registry_run_unregistered_type_fails() {
  setup_tracing();
  let registry = Registry::<TestError>::new();
  let result = registry.run(ContextData::new(OtherContext)).await;
  match result {
    Err(TestError::Flow(s)) => {
      assert!(s.contains("PipelineNotRegistered"));
      assert!(s.contains("OtherContext"));
    }
    other => panic!("Expected PipelineNotRegistered, got {:?}", other),
  }
}

#[tokio::test]
#[serial]
async fn test_registering_again_replaces_pipeline() {
  setup_tracing();
  let registry = Registry::<TestError>::new();

  let mut first = Pipeline::<LedgerContext, TestError>::new(&["header"]);
  first.on_root("header", write_row_handler("header", "v1"));
  registry.register(first);

  let mut second = Pipeline::<LedgerContext, TestError>::new(&["header"]);
  second.on_root("header", write_row_handler("header", "v2"));
  registry.register(second);

  let ctx = ContextData::new(LedgerContext::default());
  registry.run(ctx.clone()).await.unwrap();
  assert_eq!(ctx.lock().rows_written, vec!["v2"]);
}

#[tokio::test]
#[serial]
async fn test_registry_propagates_handler_errors() {
  setup_tracing();
  let registry = Registry::<TestError>::new();
  let mut pipeline = Pipeline::<LedgerContext, TestError>::new(&["lines"]);
  pipeline.on_root("lines", failing_handler("lines", "price lookup failed"));
  registry.register(pipeline);

  let result = registry.run(ContextData::new(LedgerContext::default())).await;
  assert_eq!(result.unwrap_err(), TestError::Step("price lookup failed".to_string()));
}
