// loja_flow/src/registry.rs

//! `Registry<AppErr>`: pipelines keyed by their context type.

use crate::core::context_data::ContextData;
use crate::core::control::PipelineResult;
use crate::error::FlowError;
use crate::pipeline::definition::Pipeline;

use async_trait::async_trait;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{event, instrument, Level};

#[async_trait]
trait ErasedRunner<AppErr>: Send + Sync
where
  AppErr: std::error::Error + Send + Sync + 'static,
{
  /// `ctx_obj` must hold a `ContextData<TData>` for the wrapped pipeline's `TData`.
  async fn run_erased(&self, ctx_obj: Box<dyn Any + Send>) -> Result<PipelineResult, AppErr>;
}

struct RegisteredPipeline<TData, HandlerErr, AppErr>
where
  TData: 'static + Send,
  HandlerErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pipeline: Pipeline<TData, HandlerErr>,
  _phantom: PhantomData<fn() -> AppErr>,
}

#[async_trait]
impl<TData, HandlerErr, AppErr> ErasedRunner<AppErr> for RegisteredPipeline<TData, HandlerErr, AppErr>
where
  TData: 'static + Send,
  HandlerErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
  AppErr: std::error::Error + From<HandlerErr> + From<FlowError> + Send + Sync + 'static,
{
  #[instrument(
    name = "Registry::dispatch",
    skip_all,
    fields(context_type = %std::any::type_name::<TData>()),
    err(Display)
  )]
  async fn run_erased(&self, ctx_obj: Box<dyn Any + Send>) -> Result<PipelineResult, AppErr> {
    let ctx_data = match ctx_obj.downcast::<ContextData<TData>>() {
      Ok(boxed) => *boxed,
      Err(_) => {
        let expected_type = std::any::type_name::<ContextData<TData>>();
        event!(Level::ERROR, expected_type, "Context object type mismatch.");
        return Err(AppErr::from(FlowError::TypeMismatch {
          location: "registry dispatch".to_string(),
          expected_type: expected_type.to_string(),
        }));
      }
    };
    self.pipeline.run(ctx_data).await.map_err(AppErr::from)
  }
}

/// Holds one pipeline per context type and runs them on demand.
///
/// `AppErr` is what [`Registry::run`] returns. It must absorb both the
/// pipelines' handler error types and [`FlowError`].
pub struct Registry<AppErr = FlowError>
where
  AppErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pipelines: RwLock<HashMap<TypeId, Arc<dyn ErasedRunner<AppErr>>>>,
}

impl<AppErr> Registry<AppErr>
where
  AppErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pub fn new() -> Self {
    Self {
      pipelines: RwLock::new(HashMap::new()),
    }
  }

  /// Registers `pipeline` for contexts of type `ContextData<TData>`, replacing
  /// any previous pipeline for that type.
  pub fn register<TData, HandlerErr>(&self, pipeline: Pipeline<TData, HandlerErr>)
  where
    TData: 'static + Send,
    HandlerErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
    AppErr: From<HandlerErr>,
  {
    event!(
      Level::DEBUG,
      context_type = %std::any::type_name::<TData>(),
      steps = ?pipeline.step_names(),
      "Registering pipeline."
    );
    let runner = RegisteredPipeline::<TData, HandlerErr, AppErr> {
      pipeline,
      _phantom: PhantomData,
    };
    self.pipelines.write().insert(TypeId::of::<TData>(), Arc::new(runner));
  }

  pub fn is_registered<TData: 'static + Send>(&self) -> bool {
    self.pipelines.read().contains_key(&TypeId::of::<TData>())
  }

  /// Runs the pipeline registered for `TData`. The caller keeps its own clone
  /// of `ctx_data` to read results afterwards.
  pub async fn run<TData>(&self, ctx_data: ContextData<TData>) -> Result<PipelineResult, AppErr>
  where
    TData: 'static + Send,
  {
    let runner = self.pipelines.read().get(&TypeId::of::<TData>()).cloned();
    let Some(runner) = runner else {
      let type_name = std::any::type_name::<TData>();
      event!(Level::ERROR, type_name, "No pipeline registered.");
      return Err(AppErr::from(FlowError::PipelineNotRegistered {
        type_name: type_name.to_string(),
      }));
    };
    runner.run_erased(Box::new(ctx_data)).await
  }
}

impl<AppErr> Default for Registry<AppErr>
where
  AppErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}
