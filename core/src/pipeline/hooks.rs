// loja_flow/src/pipeline/hooks.rs

//! Handler and failure-hook registration.

use tracing::{event, Level};

use crate::core::context::{FailureHook, Handler};
use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use crate::error::FlowError;
use crate::pipeline::definition::Pipeline;
use std::future::Future;

/// Which handler list of a step a registration targets.
#[derive(Debug, Clone, Copy)]
enum Phase {
  Before,
  On,
  After,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  fn push_handler<F, UserErr>(
    &mut self,
    phase: Phase,
    step_name: &str,
    handler_fn: impl Fn(ContextData<TData>) -> F + Send + Sync + 'static,
  ) where
    F: Future<Output = Result<PipelineControl, UserErr>> + Send + 'static,
    UserErr: Into<Err> + Send + Sync + 'static,
  {
    self.ensure_step_exists(step_name);
    let handler: Handler<TData, Err> = Box::new(move |ctx_data| {
      let user_fut = handler_fn(ctx_data);
      Box::pin(async move { user_fut.await.map_err(Into::into) })
    });
    let handlers = match phase {
      Phase::Before => &mut self.before,
      Phase::On => &mut self.on,
      Phase::After => &mut self.after,
    };
    handlers.entry(step_name.to_string()).or_default().push(handler);
    event!(Level::TRACE, step_name, ?phase, "Handler registered.");
  }

  /// Registers a handler that runs before the step's `on` handlers.
  ///
  /// The handler's own error type only needs to convert into the pipeline's `Err`.
  pub fn before_root<F, UserErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(ContextData<TData>) -> F + Send + Sync + 'static,
  ) where
    F: Future<Output = Result<PipelineControl, UserErr>> + Send + 'static,
    UserErr: Into<Err> + Send + Sync + 'static,
  {
    self.push_handler(Phase::Before, step_name, handler_fn);
  }

  /// Registers the main handler of a step.
  pub fn on_root<F, UserErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(ContextData<TData>) -> F + Send + Sync + 'static,
  ) where
    F: Future<Output = Result<PipelineControl, UserErr>> + Send + 'static,
    UserErr: Into<Err> + Send + Sync + 'static,
  {
    self.push_handler(Phase::On, step_name, handler_fn);
  }

  pub fn after_root<F, UserErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(ContextData<TData>) -> F + Send + Sync + 'static,
  ) where
    F: Future<Output = Result<PipelineControl, UserErr>> + Send + 'static,
    UserErr: Into<Err> + Send + Sync + 'static,
  {
    self.push_handler(Phase::After, step_name, handler_fn);
  }

  /// Registers a hook that runs whenever a step fails, before the error is
  /// returned from [`Pipeline::run`]. Hooks run in registration order and
  /// receive the name of the failed step.
  pub fn on_failure<F>(&mut self, hook_fn: impl Fn(ContextData<TData>, String) -> F + Send + Sync + 'static)
  where
    F: Future<Output = ()> + Send + 'static,
  {
    let hook: FailureHook<TData> = Box::new(move |ctx_data, step_name| Box::pin(hook_fn(ctx_data, step_name)));
    self.failure_hooks.push(hook);
  }
}
