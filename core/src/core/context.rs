// loja_flow/src/core/context.rs

//! Boxed handler types stored by a [`Pipeline`](crate::Pipeline).

use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use std::future::Future;
use std::pin::Pin;

/// A step handler.
///
/// Receives a clone of the pipeline's `ContextData<TData>` and resolves to the
/// control signal for the rest of the run. Handlers must drop any lock guard
/// before their first `.await`.
pub type Handler<TData, Err> = Box<
  dyn Fn(ContextData<TData>) -> Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>>
    + Send
    + Sync,
>;

/// A hook invoked after a step failed, with the name of that step.
///
/// Failure hooks cannot fail themselves; anything they need to report goes to the log.
pub type FailureHook<TData> =
  Box<dyn Fn(ContextData<TData>, String) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;
