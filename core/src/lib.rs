// loja_flow/src/lib.rs

//! Async step pipelines for multi-table workflows.
//!
//! A [`Pipeline`] is an ordered list of named steps. Each step can carry
//! `before`, `on` and `after` handlers that operate on a shared
//! [`ContextData`], may be skipped by a condition, and may be marked optional.
//! Failure hooks run whenever a step fails, which is where callers release
//! resources such as open database transactions.
//!
//! Pipelines are registered in a [`Registry`] keyed by their context type, so
//! request handlers only need to build a context and call [`Registry::run`].

pub mod core;
pub mod error;
pub mod pipeline;
pub mod registry;

pub use crate::core::context::{FailureHook, Handler};
pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::step::{SkipCondition, StepDef};

pub use crate::pipeline::definition::Pipeline;

pub use crate::error::{FlowError, FlowResult};

pub use crate::registry::Registry;
