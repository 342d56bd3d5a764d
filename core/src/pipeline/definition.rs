// loja_flow/src/pipeline/definition.rs

//! The `Pipeline<TData, Err>` struct and its step configuration.

use crate::core::context::{FailureHook, Handler};
use crate::core::step::{SkipCondition, StepDef};
use crate::error::FlowError;
use std::collections::HashMap;

/// An ordered list of named steps over a context `TData`.
///
/// `Err` is what the handlers return and what [`Pipeline::run`] yields; it must
/// absorb [`FlowError`] so that engine-level failures (a required step without
/// handlers, for instance) surface through the same type.
pub struct Pipeline<TData, Err>
where
  TData: 'static + Send,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pub(crate) steps: Vec<StepDef<TData>>,

  pub(crate) before: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) on: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) after: HashMap<String, Vec<Handler<TData, Err>>>,

  pub(crate) failure_hooks: Vec<FailureHook<TData>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Creates a pipeline whose steps run in the given order. All steps start
  /// required and unconditional.
  pub fn new(step_names: &[&str]) -> Self {
    let mut pipeline = Self {
      steps: Vec::with_capacity(step_names.len()),
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
      failure_hooks: Vec::new(),
    };
    for name in step_names {
      pipeline.ensure_step_not_exists(name);
      pipeline.steps.push(StepDef::new(*name));
    }
    pipeline
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  /// Panics on an unknown step. A misspelled step name is a setup bug, not a runtime condition.
  pub(crate) fn ensure_step_exists(&self, step_name: &str) {
    if !self.steps.iter().any(|s| s.name == step_name) {
      panic!("loja_flow setup error: {}", FlowError::StepNotFound {
        step_name: step_name.to_string(),
      });
    }
  }

  fn ensure_step_not_exists(&self, step_name: &str) {
    if self.steps.iter().any(|s| s.name == step_name) {
      panic!("loja_flow setup error: step '{}' is declared twice.", step_name);
    }
  }

  fn step_mut(&mut self, step_name: &str) -> &mut StepDef<TData> {
    self.ensure_step_exists(step_name);
    self
      .steps
      .iter_mut()
      .find(|s| s.name == step_name)
      .expect("step presence checked above")
  }

  pub fn set_optional(&mut self, step_name: &str, optional: bool) {
    self.step_mut(step_name).optional = optional;
  }

  pub fn set_skip_condition(&mut self, step_name: &str, skip_if: Option<SkipCondition<TData>>) {
    self.step_mut(step_name).skip_if = skip_if;
  }
}
