// loja_flow/src/core/step.rs

use super::ContextData;
use std::sync::Arc;

/// Evaluated right before a step runs; `true` skips the step.
pub type SkipCondition<TData> = Arc<dyn Fn(&TData) -> bool + Send + Sync + 'static>;

#[derive(Clone)]
pub struct StepDef<T: 'static + Send> {
  pub name: String,
  /// An optional step without handlers is skipped instead of failing the run.
  pub optional: bool,
  pub skip_if: Option<SkipCondition<T>>,
}

impl<T: 'static + Send> StepDef<T> {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      optional: false,
      skip_if: None,
    }
  }

  pub(crate) fn should_skip(&self, ctx_data: &ContextData<T>) -> bool {
    match &self.skip_if {
      Some(cond) => ctx_data.with(|data| cond(data)),
      None => false,
    }
  }
}

impl<T: 'static + Send> std::fmt::Debug for StepDef<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StepDef")
      .field("name", &self.name)
      .field("optional", &self.optional)
      .field("skip_if_present", &self.skip_if.is_some())
      .finish()
  }
}
