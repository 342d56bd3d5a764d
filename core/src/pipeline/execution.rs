// loja_flow/src/pipeline/execution.rs

//! `Pipeline::run()`.

use crate::core::context::Handler;
use crate::core::context_data::ContextData;
use crate::core::control::{PipelineControl, PipelineResult};
use crate::error::FlowError;
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, span, Instrument, Level};

/// What a phase of one step ended with.
enum PhaseOutcome<Err> {
  Continue,
  Stopped,
  Failed(Err),
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Runs every step in order against `ctx_data`.
  ///
  /// A handler returning `Stop` ends the run with [`PipelineResult::Stopped`].
  /// A handler error, or a required step without handlers, runs the failure
  /// hooks and then returns the error.
  #[instrument(
    name = "Pipeline::run",
    skip_all,
    fields(
      context_type = %std::any::type_name::<TData>(),
      num_steps = self.steps.len(),
    ),
    err(Display)
  )]
  pub async fn run(&self, ctx_data: ContextData<TData>) -> Result<PipelineResult, Err> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_name = step_def.name.as_str();
      let step_span = span!(
        Level::INFO,
        "pipeline_step",
        step_name,
        step_index = step_idx,
        optional = step_def.optional
      );

      if step_def.should_skip(&ctx_data) {
        event!(parent: &step_span, Level::INFO, "Step skipped by its skip condition.");
        continue;
      }

      let has_handlers = [&self.before, &self.on, &self.after]
        .iter()
        .any(|phase| phase.get(step_name).is_some_and(|v| !v.is_empty()));

      if !has_handlers {
        if step_def.optional {
          event!(parent: &step_span, Level::DEBUG, "Optional step has no handlers, skipping.");
          continue;
        }
        event!(parent: &step_span, Level::ERROR, "Required step has no handlers.");
        let err = Err::from(FlowError::HandlerMissing {
          step_name: step_def.name.clone(),
        });
        self.run_failure_hooks(&ctx_data, step_name).await;
        return Err(err);
      }

      for (phase_name, phase) in [("before", &self.before), ("on", &self.on), ("after", &self.after)] {
        let Some(handlers) = phase.get(step_name) else {
          continue;
        };
        let outcome = Self::run_phase(handlers, &ctx_data, phase_name)
          .instrument(step_span.clone())
          .await;
        match outcome {
          PhaseOutcome::Continue => {}
          PhaseOutcome::Stopped => {
            event!(parent: &step_span, Level::INFO, phase = phase_name, "Pipeline stopped by a handler.");
            return Ok(PipelineResult::Stopped);
          }
          PhaseOutcome::Failed(e) => {
            event!(parent: &step_span, Level::ERROR, phase = phase_name, error = %e, "Step failed.");
            self.run_failure_hooks(&ctx_data, step_name).await;
            return Err(e);
          }
        }
      }
      event!(parent: &step_span, Level::DEBUG, "Step finished.");
    }

    event!(Level::DEBUG, "Pipeline execution completed.");
    Ok(PipelineResult::Completed)
  }

  async fn run_phase(
    handlers: &[Handler<TData, Err>],
    ctx_data: &ContextData<TData>,
    phase_name: &'static str,
  ) -> PhaseOutcome<Err> {
    for (handler_idx, handler_fn) in handlers.iter().enumerate() {
      event!(Level::TRACE, phase = phase_name, handler_index = handler_idx, "Executing handler.");
      match handler_fn(ctx_data.clone()).await {
        Ok(PipelineControl::Continue) => {}
        Ok(PipelineControl::Stop) => return PhaseOutcome::Stopped,
        Err(e) => return PhaseOutcome::Failed(e),
      }
    }
    PhaseOutcome::Continue
  }

  async fn run_failure_hooks(&self, ctx_data: &ContextData<TData>, step_name: &str) {
    for hook in &self.failure_hooks {
      hook(ctx_data.clone(), step_name.to_string()).await;
    }
  }
}
