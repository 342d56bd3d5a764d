// loja_flow/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
  #[error("Step not found: {step_name}")]
  StepNotFound { step_name: String },

  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("No pipeline registered for context type {type_name}")]
  PipelineNotRegistered { type_name: String },

  #[error("Context type mismatch (expected {expected_type}) in {location}")]
  TypeMismatch { location: String, expected_type: String },

  #[error("Step handler failed: {source}")]
  HandlerError {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal workflow error: {0}")]
  Internal(String),
}

impl From<AnyhowError> for FlowError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap a FlowError that was boxed into anyhow on its way up instead of nesting it.
    match err.downcast::<FlowError>() {
      Ok(flow_err) => flow_err,
      Err(source) => FlowError::HandlerError { source },
    }
  }
}

pub type FlowResult<T, E = FlowError> = std::result::Result<T, E>;
