// loja_api/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use loja_flow::FlowError;
use serde_json::json;
use thiserror::Error;

/// Every failure the API can report. The HTTP mapping lives in the
/// `ResponseError` impl below and nowhere else.
#[derive(Debug, Error)]
pub enum AppError {
  /// Target row absent for update/delete by id.
  #[error("Resource Not Found: {0}")]
  NotFound(String),

  /// Malformed or referentially invalid input.
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[source] sqlx::Error),

  #[error("Workflow Error: {source}")]
  Workflow {
    #[from]
    source: FlowError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl From<sqlx::Error> for AppError {
  fn from(err: sqlx::Error) -> Self {
    // A dangling reference (unknown client, product still used by an order...) is bad input.
    if let Some(db_err) = err.as_database_error() {
      if db_err.is_foreign_key_violation() {
        return AppError::Validation(format!("Referência inválida: {}", db_err.message()));
      }
    }
    AppError::Sqlx(err)
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Workflow { .. } | AppError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with error");
    }
    let message = match self {
      AppError::NotFound(m) | AppError::Validation(m) => m.clone(),
      AppError::Sqlx(_) => "Falha ao acessar o banco de dados".to_string(),
      AppError::Workflow { .. } => "Falha ao processar o pedido".to_string(),
      AppError::Config(_) | AppError::Internal(_) => "Erro interno do servidor".to_string(),
    };
    HttpResponse::build(status).json(json!({ "error": message }))
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn error_classes_map_to_statuses() {
    assert_eq!(
      AppError::NotFound("Pedido não encontrado".into()).status_code(),
      StatusCode::NOT_FOUND
    );
    assert_eq!(
      AppError::Validation("Produto 9 não encontrado".into()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      AppError::from(sqlx::Error::PoolTimedOut).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
      AppError::from(FlowError::Internal("x".into())).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn server_errors_hide_details() {
    let resp = AppError::Sqlx(sqlx::Error::PoolTimedOut).error_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}
