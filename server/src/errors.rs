// server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::web::envelope::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
  /// Request body failed draft deserialization (missing or ill-typed
  /// required field). The original backend answered 500 here; this is the
  /// deliberate upgrade to 400.
  #[error("Validation Error: {0}")]
  Validation(String),

  /// Path identifier failed the store's syntactic identifier check.
  /// Only the delete endpoint performs this pre-check.
  #[error("Invalid product ID")]
  InvalidId,

  /// A store operation failed. The message is the endpoint's fixed,
  /// client-facing text; the underlying fault is logged, never exposed.
  #[error("{message}")]
  Database {
    message: &'static str,
    #[source]
    source: anyhow::Error,
  },

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl AppError {
  /// Wrap a store fault with the fixed message its endpoint responds with.
  pub fn database(message: &'static str, source: anyhow::Error) -> Self {
    AppError::Database { message, source }
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response; the body only
    // ever carries the generic message.
    tracing::error!(application_error = ?self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(ApiResponse::failure(m)),
      AppError::InvalidId => HttpResponse::BadRequest().json(ApiResponse::failure("Invalid product ID")),
      AppError::Database { message, .. } => {
        HttpResponse::InternalServerError().json(ApiResponse::failure(message))
      }
      AppError::Config(_) => {
        HttpResponse::InternalServerError().json(ApiResponse::failure("Server error"))
      }
    }
  }
}

// Result type alias for the application.
pub type Result<T, E = AppError> = std::result::Result<T, E>;
