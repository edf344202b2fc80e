//! API error type, the JSON envelope, and the
//! [`axum::response::IntoResponse`] implementation.
//!
//! | Kind | Status |
//! |------|--------|
//! | validation / malformed request | 400 |
//! | book or route not found | 404 |
//! | duplicate isbn | 409 |
//! | storage unavailable / internal | 500 |

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// The uniform `{ success, message, ... }` body.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
  pub success: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub errors:  Option<Vec<String>>,
  /// Underlying failure, only ever filled in by development-mode servers.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error:   Option<String>,
}

impl Envelope {
  pub fn success(message: impl Into<String>) -> Self {
    Self { success: true, message: message.into(), errors: None, error: None }
  }

  pub fn failure(message: impl Into<String>) -> Self {
    Self { success: false, message: message.into(), errors: None, error: None }
  }
}

/// Attached to the extensions of every 500 response built from an
/// [`ApiError`]. The public body never includes `detail`; a server running in
/// development mode may swap it in (see `libris-server`).
#[derive(Debug, Clone)]
pub struct ErrorDetail {
  pub envelope: Envelope,
  pub detail:   String,
}

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Core(#[from] libris_core::Error),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("route not found")]
  RouteNotFound,
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    ApiError::BadRequest(format!("Invalid book id: {}", rejection.body_text()))
  }
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    use libris_core::Error as E;
    match self {
      ApiError::Core(E::Validation(_)) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Core(E::NotFound(_)) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
      ApiError::Core(E::Conflict(_)) => StatusCode::CONFLICT,
      ApiError::Core(E::StorageUnavailable(_) | E::Internal(_)) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  pub fn envelope(&self) -> Envelope {
    use libris_core::Error as E;
    match self {
      ApiError::Core(E::Validation(errors)) => Envelope {
        errors: Some(errors.iter().map(ToString::to_string).collect()),
        ..Envelope::failure("Validation failed")
      },
      ApiError::Core(E::NotFound(_)) => Envelope::failure("Book not found"),
      ApiError::Core(E::Conflict(msg)) => Envelope::failure(msg.clone()),
      ApiError::Core(E::StorageUnavailable(_) | E::Internal(_)) => {
        Envelope::failure("Internal server error")
      }
      ApiError::BadRequest(msg) => Envelope::failure(msg.clone()),
      ApiError::RouteNotFound => Envelope::failure("Route not found"),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let envelope = self.envelope();

    match &self {
      ApiError::Core(e) if e.is_internal() => {
        tracing::error!(error = %e, "request failed");
        let detail = ErrorDetail { envelope: envelope.clone(), detail: e.to_string() };
        let mut res = (status, Json(envelope)).into_response();
        res.extensions_mut().insert(detail);
        res
      }
      _ => (status, Json(envelope)).into_response(),
    }
  }
}

/// Fallback handler for unmatched routes.
pub async fn route_not_found() -> ApiError { ApiError::RouteNotFound }
