//! Cross-cutting response handling: development-mode error detail and the
//! panic fallback.

use std::any::Any;

use axum::{
  Json,
  extract::Request,
  http::StatusCode,
  middleware::Next,
  response::{IntoResponse, Response},
};
use libris_api::{Envelope, ErrorDetail};

use crate::settings::Environment;

/// Copy the underlying failure into the body of 500 responses. Only layered
/// in when running in development mode.
pub async fn expose_error_detail(req: Request, next: Next) -> Response {
  let mut res = next.run(req).await;
  match res.extensions_mut().remove::<ErrorDetail>() {
    Some(ErrorDetail { mut envelope, detail }) => {
      envelope.error = Some(detail);
      (res.status(), Json(envelope)).into_response()
    }
    None => res,
  }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(s) = payload.downcast_ref::<&str>() {
    (*s).to_owned()
  } else if let Some(s) = payload.downcast_ref::<String>() {
    s.clone()
  } else {
    "unknown panic".to_owned()
  }
}

/// Build the response returned when a handler panics.
pub fn panic_response(
  environment: Environment,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone + Send + Sync + 'static {
  move |payload| {
    let detail = panic_message(payload.as_ref());
    tracing::error!(panic = %detail, "handler panicked");

    let mut envelope = Envelope::failure("Internal server error");
    if environment.is_development() {
      envelope.error = Some(detail);
    }
    (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
  }
}
