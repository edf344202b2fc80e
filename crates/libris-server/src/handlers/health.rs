//! Liveness probe. Always 200; it does not touch the store.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Health {
  pub status:    &'static str,
  pub timestamp: String,
}

/// `GET /health`
pub async fn handler() -> Json<Health> {
  Json(Health {
    status:    "OK",
    timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
  })
}
