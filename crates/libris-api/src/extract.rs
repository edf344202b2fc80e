//! Extractors whose rejections come back as [`ApiError`] envelopes instead of
//! axum's plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts, Path};
use serde::Deserialize;

use crate::error::ApiError;

/// The `{id}` segment of a `/books/{id}` path.
#[derive(Debug, Deserialize, FromRequestParts)]
#[serde(transparent)]
#[from_request(via(Path), rejection(ApiError))]
pub struct BookId(pub i64);

/// A JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
