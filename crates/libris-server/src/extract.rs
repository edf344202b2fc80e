//! Extractors for the HTML routes, whose rejections render pages instead of
//! JSON envelopes.

use axum::{
  extract::{FromRequestParts, Path, rejection::PathRejection},
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::views;

/// Rendered as the "Book not found" page.
#[derive(Debug)]
pub struct PageNotFound;

impl From<PathRejection> for PageNotFound {
  fn from(_: PathRejection) -> Self { PageNotFound }
}

impl IntoResponse for PageNotFound {
  fn into_response(self) -> Response {
    (StatusCode::NOT_FOUND, Html(views::not_found())).into_response()
  }
}

/// The `{id}` segment of a `/books/{id}` page. Anything that is not an
/// integer id cannot name a book, so it gets the not-found page.
#[derive(Debug, Deserialize, FromRequestParts)]
#[serde(transparent)]
#[from_request(via(Path), rejection(PageNotFound))]
pub struct BookPath(pub i64);
