//! The error taxonomy shared by every Libris caller.
//!
//! Storage backends translate their own failures into these kinds at the
//! boundary (see [`crate::store::BookStore::Error`]); nothing above the store
//! ever sees a raw database error.

use std::fmt;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A single violated constraint on an input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
  /// Wire name of the offending field, e.g. `"publicationYear"`.
  pub field:   &'static str,
  pub message: String,
}

impl FieldError {
  pub fn new(field: &'static str, message: impl Into<String>) -> Self {
    Self { field, message: message.into() }
  }
}

impl fmt::Display for FieldError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.message)
  }
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("validation failed: {}", join_fields(.0))]
  Validation(Vec<FieldError>),

  #[error("book not found: {0}")]
  NotFound(i64),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("storage unavailable: {0}")]
  StorageUnavailable(#[source] BoxError),

  #[error("internal error: {0}")]
  Internal(#[source] BoxError),
}

impl Error {
  /// True for failures whose details must not be shown to API callers.
  pub fn is_internal(&self) -> bool {
    matches!(self, Self::StorageUnavailable(_) | Self::Internal(_))
  }
}

fn join_fields(errors: &[FieldError]) -> String {
  errors
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join("; ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
