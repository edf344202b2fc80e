//! Error type for `libris-store-sqlite`, and its classification into the
//! core taxonomy.

use rusqlite::{ErrorCode, ffi};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
  fn sqlite_failure(&self) -> Option<&ffi::Error> {
    match self {
      Error::Database(tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
        failure,
        _,
      ))) => Some(failure),
      _ => None,
    }
  }

  /// A write tripped the `UNIQUE` constraint on `books.isbn`.
  pub fn is_unique_violation(&self) -> bool {
    self.sqlite_failure().is_some_and(|f| {
      f.code == ErrorCode::ConstraintViolation
        && f.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    })
  }

  /// The database could not be reached: closed handle, lock contention, or
  /// the file could not be opened or read.
  pub fn is_unavailable(&self) -> bool {
    if matches!(self, Error::Database(tokio_rusqlite::Error::ConnectionClosed)) {
      return true;
    }
    self.sqlite_failure().is_some_and(|f| {
      matches!(
        f.code,
        ErrorCode::DatabaseBusy
          | ErrorCode::DatabaseLocked
          | ErrorCode::CannotOpen
          | ErrorCode::SystemIoFailure
          | ErrorCode::NotADatabase
      )
    })
  }
}

impl From<Error> for libris_core::Error {
  fn from(e: Error) -> Self {
    if e.is_unique_violation() {
      libris_core::Error::Conflict("A book with this ISBN already exists".to_owned())
    } else if e.is_unavailable() {
      libris_core::Error::StorageUnavailable(Box::new(e))
    } else {
      libris_core::Error::Internal(Box::new(e))
    }
  }
}
