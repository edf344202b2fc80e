//! The `BookStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `libris-store-sqlite`).
//! Higher layers (`libris-api`, `libris-server`) reach it only through
//! [`BookService`](crate::service::BookService), never directly.

use std::future::Future;

use crate::book::{Book, BookFields};

/// Abstraction over a book catalog backend.
///
/// Implementations perform no validation of their own: every `BookFields`
/// they receive has already been checked. They are, however, the only
/// authority on uniqueness: a duplicate isbn must be rejected by the backend
/// itself so that racing writers cannot both succeed.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait BookStore: Send + Sync {
  /// Backend error. It must classify into the core taxonomy, which is where
  /// constraint violations become [`Error::Conflict`](crate::Error::Conflict)
  /// and connectivity failures become
  /// [`Error::StorageUnavailable`](crate::Error::StorageUnavailable).
  type Error: std::error::Error + Send + Sync + 'static;

  /// All books, ordered by id ascending.
  fn list_books(&self) -> impl Future<Output = Result<Vec<Book>, Self::Error>> + Send + '_;

  /// Retrieve a book by id. Returns `None` if not found.
  fn get_book(&self, id: i64) -> impl Future<Output = Result<Option<Book>, Self::Error>> + Send + '_;

  /// Persist a new book. The store assigns `id`, `created_at` and
  /// `updated_at`.
  fn insert_book(
    &self,
    fields: BookFields,
  ) -> impl Future<Output = Result<Book, Self::Error>> + Send + '_;

  /// Replace every editable field of book `id` and refresh `updated_at`.
  /// Returns `None` if no such book exists.
  fn update_book(
    &self,
    id: i64,
    fields: BookFields,
  ) -> impl Future<Output = Result<Option<Book>, Self::Error>> + Send + '_;

  /// Hard-delete book `id`. Returns `false` if no such book existed.
  fn delete_book(&self, id: i64) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Number of stored books.
  fn count_books(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
