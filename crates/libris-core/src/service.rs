//! [`BookService`]: the five catalog operations plus bootstrap seeding.
//!
//! Both the JSON API and the HTML views call into this type; neither repeats
//! its validation or talks to the store on its own.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
  book::{Book, BookInput},
  error::{Error, Result},
  seed::sample_books,
  store::BookStore,
};

/// Validates input and drives a [`BookStore`].
///
/// Cloning is cheap; the store handle is reference-counted.
pub struct BookService<S> {
  store: Arc<S>,
}

impl<S> Clone for BookService<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store) }
  }
}

impl<S> BookService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }
}

impl<S> BookService<S>
where
  S: BookStore,
  Error: From<S::Error>,
{
  /// All books, by id ascending. An empty catalog is not an error.
  pub async fn list(&self) -> Result<Vec<Book>> {
    Ok(self.store.list_books().await?)
  }

  pub async fn get(&self, id: i64) -> Result<Book> {
    self.store.get_book(id).await?.ok_or(Error::NotFound(id))
  }

  /// Validate `input` and persist it as a new book.
  ///
  /// Fails with [`Error::Validation`] before touching the store, and with
  /// [`Error::Conflict`] if the isbn is already taken.
  pub async fn create(&self, input: &BookInput) -> Result<Book> {
    let fields = input.validate()?;
    let book = self.store.insert_book(fields).await?;
    debug!(id = book.id, title = %book.title, "book created");
    Ok(book)
  }

  /// Replace every editable field of book `id`.
  pub async fn update(&self, id: i64, input: &BookInput) -> Result<Book> {
    let fields = input.validate()?;
    let book = self
      .store
      .update_book(id, fields)
      .await?
      .ok_or(Error::NotFound(id))?;
    debug!(id, "book updated");
    Ok(book)
  }

  pub async fn delete(&self, id: i64) -> Result<()> {
    if !self.store.delete_book(id).await? {
      return Err(Error::NotFound(id));
    }
    debug!(id, "book deleted");
    Ok(())
  }

  pub async fn count(&self) -> Result<u64> {
    Ok(self.store.count_books().await?)
  }

  /// Insert the starter catalog if, and only if, the store is empty.
  ///
  /// Returns the number of books inserted. Starter books whose isbn is
  /// already present are skipped.
  pub async fn seed_if_empty(&self) -> Result<usize> {
    let existing = self.count().await?;
    if existing > 0 {
      info!(existing, "catalog already contains data, skipping sample seed");
      return Ok(0);
    }

    let mut inserted = 0;
    for fields in sample_books() {
      match self.store.insert_book(fields).await.map_err(Error::from) {
        Ok(_) => inserted += 1,
        Err(Error::Conflict(msg)) => debug!(%msg, "sample book skipped"),
        Err(e) => return Err(e),
      }
    }

    info!(inserted, "sample catalog inserted");
    Ok(inserted)
  }
}
