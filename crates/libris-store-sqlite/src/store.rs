//! [`SqliteStore`]: the SQLite implementation of [`BookStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use libris_core::{Book, BookFields, BookStore};

use crate::{
  Result,
  encode::{RawBook, encode_dt, now},
  schema::{BOOK_COLUMNS, SCHEMA},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A book catalog backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection.
  ///
  /// Every clone of this store shares the connection, so once this returns
  /// all of them fail with a closed-connection error.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── BookStore impl ──────────────────────────────────────────────────────────

impl BookStore for SqliteStore {
  type Error = crate::Error;

  async fn list_books(&self) -> Result<Vec<Book>> {
    let raws: Vec<RawBook> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {BOOK_COLUMNS} FROM books ORDER BY id"))?;
        let rows = stmt
          .query_map([], RawBook::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawBook::into_book).collect()
  }

  async fn get_book(&self, id: i64) -> Result<Option<Book>> {
    let raw: Option<RawBook> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?1"),
            rusqlite::params![id],
            RawBook::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawBook::into_book).transpose()
  }

  async fn insert_book(&self, fields: BookFields) -> Result<Book> {
    let at_str = encode_dt(now());

    let raw: RawBook = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          &format!(
            "INSERT INTO books (
               title, author, isbn, publication_year, genre, created_at, updated_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
             RETURNING {BOOK_COLUMNS}"
          ),
          rusqlite::params![
            fields.title,
            fields.author,
            fields.isbn,
            fields.publication_year,
            fields.genre,
            at_str,
          ],
          RawBook::from_row,
        )?)
      })
      .await?;

    raw.into_book()
  }

  async fn update_book(&self, id: i64, fields: BookFields) -> Result<Option<Book>> {
    let at_str = encode_dt(now());

    // MAX() keeps updated_at from ever falling behind created_at, even if the
    // wall clock steps backwards between writes.
    let raw: Option<RawBook> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!(
              "UPDATE books SET
                 title            = ?1,
                 author           = ?2,
                 isbn             = ?3,
                 publication_year = ?4,
                 genre            = ?5,
                 updated_at       = MAX(created_at, ?6)
               WHERE id = ?7
               RETURNING {BOOK_COLUMNS}"
            ),
            rusqlite::params![
              fields.title,
              fields.author,
              fields.isbn,
              fields.publication_year,
              fields.genre,
              at_str,
              id,
            ],
            RawBook::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawBook::into_book).transpose()
  }

  async fn delete_book(&self, id: i64) -> Result<bool> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM books WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(affected > 0)
  }

  async fn count_books(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM books", [], |r| r.get(0))?))
      .await?;
    Ok(u64::try_from(count).unwrap_or_default())
  }
}
