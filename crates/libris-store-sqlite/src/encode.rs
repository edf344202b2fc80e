//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings with microsecond
//! precision, so text comparison in SQL agrees with chronological order.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use libris_core::Book;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

/// The current time, truncated to the precision the store keeps.
pub fn now() -> DateTime<Utc> { Utc::now().trunc_subsecs(6) }

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `books` row, in `BOOK_COLUMNS` order.
pub struct RawBook {
  pub id:               i64,
  pub title:            String,
  pub author:           String,
  pub isbn:             Option<String>,
  pub publication_year: Option<i32>,
  pub genre:            Option<String>,
  pub created_at:       String,
  pub updated_at:       String,
}

impl RawBook {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawBook {
      id:               row.get(0)?,
      title:            row.get(1)?,
      author:           row.get(2)?,
      isbn:             row.get(3)?,
      publication_year: row.get(4)?,
      genre:            row.get(5)?,
      created_at:       row.get(6)?,
      updated_at:       row.get(7)?,
    })
  }

  pub fn into_book(self) -> Result<Book> {
    Ok(Book {
      id:               self.id,
      title:            self.title,
      author:           self.author,
      isbn:             self.isbn,
      publication_year: self.publication_year,
      genre:            self.genre,
      created_at:       decode_dt(&self.created_at)?,
      updated_at:       decode_dt(&self.updated_at)?,
    })
  }
}
