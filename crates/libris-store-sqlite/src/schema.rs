//! SQL schema for the Libris SQLite store.
//!
//! Executed once at connection startup. There are no migrations; the table is
//! created if absent and otherwise left alone.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids from ever being reused after a delete.
-- isbn is NULL when absent; SQLite allows any number of NULLs under UNIQUE.
CREATE TABLE IF NOT EXISTS books (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    title            TEXT    NOT NULL,
    author           TEXT    NOT NULL,
    isbn             TEXT    UNIQUE,
    publication_year INTEGER,
    genre            TEXT,
    created_at       TEXT    NOT NULL,   -- RFC 3339 UTC, fixed width
    updated_at       TEXT    NOT NULL
);

PRAGMA user_version = 1;
";

/// Column list shared by every query that decodes a full book row.
pub const BOOK_COLUMNS: &str =
  "id, title, author, isbn, publication_year, genre, created_at, updated_at";
