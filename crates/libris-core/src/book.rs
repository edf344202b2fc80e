//! The Book record, its wire-level input shape, and input validation.
//!
//! Request bodies arrive as a [`BookInput`] in which every field is optional.
//! [`BookInput::validate`] turns it into [`BookFields`], the trimmed and
//! checked set of editable fields that the store accepts. Nothing reaches the
//! store without passing through validation first.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, FieldError, Result};

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_AUTHOR_LEN: usize = 255;
pub const MAX_ISBN_LEN: usize = 20;
pub const MAX_GENRE_LEN: usize = 100;
pub const MIN_PUBLICATION_YEAR: i64 = 0;

// ─── Stored record ───────────────────────────────────────────────────────────

/// A persisted book. `id`, `created_at` and `updated_at` are assigned by the
/// store and never supplied by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
  pub id:               i64,
  pub title:            String,
  pub author:           String,
  pub isbn:             Option<String>,
  pub publication_year: Option<i32>,
  pub genre:            Option<String>,
  pub created_at:       DateTime<Utc>,
  pub updated_at:       DateTime<Utc>,
}

impl Book {
  /// The user-editable part of this record.
  pub fn fields(&self) -> BookFields {
    BookFields {
      title:            self.title.clone(),
      author:           self.author.clone(),
      isbn:             self.isbn.clone(),
      publication_year: self.publication_year,
      genre:            self.genre.clone(),
    }
  }
}

/// Validated editable fields. Empty optional strings have already been
/// collapsed to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
  pub title:            String,
  pub author:           String,
  pub isbn:             Option<String>,
  pub publication_year: Option<i32>,
  pub genre:            Option<String>,
}

// ─── Input ───────────────────────────────────────────────────────────────────

/// A publication year as submitted: JSON clients send numbers, HTML forms send
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
  Number(i64),
  Text(String),
}

/// Raw create/update body accepted by both the JSON API and the HTML forms.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
  pub title:            Option<String>,
  pub author:           Option<String>,
  pub isbn:             Option<String>,
  #[serde(alias = "publication_year")]
  pub publication_year: Option<YearInput>,
  pub genre:            Option<String>,
}

impl From<BookFields> for BookInput {
  fn from(f: BookFields) -> Self {
    BookInput {
      title:            Some(f.title),
      author:           Some(f.author),
      isbn:             f.isbn,
      publication_year: f.publication_year.map(|y| YearInput::Number(y.into())),
      genre:            f.genre,
    }
  }
}

impl BookInput {
  /// Validate against the current calendar year.
  pub fn validate(&self) -> Result<BookFields> {
    self.validate_as_of(Utc::now().year())
  }

  /// Validate every field, collecting all violations rather than stopping at
  /// the first one.
  pub fn validate_as_of(&self, current_year: i32) -> Result<BookFields> {
    let mut errors = Vec::new();

    let title = required_text(&mut errors, "title", self.title.as_deref(), MAX_TITLE_LEN);
    let author = required_text(&mut errors, "author", self.author.as_deref(), MAX_AUTHOR_LEN);
    let isbn = isbn(&mut errors, self.isbn.as_deref());
    let publication_year =
      publication_year(&mut errors, self.publication_year.as_ref(), current_year);
    let genre = optional_text(&mut errors, "genre", self.genre.as_deref(), MAX_GENRE_LEN);

    match (title, author) {
      (Some(title), Some(author)) if errors.is_empty() => Ok(BookFields {
        title,
        author,
        isbn,
        publication_year,
        genre,
      }),
      _ => Err(Error::Validation(errors)),
    }
  }
}

// ─── Field checks ────────────────────────────────────────────────────────────

fn trimmed(value: Option<&str>) -> Option<&str> {
  value.map(str::trim).filter(|s| !s.is_empty())
}

fn required_text(
  errors: &mut Vec<FieldError>,
  field:  &'static str,
  value:  Option<&str>,
  max:    usize,
) -> Option<String> {
  let Some(value) = trimmed(value) else {
    errors.push(FieldError::new(field, format!("{field} is required")));
    return None;
  };
  if value.chars().count() > max {
    errors.push(FieldError::new(
      field,
      format!("{field} must be at most {max} characters"),
    ));
    return None;
  }
  Some(value.to_owned())
}

fn optional_text(
  errors: &mut Vec<FieldError>,
  field:  &'static str,
  value:  Option<&str>,
  max:    usize,
) -> Option<String> {
  let value = trimmed(value)?;
  if value.chars().count() > max {
    errors.push(FieldError::new(
      field,
      format!("{field} must be at most {max} characters"),
    ));
    return None;
  }
  Some(value.to_owned())
}

/// An empty isbn counts as absent, so it can never collide with another book.
fn isbn(errors: &mut Vec<FieldError>, value: Option<&str>) -> Option<String> {
  let value = optional_text(errors, "isbn", value, MAX_ISBN_LEN)?;

  let body = value
    .strip_suffix(['X', 'x'])
    .unwrap_or(&value);
  let well_formed = body.chars().all(|c| c.is_ascii_digit() || c == '-')
    && value.chars().any(|c| c.is_ascii_digit());

  if !well_formed {
    errors.push(FieldError::new(
      "isbn",
      "isbn may only contain digits, hyphens and a trailing X",
    ));
    return None;
  }
  Some(value)
}

fn publication_year(
  errors:       &mut Vec<FieldError>,
  value:        Option<&YearInput>,
  current_year: i32,
) -> Option<i32> {
  let year = match value? {
    YearInput::Number(n) => *n,
    YearInput::Text(s) => {
      let s = s.trim();
      if s.is_empty() {
        return None;
      }
      match s.parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
          errors.push(FieldError::new(
            "publicationYear",
            "publicationYear must be a whole number",
          ));
          return None;
        }
      }
    }
  };

  if !(MIN_PUBLICATION_YEAR..=i64::from(current_year)).contains(&year) {
    errors.push(FieldError::new(
      "publicationYear",
      format!("publicationYear must be between {MIN_PUBLICATION_YEAR} and {current_year}"),
    ));
    return None;
  }
  i32::try_from(year).ok()
}
