//! HTML handlers for `/books`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/books` | Table of all books; storage failures become an alert, not an error status |
//! | `GET`  | `/books/new` | Empty form |
//! | `POST` | `/books` | Create, then redirect to the list |
//! | `GET`  | `/books/{id}` | Detail page |
//! | `GET`  | `/books/{id}/edit` | Prefilled form |
//! | `PUT`  | `/books/{id}` | Update, then redirect to the detail page |
//! | `DELETE` | `/books/{id}` | Delete, then redirect to the list |
//! | `POST` | `/books/{id}?_method=PUT\|DELETE` | Method override for browser forms |
//!
//! Failed form submissions re-render the form with the errors listed and the
//! status code the JSON API would have used for the same failure.

use axum::{
  Form,
  extract::{Query, State},
  http::StatusCode,
  response::{Html, IntoResponse, Redirect, Response},
};
use chrono::{Datelike, Utc};
use libris_core::{BookInput, BookService, BookStore, Error};
use serde::Deserialize;
use tracing::error;

use crate::{
  extract::{BookPath, PageNotFound},
  views::{self, Flash, books::FormMode},
};

fn current_year() -> i32 { Utc::now().year() }

fn storage_failure_page(err: &Error) -> Response {
  error!(error = %err, "book page failed");
  (
    StatusCode::INTERNAL_SERVER_ERROR,
    Html(views::error_page("The book catalog is unavailable right now. Please try again later.")),
  )
    .into_response()
}

fn not_found_page() -> Response { PageNotFound.into_response() }

/// Re-render a form after a failed submission.
fn form_failure(mode: FormMode, input: &BookInput, err: Error) -> Response {
  let (status, messages) = match err {
    Error::Validation(errors) => (
      StatusCode::BAD_REQUEST,
      errors.iter().map(ToString::to_string).collect(),
    ),
    Error::Conflict(msg) => (StatusCode::CONFLICT, vec![msg]),
    Error::NotFound(_) => return not_found_page(),
    other => {
      error!(error = %other, "saving book failed");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        vec!["The book could not be saved. Please try again.".to_owned()],
      )
    }
  };
  (status, Html(views::books::form(mode, input, &messages, current_year()))).into_response()
}

// ─── Reads ───────────────────────────────────────────────────────────────────

/// `GET /books`
pub async fn index<S>(
  State(books): State<BookService<S>>,
  Query(flash): Query<Flash>,
) -> Html<String>
where
  S: BookStore + 'static,
  Error: From<S::Error>,
{
  match books.list().await {
    Ok(list) => Html(views::books::index(&list, &flash)),
    Err(e) => {
      error!(error = %e, "listing books failed");
      Html(views::books::index(&[], &Flash::error("Error loading books")))
    }
  }
}

/// `GET /books/{id}`
pub async fn show<S>(
  State(books): State<BookService<S>>,
  BookPath(id): BookPath,
  Query(flash): Query<Flash>,
) -> Response
where
  S: BookStore + 'static,
  Error: From<S::Error>,
{
  match books.get(id).await {
    Ok(book) => Html(views::books::show(&book, &flash)).into_response(),
    Err(Error::NotFound(_)) => not_found_page(),
    Err(e) => storage_failure_page(&e),
  }
}

/// `GET /books/new`
pub async fn new_form() -> Html<String> {
  Html(views::books::form(FormMode::New, &BookInput::default(), &[], current_year()))
}

/// `GET /books/{id}/edit`
pub async fn edit_form<S>(
  State(books): State<BookService<S>>,
  BookPath(id): BookPath,
) -> Response
where
  S: BookStore + 'static,
  Error: From<S::Error>,
{
  match books.get(id).await {
    Ok(book) => {
      let input = BookInput::from(book.fields());
      Html(views::books::form(FormMode::Edit(id), &input, &[], current_year())).into_response()
    }
    Err(Error::NotFound(_)) => not_found_page(),
    Err(e) => storage_failure_page(&e),
  }
}

// ─── Writes ──────────────────────────────────────────────────────────────────

/// `POST /books`
pub async fn create<S>(
  State(books): State<BookService<S>>,
  Form(input): Form<BookInput>,
) -> Response
where
  S: BookStore + 'static,
  Error: From<S::Error>,
{
  match books.create(&input).await {
    Ok(_) => Redirect::to("/books?success=Book+created+successfully").into_response(),
    Err(e) => form_failure(FormMode::New, &input, e),
  }
}

/// `PUT /books/{id}`
pub async fn update<S>(
  State(books): State<BookService<S>>,
  BookPath(id): BookPath,
  Form(input): Form<BookInput>,
) -> Response
where
  S: BookStore + 'static,
  Error: From<S::Error>,
{
  apply_update(&books, id, &input).await
}

/// `DELETE /books/{id}`
pub async fn destroy<S>(
  State(books): State<BookService<S>>,
  BookPath(id): BookPath,
) -> Response
where
  S: BookStore + 'static,
  Error: From<S::Error>,
{
  apply_delete(&books, id).await
}

#[derive(Debug, Deserialize)]
pub struct MethodOverride {
  #[serde(rename = "_method")]
  pub method: Option<String>,
}

/// `POST /books/{id}?_method=PUT|DELETE`
///
/// Browsers can only submit forms with GET or POST; the intended verb rides
/// along in the query string.
pub async fn method_override<S>(
  State(books): State<BookService<S>>,
  BookPath(id): BookPath,
  Query(overridden): Query<MethodOverride>,
  Form(input): Form<BookInput>,
) -> Response
where
  S: BookStore + 'static,
  Error: From<S::Error>,
{
  let method = overridden.method.map(|m| m.to_ascii_uppercase());
  match method.as_deref() {
    Some("PUT") => apply_update(&books, id, &input).await,
    Some("DELETE") => apply_delete(&books, id).await,
    _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
  }
}

async fn apply_update<S>(books: &BookService<S>, id: i64, input: &BookInput) -> Response
where
  S: BookStore + 'static,
  Error: From<S::Error>,
{
  match books.update(id, input).await {
    Ok(book) => {
      Redirect::to(&format!("/books/{}?success=Book+updated+successfully", book.id))
        .into_response()
    }
    Err(e) => form_failure(FormMode::Edit(id), input, e),
  }
}

async fn apply_delete<S>(books: &BookService<S>, id: i64) -> Response
where
  S: BookStore + 'static,
  Error: From<S::Error>,
{
  match books.delete(id).await {
    Ok(()) => Redirect::to("/books?success=Book+deleted+successfully").into_response(),
    Err(Error::NotFound(_)) => Redirect::to("/books?error=Book+not+found").into_response(),
    Err(e) => {
      error!(error = %e, id, "deleting book failed");
      Redirect::to("/books?error=Error+deleting+book").into_response()
    }
  }
}
