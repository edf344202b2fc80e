//! Handlers for `/books` endpoints.
//!
//! | Method   | Path          | Notes |
//! |----------|---------------|-------|
//! | `GET`    | `/books`      | All books, by id |
//! | `POST`   | `/books`      | Body: [`BookInput`]; returns 201 + stored book |
//! | `GET`    | `/books/{id}` | 404 if not found |
//! | `PUT`    | `/books/{id}` | Whole-record replace; body: [`BookInput`] |
//! | `DELETE` | `/books/{id}` | Returns a success envelope |

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use libris_core::{Book, BookInput, BookService, BookStore};

use crate::{
  error::{ApiError, Envelope},
  extract::{BookId, JsonBody},
};

/// `GET /books`
pub async fn list<S>(
  State(service): State<BookService<S>>,
) -> Result<Json<Vec<Book>>, ApiError>
where
  S: BookStore + 'static,
  libris_core::Error: From<S::Error>,
{
  Ok(Json(service.list().await?))
}

/// `GET /books/{id}`
pub async fn get_one<S>(
  State(service): State<BookService<S>>,
  BookId(id): BookId,
) -> Result<Json<Book>, ApiError>
where
  S: BookStore + 'static,
  libris_core::Error: From<S::Error>,
{
  Ok(Json(service.get(id).await?))
}

/// `POST /books`
pub async fn create<S>(
  State(service): State<BookService<S>>,
  JsonBody(body): JsonBody<BookInput>,
) -> Result<impl IntoResponse, ApiError>
where
  S: BookStore + 'static,
  libris_core::Error: From<S::Error>,
{
  let book = service.create(&body).await?;
  Ok((StatusCode::CREATED, Json(book)))
}

/// `PUT /books/{id}`
pub async fn update<S>(
  State(service): State<BookService<S>>,
  BookId(id): BookId,
  JsonBody(body): JsonBody<BookInput>,
) -> Result<Json<Book>, ApiError>
where
  S: BookStore + 'static,
  libris_core::Error: From<S::Error>,
{
  Ok(Json(service.update(id, &body).await?))
}

/// `DELETE /books/{id}`
pub async fn delete_one<S>(
  State(service): State<BookService<S>>,
  BookId(id): BookId,
) -> Result<Json<Envelope>, ApiError>
where
  S: BookStore + 'static,
  libris_core::Error: From<S::Error>,
{
  service.delete(id).await?;
  Ok(Json(Envelope::success("Book deleted successfully")))
}
