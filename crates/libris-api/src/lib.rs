//! JSON REST API for Libris.
//!
//! Exposes an axum [`Router`] backed by a [`BookService`] over any
//! [`BookStore`]. TLS, CORS and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", libris_api::api_router(service.clone()))
//! ```

pub mod books;
pub mod error;
pub mod extract;

use axum::{Router, routing::get};
use libris_core::{BookService, BookStore};

pub use error::{ApiError, Envelope, ErrorDetail, route_not_found};

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: BookService<S>) -> Router<()>
where
  S: BookStore + 'static,
  libris_core::Error: From<S::Error>,
{
  Router::new()
    .route("/books", get(books::list::<S>).post(books::create::<S>))
    .route(
      "/books/{id}",
      get(books::get_one::<S>)
        .put(books::update::<S>)
        .delete(books::delete_one::<S>),
    )
    .method_not_allowed_fallback(route_not_found)
    .with_state(service)
}
