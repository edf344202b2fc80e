//! HTTP server for Libris: HTML views, the JSON API, and the surrounding
//! middleware.
//!
//! Exposes an axum [`Router`] over any [`BookStore`]; the `server` binary
//! wires it to [`libris_store_sqlite::SqliteStore`].

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod settings;
pub mod views;

pub use settings::{Environment, ServerConfig};

use std::sync::Arc;

use axum::{
  Router,
  http::{HeaderValue, header},
  routing::get,
};
use libris_core::{BookService, BookStore};
use tower_http::{
  catch_panic::CatchPanicLayer,
  cors::CorsLayer,
  set_header::SetResponseHeaderLayer,
  trace::TraceLayer,
};

use handlers::{books, health, home};

// ─── Application state ────────────────────────────────────────────────────────

/// Everything the router needs, built once at startup.
pub struct AppState<S> {
  pub books:  BookService<S>,
  pub config: Arc<ServerConfig>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self { books: self.books.clone(), config: Arc::clone(&self.config) }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application [`Router`].
pub fn router<S>(state: AppState<S>) -> Router
where
  S: BookStore + 'static,
  libris_core::Error: From<S::Error>,
{
  let environment = state.config.environment;

  let pages = Router::new()
    .route("/",                get(home::index))
    .route("/books",           get(books::index::<S>).post(books::create::<S>))
    .route("/books/new",       get(books::new_form))
    .route(
      "/books/{id}",
      get(books::show::<S>)
        .put(books::update::<S>)
        .delete(books::destroy::<S>)
        .post(books::method_override::<S>),
    )
    .route("/books/{id}/edit", get(books::edit_form::<S>))
    .with_state(state.books.clone());

  let mut app = Router::new()
    .merge(pages)
    .route("/health", get(health::handler))
    .nest("/api", libris_api::api_router(state.books))
    .fallback(libris_api::route_not_found)
    .method_not_allowed_fallback(libris_api::route_not_found);

  if environment.is_development() {
    app = app.layer(axum::middleware::from_fn(middleware::expose_error_detail));
  }

  app
    .layer(CatchPanicLayer::custom(middleware::panic_response(environment)))
    .layer(SetResponseHeaderLayer::if_not_present(
      header::X_CONTENT_TYPE_OPTIONS,
      HeaderValue::from_static("nosniff"),
    ))
    .layer(SetResponseHeaderLayer::if_not_present(
      header::X_FRAME_OPTIONS,
      HeaderValue::from_static("SAMEORIGIN"),
    ))
    .layer(SetResponseHeaderLayer::if_not_present(
      header::REFERRER_POLICY,
      HeaderValue::from_static("no-referrer"),
    ))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
