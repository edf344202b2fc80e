//! Core types and trait definitions for the Libris book catalog.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod book;
pub mod error;
pub mod seed;
pub mod service;
pub mod store;

pub use book::{Book, BookFields, BookInput, YearInput};
pub use error::{BoxError, Error, FieldError, Result};
pub use service::BookService;
pub use store::BookStore;
