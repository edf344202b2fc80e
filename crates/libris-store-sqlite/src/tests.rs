//! Integration tests for `SqliteStore` against an in-memory database, both
//! directly and through `BookService`.

use std::sync::Arc;

use libris_core::{
  BookFields, BookInput, BookService, BookStore, Error as CoreError, YearInput,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

async fn service() -> BookService<SqliteStore> {
  BookService::new(Arc::new(store().await))
}

fn fields(title: &str, isbn: Option<&str>) -> BookFields {
  BookFields {
    title:            title.into(),
    author:           "Frank Herbert".into(),
    isbn:             isbn.map(Into::into),
    publication_year: Some(1965),
    genre:            Some("Science Fiction".into()),
  }
}

fn dune() -> BookInput {
  BookInput {
    title:            Some("Dune".into()),
    author:           Some("Frank Herbert".into()),
    isbn:             Some("9780441013593".into()),
    publication_year: Some(YearInput::Number(1965)),
    genre:            None,
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get_book() {
  let s = store().await;

  let book = s.insert_book(fields("Dune", Some("9780441013593"))).await.unwrap();
  assert!(book.id > 0);
  assert_eq!(book.created_at, book.updated_at);

  let fetched = s.get_book(book.id).await.unwrap().expect("stored book");
  assert_eq!(fetched, book);
}

#[tokio::test]
async fn get_book_missing_returns_none() {
  let s = store().await;
  assert!(s.get_book(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn list_books_is_ordered_by_id() {
  let s = store().await;
  assert!(s.list_books().await.unwrap().is_empty());

  for title in ["C", "A", "B"] {
    s.insert_book(fields(title, None)).await.unwrap();
  }

  let books = s.list_books().await.unwrap();
  let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
  assert_eq!(titles, ["C", "A", "B"]);
  assert!(books.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn duplicate_isbn_is_a_unique_violation() {
  let s = store().await;
  s.insert_book(fields("Dune", Some("9780441013593"))).await.unwrap();

  let err = s
    .insert_book(fields("Dune again", Some("9780441013593")))
    .await
    .unwrap_err();
  assert!(err.is_unique_violation(), "{err}");
  assert!(matches!(CoreError::from(err), CoreError::Conflict(_)));
}

#[tokio::test]
async fn many_books_without_isbn_never_conflict() {
  let s = store().await;
  for i in 0..3 {
    s.insert_book(fields(&format!("Untitled {i}"), None)).await.unwrap();
  }
  assert_eq!(s.count_books().await.unwrap(), 3);
}

#[tokio::test]
async fn update_refreshes_updated_at_only() {
  let s = store().await;
  let book = s.insert_book(fields("Dune", None)).await.unwrap();

  let updated = s
    .update_book(book.id, fields("Dune Messiah", None))
    .await
    .unwrap()
    .expect("existing book");
  assert_eq!(updated.id, book.id);
  assert_eq!(updated.title, "Dune Messiah");
  assert_eq!(updated.created_at, book.created_at);
  assert!(updated.updated_at >= updated.created_at);
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = store().await;
  assert!(s.update_book(42, fields("Dune", None)).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
  let s = store().await;
  let book = s.insert_book(fields("Dune", None)).await.unwrap();

  assert!(s.delete_book(book.id).await.unwrap());
  assert!(!s.delete_book(book.id).await.unwrap());
  assert!(s.get_book(book.id).await.unwrap().is_none());
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
  let s = store().await;
  let first = s.insert_book(fields("First", None)).await.unwrap();
  let second = s.insert_book(fields("Second", None)).await.unwrap();
  s.delete_book(second.id).await.unwrap();

  let third = s.insert_book(fields("Third", None)).await.unwrap();
  assert!(third.id > second.id);
  assert!(second.id > first.id);
}

#[tokio::test]
async fn closed_store_is_unavailable() {
  let s = store().await;
  let handle = s.clone();
  s.close().await.unwrap();

  let err = handle.list_books().await.unwrap_err();
  assert!(err.is_unavailable(), "{err}");
  assert!(matches!(
    CoreError::from(err),
    CoreError::StorageUnavailable(_)
  ));
}

#[tokio::test]
async fn reopening_a_file_keeps_existing_rows() {
  let dir = std::env::temp_dir().join(format!("libris-store-{}", std::process::id()));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("reopen.db");
  let _ = std::fs::remove_file(&path);

  let s = SqliteStore::open(&path).await.unwrap();
  let book = s.insert_book(fields("Dune", None)).await.unwrap();
  s.close().await.unwrap();

  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.get_book(book.id).await.unwrap(), Some(book));
  s.close().await.unwrap();
  let _ = std::fs::remove_dir_all(&dir);
}

// ─── Service ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_returns_supplied_fields() {
  let svc = service().await;

  let created = svc.create(&dune()).await.unwrap();
  let fetched = svc.get(created.id).await.unwrap();

  assert_eq!(fetched.title, "Dune");
  assert_eq!(fetched.author, "Frank Herbert");
  assert_eq!(fetched.isbn.as_deref(), Some("9780441013593"));
  assert_eq!(fetched.publication_year, Some(1965));
  assert_eq!(fetched.genre, None);
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn missing_ids_are_not_found_everywhere() {
  let svc = service().await;

  assert!(matches!(svc.get(9999).await, Err(CoreError::NotFound(9999))));
  assert!(matches!(
    svc.update(9999, &dune()).await,
    Err(CoreError::NotFound(9999))
  ));
  assert!(matches!(svc.delete(9999).await, Err(CoreError::NotFound(9999))));
}

#[tokio::test]
async fn create_with_taken_isbn_conflicts() {
  let svc = service().await;
  svc.create(&dune()).await.unwrap();

  let mut again = dune();
  again.title = Some("Dune (reprint)".into());
  assert!(matches!(svc.create(&again).await, Err(CoreError::Conflict(_))));
  assert_eq!(svc.count().await.unwrap(), 1);
}

#[tokio::test]
async fn create_with_empty_isbn_never_conflicts() {
  let svc = service().await;
  for isbn in [None, Some(String::new()), Some("   ".to_owned())] {
    let mut input = dune();
    input.isbn = isbn;
    let book = svc.create(&input).await.unwrap();
    assert_eq!(book.isbn, None);
  }
  assert_eq!(svc.count().await.unwrap(), 3);
}

#[tokio::test]
async fn update_into_another_books_isbn_conflicts() {
  let svc = service().await;
  svc.create(&dune()).await.unwrap();

  let mut other = dune();
  other.title = Some("Children of Dune".into());
  other.isbn = Some("9780441104024".into());
  let other = svc.create(&other).await.unwrap();

  let mut clash = dune();
  clash.title = Some("Children of Dune".into());
  assert!(matches!(
    svc.update(other.id, &clash).await,
    Err(CoreError::Conflict(_))
  ));

  // Re-saving a book with its own isbn is not a conflict.
  let mut same = dune();
  same.title = Some("Children of Dune".into());
  same.isbn = Some("9780441104024".into());
  assert!(svc.update(other.id, &same).await.is_ok());
}

#[tokio::test]
async fn blank_update_is_rejected_and_leaves_record_unchanged() {
  let svc = service().await;
  let book = svc.create(&dune()).await.unwrap();

  for (title, author) in [("", "Frank Herbert"), ("Dune", "  ")] {
    let mut input = dune();
    input.title = Some(title.into());
    input.author = Some(author.into());
    assert!(matches!(
      svc.update(book.id, &input).await,
      Err(CoreError::Validation(_))
    ));
  }

  assert_eq!(svc.get(book.id).await.unwrap(), book);
}

#[tokio::test]
async fn update_replaces_every_editable_field() {
  let svc = service().await;
  let mut input = dune();
  input.genre = Some("Science Fiction".into());
  let book = svc.create(&input).await.unwrap();

  let replacement = BookInput {
    title:  Some("Dune".into()),
    author: Some("Frank Herbert".into()),
    ..Default::default()
  };
  let updated = svc.update(book.id, &replacement).await.unwrap();
  assert_eq!(updated.isbn, None);
  assert_eq!(updated.publication_year, None);
  assert_eq!(updated.genre, None);
  assert!(updated.updated_at >= book.updated_at);
}

#[tokio::test]
async fn deleted_ids_never_reappear() {
  let svc = service().await;
  let book = svc.create(&dune()).await.unwrap();
  svc.delete(book.id).await.unwrap();

  assert!(matches!(svc.get(book.id).await, Err(CoreError::NotFound(_))));

  let mut next = dune();
  next.isbn = None;
  svc.create(&next).await.unwrap();
  assert!(svc.list().await.unwrap().iter().all(|b| b.id != book.id));
}

#[tokio::test]
async fn invalid_input_never_reaches_store() {
  let svc = service().await;
  let input = BookInput {
    title:  Some(String::new()),
    author: Some("X".into()),
    ..Default::default()
  };

  match svc.create(&input).await {
    Err(CoreError::Validation(errors)) => {
      assert!(errors.iter().any(|e| e.field == "title"));
    }
    other => panic!("expected validation error, got {other:?}"),
  }
  assert_eq!(svc.count().await.unwrap(), 0);
}

#[tokio::test]
async fn seeding_is_idempotent() {
  let svc = service().await;

  assert_eq!(svc.seed_if_empty().await.unwrap(), 4);
  assert_eq!(svc.seed_if_empty().await.unwrap(), 0);

  let books = svc.list().await.unwrap();
  assert_eq!(books.len(), 4);
  assert_eq!(books[0].title, "The Great Gatsby");
}

#[tokio::test]
async fn seeding_skips_non_empty_catalog() {
  let svc = service().await;
  svc.create(&dune()).await.unwrap();

  assert_eq!(svc.seed_if_empty().await.unwrap(), 0);
  assert_eq!(svc.count().await.unwrap(), 1);
}

#[tokio::test]
async fn concurrent_creates_with_same_isbn_have_one_winner() {
  let svc = service().await;

  let tasks: Vec<_> = (0..4)
    .map(|_| {
      let svc = svc.clone();
      tokio::spawn(async move { svc.create(&dune()).await })
    })
    .collect();

  let mut created = 0;
  let mut conflicts = 0;
  for task in tasks {
    match task.await.unwrap() {
      Ok(_) => created += 1,
      Err(CoreError::Conflict(_)) => conflicts += 1,
      Err(e) => panic!("unexpected error: {e}"),
    }
  }
  assert_eq!((created, conflicts), (1, 3));
}

#[tokio::test]
async fn service_on_closed_store_is_unavailable() {
  let s = store().await;
  let svc = BookService::new(Arc::new(s.clone()));
  s.close().await.unwrap();

  assert!(matches!(
    svc.list().await,
    Err(CoreError::StorageUnavailable(_))
  ));
}
