//! The fixed starter catalog inserted into an empty store.

use crate::book::BookFields;

const SAMPLES: &[(&str, &str, &str, i32, &str)] = &[
  ("The Great Gatsby", "F. Scott Fitzgerald", "9780743273565", 1925, "Fiction"),
  ("To Kill a Mockingbird", "Harper Lee", "9780061120084", 1960, "Fiction"),
  ("1984", "George Orwell", "9780451524935", 1949, "Dystopian Fiction"),
  ("Pride and Prejudice", "Jane Austen", "9780141439518", 1813, "Romance"),
];

pub fn sample_books() -> Vec<BookFields> {
  SAMPLES
    .iter()
    .map(|&(title, author, isbn, year, genre)| BookFields {
      title:            title.to_owned(),
      author:           author.to_owned(),
      isbn:             Some(isbn.to_owned()),
      publication_year: Some(year),
      genre:            Some(genre.to_owned()),
    })
    .collect()
}
