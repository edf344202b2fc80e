//! Book list, detail and form pages.

use std::fmt::Write as _;

use libris_core::{Book, BookInput, YearInput, book::MAX_ISBN_LEN};

use super::{Flash, alerts, escape, layout};

fn opt(value: Option<&str>) -> String {
  value.map(escape).unwrap_or_else(|| "&mdash;".to_owned())
}

fn delete_form(book: &Book) -> String {
  format!(
    "<form class=\"inline\" method=\"post\" action=\"/books/{id}?_method=DELETE\" \
     onsubmit=\"return confirm('Delete this book?');\"><button type=\"submit\">Delete</button></form>",
    id = book.id,
  )
}

pub fn index(books: &[Book], flash: &Flash) -> String {
  let mut body = alerts(flash);
  body.push_str("<h1>Books</h1>\n<p><a class=\"button\" href=\"/books/new\">Add New Book</a></p>\n");

  if books.is_empty() {
    body.push_str("<p>No books in the catalog yet.</p>\n");
    return layout("Books", &body);
  }

  body.push_str(
    "<table>\n<thead><tr><th>Title</th><th>Author</th><th>ISBN</th><th>Year</th><th>Genre</th><th></th></tr></thead>\n<tbody>\n",
  );
  for book in books {
    let _ = writeln!(
      body,
      "<tr><td><a href=\"/books/{id}\">{title}</a></td><td>{author}</td><td>{isbn}</td><td>{year}</td><td>{genre}</td>\
       <td><a href=\"/books/{id}/edit\">Edit</a> {delete}</td></tr>",
      id = book.id,
      title = escape(&book.title),
      author = escape(&book.author),
      isbn = opt(book.isbn.as_deref()),
      year = book.publication_year.map(|y| y.to_string()).unwrap_or_else(|| "&mdash;".into()),
      genre = opt(book.genre.as_deref()),
      delete = delete_form(book),
    );
  }
  body.push_str("</tbody>\n</table>\n");

  layout("Books", &body)
}

pub fn show(book: &Book, flash: &Flash) -> String {
  let body = format!(
    "{alerts}<h1>{title}</h1>
<dl>
<dt>Author</dt><dd>{author}</dd>
<dt>ISBN</dt><dd>{isbn}</dd>
<dt>Publication year</dt><dd>{year}</dd>
<dt>Genre</dt><dd>{genre}</dd>
<dt>Added</dt><dd>{created}</dd>
<dt>Last updated</dt><dd>{updated}</dd>
</dl>
<p><a class=\"button\" href=\"/books/{id}/edit\">Edit</a> {delete} <a href=\"/books\">Back to all books</a></p>",
    alerts = alerts(flash),
    id = book.id,
    title = escape(&book.title),
    author = escape(&book.author),
    isbn = opt(book.isbn.as_deref()),
    year = book.publication_year.map(|y| y.to_string()).unwrap_or_else(|| "&mdash;".into()),
    genre = opt(book.genre.as_deref()),
    created = book.created_at.format("%Y-%m-%d %H:%M UTC"),
    updated = book.updated_at.format("%Y-%m-%d %H:%M UTC"),
    delete = delete_form(book),
  );
  layout(&book.title, &body)
}

/// Which form is being rendered.
#[derive(Debug, Clone, Copy)]
pub enum FormMode {
  New,
  Edit(i64),
}

/// The create/edit form, prefilled with `input` and annotated with `errors`.
pub fn form(mode: FormMode, input: &BookInput, errors: &[String], current_year: i32) -> String {
  let (heading, action, submit) = match mode {
    FormMode::New => ("Add New Book", "/books".to_owned(), "Create Book"),
    FormMode::Edit(id) => ("Edit Book", format!("/books/{id}?_method=PUT"), "Update Book"),
  };

  let mut body = String::new();
  if !errors.is_empty() {
    body.push_str("<div class=\"alert alert-danger\"><ul>\n");
    for e in errors {
      let _ = writeln!(body, "<li>{}</li>", escape(e));
    }
    body.push_str("</ul></div>\n");
  }

  let text = |v: &Option<String>| v.as_deref().map(escape).unwrap_or_default();
  let year = match &input.publication_year {
    Some(YearInput::Number(n)) => n.to_string(),
    Some(YearInput::Text(s)) => escape(s),
    None => String::new(),
  };

  let _ = write!(
    body,
    "<h1>{heading}</h1>
<form method=\"post\" action=\"{action}\">
<label for=\"title\">Title</label>
<input id=\"title\" name=\"title\" value=\"{title}\" required maxlength=\"255\">
<label for=\"author\">Author</label>
<input id=\"author\" name=\"author\" value=\"{author}\" required maxlength=\"255\">
<label for=\"isbn\">ISBN</label>
<input id=\"isbn\" name=\"isbn\" value=\"{isbn}\" maxlength=\"{MAX_ISBN_LEN}\">
<label for=\"publicationYear\">Publication year</label>
<input id=\"publicationYear\" name=\"publicationYear\" type=\"number\" min=\"0\" max=\"{current_year}\" value=\"{year}\">
<label for=\"genre\">Genre</label>
<input id=\"genre\" name=\"genre\" value=\"{genre}\" maxlength=\"100\">
<button type=\"submit\">{submit}</button> <a href=\"/books\">Cancel</a>
</form>",
    title = text(&input.title),
    author = text(&input.author),
    isbn = text(&input.isbn),
    genre = text(&input.genre),
  );

  layout(heading, &body)
}
