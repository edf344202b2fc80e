//! Server-rendered HTML.
//!
//! Pages are assembled from plain strings; every piece of user-supplied text
//! goes through [`escape`] on the way in.

pub mod books;
pub mod home;

use std::fmt::Write as _;

use serde::Deserialize;

pub const APP_NAME: &str = "Books CRUD Application";

/// One-shot status messages carried in the query string after a redirect,
/// e.g. `/books?success=Book+created+successfully`.
#[derive(Debug, Default, Deserialize)]
pub struct Flash {
  pub success: Option<String>,
  pub error:   Option<String>,
}

impl Flash {
  pub fn error(message: impl Into<String>) -> Self {
    Self { success: None, error: Some(message.into()) }
  }
}

pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
  out
}

const STYLE: &str = "
body { font-family: system-ui, sans-serif; margin: 0; color: #222; }
nav { background: #343a40; padding: .75rem 1.5rem; }
nav a { color: #fff; margin-right: 1rem; text-decoration: none; }
main { max-width: 960px; margin: 1.5rem auto; padding: 0 1rem; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: .5rem; border-bottom: 1px solid #ddd; }
.alert { padding: .75rem 1rem; border-radius: 4px; margin-bottom: 1rem; }
.alert-success { background: #d1e7dd; }
.alert-danger { background: #f8d7da; }
label { display: block; margin-top: .75rem; font-weight: 600; }
input { width: 100%; padding: .4rem; box-sizing: border-box; }
button, .button { margin-top: 1rem; padding: .4rem .9rem; }
form.inline { display: inline; }
";

/// Wrap `body` in the shared page chrome.
pub fn layout(title: &str, body: &str) -> String {
  format!(
    "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">
<title>{title} | {APP_NAME}</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href=\"/\">{APP_NAME}</a><a href=\"/books\">Books</a><a href=\"/books/new\">Add Book</a></nav>
<main>
{body}
</main>
</body>
</html>
",
    title = escape(title),
  )
}

/// Success and error banners.
pub fn alerts(flash: &Flash) -> String {
  let mut out = String::new();
  if let Some(msg) = &flash.success {
    let _ = writeln!(out, "<div class=\"alert alert-success\">{}</div>", escape(msg));
  }
  if let Some(msg) = &flash.error {
    let _ = writeln!(out, "<div class=\"alert alert-danger\">{}</div>", escape(msg));
  }
  out
}

pub fn not_found() -> String {
  layout(
    "Not Found",
    "<h1>Book not found</h1>\n<p><a href=\"/books\">Back to all books</a></p>",
  )
}

pub fn error_page(message: &str) -> String {
  layout(
    "Error",
    &format!(
      "<h1>Something went wrong</h1>\n{}<p><a href=\"/books\">Back to all books</a></p>",
      alerts(&Flash::error(message)),
    ),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escapes_markup() {
    assert_eq!(
      escape(r#"<script>alert("x") & 'y'</script>"#),
      "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
    );
  }

  #[test]
  fn alerts_render_both_kinds() {
    let html = alerts(&Flash {
      success: Some("Saved".into()),
      error:   Some("<b>Oops</b>".into()),
    });
    assert!(html.contains("alert-success\">Saved"));
    assert!(html.contains("&lt;b&gt;Oops&lt;/b&gt;"));
  }
}
