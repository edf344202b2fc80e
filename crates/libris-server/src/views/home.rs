use super::{APP_NAME, Flash, alerts, layout};

pub fn index(flash: &Flash) -> String {
  layout(
    "Home",
    &format!(
      "{alerts}<h1>{APP_NAME}</h1>
<p>Keep track of your book collection: add titles, edit their details, and remove the ones you no longer own.</p>
<p><a class=\"button\" href=\"/books\">View all books</a> <a class=\"button\" href=\"/books/new\">Add a new book</a></p>
<p>A JSON API is available under <code>/api/books</code>.</p>",
      alerts = alerts(flash),
    ),
  )
}
