use axum::{extract::Query, response::Html};

use crate::views::{self, Flash};

/// `GET /`
pub async fn index(Query(flash): Query<Flash>) -> Html<String> {
  Html(views::home::index(&flash))
}
