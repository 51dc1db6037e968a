//! Index page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, response::IntoResponse};

use crate::api::dto::IndexParams;

/// Template for the index page.
///
/// Renders `templates/index.html` with the shortening form. Both fields are
/// HTML-escaped by the template engine.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Pre-filled value of the URL input.
    pub url: String,
    /// Error message shown above the form; empty for none.
    pub error: String,
}

/// Renders the index page.
///
/// # Endpoint
///
/// `GET /?url=<prefill>&error=<message>`
pub async fn index_handler(Query(params): Query<IndexParams>) -> impl IntoResponse {
    IndexTemplate {
        url: params.url.unwrap_or_default(),
        error: params.error.unwrap_or_default(),
    }
}
