//! Index page route configuration.

use crate::state::AppState;
use crate::web::handlers::{favicon_handler, index_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /`            - Index page with the shortening form
/// - `GET /favicon.ico` - Site icon
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/favicon.ico", get(favicon_handler))
}
