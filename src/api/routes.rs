//! Query and resolve route configuration.

use crate::api::handlers::{query_handler, resolve_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes served by the query and resolve handlers.
///
/// # Endpoints
///
/// - `POST /query/{action}` - `shorten`, `google` or `unshorten` (also `GET`)
/// - `GET  /{*short_id}`    - Resolve a short ID
///
/// Static paths registered elsewhere (`/`, `/favicon.ico`) take priority over
/// the capture. Every other path, including multi-segment ones, is looked up
/// as a short ID so unknown paths still answer with a `notfound` reply.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/query/{action}", get(query_handler).post(query_handler))
        .route("/{*short_id}", get(resolve_handler))
}
