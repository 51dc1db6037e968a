//! Favicon handler.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Serves the icon loaded at startup.
///
/// # Endpoint
///
/// `GET /favicon.ico`
///
/// Returns 404 when no icon was loaded.
pub async fn favicon_handler(State(state): State<AppState>) -> Response {
    if state.favicon.is_empty() {
        return StatusCode::NOT_FOUND.into_response();
    }

    ([(header::CONTENT_TYPE, "image/x-icon")], state.favicon.clone()).into_response()
}
