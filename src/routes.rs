//! Top-level router configuration combining page and query routes.
//!
//! # Route Structure
//!
//! - `GET  /`               - Index page (pre-fill `url`, show `error`)
//! - `GET  /favicon.ico`    - Site icon
//! - `POST /query/{action}` - `shorten`, `google`, `unshorten`
//! - `GET  /{*short_id}`    - Short link redirect (any other path)
//!
//! Every route accepts `?api=true` to receive JSON instead of a redirect
//! (the index page and icon ignore it).
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::middleware::trace;
use crate::state::AppState;
use crate::web;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .merge(api::routes::routes())
        .with_state(state)
        .layer(trace::layer())
}
