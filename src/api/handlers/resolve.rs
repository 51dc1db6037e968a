//! Handler for short URL resolution.

use axum::extract::{Path, Query, State};
use tracing::{debug, warn};

use crate::api::dto::ModeParams;
use crate::api::responder::Reply;
use crate::state::AppState;
use crate::utils::client_ip::ClientIp;

/// Redirects a short ID to its long URL.
///
/// # Endpoint
///
/// `GET /{*short_id}`
///
/// The whole path after the leading `/` is the short ID, so `/a/b` looks up
/// `a/b`.
///
/// # Response
///
/// - Found: `302 Found` to the long URL, or `{"url": ...}` with `?api=true`
/// - Unknown: `notfound` error, delivered as a redirect to the index page or
///   as a JSON error body
pub async fn resolve_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
    Query(params): Query<ModeParams>,
    client_ip: ClientIp,
) -> Reply {
    debug!(%client_ip, short_id, "Long URL requested");

    let outcome = state.link_service.resolve(&short_id).await;

    if let Err(err) = &outcome {
        warn!(%client_ip, short_id, "Failed to resolve short id: {err}");
    }

    Reply::new(params.mode(), state.base_url(), outcome)
}
