//! Handler for the `shorten`, `google` and `unshorten` actions.

use axum::{
    Form,
    extract::{
        Path, Query, State,
        rejection::{FormRejection, QueryRejection},
    },
};
use tracing::{debug, warn};

use crate::api::dto::{ModeParams, QueryForm};
use crate::api::responder::Reply;
use crate::application::services::QueryAction;
use crate::state::AppState;
use crate::utils::client_ip::ClientIp;

/// Runs a query action on the submitted URL.
///
/// # Endpoint
///
/// `POST /query/{action}` with form body `url=<value>` (a `GET` reads `url`
/// from the query string instead).
///
/// A body that cannot be read as a form (missing content type, bad
/// encoding) is ignored: `url` then comes from the query string, or is
/// empty. The outcome always goes through the responder.
///
/// # Actions
///
/// - `shorten` - stores the URL and returns `<base>?url=<short url>`
/// - `google` - same, for a search-redirect URL wrapping the input
/// - `unshorten` - decodes a short URL and returns `<base>?url=<long url>`
///
/// Any other action yields an `action` error naming it.
///
/// # Response
///
/// `?api=true` returns JSON, otherwise a `302 Found` redirect.
pub async fn query_handler(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Query(params): Query<ModeParams>,
    client_ip: ClientIp,
    query: Result<Query<QueryForm>, QueryRejection>,
    form: Result<Form<QueryForm>, FormRejection>,
) -> Reply {
    let mode = params.mode();

    let body = match form {
        Ok(Form(body)) => Some(body),
        Err(rejection) => {
            debug!(%client_ip, %rejection, "Form body ignored");
            None
        }
    };
    let url = QueryForm::submitted_url(body, query.ok().map(|Query(q)| q));

    let outcome = match action.parse::<QueryAction>() {
        Ok(query_action) => {
            debug!(%client_ip, action, url, "Query requested");
            state.link_service.execute(query_action, &url).await
        }
        Err(err) => Err(err),
    };

    if let Err(err) = &outcome {
        warn!(
            %client_ip,
            action,
            url,
            code = err.code(),
            "Query rejected: {err}"
        );
    }

    Reply::new(mode, state.base_url(), outcome)
}
