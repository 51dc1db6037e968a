//! Query-string and form parameters accepted by the handlers.

use serde::Deserialize;

use crate::api::responder::ResponseMode;

/// The `api` flag shared by every endpoint that uses the responder.
#[derive(Debug, Default, Deserialize)]
pub struct ModeParams {
    pub api: Option<String>,
}

impl ModeParams {
    /// API mode is selected only by the exact value `true`.
    pub fn mode(&self) -> ResponseMode {
        if self.api.as_deref() == Some("true") {
            ResponseMode::Api
        } else {
            ResponseMode::Human
        }
    }
}

/// The `url` field of a `/query/{action}` request.
///
/// Read from both the form body and the query string.
#[derive(Debug, Default, Deserialize)]
pub struct QueryForm {
    pub url: Option<String>,
}

impl QueryForm {
    /// Picks the submitted URL: the body value first, then the query string,
    /// else empty.
    pub fn submitted_url(body: Option<Self>, query: Option<Self>) -> String {
        body.and_then(|f| f.url)
            .or_else(|| query.and_then(|f| f.url))
            .unwrap_or_default()
    }
}

/// Query string of the index page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexParams {
    pub url: Option<String>,
    pub error: Option<String>,
}
