//! Output of the query and resolve handlers.
//!
//! Every success or error emission point goes through [`Reply`], which picks
//! between a `302 Found` redirect (human mode) and a JSON body (API mode).

use axum::{
    body::Body,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::api::dto::{ErrorBody, SuccessBody};
use crate::domain::BaseUrl;
use crate::error::AppError;

/// Response flavor selected by the `api` query flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Redirect the browser.
    Human,
    /// Return a JSON body.
    Api,
}

/// A handler outcome paired with the mode it must be rendered in.
///
/// # Human mode
///
/// - Success: `302 Found` with `Location: <url>`
/// - Error: `302 Found` with `Location: <base-url>?error=<message>`
///
/// # API mode
///
/// - Success: `{"url": "<url>"}`
/// - Error: `{"error": "<code>", "error-long": "<message>"}`
///
/// If the JSON body cannot be serialized the failure is logged and the body
/// is left empty.
#[derive(Debug)]
pub struct Reply {
    mode: ResponseMode,
    base_url: BaseUrl,
    outcome: Result<String, AppError>,
}

impl Reply {
    pub fn new(mode: ResponseMode, base_url: &BaseUrl, outcome: Result<String, AppError>) -> Self {
        Self {
            mode,
            base_url: base_url.clone(),
            outcome,
        }
    }

    pub fn success(mode: ResponseMode, base_url: &BaseUrl, url: impl Into<String>) -> Self {
        Self::new(mode, base_url, Ok(url.into()))
    }

    pub fn failure(mode: ResponseMode, base_url: &BaseUrl, err: AppError) -> Self {
        Self::new(mode, base_url, Err(err))
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match (self.mode, self.outcome) {
            (ResponseMode::Api, Ok(url)) => json_body(&SuccessBody { url: &url }),
            (ResponseMode::Api, Err(err)) => json_body(&ErrorBody {
                error: err.code(),
                error_long: err.to_string(),
            }),
            (ResponseMode::Human, Ok(url)) => found(&url),
            (ResponseMode::Human, Err(err)) => {
                found(&self.base_url.index_with_error(&err.to_string()))
            }
        }
    }
}

fn json_body<T: Serialize>(body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            bytes,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to serialize output JSON");
            Body::empty().into_response()
        }
    }
}

fn found(target: &str) -> Response {
    match HeaderValue::from_bytes(target.as_bytes()) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(e) => {
            error!(error = %e, location = target, "Redirect target is not a valid header value");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    fn base() -> BaseUrl {
        BaseUrl::parse("https://s.example.com/").unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_api_success_body() {
        let response =
            Reply::success(ResponseMode::Api, &base(), "https://example.com").into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "url": "https://example.com" }));
    }

    #[tokio::test]
    async fn test_api_error_body() {
        let response = Reply::failure(ResponseMode::Api, &base(), AppError::Protocol).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["error"], "protocol");
        assert_eq!(json["error-long"], "Protocol couldn't be identified.");
    }

    #[test]
    fn test_human_success_redirects_to_target() {
        let response =
            Reply::success(ResponseMode::Human, &base(), "https://example.com/page").into_response();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://example.com/page"
        );
    }

    #[test]
    fn test_human_error_redirects_to_index() {
        let response = Reply::failure(
            ResponseMode::Human,
            &base(),
            AppError::InvalidAction {
                action: "foo".to_string(),
            },
        )
        .into_response();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://s.example.com/?error=Invalid+action+%22foo%22"
        );
    }

    #[test]
    fn test_human_invalid_target_is_server_error() {
        let response =
            Reply::success(ResponseMode::Human, &base(), "https://example.com/\n").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
