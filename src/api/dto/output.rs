//! JSON bodies emitted in API mode.

use serde::Serialize;

/// Successful API output.
///
/// ```json
/// { "url": "https://s.example.com/?url=https%3A%2F%2Fs.example.com%2Fabc" }
/// ```
#[derive(Debug, Serialize)]
pub struct SuccessBody<'a> {
    pub url: &'a str,
}

/// Failed API output.
///
/// ```json
/// { "error": "protocol", "error-long": "Protocol couldn't be identified." }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
    #[serde(rename = "error-long")]
    pub error_long: String,
}
