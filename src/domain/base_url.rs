//! The service's own canonical root URL.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::utils::url_rules::query_escape;

/// Errors raised when a configured base URL is unusable.
#[derive(Debug, thiserror::Error)]
pub enum InvalidBaseUrl {
    #[error("Invalid base URL: {0}")]
    Malformed(#[from] url::ParseError),

    #[error("Base URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("Base URL must not carry a query string or fragment")]
    HasQueryOrFragment,

    #[error("Base URL must be a site root, got path '{0}'")]
    HasPath(String),
}

/// Canonical root URL of the service, always ending in `/`.
///
/// Used both to build short links (`<base><short_id>`) and to recognize
/// input that already points at this service. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(Arc<str>);

impl BaseUrl {
    /// Parses and normalizes a base URL, appending a trailing `/` if missing.
    ///
    /// The URL must be an http(s) site root: no path, query or fragment.
    ///
    /// The string is kept as written apart from the trailing slash, so prefix
    /// checks match what users copy from the index page.
    pub fn parse(raw: &str) -> Result<Self, InvalidBaseUrl> {
        let parsed = Url::parse(raw)?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(InvalidBaseUrl::UnsupportedScheme(other.to_string())),
        }

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(InvalidBaseUrl::HasQueryOrFragment);
        }

        // Routes are mounted at the root, so short IDs live directly under it.
        if parsed.path() != "/" {
            return Err(InvalidBaseUrl::HasPath(parsed.path().to_string()));
        }

        let mut normalized = raw.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        Ok(Self(normalized.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `url` already points at this service.
    pub fn is_own(&self, url: &str) -> bool {
        url.starts_with(self.as_str())
    }

    /// Strips the base prefix, yielding the candidate short ID.
    pub fn short_id_of<'a>(&self, url: &'a str) -> Option<&'a str> {
        url.strip_prefix(self.as_str())
    }

    /// Builds the public short URL for a short ID.
    pub fn short_url(&self, short_id: &str) -> String {
        format!("{}{}", self.0, short_id)
    }

    /// Index page pre-filled with `url`.
    pub fn index_with_url(&self, url: &str) -> String {
        format!("{}?url={}", self.0, query_escape(url))
    }

    /// Index page displaying `message` as an error.
    pub fn index_with_error(&self, message: &str) -> String {
        format!("{}?error={}", self.0, query_escape(message))
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
