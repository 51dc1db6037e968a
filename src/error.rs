//! Error taxonomy surfaced to callers of the query and resolve endpoints.
//!
//! Every error carries two representations: a short machine-readable code
//! ([`AppError::code`]) and a human-readable message with request detail
//! interpolated (the [`std::fmt::Display`] impl). Both are rendered by
//! [`crate::api::responder::Reply`].

use thiserror::Error;

/// Errors produced while validating or serving a request.
///
/// None of these are fatal: they are always turned into either a redirect to
/// the index page or a JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// A resolve request hit a short ID with no mapping.
    #[error("404: {short_url} not found")]
    ShortLinkNotFound { short_url: String },

    /// An unshorten request named a short URL with no mapping.
    #[error("The short url id {url} doesn't exist!")]
    UnknownShortUrl { url: String },

    /// The unshorten target is not one of this service's URLs.
    #[error("The URL you entered is not a short URL of this service.")]
    NotShortened,

    /// Short ID or long URL exceeds its size bound.
    #[error("The URL you entered is too long.")]
    TooLong,

    /// The long URL lacks an `http://` or `https://` scheme.
    #[error("Protocol couldn't be identified.")]
    Protocol,

    /// Unrecognized query action segment.
    #[error("Invalid action \"{action}\"")]
    InvalidAction { action: String },

    /// The mapping could not be stored.
    #[error("The URL could not be shortened right now, please try again later.")]
    Internal,
}

impl AppError {
    /// Machine-readable error code used in JSON bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ShortLinkNotFound { .. } | AppError::UnknownShortUrl { .. } => "notfound",
            AppError::NotShortened => "notshortened",
            AppError::TooLong => "length",
            AppError::Protocol => "protocol",
            AppError::InvalidAction { .. } => "action",
            AppError::Internal => "internal",
        }
    }
}
