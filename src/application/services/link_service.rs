//! Link shortening, unshortening and resolution.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::BaseUrl;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::generate_short_id;
use crate::utils::url_rules::{has_known_scheme, long_url_fits, search_redirect, short_id_fits};

/// Maximum number of short ID generation attempts per insert.
const MAX_INSERT_ATTEMPTS: usize = 10;

/// How a shorten request treats a long URL that is already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPolicy {
    /// Return the existing mapping for an identical long URL.
    #[default]
    Reuse,
    /// Always create a fresh short ID.
    AlwaysNew,
}

impl FromStr for InsertPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reuse" => Ok(Self::Reuse),
            "always_new" => Ok(Self::AlwaysNew),
            other => Err(format!(
                "INSERT_POLICY must be 'reuse' or 'always_new', got '{other}'"
            )),
        }
    }
}

impl fmt::Display for InsertPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reuse => f.write_str("reuse"),
            Self::AlwaysNew => f.write_str("always_new"),
        }
    }
}

/// Action segment of a `/query/{action}` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryAction {
    Unshorten,
    Shorten,
    Google,
}

impl FromStr for QueryAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unshorten" => Ok(Self::Unshorten),
            "shorten" => Ok(Self::Shorten),
            "google" => Ok(Self::Google),
            other => Err(AppError::InvalidAction {
                action: other.to_string(),
            }),
        }
    }
}

/// Service implementing the query and resolve operations.
///
/// Every successful operation yields the URL the caller should be sent to:
/// the long URL for a resolve, or the index page pre-filled with the result
/// for the query actions.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    base_url: BaseUrl,
    insert_policy: InsertPolicy,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, base_url: BaseUrl, insert_policy: InsertPolicy) -> Self {
        Self {
            link_repository,
            base_url,
            insert_policy,
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Runs a query action against `url`.
    pub async fn execute(&self, action: QueryAction, url: &str) -> Result<String, AppError> {
        match action {
            QueryAction::Unshorten => self.unshorten(url).await,
            QueryAction::Shorten => self.shorten(url).await,
            QueryAction::Google => self.google(url).await,
        }
    }

    /// Resolves a short ID to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ShortLinkNotFound`] if there is no mapping or the
    /// lookup fails.
    pub async fn resolve(&self, short_id: &str) -> Result<String, AppError> {
        match self.lookup(short_id).await {
            Some(link) => Ok(link.long_url),
            None => Err(AppError::ShortLinkNotFound {
                short_url: self.base_url.short_url(short_id),
            }),
        }
    }

    /// Decodes one of this service's short URLs.
    ///
    /// On success returns the index page pre-filled with the long URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotShortened`] if `url` is not prefixed by the base URL
    /// - [`AppError::TooLong`] if the short ID exceeds 20 characters
    /// - [`AppError::UnknownShortUrl`] if there is no mapping
    pub async fn unshorten(&self, url: &str) -> Result<String, AppError> {
        let short_id = self.base_url.short_id_of(url).ok_or(AppError::NotShortened)?;

        if !short_id_fits(short_id) {
            return Err(AppError::TooLong);
        }

        match self.lookup(short_id).await {
            Some(link) => Ok(self.base_url.index_with_url(&link.long_url)),
            None => Err(AppError::UnknownShortUrl {
                url: url.to_string(),
            }),
        }
    }

    /// Shortens `url`.
    ///
    /// On success returns the index page pre-filled with the short URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::Protocol`] if `url` lacks `http://` or `https://`
    /// - [`AppError::TooLong`] if `url` exceeds 255 characters
    /// - [`AppError::Internal`] if the mapping cannot be stored
    pub async fn shorten(&self, url: &str) -> Result<String, AppError> {
        self.shorten_with(url, |u| u.to_string()).await
    }

    /// Shortens a search-redirect URL wrapping `url`.
    ///
    /// Same validation as [`Self::shorten`], with the length bound applied to
    /// the rewritten URL.
    pub async fn google(&self, url: &str) -> Result<String, AppError> {
        self.shorten_with(url, search_redirect).await
    }

    async fn shorten_with(
        &self,
        url: &str,
        rewrite: impl FnOnce(&str) -> String,
    ) -> Result<String, AppError> {
        if self.base_url.is_own(url) {
            debug!(url, "URL already points at this service");
            return Ok(self.base_url.index_with_url(url));
        }

        if !has_known_scheme(url) {
            return Err(AppError::Protocol);
        }

        let long_url = rewrite(url);
        if !long_url_fits(&long_url) {
            return Err(AppError::TooLong);
        }

        let link = self.create_link(long_url).await?;

        Ok(self
            .base_url
            .index_with_url(&self.base_url.short_url(&link.short_id)))
    }

    /// Stores a mapping for `long_url`, honoring the insert policy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures or when no free short
    /// ID was found after repeated collisions.
    pub async fn create_link(&self, long_url: String) -> Result<Link, AppError> {
        if self.insert_policy == InsertPolicy::Reuse {
            match self.link_repository.find_by_long_url(&long_url).await {
                Ok(Some(existing)) => {
                    debug!(short_id = %existing.short_id, "Reusing existing mapping");
                    return Ok(existing);
                }
                Ok(None) => {}
                Err(e) => {
                    error!(error = %e, "Failed to look up existing mapping");
                    return Err(AppError::Internal);
                }
            }
        }

        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let short_id = generate_short_id().map_err(|e| {
                error!(error = %e, "Failed to generate short id");
                AppError::Internal
            })?;

            let new_link = NewLink {
                short_id,
                long_url: long_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    debug!(short_id = %link.short_id, "Created mapping");
                    return Ok(link);
                }
                Err(StoreError::DuplicateShortId(id)) => {
                    warn!(attempt, short_id = %id, "Short id collision, retrying");
                }
                Err(e) => {
                    error!(error = %e, "Failed to store mapping");
                    return Err(AppError::Internal);
                }
            }
        }

        error!(
            attempts = MAX_INSERT_ATTEMPTS,
            "Failed to generate unique short id"
        );
        Err(AppError::Internal)
    }

    /// Looks up a short ID; storage failures are logged and read as a miss.
    async fn lookup(&self, short_id: &str) -> Option<Link> {
        match self.link_repository.find_by_code(short_id).await {
            Ok(link) => link,
            Err(e) => {
                warn!(short_id, error = %e, "Failed to look up short id");
                None
            }
        }
    }
}
