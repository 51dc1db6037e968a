//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use async_trait::async_trait;

/// Errors raised by link storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The short ID is already taken.
    #[error("Short id '{0}' already exists")]
    DuplicateShortId(String),

    /// The backend failed to execute the operation.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

/// Repository interface for the short ID to long URL mapping table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - Process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateShortId`] if the short ID is taken,
    /// [`StoreError::Backend`] on any other failure.
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Finds a link by its short ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, short_id: &str) -> Result<Option<Link>, StoreError>;

    /// Finds the oldest link pointing at `long_url`.
    ///
    /// Used to reuse an existing mapping instead of creating a duplicate.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, StoreError>;

    /// Counts stored links.
    async fn count(&self) -> Result<i64, StoreError>;
}
