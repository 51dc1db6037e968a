//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};

/// Process-local link storage backed by a [`DashMap`].
///
/// Intended for local development and tests; contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, Link>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError> {
        match self.links.entry(new_link.short_id) {
            Entry::Occupied(e) => Err(StoreError::DuplicateShortId(e.key().clone())),
            Entry::Vacant(e) => {
                let link = Link::new(e.key().clone(), new_link.long_url, Utc::now());
                e.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, short_id: &str) -> Result<Option<Link>, StoreError> {
        Ok(self.links.get(short_id).map(|l| l.value().clone()))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, StoreError> {
        Ok(self
            .links
            .iter()
            .filter(|l| l.long_url == long_url)
            .min_by_key(|l| l.created_at)
            .map(|l| l.value().clone()))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.links.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_link(short_id: &str, long_url: &str) -> NewLink {
        NewLink {
            short_id: short_id.to_string(),
            long_url: long_url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_code() {
        let repo = InMemoryLinkRepository::new();

        let link = repo
            .create(new_link("abc123", "https://example.com"))
            .await
            .unwrap();
        assert_eq!(link.short_id, "abc123");

        let found = repo.find_by_code("abc123").await.unwrap();
        assert_eq!(found.unwrap().long_url, "https://example.com");
        assert!(repo.find_by_code("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_short_id() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("dup", "https://a.com")).await.unwrap();

        let result = repo.create(new_link("dup", "https://b.com")).await;
        assert!(matches!(result, Err(StoreError::DuplicateShortId(id)) if id == "dup"));

        let kept = repo.find_by_code("dup").await.unwrap().unwrap();
        assert_eq!(kept.long_url, "https://a.com");
    }

    #[tokio::test]
    async fn test_find_by_long_url_and_count() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("one", "https://a.com")).await.unwrap();
        repo.create(new_link("two", "https://b.com")).await.unwrap();

        let found = repo.find_by_long_url("https://b.com").await.unwrap();
        assert_eq!(found.unwrap().short_id, "two");
        assert!(repo.find_by_long_url("https://c.com").await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
