//! Shared application state injected into every handler.

use axum::body::Bytes;
use std::sync::Arc;

use crate::application::services::{InsertPolicy, LinkService};
use crate::domain::BaseUrl;
use crate::domain::repositories::LinkRepository;

/// Read-only state built once at startup.
///
/// Cloning is cheap: the service sits behind an [`Arc`] and [`Bytes`] is
/// reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    /// Icon served at `/favicon.ico`; empty when no icon was loaded.
    pub favicon: Bytes,
}

impl AppState {
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        base_url: BaseUrl,
        insert_policy: InsertPolicy,
        favicon: Bytes,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository, base_url, insert_policy)),
            favicon,
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        self.link_service.base_url()
    }
}
