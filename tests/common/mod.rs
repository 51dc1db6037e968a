#![allow(dead_code)]

use axum::body::Bytes;
use axum_test::TestServer;
use quicklink::application::services::InsertPolicy;
use quicklink::domain::BaseUrl;
use quicklink::domain::entities::NewLink;
use quicklink::domain::repositories::LinkRepository;
use quicklink::infrastructure::persistence::InMemoryLinkRepository;
use quicklink::routes::app_router;
use quicklink::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "https://s.example.com/";

pub const FAVICON: &[u8] = &[0x00, 0x00, 0x01, 0x00, 0x01, 0x00];

pub fn base_url() -> BaseUrl {
    BaseUrl::parse(BASE_URL).unwrap()
}

pub fn create_test_state_with(
    insert_policy: InsertPolicy,
    favicon: Bytes,
) -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repo.clone(), base_url(), insert_policy, favicon);

    (state, repo)
}

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    create_test_state_with(InsertPolicy::Reuse, Bytes::from_static(FAVICON))
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    (server, repo)
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, short_id: &str, long_url: &str) {
    repo.create(NewLink {
        short_id: short_id.to_string(),
        long_url: long_url.to_string(),
    })
    .await
    .unwrap();
}

/// Decodes the single query parameter `key` of a redirect target.
pub fn query_value(location: &str, key: &str) -> Option<String> {
    let url = url::Url::parse(location).unwrap();
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
