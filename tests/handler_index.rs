mod common;

use axum::body::Bytes;
use axum_test::TestServer;
use quicklink::application::services::InsertPolicy;
use quicklink::routes::app_router;

#[tokio::test]
async fn test_index_renders_form() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 200);
    let body = response.text();
    assert!(body.contains("query/shorten"));
    assert!(body.contains("query/google"));
    assert!(body.contains("query/unshorten"));
    assert!(!body.contains("class=\"error\""));
}

#[tokio::test]
async fn test_index_prefills_url() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .get("/")
        .add_query_param("url", "https://s.example.com/abc")
        .await;

    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("https://s.example.com/abc"));
}

#[tokio::test]
async fn test_index_shows_error() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .get("/")
        .add_query_param("error", "Protocol couldn't be identified.")
        .await;

    let body = response.text();
    assert!(body.contains("class=\"error\""));
    assert!(body.contains("Protocol couldn"));
}

#[tokio::test]
async fn test_index_escapes_markup() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .get("/")
        .add_query_param("url", "\"><script>alert(1)</script>")
        .add_query_param("error", "<b>bold</b>")
        .await;

    let body = response.text();
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(!body.contains("<b>bold</b>"));
}

#[tokio::test]
async fn test_favicon_served() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/favicon.ico").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("content-type"), "image/x-icon");
    assert_eq!(response.as_bytes().as_ref(), common::FAVICON);
}

#[tokio::test]
async fn test_favicon_missing_is_not_found() {
    let (state, _repo) = common::create_test_state_with(InsertPolicy::Reuse, Bytes::new());
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/favicon.ico").await;

    response.assert_status_not_found();
}
