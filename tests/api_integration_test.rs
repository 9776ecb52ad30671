//! Integration tests for the fetch client against a local mock server.

use postboard::adapters::ReqwestHttpClient;
use postboard::api::{ApiClient, FetchError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_with(route: &str, template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn get_posts_decodes_the_service_payload() {
    let body = r#"[
        {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"},
        {"userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore"}
    ]"#;
    let server = server_with(
        "/posts",
        ResponseTemplate::new(200).set_body_raw(body, "application/json"),
    )
    .await;

    let api = ApiClient::with_base_url(ReqwestHttpClient::new(), &server.uri());
    let posts = api.get_posts().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].user_id, 1);
    assert_eq!(posts[1].title, "qui est esse");
}

#[tokio::test]
async fn get_users_ignores_extra_service_fields() {
    let body = r#"[{"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz"}]"#;
    let server = server_with(
        "/users",
        ResponseTemplate::new(200).set_body_raw(body, "application/json"),
    )
    .await;

    let api = ApiClient::with_base_url(ReqwestHttpClient::new(), &server.uri());
    let users = api.get_users().await.unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Leanne Graham");
}

#[tokio::test]
async fn get_comments_decodes_post_ids() {
    let body = r#"[{"postId": 1, "id": 1, "name": "id labore", "body": "laudantium enim"}]"#;
    let server = server_with(
        "/comments",
        ResponseTemplate::new(200).set_body_raw(body, "application/json"),
    )
    .await;

    let api = ApiClient::with_base_url(ReqwestHttpClient::new(), &server.uri());
    let comments = api.get_comments().await.unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].post_id, 1);
}

#[tokio::test]
async fn server_error_status_surfaces_as_bad_status() {
    let server = server_with("/posts", ResponseTemplate::new(500)).await;

    let api = ApiClient::with_base_url(ReqwestHttpClient::new(), &server.uri());
    let err = api.get_posts().await.unwrap_err();

    assert!(matches!(err, FetchError::BadStatus(500)));
}

#[tokio::test]
async fn malformed_body_surfaces_as_decode_error() {
    let server = server_with(
        "/users",
        ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"),
    )
    .await;

    let api = ApiClient::with_base_url(ReqwestHttpClient::new(), &server.uri());
    let err = api.get_users().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_surfaces_as_transport_error() {
    // Nothing listens on this port.
    let api = ApiClient::with_base_url(ReqwestHttpClient::new(), "http://127.0.0.1:59999");
    let err = api.get_comments().await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}
