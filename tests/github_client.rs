use std::time::Duration;

use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coverage_comment::application::ports::CommentGateway;
use coverage_comment::domain::comment::{PullRequestSummary, RemoteComment};
use coverage_comment::infrastructure::vcs::github::GitHubClient;

fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::new(
        format!("{}/", server.uri()),
        "acme".to_string(),
        "datagen".to_string(),
        "ghs_test".to_string(),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn get_sends_auth_and_accept_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/datagen/commits/abc123/pulls"))
        .and(header("authorization", "Bearer ghs_test"))
        .and(header("accept", "application/vnd.github+json"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "number": 4, "state": "closed" },
            { "number": 8, "state": "open", "title": "Add parser" },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let pulls = client_for(&server)
        .list_commit_pull_requests("abc123")
        .await
        .unwrap();

    assert_eq!(
        pulls,
        vec![
            PullRequestSummary {
                number: Some(4),
                state: Some("closed".to_string()),
            },
            PullRequestSummary {
                number: Some(8),
                state: Some("open".to_string()),
            },
        ]
    );
}

#[tokio::test]
async fn lists_issue_and_commit_comments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/datagen/issues/8/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "body": "<!-- coverage-comment -->\nold" },
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/datagen/commits/abc123/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.list_pull_request_comments(8).await.unwrap(),
        vec![RemoteComment {
            id: 1,
            body: "<!-- coverage-comment -->\nold".to_string(),
        }]
    );
    assert!(client.list_commit_comments("abc123").await.unwrap().is_empty());
}

#[tokio::test]
async fn writes_send_json_body_with_content_type() {
    let server = MockServer::start().await;
    let expected = json!({ "body": "hello" });

    for (verb, route) in [
        ("POST", "/repos/acme/datagen/issues/8/comments"),
        ("PATCH", "/repos/acme/datagen/issues/comments/11"),
        ("POST", "/repos/acme/datagen/commits/abc123/comments"),
        ("PATCH", "/repos/acme/datagen/comments/12"),
    ] {
        Mock::given(method(verb))
            .and(path(route))
            .and(header("content-type", "application/json"))
            .and(body_json(&expected))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    client.create_pull_request_comment(8, "hello").await.unwrap();
    client.update_pull_request_comment(11, "hello").await.unwrap();
    client.create_commit_comment("abc123", "hello").await.unwrap();
    client.update_commit_comment(12, "hello").await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/acme/datagen/issues/8/comments"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Resource not accessible"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_pull_request_comment(8, "hello")
        .await
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("Request failed: POST"), "{msg}");
    assert!(msg.contains("403"), "{msg}");
    assert!(msg.contains("Resource not accessible"), "{msg}");
}

#[tokio::test]
async fn non_json_or_empty_body_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.request(Method::GET, "/plain", None).await.unwrap(), None);
    assert_eq!(client.request(Method::GET, "/empty", None).await.unwrap(), None);
}

#[tokio::test]
async fn non_list_payload_is_treated_as_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/datagen/commits/abc123/pulls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "weird" })))
        .mount(&server)
        .await;

    let pulls = client_for(&server)
        .list_commit_pull_requests("abc123")
        .await
        .unwrap();
    assert!(pulls.is_empty());
}
