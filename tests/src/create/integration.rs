#![cfg(test)]
use std::time::Duration;

use appctl_common::error::ApiError;
use appctl_core::application;
use appctl_core::network::http::HttpTransport;
use appctl_core::sender::{RetryPolicy, RetryingSender};

use crate::server::{Reply, TestServer};

fn sender_for(server: &TestServer, max_attempts: u32) -> RetryingSender<HttpTransport> {
    let transport = HttpTransport::new(&server.base_url, Duration::from_secs(5))
        .expect("transport for local server");
    let policy = RetryPolicy {
        max_attempts,
        base_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(10),
    };
    RetryingSender::new(transport, policy)
}

/// Creating a pure application posts the backend type code and returns the assigned id.
#[tokio::test]
async fn create_posts_to_applications_collection() {
    let server = TestServer::start(vec![Reply::new(201, r#"{"id":"app-1","name":"MyApp"}"#)])
        .await
        .unwrap();
    let sender = sender_for(&server, 3);

    let id = application::create_application("MyApp", "pure", &sender).await;

    assert_eq!(id, Ok("app-1".to_string()));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/management/v1/applications");
    assert_eq!(
        request.headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
    assert!(
        request
            .headers
            .get("user-agent")
            .is_some_and(|ua| ua.starts_with("appctl/"))
    );
    assert!(request.headers.contains_key("idempotency-key"));

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body, serde_json::json!({ "name": "MyApp", "type": "phe" }));
}

#[tokio::test]
async fn transient_server_errors_are_retried_with_one_key() {
    let server = TestServer::start(vec![
        Reply::new(503, ""),
        Reply::new(429, r#"{"message":"slow down"}"#).with_header("Retry-After", "0"),
        Reply::new(201, r#"{"id":"app-2"}"#),
    ])
    .await
    .unwrap();
    let sender = sender_for(&server, 3);

    let id = application::create_application("MyApp", "e2ee", &sender).await;

    assert_eq!(id, Ok("app-2".to_string()));

    let requests = server.requests();
    assert_eq!(requests.len(), 3);
    let keys: Vec<&String> = requests
        .iter()
        .map(|r| &r.headers["idempotency-key"])
        .collect();
    assert!(keys.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(requests.iter().all(|r| r.body.contains(r#""type":"pki""#)));
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = TestServer::start(vec![Reply::new(
        422,
        r#"{"code":42200,"message":"name is invalid"}"#,
    )])
    .await
    .unwrap();
    let sender = sender_for(&server, 3);

    let result = application::create_application("", "e2ee", &sender).await;

    assert_eq!(
        result,
        Err(ApiError::status(422, "name is invalid (code 42200)"))
    );
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn exhausted_retries_return_last_status() {
    let server = TestServer::start(vec![
        Reply::new(502, "upstream down"),
        Reply::new(502, "upstream still down"),
    ])
    .await
    .unwrap();
    let sender = sender_for(&server, 2);

    let result = application::create_application("MyApp", "e2ee", &sender).await;

    assert_eq!(result, Err(ApiError::status(502, "upstream still down")));
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn success_without_body_is_an_empty_response() {
    let server = TestServer::start(vec![Reply::new(200, "")]).await.unwrap();
    let sender = sender_for(&server, 1);

    let result = application::create_application("MyApp", "pure", &sender).await;

    assert_eq!(result, Err(ApiError::EmptyResponse));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let transport = HttpTransport::new("http://127.0.0.1:1/", Duration::from_secs(2)).unwrap();
    let sender = RetryingSender::new(
        transport,
        RetryPolicy {
            max_attempts: 2,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        },
    );

    let result = application::create_application("MyApp", "pure", &sender).await;

    assert!(matches!(result, Err(ApiError::Network(_))), "{result:?}");
}
