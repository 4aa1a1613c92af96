use anyhow::Result;
use httpmock::prelude::*;
use std::collections::HashMap;
use std::time::Duration;
use transaction_legs::{http_request, HttpClient, HttpMethod, TxError};

#[tokio::test]
async fn test_get_sends_default_json_header() -> Result<()> {
    let server = MockServer::start();
    let posts = serde_json::json!([
        {"userId": 1, "id": 1, "title": "first"},
        {"userId": 1, "id": 2, "title": "second"}
    ]);

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/posts")
            .header("content-type", "application/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(posts.clone());
    });

    let response = http_request(&server.url("/posts"), "GET", None, None).await?;

    api_mock.assert();
    assert_eq!(response, posts);
    Ok(())
}

#[tokio::test]
async fn test_post_sends_payload_as_json() -> Result<()> {
    let server = MockServer::start();
    let payload = serde_json::json!({"title": "foo", "body": "bar", "userId": 1});

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/posts").json_body(payload.clone());
        then.status(201)
            .json_body(serde_json::json!({"id": 101, "title": "foo"}));
    });

    // Method names are matched without regard to case.
    let response = http_request(&server.url("/posts"), "post", Some(&payload), None).await?;

    api_mock.assert();
    assert_eq!(response["id"], 101);
    Ok(())
}

#[tokio::test]
async fn test_put_sends_payload_as_json() -> Result<()> {
    let server = MockServer::start();
    let payload = serde_json::json!({"id": 1, "title": "updated"});

    let api_mock = server.mock(|when, then| {
        when.method(PUT).path("/posts/1").json_body(payload.clone());
        then.status(200).json_body(payload.clone());
    });

    let client = HttpClient::new();
    let response = client
        .request(&server.url("/posts/1"), HttpMethod::Put, Some(&payload), None)
        .await?;

    api_mock.assert();
    assert_eq!(response["title"], "updated");
    Ok(())
}

#[tokio::test]
async fn test_explicit_headers_replace_defaults() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/secure")
            .header("x-api-key", "abc123")
            .matches(|req| {
                req.headers.as_ref().map_or(true, |headers| {
                    headers
                        .iter()
                        .all(|(name, _)| !name.eq_ignore_ascii_case("content-type"))
                })
            });
        then.status(200).json_body(serde_json::json!({"ok": true}));
    });

    let headers = HashMap::from([("X-Api-Key".to_string(), "abc123".to_string())]);
    let response = http_request(&server.url("/secure"), "GET", None, Some(&headers)).await?;

    api_mock.assert();
    assert_eq!(response["ok"], true);
    Ok(())
}

#[tokio::test]
async fn test_unsupported_method_never_reaches_server() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.path("/posts");
        then.status(200).json_body(serde_json::json!([]));
    });

    let result = http_request(&server.url("/posts"), "DELETE", None, None).await;

    match result {
        Err(TxError::UnsupportedMethod { method }) => assert_eq!(method, "DELETE"),
        other => panic!("expected UnsupportedMethod, got {:?}", other),
    }
    assert_eq!(api_mock.hits(), 0);
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404).body("not found");
    });

    let result = http_request(&server.url("/missing"), "GET", None, None).await;

    api_mock.assert();
    match result {
        Err(TxError::HttpStatus { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_json_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/html");
        then.status(200).body("<html>oops</html>");
    });

    let result = http_request(&server.url("/html"), "GET", None, None).await;
    assert!(matches!(result, Err(TxError::InvalidResponse { .. })));
}

#[tokio::test]
async fn test_non_utf8_body_is_invalid_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/binary");
        then.status(200).body(vec![0xffu8]);
    });

    let result = http_request(&server.url("/binary"), "GET", None, None).await;
    assert!(matches!(result, Err(TxError::InvalidResponse { .. })));
}

#[tokio::test]
async fn test_illegal_header_name_is_a_validation_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.path("/posts");
        then.status(200).json_body(serde_json::json!([]));
    });

    let headers = HashMap::from([("Bad Name".to_string(), "x".to_string())]);
    let result = http_request(&server.url("/posts"), "GET", None, Some(&headers)).await;

    match result {
        Err(e @ TxError::ValidationError { .. }) => assert!(!e.is_retryable()),
        other => panic!("expected ValidationError, got {:?}", other),
    }
    assert_eq!(api_mock.hits(), 0);
}

#[tokio::test]
async fn test_empty_success_body_is_null() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT).path("/posts/7");
        then.status(204);
    });

    let response = http_request(&server.url("/posts/7"), "PUT", None, None).await?;
    assert!(response.is_null());
    Ok(())
}

#[tokio::test]
async fn test_timeout_surfaces_as_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200)
            .delay(Duration::from_secs(2))
            .json_body(serde_json::json!({}));
    });

    let client = HttpClient::new().with_timeout(Duration::from_millis(200));
    let result = client
        .request(&server.url("/slow"), HttpMethod::Get, None, None)
        .await;

    match result {
        Err(TxError::ApiError(e)) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
}
