mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use common::{pipeline_with, StubBehavior, StubClient};
use http_body_util::BodyExt;
use medchat::infrastructure::http::CORS_ALLOW_HEADERS;
use medchat::services::contextual_fallback::GREETING_REPLY;
use medchat::{build_router, HARD_FALLBACK_REPLY};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(client: StubClient) -> Router {
    build_router(Arc::new(pipeline_with(Arc::new(client), &["a"])))
}

fn chat_request(method: Method, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn assert_cors(response: &axum::response::Response) {
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], CORS_ALLOW_HEADERS);
}

async fn reply_of(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1, "body must only carry `reply`");
    object["reply"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_preflight_returns_no_content_with_cors() {
    let client = Arc::new(StubClient::new());
    let app = build_router(Arc::new(pipeline_with(client.clone(), &["a"])));

    let response = app
        .oneshot(chat_request(
            Method::OPTIONS,
            json!({ "message": "zzzz" }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_cors(&response);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
    assert!(client.calls().is_empty(), "preflight must not reach the pipeline");
}

#[tokio::test]
async fn test_post_knowledge_question() {
    let response = app(StubClient::new())
        .oneshot(chat_request(
            Method::POST,
            json!({ "message": "Can I take aspirin with food?" }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert!(reply_of(response).await.starts_with("Aspirin"));
}

#[tokio::test]
async fn test_post_greeting_with_models_down() {
    let response = app(StubClient::new())
        .oneshot(chat_request(Method::POST, r#"{"message":"hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(reply_of(response).await, GREETING_REPLY);
}

#[tokio::test]
async fn test_unknown_fields_are_ignored() {
    let response = app(StubClient::new())
        .oneshot(chat_request(
            Method::POST,
            r#"{"message":"hello","user_id":"42"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(reply_of(response).await, GREETING_REPLY);
}

#[tokio::test]
async fn test_bad_requests_degrade_to_hard_fallback() {
    let bodies = [
        "{}".to_string(),
        r#"{"message": 42}"#.to_string(),
        r#"{"message": "   "}"#.to_string(),
        "not json at all".to_string(),
        String::new(),
    ];

    for body in bodies {
        let response = app(StubClient::new())
            .oneshot(chat_request(Method::POST, body.clone()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "body: {body:?}");
        assert_cors(&response);
        assert_eq!(reply_of(response).await, HARD_FALLBACK_REPLY);
    }
}

#[tokio::test]
async fn test_oversized_body_degrades_to_hard_fallback() {
    let message = "a".repeat(128 * 1024);
    let response = app(StubClient::new())
        .oneshot(chat_request(
            Method::POST,
            json!({ "message": message }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(reply_of(response).await, HARD_FALLBACK_REPLY);
}

#[tokio::test]
async fn test_other_methods_get_hard_fallback() {
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let response = app(StubClient::new())
            .oneshot(chat_request(method.clone(), Body::empty()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "method: {method}");
        assert_cors(&response);
        assert_eq!(reply_of(response).await, HARD_FALLBACK_REPLY);
    }
}

#[tokio::test]
async fn test_panic_in_pipeline_degrades_to_hard_fallback() {
    let response = app(StubClient::new().with("a", StubBehavior::Panic))
        .oneshot(chat_request(Method::POST, r#"{"message":"zzzz"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert_eq!(reply_of(response).await, HARD_FALLBACK_REPLY);
}

#[tokio::test]
async fn test_health_check() {
    let response = app(StubClient::new())
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}
