//! HTTP preview API integration tests
//!
//! Requests are driven through the router with `oneshot`, no listener needed.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use ara_message_renderer::config::Settings;
use ara_message_renderer::server::{create_app, AppState};
use ara_message_renderer::template::{EnvironmentOptions, TemplateEnvironment};

fn test_settings() -> Settings {
    serde_json::from_value(json!({})).unwrap()
}

fn test_app() -> Router {
    let environment = TemplateEnvironment::from_sources(
        [
            ("shop/edx_ace/shipped/sms/body.txt", "Order {{ order }} shipped"),
            ("shop/edx_ace/broken/sms/body.txt", "Order {{ order }} and {{ carrier }}"),
        ],
        EnvironmentOptions::default(),
    )
    .unwrap();

    create_app(AppState::with_environment(test_settings(), environment))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn render_request(channel: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/v1/render/{channel}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_render_sms() {
    let (status, body) = send(
        test_app(),
        render_request(
            "sms",
            json!({"app_label": "shop", "name": "shipped", "context": {"order": "A-1"}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"channel": "sms", "body": "Order A-1 shipped"}));
}

#[tokio::test]
async fn test_unknown_channel_is_bad_request() {
    let (status, body) = send(
        test_app(),
        render_request("fax", json!({"app_label": "shop", "name": "shipped"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "UNKNOWN_CHANNEL");
}

#[tokio::test]
async fn test_missing_template_is_not_found() {
    let (status, body) = send(
        test_app(),
        render_request("email", json!({"app_label": "shop", "name": "shipped"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "TEMPLATE_NOT_FOUND");
}

#[tokio::test]
async fn test_missing_binding_is_unprocessable() {
    let (status, body) = send(
        test_app(),
        render_request(
            "sms",
            json!({"app_label": "shop", "name": "broken", "context": {"order": "A-1"}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "RENDER_FAILED");
}

#[tokio::test]
async fn test_broken_template_on_disk_is_server_error() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("shop/edx_ace/shipped/sms/body.txt");
    std::fs::create_dir_all(template.parent().unwrap()).unwrap();
    std::fs::write(&template, "Order {% if %}").unwrap();

    let environment =
        TemplateEnvironment::from_dirs([dir.path()], EnvironmentOptions::default());
    let app = create_app(AppState::with_environment(test_settings(), environment));

    let (status, body) = send(
        app,
        render_request("sms", json!({"app_label": "shop", "name": "shipped"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "TEMPLATE_SYNTAX");
}

#[tokio::test]
async fn test_unreadable_template_is_server_error() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("shop/edx_ace/shipped/sms/body.txt")).unwrap();

    let environment =
        TemplateEnvironment::from_dirs([dir.path()], EnvironmentOptions::default());
    let app = create_app(AppState::with_environment(test_settings(), environment));

    let (status, body) = send(
        app,
        render_request("sms", json!({"app_label": "shop", "name": "shipped"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "TEMPLATE_LOAD");
}

#[tokio::test]
async fn test_malformed_body_uses_error_envelope() {
    let (status, body) = send(
        test_app(),
        render_request(
            "sms",
            json!({"app_label": "shop", "name": "shipped", "context": [1]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_empty_name_is_rejected() {
    let (status, body) = send(
        test_app(),
        render_request("sms", json!({"app_label": "shop", "name": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_channels() {
    let request = Request::builder()
        .uri("/api/v1/channels")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let channels = body.as_array().unwrap();
    assert_eq!(channels.len(), 3);
    assert_eq!(channels[0]["channel"], "email");
    assert_eq!(channels[0]["fields"][2]["name"], "body_html");
    assert_eq!(channels[0]["fields"][2]["template"], "body.html");
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_metrics_after_render() {
    let app = test_app();
    let _ = send(
        app.clone(),
        render_request(
            "sms",
            json!({"app_label": "shop", "name": "shipped", "context": {"order": "B-2"}}),
        ),
    )
    .await;

    let request = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("ara_renders_total"));
}
