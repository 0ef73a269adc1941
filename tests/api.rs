//! HTTP API tests driven through the router without binding a socket

mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use common::{MockClient, Reply, generator};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use wxbrief::summary::GeneratorSettings;
use wxbrief::{SummaryGenerator, WxBriefConfig, web};

async fn post_summary(client: Arc<MockClient>, kind: &str, body: Value) -> (StatusCode, Value) {
    let app = web::app(&WxBriefConfig::default(), Arc::new(generator(client)));
    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/summary/{kind}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_generated_summary() {
    let client = MockClient::new(Reply::Text(" VFR, light winds. ".to_string()));
    let (status, body) = post_summary(
        client,
        "metar",
        json!({"station": "KSEA", "raw_text": "KSEA 121853Z 17008KT 10SM"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"kind": "metar", "status": "generated", "summary": "VFR, light winds.", "reason": null})
    );
}

#[tokio::test]
async fn test_fallback_summary() {
    let (status, body) =
        post_summary(MockClient::new(Reply::Fail), "taf", json!({"station": "KPDX"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "fallback");
    assert!(
        body["summary"]
            .as_str()
            .unwrap()
            .starts_with("TAF forecast for KPDX.")
    );
}

#[tokio::test]
async fn test_unavailable_without_credential() {
    let client = MockClient::without_credential(Reply::Fail);
    let (status, body) = post_summary(client.clone(), "sigmet", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "unavailable");
    assert_eq!(body["summary"], Value::Null);
    assert_eq!(body["reason"], "missing_credential");
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_empty_response_reason() {
    let (_, body) = post_summary(MockClient::new(Reply::NoChoices), "pirep", json!({})).await;
    assert_eq!(body["status"], "unavailable");
    assert_eq!(body["reason"], "empty_response");
}

#[tokio::test]
async fn test_non_object_body_is_rejected() {
    let client = MockClient::new(Reply::Text("unused".to_string()));
    let (status, body) = post_summary(client.clone(), "metar", json!(["KSEA"])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("JSON object"));
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_health_reports_summary_availability() {
    let app = web::app(
        &WxBriefConfig::default(),
        Arc::new(generator(MockClient::without_credential(Reply::Fail))),
    );
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["summaries_enabled"], false);
}

#[tokio::test(start_paused = true)]
async fn test_slow_summary_answers_request_timeout() {
    // generator bound is longer than the HTTP layer, so the layer fires first
    let generator = SummaryGenerator::new(
        MockClient::new(Reply::Hang),
        GeneratorSettings {
            request_timeout: Duration::from_secs(7200),
            ..GeneratorSettings::default()
        },
    );
    let app = web::app(&WxBriefConfig::default(), Arc::new(generator));
    let request = Request::builder()
        .method("POST")
        .uri("/api/summary/metar")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"station":"KSEA"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}
