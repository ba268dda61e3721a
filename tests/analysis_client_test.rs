// ABOUTME: Integration tests for the pose analysis HTTP client
// ABOUTME: Runs a fake analysis service on a local port and checks requests and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use kuzan::errors::ErrorCode;
use kuzan::external::{AnalysisClient, AnalysisClientConfig, AnalysisRequest, AnalysisService};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Fields the fake service saw in the last submission
#[derive(Debug, Default, Clone)]
struct Received {
    skill_id: Option<String>,
    file_name: Option<String>,
    content_type: Option<String>,
    file_len: usize,
}

type Shared = Arc<Mutex<Received>>;

async fn analyze_ok(State(received): State<Shared>, mut multipart: Multipart) -> Json<Value> {
    let mut seen = Received::default();
    while let Some(field) = multipart.next_field().await.unwrap() {
        match field.name() {
            Some("file") => {
                seen.file_name = field.file_name().map(str::to_owned);
                seen.content_type = field.content_type().map(str::to_owned);
                seen.file_len = field.bytes().await.unwrap().len();
            }
            Some("skill_id") => seen.skill_id = Some(field.text().await.unwrap()),
            _ => {}
        }
    }
    *received.lock().unwrap() = seen;

    Json(json!({
        "processedImage": "aGVsbG8=",
        "analysis": "Solid hold, push your shoulders further forward",
        "skillLevel": "Intermediate",
        "score": 78.3,
        "scoreData": {
            "overall_score": 78.3,
            "angle_scores": { "elbow": { "score": 81.0 } },
            "missing_landmarks": [],
            "passing_threshold": 65.0,
            "is_passing": true
        }
    }))
}

async fn analyze_rejected() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "Invalid skill_id: handstand" })),
    )
}

async fn analyze_garbage() -> &'static str {
    "<html>upstream proxy error</html>"
}

async fn spawn_fake_service(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: String) -> AnalysisClient {
    AnalysisClient::new(AnalysisClientConfig {
        base_url,
        timeout: Some(Duration::from_secs(5)),
    })
    .unwrap()
}

fn request(skill_id: &str) -> AnalysisRequest {
    AnalysisRequest {
        image: Bytes::from_static(b"\xff\xd8\xff\xe0not-really-a-jpeg"),
        file_name: "hold.jpg".to_owned(),
        content_type: Some("image/jpeg".to_owned()),
        skill_id: skill_id.to_owned(),
    }
}

#[tokio::test]
async fn test_submits_multipart_and_parses_response() {
    let received: Shared = Arc::default();
    let app = Router::new()
        .route("/analyze", post(analyze_ok))
        .with_state(received.clone());
    let base_url = spawn_fake_service(app).await;

    let response = client(base_url)
        .analyze(request("tuck_planche"))
        .await
        .unwrap();

    let seen = received.lock().unwrap().clone();
    assert_eq!(seen.skill_id.as_deref(), Some("tuck_planche"));
    assert_eq!(seen.file_name.as_deref(), Some("hold.jpg"));
    assert_eq!(seen.content_type.as_deref(), Some("image/jpeg"));
    assert_eq!(seen.file_len, 21);

    assert_eq!(response.skill_level, "Intermediate");
    let score = response.score_data.unwrap();
    assert!((score.overall_score - 78.3).abs() < f64::EPSILON);
    assert!(score.is_passing);
    assert_eq!(score.passing_threshold, Some(65.0));
    assert!(score.angle_scores.contains_key("elbow"));
}

#[tokio::test]
async fn test_upstream_error_status_is_external_service_error() {
    let app = Router::new().route("/analyze", post(analyze_rejected));
    let base_url = spawn_fake_service(app).await;

    let err = client(base_url)
        .analyze(request("handstand"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("400"));
    assert!(err.message.contains("Invalid skill_id"));
    let details = err.details.unwrap();
    assert_eq!(details["status"], 400);
    assert_eq!(details["retryable"], true);
}

#[tokio::test]
async fn test_malformed_body_is_external_service_error() {
    let app = Router::new().route("/analyze", post(analyze_garbage));
    let base_url = spawn_fake_service(app).await;

    let err = client(base_url)
        .analyze(request("l_sit"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_unreachable_service_is_unavailable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(format!("http://{addr}"))
        .analyze(request("l_sit"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(err.http_status(), 502);
    assert!(err.details.unwrap()["hint"].is_string());
}

#[tokio::test]
async fn test_invalid_content_type_is_rejected_before_sending() {
    let mut bad = request("l_sit");
    bad.content_type = Some("not a mime".to_owned());

    let err = client("http://127.0.0.1:9".to_owned())
        .analyze(bad)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
