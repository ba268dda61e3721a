// ABOUTME: HTTP tests for health endpoints and cross-cutting middleware
// ABOUTME: Liveness, readiness, request ID propagation, and CORS preflight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{test_app, test_resources, MockAnalysis};
use kuzan::routes::HealthRoutes;
use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint() {
    let body: Value = AxumTestRequest::get("/health")
        .send(HealthRoutes::routes())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint() {
    let body: Value = AxumTestRequest::get("/ready")
        .send(HealthRoutes::routes())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_request_id_is_generated_and_propagated() {
    let (resources, _store) = test_resources(MockAnalysis::scoring(70.0));

    let generated = AxumTestRequest::get("/health")
        .send(test_app(&resources))
        .await;
    assert!(generated.header("x-request-id").is_some());

    let echoed = AxumTestRequest::get("/health")
        .header("x-request-id", "req-from-client")
        .send(test_app(&resources))
        .await;
    assert_eq!(
        echoed.header("x-request-id").as_deref(),
        Some("req-from-client")
    );
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let (resources, _store) = test_resources(MockAnalysis::scoring(70.0));

    let response = AxumTestRequest::get("/health")
        .header("origin", "http://localhost:3000")
        .send(test_app(&resources))
        .await;

    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("http://localhost:3000")
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (resources, _store) = test_resources(MockAnalysis::scoring(70.0));

    AxumTestRequest::get("/roadmaps")
        .send(test_app(&resources))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
