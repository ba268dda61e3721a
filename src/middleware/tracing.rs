// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Builds the per-request span that carries the request ID
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

use axum::body::Body;
use http::Request;
use tracing::Span;

/// Header carrying the request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create a tracing span for an HTTP request
///
/// The request ID is set by `SetRequestIdLayer` before this runs, so it is
/// recorded straight from the header.
pub fn create_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// Create a tracing span for a roadmap store operation
pub fn create_store_span(operation: &str, key: &str) -> Span {
    tracing::debug_span!(
        "store_operation",
        operation = %operation,
        key = %key,
        duration_ms = tracing::field::Empty,
    )
}
