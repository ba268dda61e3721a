// ABOUTME: HTTP server assembly and lifecycle for the Kuzan API
// ABOUTME: Wires routes with tracing, request ID, CORS and body limit layers, then serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! # HTTP Server
//!
//! [`build_app`] produces the complete router so tests can drive it with
//! `tower::ServiceExt::oneshot`; [`run`] binds it and serves until Ctrl+C.

use crate::errors::{AppError, AppResult};
use crate::middleware::{create_request_span, setup_cors};
use crate::resources::ServerResources;
use crate::routes;
use axum::{extract::DefaultBodyLimit, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info, warn, Level};

/// Build the application router with all middleware applied
pub fn build_app(resources: &Arc<ServerResources>) -> Router {
    let config = &resources.config;

    routes::router(resources)
        .layer(DefaultBodyLimit::max(config.limits.max_upload_bytes))
        .layer(setup_cors(config))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(create_request_span)
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

/// Bind the HTTP port and serve until shutdown
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>, port: u16) -> AppResult<()> {
    let app = build_app(&resources);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {addr}: {e}")))?;
    info!("HTTP server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("HTTP server error: {e}")))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
