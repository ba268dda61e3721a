// ABOUTME: Route module organization for Kuzan HTTP endpoints
// ABOUTME: Groups health, track selection and roadmap routes into one router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! Route module for the Kuzan server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Health check and readiness routes
pub mod health;
/// Roadmap documents, summaries, attempts and photo analysis
pub mod roadmaps;
/// Track selection routes
pub mod track;

pub use health::HealthRoutes;
pub use roadmaps::{AttemptRequest, RoadmapRoutes};
pub use track::{TrackRoutes, TrackSelection};

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;

/// All routes, without middleware
pub fn router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(TrackRoutes::routes(Arc::clone(resources)))
        .merge(RoadmapRoutes::routes(Arc::clone(resources)))
}
