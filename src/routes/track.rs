// ABOUTME: Route handlers for reading and changing the selected training track
// ABOUTME: GET and PUT /track backed by the persisted track selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use kuzan_core::models::Track;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Track selection payload, used for both request and response
#[derive(Debug, Serialize, Deserialize)]
pub struct TrackSelection {
    /// `push` or `pull`
    pub track: String,
}

/// Track selection routes
pub struct TrackRoutes;

impl TrackRoutes {
    /// Create the track selection routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/track", get(Self::get_track).put(Self::put_track))
            .with_state(resources)
    }

    async fn get_track(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<TrackSelection>> {
        let track = resources.roadmaps.active_track().await?;
        Ok(Json(TrackSelection {
            track: track.to_string(),
        }))
    }

    async fn put_track(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<TrackSelection>, JsonRejection>,
    ) -> AppResult<Json<TrackSelection>> {
        let Json(body) =
            body.map_err(|e| AppError::invalid_input(format!("Invalid request body: {e}")))?;
        let track: Track = body.track.parse()?;

        resources.roadmaps.select_track(track).await?;
        Ok(Json(TrackSelection {
            track: track.to_string(),
        }))
    }
}
