// ABOUTME: Route handlers for roadmap documents, summaries, score entry and photo analysis
// ABOUTME: Thin axum handlers delegating to RoadmapService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! Roadmap routes
//!
//! - `GET  /roadmaps/:track`
//! - `GET  /roadmaps/:track/summary`
//! - `POST /roadmaps/:track/skills/:skill/attempts`
//! - `POST /roadmaps/:track/skills/:skill/analyze` (multipart, field `file`)

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::resources::ServerResources;
use crate::services::{AnalysisOutcome, PhotoUpload, ScoreOutcome};
use axum::{
    extract::{rejection::JsonRejection, Multipart, Path, State},
    routing::{get, post},
    Json, Router,
};
use kuzan_core::models::{Roadmap, Track};
use kuzan_core::summary::RoadmapSummary;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Manual score entry
#[derive(Debug, Serialize, Deserialize)]
pub struct AttemptRequest {
    /// Score between 0 and 100
    pub score: f64,
}

/// Roadmap routes
pub struct RoadmapRoutes;

impl RoadmapRoutes {
    /// Create the roadmap routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/roadmaps/:track", get(Self::get_roadmap))
            .route("/roadmaps/:track/summary", get(Self::get_summary))
            .route(
                "/roadmaps/:track/skills/:skill/attempts",
                post(Self::record_attempt),
            )
            .route(
                "/roadmaps/:track/skills/:skill/analyze",
                post(Self::analyze_photo),
            )
            .with_state(resources)
    }

    async fn get_roadmap(
        State(resources): State<Arc<ServerResources>>,
        Path(track): Path<String>,
    ) -> AppResult<Json<Roadmap>> {
        let track: Track = track.parse()?;
        Ok(Json(resources.roadmaps.roadmap(track).await?))
    }

    async fn get_summary(
        State(resources): State<Arc<ServerResources>>,
        Path(track): Path<String>,
    ) -> AppResult<Json<RoadmapSummary>> {
        let track: Track = track.parse()?;
        Ok(Json(resources.roadmaps.summary(track).await?))
    }

    async fn record_attempt(
        State(resources): State<Arc<ServerResources>>,
        Path((track, skill)): Path<(String, String)>,
        body: Result<Json<AttemptRequest>, JsonRejection>,
    ) -> AppResult<Json<ScoreOutcome>> {
        let track: Track = track.parse()?;
        let Json(body) =
            body.map_err(|e| AppError::invalid_input(format!("Invalid request body: {e}")))?;

        let outcome = resources
            .roadmaps
            .record_score(track, &skill, body.score)
            .await?;
        Ok(Json(outcome))
    }

    async fn analyze_photo(
        State(resources): State<Arc<ServerResources>>,
        Path((track, skill)): Path<(String, String)>,
        multipart: Multipart,
    ) -> AppResult<Json<AnalysisOutcome>> {
        let track: Track = track.parse()?;
        let upload = read_photo(multipart).await?;

        let outcome = resources
            .roadmaps
            .analyze_and_record(track, &skill, upload)
            .await?;
        Ok(Json(outcome))
    }
}

/// Extract the `file` field; other fields are ignored
async fn read_photo(mut multipart: Multipart) -> AppResult<PhotoUpload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid_input(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field.content_type().map(str::to_owned);
        let image = field
            .bytes()
            .await
            .map_err(|e| AppError::invalid_input(format!("Failed to read uploaded file: {e}")))?;

        if image.is_empty() {
            return Err(AppError::invalid_input("Uploaded file is empty"));
        }

        return Ok(PhotoUpload {
            image,
            file_name,
            content_type,
        });
    }

    Err(AppError::new(
        ErrorCode::MissingRequiredField,
        "File not found in request",
    ))
}
