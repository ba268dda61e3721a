// ABOUTME: Roadmap business logic shared by every presentation surface
// ABOUTME: Load, migrate, mutate and save sequencing around the progression engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

use crate::constants::service_names::ANALYSIS_SERVICE;
use crate::database::RoadmapStore;
use crate::errors::{AppError, AppResult};
use crate::external::{AnalysisRequest, AnalysisResponse, AnalysisService};
use crate::logging::AppLogger;
use bytes::Bytes;
use chrono::Utc;
use kuzan_core::catalog;
use kuzan_core::models::{Roadmap, Track};
use kuzan_core::progression::{AttemptOutcome, ProgressionEngine, ProgressionError};
use kuzan_core::summary::RoadmapSummary;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Photo received from a client
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// Raw image bytes
    pub image: Bytes,
    /// Client-side file name
    pub file_name: String,
    /// MIME type, if the client sent one
    pub content_type: Option<String>,
}

/// Result of a manual score entry
#[derive(Debug, Clone, Serialize)]
pub struct ScoreOutcome {
    /// Effect of the attempt
    pub attempt: AttemptOutcome,
    /// Roadmap as saved
    pub roadmap: Roadmap,
}

/// Result of an analyzed photo
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    /// Upstream analysis, passed through
    pub analysis: AnalysisResponse,
    /// Effect of the attempt; absent when the photo could not be scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<AttemptOutcome>,
    /// Roadmap after the attempt
    pub roadmap: Roadmap,
}

/// Roadmap operations with persistence
///
/// Read-modify-write sequences are serialized within the process. Across
/// processes the store stays last-write-wins.
pub struct RoadmapService {
    store: Arc<dyn RoadmapStore>,
    analysis: Arc<dyn AnalysisService>,
    engine: ProgressionEngine,
    write_lock: Mutex<()>,
}

impl RoadmapService {
    /// Create a service over a store and an analysis backend
    #[must_use]
    pub fn new(
        store: Arc<dyn RoadmapStore>,
        analysis: Arc<dyn AnalysisService>,
        engine: ProgressionEngine,
    ) -> Self {
        Self {
            store,
            analysis,
            engine,
            write_lock: Mutex::new(()),
        }
    }

    /// Progression rules in use
    #[must_use]
    pub const fn engine(&self) -> &ProgressionEngine {
        &self.engine
    }

    /// The selected track, persisting the default when nothing is stored
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn active_track(&self) -> AppResult<Track> {
        if let Some(track) = self.store.selected_track().await? {
            return Ok(track);
        }

        let track = Track::default();
        self.store.select_track(track).await?;
        info!(track = %track, "No track selected, defaulting");
        Ok(track)
    }

    /// Persist a new track selection
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn select_track(&self, track: Track) -> AppResult<()> {
        self.store.select_track(track).await?;
        info!(track = %track, "Track selected");
        Ok(())
    }

    /// The migrated roadmap for a track, materialized on first access
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or holds a malformed document
    pub async fn roadmap(&self, track: Track) -> AppResult<Roadmap> {
        let _guard = self.write_lock.lock().await;
        self.load_current(track).await
    }

    /// Progress overview for a track
    ///
    /// # Errors
    ///
    /// Same as [`roadmap`](Self::roadmap)
    pub async fn summary(&self, track: Track) -> AppResult<RoadmapSummary> {
        let roadmap = self.roadmap(track).await?;
        Ok(RoadmapSummary::from_roadmap(&roadmap))
    }

    /// Record a score against a skill and apply its unlocks
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown skill, `ValueOutOfRange` for a score
    /// outside 0-100, or a store error. The stored roadmap is left untouched
    /// on error.
    pub async fn record_score(
        &self,
        track: Track,
        skill_key: &str,
        score: f64,
    ) -> AppResult<ScoreOutcome> {
        let _guard = self.write_lock.lock().await;
        let mut roadmap = self.load_current(track).await?;

        let attempt = self.engine.apply_attempt(&mut roadmap, skill_key, score)?;
        self.persist(track, &mut roadmap).await?;
        log_outcome(track, skill_key, &attempt);

        Ok(ScoreOutcome { attempt, roadmap })
    }

    /// Send a photo to the analysis service and record its score
    ///
    /// The skill is resolved before anything is uploaded. When the service
    /// returns no score the analysis is passed through and nothing is
    /// recorded.
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown skill, an external service error when
    /// the upload fails, or a store error. The stored roadmap is left
    /// untouched on error.
    pub async fn analyze_and_record(
        &self,
        track: Track,
        skill_key: &str,
        upload: PhotoUpload,
    ) -> AppResult<AnalysisOutcome> {
        let skill_id = {
            let _guard = self.write_lock.lock().await;
            let roadmap = self.load_current(track).await?;
            if roadmap.find_skill(skill_key).is_none() {
                return Err(ProgressionError::SkillNotFound {
                    skill: skill_key.to_owned(),
                }
                .into());
            }
            catalog::analysis_id_for(&roadmap, skill_key).to_owned()
        };

        // The upload runs without the lock; the roadmap is reloaded afterwards
        let analysis = self
            .analysis
            .analyze(AnalysisRequest {
                image: upload.image,
                file_name: upload.file_name,
                content_type: upload.content_type,
                skill_id,
            })
            .await?;

        let _guard = self.write_lock.lock().await;
        let mut roadmap = self.load_current(track).await?;

        let Some(score_data) = analysis.score_data.as_ref() else {
            info!(track = %track, skill = %skill_key, "Analysis returned no score, nothing recorded");
            return Ok(AnalysisOutcome {
                analysis,
                attempt: None,
                roadmap,
            });
        };

        if let Some(upstream) = score_data.passing_threshold {
            if (upstream - self.engine.passing_threshold()).abs() > f64::EPSILON {
                warn!(
                    upstream_threshold = upstream,
                    engine_threshold = self.engine.passing_threshold(),
                    "Analysis service reports a different passing threshold"
                );
            }
        }

        let attempt = self
            .engine
            .apply_attempt(&mut roadmap, skill_key, score_data.overall_score)
            .map_err(|e| match e {
                ProgressionError::ScoreOutOfRange { .. } => {
                    AppError::external_service(ANALYSIS_SERVICE, e.to_string())
                }
                other => other.into(),
            })?;
        self.persist(track, &mut roadmap).await?;
        log_outcome(track, skill_key, &attempt);

        Ok(AnalysisOutcome {
            analysis,
            attempt: Some(attempt),
            roadmap,
        })
    }

    /// Load, materialize or migrate; caller holds the write lock
    async fn load_current(&self, track: Track) -> AppResult<Roadmap> {
        let Some(mut roadmap) = self.store.load(track).await? else {
            let mut roadmap = self.engine.materialize(track);
            self.persist(track, &mut roadmap).await?;
            info!(track = %track, "Materialized default roadmap");
            return Ok(roadmap);
        };

        let track_corrected = roadmap.track != track;
        roadmap.track = track;

        let report = self.engine.migrate(&mut roadmap);
        if report.changed() || track_corrected {
            AppLogger::log_migration(
                track,
                &report.removed,
                report.renumbered,
                report.progress_corrected,
            );
            self.persist(track, &mut roadmap).await?;
        }

        Ok(roadmap)
    }

    async fn persist(&self, track: Track, roadmap: &mut Roadmap) -> AppResult<()> {
        roadmap.updated_at = Some(Utc::now());
        self.store.save(track, roadmap).await
    }
}

fn log_outcome(track: Track, skill_key: &str, outcome: &AttemptOutcome) {
    AppLogger::log_attempt(
        track,
        skill_key,
        outcome.attempt.score,
        outcome.attempt.passed,
        outcome.attempt.total_attempts,
    );
    AppLogger::log_unlock(track, skill_key, &outcome.unlocked);
}
