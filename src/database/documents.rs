// ABOUTME: Key-value document operations and the RoadmapStore implementation for SQLite
// ABOUTME: Roadmaps stored as JSON under roadmap_{track}, the selection under selectedSkillType
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

use super::{Database, RoadmapStore};
use crate::constants::documents::SELECTED_TRACK_KEY;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::middleware::create_store_span;
use async_trait::async_trait;
use chrono::Utc;
use kuzan_core::models::{Roadmap, Track};
use sqlx::Row;
use std::time::Instant;
use tracing::{warn, Instrument};

impl Database {
    /// Get a raw document by key
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_document(&self, key: &str) -> AppResult<Option<String>> {
        let started = Instant::now();
        let row = sqlx::query("SELECT value FROM documents WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .instrument(create_store_span("get", key))
            .await
            .map_err(|e| AppError::database(format!("Failed to get document {key}: {e}")))?;

        AppLogger::log_store_operation("get", key, true, elapsed_ms(started));
        Ok(row.map(|row| row.get("value")))
    }

    /// Insert or replace a raw document
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn put_document(&self, key: &str, value: &str) -> AppResult<()> {
        let started = Instant::now();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r"
            INSERT INTO documents (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = ?2,
                updated_at = ?3
            ",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .instrument(create_store_span("put", key))
        .await
        .map_err(|e| AppError::database(format!("Failed to save document {key}: {e}")))?;

        AppLogger::log_store_operation("put", key, true, elapsed_ms(started));
        Ok(())
    }
}

#[async_trait]
impl RoadmapStore for Database {
    async fn load(&self, track: Track) -> AppResult<Option<Roadmap>> {
        let key = track.document_key();
        self.get_document(&key)
            .await?
            .map(|json| {
                serde_json::from_str(&json).map_err(|e| {
                    AppError::serialization(format!("Stored document {key} is not a roadmap: {e}"))
                })
            })
            .transpose()
    }

    async fn save(&self, track: Track, roadmap: &Roadmap) -> AppResult<()> {
        let json = serde_json::to_string(roadmap)?;
        self.put_document(&track.document_key(), &json).await
    }

    async fn selected_track(&self) -> AppResult<Option<Track>> {
        let Some(value) = self.get_document(SELECTED_TRACK_KEY).await? else {
            return Ok(None);
        };

        match value.parse::<Track>() {
            Ok(track) => Ok(Some(track)),
            Err(_) => {
                warn!(value = %value, "Ignoring invalid stored track selection");
                Ok(None)
            }
        }
    }

    async fn select_track(&self, track: Track) -> AppResult<()> {
        self.put_document(SELECTED_TRACK_KEY, track.as_str()).await
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
