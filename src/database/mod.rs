// ABOUTME: Roadmap document persistence behind the RoadmapStore trait
// ABOUTME: SQLite-backed Database, in-process MemoryStore, and a factory choosing between them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! # Database Management
//!
//! Roadmaps are persisted as whole JSON documents, one per track, next to a
//! single scalar holding the selected track. Reads and writes replace the
//! entire value; there is no versioning and no locking, so concurrent writers
//! from different processes are last-write-wins.

mod documents;
mod memory;

pub use memory::MemoryStore;

use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use kuzan_core::models::{Roadmap, Track};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Storage of roadmap documents and the selected track
#[async_trait]
pub trait RoadmapStore: Send + Sync {
    /// Load the persisted roadmap for a track, if any
    async fn load(&self, track: Track) -> AppResult<Option<Roadmap>>;

    /// Replace the persisted roadmap for a track
    async fn save(&self, track: Track, roadmap: &Roadmap) -> AppResult<()>;

    /// The persisted track selection, if any
    async fn selected_track(&self) -> AppResult<Option<Track>>;

    /// Persist the track selection
    async fn select_track(&self, track: Track) -> AppResult<()>;
}

/// `SQLite` document store
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Connect and run migrations
    ///
    /// File databases are created, along with their parent directory, when
    /// missing. In-memory databases use a single connection so every query
    /// sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the directory cannot be
    /// created, or the connection or migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let is_memory = database_url.contains(":memory:");

        if !is_memory {
            create_parent_dir(database_url).await?;
        }

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::database(format!("Invalid database URL: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(if is_memory { 1 } else { 5 })
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS documents (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create documents table: {e}")))?;

        Ok(())
    }
}

async fn create_parent_dir(database_url: &str) -> AppResult<()> {
    let path = database_url.strip_prefix("sqlite:").unwrap_or(database_url);
    let path = path.trim_start_matches("//");
    let path = path.split('?').next().unwrap_or(path);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    Ok(())
}

/// Open the store selected by configuration
///
/// # Errors
///
/// Returns an error if the `SQLite` database cannot be opened
pub async fn open_store(url: &DatabaseUrl) -> AppResult<Arc<dyn RoadmapStore>> {
    if url.is_memory() {
        info!("Using in-process roadmap store");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let database = Database::new(&url.to_connection_string()).await?;
    info!("Roadmap store ready: {url}");
    Ok(Arc::new(database))
}
