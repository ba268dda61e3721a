// ABOUTME: In-process RoadmapStore over a locked HashMap
// ABOUTME: Used for tests and ephemeral deployments selected with DATABASE_URL=memory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

use super::RoadmapStore;
use crate::errors::AppResult;
use async_trait::async_trait;
use kuzan_core::models::{Roadmap, Track};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Roadmap store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    roadmaps: RwLock<HashMap<Track, Roadmap>>,
    selected: RwLock<Option<Track>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoadmapStore for MemoryStore {
    async fn load(&self, track: Track) -> AppResult<Option<Roadmap>> {
        Ok(self.roadmaps.read().await.get(&track).cloned())
    }

    async fn save(&self, track: Track, roadmap: &Roadmap) -> AppResult<()> {
        self.roadmaps.write().await.insert(track, roadmap.clone());
        Ok(())
    }

    async fn selected_track(&self) -> AppResult<Option<Track>> {
        Ok(*self.selected.read().await)
    }

    async fn select_track(&self, track: Track) -> AppResult<()> {
        *self.selected.write().await = Some(track);
        Ok(())
    }
}
