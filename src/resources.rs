// ABOUTME: Centralized resource container for dependency injection into route handlers
// ABOUTME: Builds the store, analysis client and roadmap service once from configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! # Server Resources Module
//!
//! Shared, expensive resources built once at startup and handed to every
//! route as `State<Arc<ServerResources>>`.

use crate::config::ServerConfig;
use crate::database::{self, RoadmapStore};
use crate::errors::AppResult;
use crate::external::{AnalysisClient, AnalysisClientConfig, AnalysisService};
use crate::services::RoadmapService;
use kuzan_core::progression::ProgressionEngine;
use std::sync::Arc;
use std::time::Duration;

/// Centralized resource container
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Roadmap operations
    pub roadmaps: Arc<RoadmapService>,
}

impl ServerResources {
    /// Assemble resources from already-built parts
    #[must_use]
    pub fn new(
        config: Arc<ServerConfig>,
        store: Arc<dyn RoadmapStore>,
        analysis: Arc<dyn AnalysisService>,
    ) -> Self {
        Self {
            config,
            roadmaps: Arc::new(RoadmapService::new(
                store,
                analysis,
                ProgressionEngine::default(),
            )),
        }
    }

    /// Open the configured store and build the analysis client
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened or the HTTP client
    /// cannot be built
    pub async fn from_config(config: ServerConfig) -> AppResult<Self> {
        let store = database::open_store(&config.database.url).await?;
        let analysis = AnalysisClient::new(AnalysisClientConfig {
            base_url: config.analysis.base_url.clone(),
            timeout: config.analysis.timeout_secs.map(Duration::from_secs),
        })?;

        Ok(Self::new(Arc::new(config), store, Arc::new(analysis)))
    }
}
