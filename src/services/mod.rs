// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Provides protocol-agnostic roadmap operations reused by every surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! Domain service layer
//!
//! Route handlers stay thin and delegate here, so the load, migrate, mutate
//! and save sequence exists in exactly one place.

/// Roadmap progression with persistence and photo analysis
pub mod roadmap;

pub use roadmap::{AnalysisOutcome, PhotoUpload, RoadmapService, ScoreOutcome};
