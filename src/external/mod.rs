// ABOUTME: External service client modules (pose analysis)
// ABOUTME: Provides the AnalysisService seam and its HTTP implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! External Service Clients

pub mod analysis_client;

pub use analysis_client::{
    AnalysisClient, AnalysisClientConfig, AnalysisRequest, AnalysisResponse, AnalysisService,
    ScoreData,
};
