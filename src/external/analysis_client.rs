// ABOUTME: Pose analysis service client submitting photos for skill scoring
// ABOUTME: Multipart POST to {base_url}/analyze with typed response and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! Pose Analysis Service Client
//!
//! The analysis service detects body landmarks in a photo, scores the joint
//! angles against the rules of a skill, and returns an annotated image with
//! textual feedback. This client only transports the request; it never
//! retries and never interprets the score.
//!
//! # Example
//! ```rust,no_run
//! use kuzan::external::{AnalysisClient, AnalysisClientConfig, AnalysisRequest, AnalysisService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnalysisClient::new(AnalysisClientConfig::default())?;
//! let request = AnalysisRequest {
//!     image: std::fs::read("hold.jpg")?.into(),
//!     file_name: "hold.jpg".to_owned(),
//!     content_type: Some("image/jpeg".to_owned()),
//!     skill_id: "tuck_planche".to_owned(),
//! };
//! let response = client.analyze(request).await?;
//! # Ok(())
//! # }
//! ```

use crate::constants::{defaults, service_names::ANALYSIS_SERVICE};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::{Duration, Instant};

/// Shown to clients when the analysis service could not produce a result
const RETRY_HINT: &str = "The photo could not be analyzed right now. Please try again.";

/// Analysis client configuration
#[derive(Debug, Clone)]
pub struct AnalysisClientConfig {
    /// Base URL of the service, without the `/analyze` path
    pub base_url: String,
    /// Request timeout; the transport default applies when unset
    pub timeout: Option<Duration>,
}

impl Default for AnalysisClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::ANALYSIS_SERVICE_URL.to_owned(),
            timeout: None,
        }
    }
}

/// Photo submitted for analysis
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Raw image bytes
    pub image: Bytes,
    /// Original file name, forwarded in the multipart part
    pub file_name: String,
    /// MIME type of the image, if known
    pub content_type: Option<String>,
    /// Skill identifier understood by the analysis service
    pub skill_id: String,
}

/// Numeric scoring block of an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreData {
    /// Mean of the per-angle scores, 0-100
    pub overall_score: f64,
    /// The service's own pass verdict; advisory only
    #[serde(default)]
    pub is_passing: bool,
    /// Per-angle breakdown, shape owned by the service
    #[serde(default)]
    pub angle_scores: serde_json::Map<String, serde_json::Value>,
    /// Landmarks the detector could not find
    #[serde(default)]
    pub missing_landmarks: Vec<String>,
    /// Threshold the service applied, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_threshold: Option<f64>,
}

/// Analysis service response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Base64 encoded annotated image
    #[serde(default)]
    pub processed_image: String,
    /// Feedback text
    #[serde(default)]
    pub analysis: String,
    /// Skill level label
    #[serde(default)]
    pub skill_level: String,
    /// Headline score, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Detailed scoring; absent when the skill could not be scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_data: Option<ScoreData>,
}

/// Anything able to score a photo against a skill
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submit a photo for analysis
    ///
    /// # Errors
    ///
    /// `ExternalServiceUnavailable` when the service cannot be reached,
    /// `ExternalServiceError` when it answers with a failure or a malformed body
    async fn analyze(&self, request: AnalysisRequest) -> AppResult<AnalysisResponse>;
}

/// HTTP client for the pose analysis service
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    config: AnalysisClientConfig,
    http_client: reqwest::Client,
}

impl AnalysisClient {
    /// Create a new analysis client
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built
    pub fn new(config: AnalysisClientConfig) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Endpoint receiving submissions
    #[must_use]
    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.config.base_url.trim_end_matches('/'))
    }

    fn build_form(request: AnalysisRequest) -> AppResult<Form> {
        let mut part = Part::bytes(request.image.to_vec()).file_name(request.file_name);
        if let Some(content_type) = request.content_type {
            part = part.mime_str(&content_type).map_err(|e| {
                AppError::invalid_input(format!("Invalid image content type '{content_type}': {e}"))
            })?;
        }

        Ok(Form::new().part("file", part).text("skill_id", request.skill_id))
    }

    async fn send(&self, request: AnalysisRequest) -> AppResult<AnalysisResponse> {
        let form = Self::build_form(request)?;

        let response = self
            .http_client
            .post(self.analyze_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                AppError::external_unavailable(ANALYSIS_SERVICE, e.to_string())
                    .with_details(json!({ "retryable": true, "hint": RETRY_HINT }))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(
                AppError::external_service(ANALYSIS_SERVICE, format!("HTTP {status}: {text}"))
                    .with_details(json!({
                        "status": status.as_u16(),
                        "retryable": true,
                        "hint": RETRY_HINT,
                    })),
            );
        }

        response.json::<AnalysisResponse>().await.map_err(|e| {
            AppError::external_service(ANALYSIS_SERVICE, format!("JSON parse error: {e}"))
        })
    }
}

#[async_trait]
impl AnalysisService for AnalysisClient {
    async fn analyze(&self, request: AnalysisRequest) -> AppResult<AnalysisResponse> {
        let skill_id = request.skill_id.clone();
        let started = Instant::now();

        let result = self.send(request).await;

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_analysis_call(&skill_id, result.is_ok(), duration_ms);
        result
    }
}
