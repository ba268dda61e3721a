// ABOUTME: In-memory server fixtures for integration tests
// ABOUTME: Mock analysis service, canned responses, and resource builders over MemoryStore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors


use async_trait::async_trait;
use axum::Router;
use kuzan::config::ServerConfig;
use kuzan::database::MemoryStore;
use kuzan::errors::{AppError, AppResult};
use kuzan::external::{AnalysisRequest, AnalysisResponse, AnalysisService, ScoreData};
use kuzan::resources::ServerResources;
use kuzan::server;
use std::sync::{Arc, Mutex};

/// What the mock analysis service answers
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Successful analysis
    Respond(AnalysisResponse),
    /// Transport failure
    Unavailable,
    /// Upstream answered with an error message
    Reject(String),
}

/// Analysis service double recording the skill ids it was asked about
pub struct MockAnalysis {
    reply: Mutex<MockReply>,
    calls: Mutex<Vec<String>>,
}

impl MockAnalysis {
    pub fn responding(response: AnalysisResponse) -> Arc<Self> {
        Arc::new(Self {
            reply: Mutex::new(MockReply::Respond(response)),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn scoring(score: f64) -> Arc<Self> {
        Self::responding(scored_response(score))
    }

    pub fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            reply: Mutex::new(MockReply::Unavailable),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn rejecting(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Mutex::new(MockReply::Reject(message.to_owned())),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn set_reply(&self, reply: MockReply) {
        *self.reply.lock().unwrap() = reply;
    }

    /// Skill ids received so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisService for MockAnalysis {
    async fn analyze(&self, request: AnalysisRequest) -> AppResult<AnalysisResponse> {
        self.calls.lock().unwrap().push(request.skill_id);
        let reply = self.reply.lock().unwrap().clone();
        match reply {
            MockReply::Respond(response) => Ok(response),
            MockReply::Unavailable => Err(AppError::external_unavailable(
                "Pose analysis service",
                "connection refused",
            )),
            MockReply::Reject(message) => Err(AppError::external_service(
                "Pose analysis service",
                format!("HTTP 400 Bad Request: {message}"),
            )),
        }
    }
}

/// Analysis response carrying a score
pub fn scored_response(score: f64) -> AnalysisResponse {
    AnalysisResponse {
        processed_image: "aGVsbG8=".to_owned(),
        analysis: "Keep your arms locked".to_owned(),
        skill_level: "intermediate".to_owned(),
        score: Some(score),
        score_data: Some(ScoreData {
            overall_score: score,
            is_passing: score >= 65.0,
            angle_scores: serde_json::Map::new(),
            missing_landmarks: Vec::new(),
            passing_threshold: Some(65.0),
        }),
    }
}

/// Analysis response for a photo the service could not score
pub fn unscored_response() -> AnalysisResponse {
    AnalysisResponse {
        processed_image: "aGVsbG8=".to_owned(),
        analysis: "No person detected".to_owned(),
        skill_level: String::new(),
        score: None,
        score_data: None,
    }
}

/// Resources over a fresh in-memory store
pub fn test_resources(analysis: Arc<MockAnalysis>) -> (Arc<ServerResources>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let resources = Arc::new(ServerResources::new(
        Arc::new(ServerConfig::default()),
        store.clone(),
        analysis,
    ));
    (resources, store)
}

/// Full application router with middleware
pub fn test_app(resources: &Arc<ServerResources>) -> Router {
    server::build_app(resources)
}
