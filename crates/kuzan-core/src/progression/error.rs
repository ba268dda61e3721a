// ABOUTME: Progression engine error type
// ABOUTME: Distinguishes unknown skills, skills outside any sequence, and invalid scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

use crate::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Reasons an engine operation leaves the roadmap untouched
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProgressionError {
    /// No skill or sub-skill with this name exists in the roadmap
    #[error("skill '{skill}' does not exist in this roadmap")]
    SkillNotFound {
        /// Requested skill name
        skill: String,
    },

    /// The skill exists but no progression sequence references it
    #[error("skill '{skill}' is not part of any progression sequence")]
    NotInSequence {
        /// Requested skill name
        skill: String,
    },

    /// Score is not a finite number within 0-100
    #[error("score {score} is outside the 0-100 range")]
    ScoreOutOfRange {
        /// Rejected score
        score: f64,
    },
}

impl ProgressionError {
    pub(crate) fn skill_not_found(skill: &str) -> Self {
        Self::SkillNotFound {
            skill: skill.to_owned(),
        }
    }
}

impl From<ProgressionError> for AppError {
    fn from(error: ProgressionError) -> Self {
        let code = match error {
            ProgressionError::SkillNotFound { .. } | ProgressionError::NotInSequence { .. } => {
                ErrorCode::ResourceNotFound
            }
            ProgressionError::ScoreOutOfRange { .. } => ErrorCode::ValueOutOfRange,
        };
        Self::new(code, error.to_string())
    }
}
