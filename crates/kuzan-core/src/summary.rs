// ABOUTME: Dashboard aggregates computed from a roadmap document
// ABOUTME: Completed and total units, attempts, average best score, and the active frontier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

use crate::achievements::{self, Achievement};
use crate::models::{Roadmap, SkillStatus, Track};
use serde::{Deserialize, Serialize};

/// A unit the trainee is currently working on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontierUnit {
    /// Skill name
    pub name: String,
    /// Human readable name
    pub display_name: String,
    /// Best score so far
    pub best_score: f64,
    /// Attempts so far
    pub total_attempts: u32,
}

/// Progress overview for one roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapSummary {
    /// Track the roadmap belongs to
    pub track: Track,
    /// Roadmap identifier name
    pub name: String,
    /// Roadmap display name
    pub display_name: String,
    /// Completion percentage
    pub overall_progress: u8,
    /// Completed progress units
    pub completed_units: usize,
    /// All progress units
    pub total_units: usize,
    /// Attempts across every node
    pub total_attempts: u32,
    /// Mean best score over units with at least one attempt, one decimal
    pub average_best_score: f64,
    /// Units with status `current`
    pub current_units: Vec<FrontierUnit>,
    /// Badge states
    pub achievements: Vec<Achievement>,
}

impl RoadmapSummary {
    /// Aggregate a roadmap document
    #[must_use]
    pub fn from_roadmap(roadmap: &Roadmap) -> Self {
        let mut completed_units = 0_usize;
        let mut total_units = 0_usize;
        let mut attempted = 0_u32;
        let mut best_sum = 0.0_f64;
        let mut current_units = Vec::new();

        for unit in roadmap.progress_units() {
            total_units += 1;
            if unit.is_completed() {
                completed_units += 1;
            }
            if unit.total_attempts > 0 {
                attempted += 1;
                best_sum += unit.best_score;
            }
            if unit.status == SkillStatus::Current {
                current_units.push(FrontierUnit {
                    name: unit.name.clone(),
                    display_name: unit.display_name.clone(),
                    best_score: unit.best_score,
                    total_attempts: unit.total_attempts,
                });
            }
        }

        let total_attempts = roadmap
            .all_skills()
            .fold(0_u32, |sum, s| sum.saturating_add(s.total_attempts));

        let average_best_score = if attempted == 0 {
            0.0
        } else {
            (best_sum / f64::from(attempted) * 10.0).round() / 10.0
        };

        Self {
            track: roadmap.track,
            name: roadmap.name.clone(),
            display_name: roadmap.display_name.clone(),
            overall_progress: roadmap.overall_progress,
            completed_units,
            total_units,
            total_attempts,
            average_best_score,
            current_units,
            achievements: achievements::evaluate(roadmap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::ProgressionEngine;

    #[test]
    fn test_fresh_pull_summary() {
        let roadmap = ProgressionEngine::default().materialize(Track::Pull);
        let summary = RoadmapSummary::from_roadmap(&roadmap);

        assert_eq!(summary.track, Track::Pull);
        assert_eq!(summary.total_units, 8);
        assert_eq!(summary.completed_units, 0);
        assert_eq!(summary.total_attempts, 0);
        assert!(summary.average_best_score.abs() < f64::EPSILON);
        let frontier: Vec<_> = summary.current_units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(frontier, vec!["back_lever_tuck"]);
    }

    #[test]
    fn test_average_best_score_covers_attempted_units_only() {
        let engine = ProgressionEngine::default();
        let mut roadmap = engine.materialize(Track::Push);
        engine.apply_attempt(&mut roadmap, "elbow_lever", 70.0).unwrap();
        engine.apply_attempt(&mut roadmap, "l_sit", 41.5).unwrap();
        engine.apply_attempt(&mut roadmap, "l_sit", 40.0).unwrap();

        let summary = RoadmapSummary::from_roadmap(&roadmap);
        assert_eq!(summary.completed_units, 1);
        assert_eq!(summary.total_attempts, 3);
        // (70 + 41.5) / 2 = 55.75 -> 55.8
        assert!((summary.average_best_score - 55.8).abs() < 1e-9);
        assert_eq!(summary.current_units.len(), 1);
        assert_eq!(summary.current_units[0].name, "l_sit");
    }
}
