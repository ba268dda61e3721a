// ABOUTME: Achievement badges derived from a roadmap's progression state
// ABOUTME: Badges are computed on demand and never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

use crate::models::Roadmap;
use serde::{Deserialize, Serialize};

/// Badge rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    /// Earned by nearly everyone
    Common,
    /// Earned by committed trainees
    Rare,
    /// Earned by advanced trainees
    Epic,
    /// Earned by those who finish a roadmap
    Legendary,
}

/// One badge and whether the roadmap has earned it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Stable identifier
    pub id: String,
    /// Short title
    pub title: String,
    /// What earns the badge
    pub description: String,
    /// Emoji icon
    pub icon: String,
    /// Rarity tier
    pub rarity: Rarity,
    /// Whether the badge is earned
    pub unlocked: bool,
}

impl Achievement {
    fn new(
        id: &str,
        title: &str,
        description: &str,
        icon: &str,
        rarity: Rarity,
        unlocked: bool,
    ) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
            rarity,
            unlocked,
        }
    }
}

/// Evaluate every badge against a roadmap
#[must_use]
pub fn evaluate(roadmap: &Roadmap) -> Vec<Achievement> {
    let any_attempt = roadmap.all_skills().any(|s| s.total_attempts > 0);
    let any_completed = roadmap.progress_units().any(|s| s.is_completed());
    let progress = roadmap.overall_progress;

    vec![
        Achievement::new(
            "first_steps",
            "First Steps",
            "Record your first attempt",
            "👶",
            Rarity::Common,
            any_attempt,
        ),
        Achievement::new(
            "skill_master",
            "Skill Master",
            "Complete your first skill",
            "🏆",
            Rarity::Epic,
            any_completed,
        ),
        Achievement::new(
            "halfway_there",
            "Halfway There",
            "Reach 50% roadmap progress",
            "⛰️",
            Rarity::Rare,
            progress >= 50,
        ),
        Achievement::new(
            "roadmap_master",
            "Roadmap Master",
            "Complete every skill in the roadmap",
            "👑",
            Rarity::Legendary,
            progress == 100,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Track;
    use crate::progression::ProgressionEngine;

    fn unlocked_ids(roadmap: &Roadmap) -> Vec<String> {
        evaluate(roadmap)
            .into_iter()
            .filter(|a| a.unlocked)
            .map(|a| a.id)
            .collect()
    }

    #[test]
    fn test_fresh_roadmap_has_no_badges() {
        let roadmap = ProgressionEngine::default().materialize(Track::Push);
        assert!(unlocked_ids(&roadmap).is_empty());
    }

    #[test]
    fn test_failed_attempt_earns_first_steps_only() {
        let engine = ProgressionEngine::default();
        let mut roadmap = engine.materialize(Track::Push);
        engine.apply_attempt(&mut roadmap, "elbow_lever", 30.0).unwrap();
        assert_eq!(unlocked_ids(&roadmap), vec!["first_steps"]);
    }

    #[test]
    fn test_completing_everything_earns_all_badges() {
        let engine = ProgressionEngine::default();
        let mut roadmap = engine.materialize(Track::Push);
        for name in [
            "elbow_lever",
            "l_sit",
            "planche_tuck",
            "planche_advanced_tuck",
            "planche_straddle",
            "planche_full",
        ] {
            engine.apply_attempt(&mut roadmap, name, 95.0).unwrap();
        }
        assert_eq!(roadmap.overall_progress, 100);
        assert_eq!(unlocked_ids(&roadmap).len(), 4);
    }
}
