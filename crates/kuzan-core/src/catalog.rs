// ABOUTME: Static roadmap catalog for the push and pull tracks
// ABOUTME: Materializes fresh default roadmap documents and maps skills to analysis ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! # Roadmap Catalog
//!
//! Immutable reference data. Every call to [`default_roadmap`] builds a fresh,
//! owned document in its initial state: the first unit of each track is
//! `current`, everything else is `locked`, and no attempts are recorded.

use crate::constants::skills::{
    BACK_LEVER, BACK_LEVER_ADVANCED_TUCK, BACK_LEVER_FULL, BACK_LEVER_STRADDLE, BACK_LEVER_TUCK,
    ELBOW_LEVER, FRONT_LEVER, FRONT_LEVER_ADVANCED_TUCK, FRONT_LEVER_FULL, FRONT_LEVER_STRADDLE,
    FRONT_LEVER_TUCK, L_SIT, PLANCHE, PLANCHE_ADVANCED_TUCK, PLANCHE_FULL, PLANCHE_STRADDLE,
    PLANCHE_TUCK,
};
use crate::models::{Difficulty, Roadmap, Skill, SkillStatus, Track};

const PUSH_ROADMAP_ID: u32 = 1;
const PULL_ROADMAP_ID: u32 = 2;

const COLOR_TERRACOTTA: &str = "#c17b5a";
const COLOR_SAGE: &str = "#7a8471";

/// Static description of one catalog node
struct Entry {
    id: u32,
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
    icon: &'static str,
    difficulty: Difficulty,
    estimated_weeks: u32,
    status: SkillStatus,
    analysis_id: Option<&'static str>,
}

impl Entry {
    fn into_skill(self, roadmap_id: u32, order_index: u32, parent: Option<u32>) -> Skill {
        Skill {
            id: self.id,
            roadmap_id,
            name: self.name.to_owned(),
            display_name: self.display_name.to_owned(),
            description: self.description.to_owned(),
            icon: self.icon.to_owned(),
            difficulty_level: self.difficulty,
            estimated_weeks: self.estimated_weeks,
            order_index,
            is_sub_skill: parent.is_some(),
            parent_skill_id: parent,
            status: self.status,
            best_score: 0.0,
            total_attempts: 0,
            analysis_id: self.analysis_id.map(str::to_owned),
            sub_skills: Vec::new(),
        }
    }
}

/// Build a top-level skill with its ordered sub-skills
fn skill(roadmap_id: u32, order_index: u32, entry: Entry, children: Vec<Entry>) -> Skill {
    let parent_id = entry.id;
    let mut node = entry.into_skill(roadmap_id, order_index, None);
    node.sub_skills = children
        .into_iter()
        .zip(1..)
        .map(|(child, order)| child.into_skill(roadmap_id, order, Some(parent_id)))
        .collect();
    node
}

/// Fresh default roadmap document for a track
#[must_use]
pub fn default_roadmap(track: Track) -> Roadmap {
    match track {
        Track::Push => push_roadmap(),
        Track::Pull => pull_roadmap(),
    }
}

/// Identifier the analysis service expects for a roadmap node
///
/// Falls back to the node name when the catalog declares no alias or the node
/// is unknown.
#[must_use]
pub fn analysis_id_for<'a>(roadmap: &'a Roadmap, skill_name: &'a str) -> &'a str {
    roadmap
        .find_skill(skill_name)
        .and_then(|skill| skill.analysis_id.as_deref())
        .unwrap_or(skill_name)
}

fn push_roadmap() -> Roadmap {
    let id = PUSH_ROADMAP_ID;
    Roadmap {
        id,
        track: Track::Push,
        name: "push_static".to_owned(),
        display_name: "Push Static Mastery".to_owned(),
        description: "Build incredible pushing strength through progressive static holds"
            .to_owned(),
        total_weeks: 52,
        color_from: COLOR_TERRACOTTA.to_owned(),
        color_to: COLOR_SAGE.to_owned(),
        skills: vec![
            skill(
                id,
                1,
                Entry {
                    id: 1,
                    name: ELBOW_LEVER,
                    display_name: "Elbow Lever",
                    description: "Master the foundation of arm balancing with proper elbow placement",
                    icon: "💪",
                    difficulty: Difficulty::Beginner,
                    estimated_weeks: 8,
                    status: SkillStatus::Current,
                    analysis_id: None,
                },
                Vec::new(),
            ),
            skill(
                id,
                2,
                Entry {
                    id: 2,
                    name: L_SIT,
                    display_name: "L-Sit",
                    description: "Develop core strength and control with perfect L-sit form",
                    icon: "🔥",
                    difficulty: Difficulty::Intermediate,
                    estimated_weeks: 16,
                    status: SkillStatus::Locked,
                    analysis_id: None,
                },
                Vec::new(),
            ),
            skill(
                id,
                3,
                Entry {
                    id: 3,
                    name: PLANCHE,
                    display_name: "Planche",
                    description:
                        "The ultimate pushing static hold - the pinnacle of upper body strength",
                    icon: "👑",
                    difficulty: Difficulty::Advanced,
                    estimated_weeks: 28,
                    status: SkillStatus::Locked,
                    analysis_id: None,
                },
                vec![
                    Entry {
                        id: 31,
                        name: PLANCHE_TUCK,
                        display_name: "Tuck Planche",
                        description: "Master the tuck planche position",
                        icon: "🔥",
                        difficulty: Difficulty::Intermediate,
                        estimated_weeks: 8,
                        status: SkillStatus::Locked,
                        analysis_id: Some("tuck_planche"),
                    },
                    Entry {
                        id: 32,
                        name: PLANCHE_ADVANCED_TUCK,
                        display_name: "Advanced Tuck Planche",
                        description: "Progress to advanced tuck planche",
                        icon: "⚡",
                        difficulty: Difficulty::Advanced,
                        estimated_weeks: 7,
                        status: SkillStatus::Locked,
                        analysis_id: Some("advanced_tuck_planche"),
                    },
                    Entry {
                        id: 33,
                        name: PLANCHE_STRADDLE,
                        display_name: "Straddle Planche",
                        description: "Master the straddle planche",
                        icon: "🎯",
                        difficulty: Difficulty::Advanced,
                        estimated_weeks: 7,
                        status: SkillStatus::Locked,
                        analysis_id: Some("straddle_planche"),
                    },
                    Entry {
                        id: 34,
                        name: PLANCHE_FULL,
                        display_name: "Full Planche",
                        description: "The ultimate planche achievement",
                        icon: "👑",
                        difficulty: Difficulty::Advanced,
                        estimated_weeks: 6,
                        status: SkillStatus::Locked,
                        analysis_id: Some("full_planche"),
                    },
                ],
            ),
        ],
        overall_progress: 0,
        updated_at: None,
    }
}

fn pull_roadmap() -> Roadmap {
    let id = PULL_ROADMAP_ID;
    Roadmap {
        id,
        track: Track::Pull,
        name: "pull_static".to_owned(),
        display_name: "Pull Static Mastery".to_owned(),
        description: "Develop incredible pulling strength and back control".to_owned(),
        total_weeks: 36,
        color_from: COLOR_SAGE.to_owned(),
        color_to: COLOR_TERRACOTTA.to_owned(),
        skills: vec![
            skill(
                id,
                1,
                Entry {
                    id: 4,
                    name: BACK_LEVER,
                    display_name: "Back Lever",
                    description: "Build posterior chain strength and control",
                    icon: "💪",
                    difficulty: Difficulty::Intermediate,
                    estimated_weeks: 16,
                    status: SkillStatus::Current,
                    analysis_id: None,
                },
                vec![
                    Entry {
                        id: 41,
                        name: BACK_LEVER_TUCK,
                        display_name: "Tuck Back Lever",
                        description: "Learn the basic tucked position",
                        icon: "🔥",
                        difficulty: Difficulty::Intermediate,
                        estimated_weeks: 4,
                        status: SkillStatus::Current,
                        analysis_id: Some("tuck_back_lever"),
                    },
                    Entry {
                        id: 42,
                        name: BACK_LEVER_ADVANCED_TUCK,
                        display_name: "Advanced Tuck Back Lever",
                        description: "Progress to advanced tuck back lever",
                        icon: "⚡",
                        difficulty: Difficulty::Intermediate,
                        estimated_weeks: 4,
                        status: SkillStatus::Locked,
                        analysis_id: Some("advanced_tuck_back_lever"),
                    },
                    Entry {
                        id: 43,
                        name: BACK_LEVER_STRADDLE,
                        display_name: "Straddle Back Lever",
                        description: "Master the straddle back lever",
                        icon: "🎯",
                        difficulty: Difficulty::Advanced,
                        estimated_weeks: 4,
                        status: SkillStatus::Locked,
                        analysis_id: Some("straddle_back_lever"),
                    },
                    Entry {
                        id: 44,
                        name: BACK_LEVER_FULL,
                        display_name: "Full Back Lever",
                        description: "Master the complete back lever",
                        icon: "👑",
                        difficulty: Difficulty::Advanced,
                        estimated_weeks: 4,
                        status: SkillStatus::Locked,
                        analysis_id: Some("full_back_lever"),
                    },
                ],
            ),
            skill(
                id,
                2,
                Entry {
                    id: 5,
                    name: FRONT_LEVER,
                    display_name: "Front Lever",
                    description: "Master the ultimate pulling static hold",
                    icon: "👑",
                    difficulty: Difficulty::Advanced,
                    estimated_weeks: 20,
                    status: SkillStatus::Locked,
                    analysis_id: None,
                },
                vec![
                    Entry {
                        id: 51,
                        name: FRONT_LEVER_TUCK,
                        display_name: "Tuck Front Lever",
                        description: "Learn the basic tucked position",
                        icon: "🔥",
                        difficulty: Difficulty::Advanced,
                        estimated_weeks: 5,
                        status: SkillStatus::Locked,
                        analysis_id: Some("tuck_front_lever"),
                    },
                    Entry {
                        id: 52,
                        name: FRONT_LEVER_ADVANCED_TUCK,
                        display_name: "Advanced Tuck Front Lever",
                        description: "Progress to advanced tuck front lever",
                        icon: "⚡",
                        difficulty: Difficulty::Advanced,
                        estimated_weeks: 5,
                        status: SkillStatus::Locked,
                        analysis_id: Some("advanced_tuck_front_lever"),
                    },
                    Entry {
                        id: 53,
                        name: FRONT_LEVER_STRADDLE,
                        display_name: "Straddle Front Lever",
                        description: "Master the straddle front lever",
                        icon: "🎯",
                        difficulty: Difficulty::Advanced,
                        estimated_weeks: 5,
                        status: SkillStatus::Locked,
                        analysis_id: Some("straddle_front_lever"),
                    },
                    Entry {
                        id: 54,
                        name: FRONT_LEVER_FULL,
                        display_name: "Full Front Lever",
                        description: "The ultimate pulling achievement",
                        icon: "👑",
                        difficulty: Difficulty::Advanced,
                        estimated_weeks: 5,
                        status: SkillStatus::Locked,
                        analysis_id: Some("full_front_lever"),
                    },
                ],
            ),
        ],
        overall_progress: 0,
        updated_at: None,
    }
}
