// ABOUTME: Roadmap document model: skills, sub-skills, and their progression state
// ABOUTME: Provides name lookup with first-match semantics and leaf progress-unit iteration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

use super::Track;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier shown next to a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Entry-level hold
    Beginner,
    /// Requires a solid strength base
    Intermediate,
    /// Elite-level hold
    Advanced,
}

/// Progression state of a skill or sub-skill
///
/// Transitions only move forward: `Locked -> Current -> Completed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillStatus {
    /// Not yet reachable in the progression
    #[default]
    Locked,
    /// On the active frontier
    Current,
    /// Passed at least once
    Completed,
}

impl fmt::Display for SkillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Locked => "locked",
            Self::Current => "current",
            Self::Completed => "completed",
        })
    }
}

/// A node of the roadmap tree
///
/// Top-level skills may own an ordered list of sub-skills. Sub-skills use the
/// same shape with `is_sub_skill` set and a `parent_skill_id` back-reference,
/// and never own children themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Stable numeric identifier
    pub id: u32,
    /// Owning roadmap identifier
    pub roadmap_id: u32,
    /// Stable lookup and progression key, unique within a roadmap
    pub name: String,
    /// Human-readable name
    pub display_name: String,
    /// Short coaching description
    pub description: String,
    /// Emoji shown on the roadmap card
    pub icon: String,
    /// Difficulty tier
    pub difficulty_level: Difficulty,
    /// Estimated training time to master
    pub estimated_weeks: u32,
    /// Position within the sibling list, starting at 1
    pub order_index: u32,
    /// Whether this node lives under a parent skill
    #[serde(default)]
    pub is_sub_skill: bool,
    /// Parent skill id for sub-skills
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_skill_id: Option<u32>,
    /// Live progression state
    #[serde(default)]
    pub status: SkillStatus,
    /// Highest score ever recorded, 0-100
    #[serde(default)]
    pub best_score: f64,
    /// Number of recorded attempts
    #[serde(default)]
    pub total_attempts: u32,
    /// Skill identifier understood by the analysis service, when it differs from `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_id: Option<String>,
    /// Ordered sub-skills
    #[serde(
        rename = "subSkills",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sub_skills: Vec<Skill>,
}

impl Skill {
    /// Whether this node owns sub-skills (and therefore is not itself a progress unit)
    #[must_use]
    pub fn has_sub_skills(&self) -> bool {
        !self.sub_skills.is_empty()
    }

    /// Whether the node has been passed
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == SkillStatus::Completed
    }
}

/// Position of a node inside the roadmap tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillPath {
    /// Index into `Roadmap::skills`
    TopLevel(usize),
    /// Parent index into `Roadmap::skills` and child index into its sub-skills
    SubSkill {
        /// Index of the parent skill
        parent: usize,
        /// Index within the parent's sub-skills
        child: usize,
    },
}

/// The full skill tree and its progression state for one track
///
/// This is the unit of persistence: it is always read and written as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    /// Stable numeric identifier
    pub id: u32,
    /// Track this roadmap belongs to
    #[serde(default)]
    pub track: Track,
    /// Machine name (`push_static`, `pull_static`)
    pub name: String,
    /// Human-readable name
    pub display_name: String,
    /// Short description
    pub description: String,
    /// Total estimated duration in weeks
    pub total_weeks: u32,
    /// Gradient start color
    pub color_from: String,
    /// Gradient end color
    pub color_to: String,
    /// Ordered top-level skills
    pub skills: Vec<Skill>,
    /// Completion percentage, always derived from the skill statuses
    #[serde(rename = "overallProgress", default)]
    pub overall_progress: u8,
    /// Last time the document was saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Roadmap {
    /// Locate a node by name
    ///
    /// Top-level skills are searched first, then each skill's sub-skills in
    /// order. Names are expected to be unique; with duplicates the first match wins.
    #[must_use]
    pub fn locate(&self, name: &str) -> Option<SkillPath> {
        if let Some(index) = self.skills.iter().position(|s| s.name == name) {
            return Some(SkillPath::TopLevel(index));
        }

        self.skills.iter().enumerate().find_map(|(parent, skill)| {
            skill
                .sub_skills
                .iter()
                .position(|s| s.name == name)
                .map(|child| SkillPath::SubSkill { parent, child })
        })
    }

    /// Node at a previously located path
    #[must_use]
    pub fn skill_at(&self, path: SkillPath) -> Option<&Skill> {
        match path {
            SkillPath::TopLevel(index) => self.skills.get(index),
            SkillPath::SubSkill { parent, child } => self
                .skills
                .get(parent)
                .and_then(|skill| skill.sub_skills.get(child)),
        }
    }

    /// Mutable node at a previously located path
    pub fn skill_at_mut(&mut self, path: SkillPath) -> Option<&mut Skill> {
        match path {
            SkillPath::TopLevel(index) => self.skills.get_mut(index),
            SkillPath::SubSkill { parent, child } => self
                .skills
                .get_mut(parent)
                .and_then(|skill| skill.sub_skills.get_mut(child)),
        }
    }

    /// Find a node by name
    #[must_use]
    pub fn find_skill(&self, name: &str) -> Option<&Skill> {
        self.locate(name).and_then(|path| self.skill_at(path))
    }

    /// Find a node by name for mutation
    pub fn find_skill_mut(&mut self, name: &str) -> Option<&mut Skill> {
        let path = self.locate(name)?;
        self.skill_at_mut(path)
    }

    /// Leaf progress units: each sub-skill, or the skill itself when it has none
    pub fn progress_units(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter().flat_map(|skill| {
            if skill.has_sub_skills() {
                skill.sub_skills.as_slice()
            } else {
                std::slice::from_ref(skill)
            }
        })
    }

    /// Every node, top-level skills followed by their sub-skills
    pub fn all_skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills
            .iter()
            .flat_map(|skill| std::iter::once(skill).chain(skill.sub_skills.iter()))
    }
}
