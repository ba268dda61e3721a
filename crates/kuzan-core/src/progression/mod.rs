// ABOUTME: Roadmap progression engine: attempts, unlocks, aggregate progress, and migration
// ABOUTME: Pure in-memory transforms over a roadmap document with explicit error results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! # Progression Engine
//!
//! The single home of the roadmap state machine:
//!
//! ```text
//! locked --(unlock_next on predecessor)--> current --(record_attempt, score >= threshold)--> completed
//! ```
//!
//! Every operation works on a `&mut Roadmap` supplied by the caller and
//! performs no I/O. When an operation returns an error the document has not
//! been touched, so callers can skip the save step.
//!
//! ```rust
//! use kuzan_core::models::{SkillStatus, Track};
//! use kuzan_core::progression::{ProgressionEngine, ProgressionError};
//!
//! # fn main() -> Result<(), ProgressionError> {
//! let engine = ProgressionEngine::default();
//! let mut roadmap = engine.materialize(Track::Push);
//! let outcome = engine.apply_attempt(&mut roadmap, "elbow_lever", 70.0)?;
//!
//! assert!(outcome.attempt.passed);
//! assert_eq!(outcome.unlocked, vec!["l_sit".to_owned()]);
//! assert_eq!(
//!     roadmap.find_skill("l_sit").map(|skill| skill.status),
//!     Some(SkillStatus::Current)
//! );
//! # Ok(())
//! # }
//! ```

mod error;
mod plan;

pub use error::ProgressionError;
pub use plan::{ProgressionPlan, ProgressionSequence, SequenceBridge};

use crate::catalog;
use crate::constants::{catalog::RETIRED_SKILLS, scoring};
use crate::models::{Roadmap, Skill, SkillPath, SkillStatus, Track};
use serde::{Deserialize, Serialize};

/// Effect of a single attempt on its node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Attempted skill name
    pub skill: String,
    /// Score of this attempt
    pub score: f64,
    /// Best score after the attempt
    pub best_score: f64,
    /// Attempt counter after the attempt
    pub total_attempts: u32,
    /// Whether the score reached the passing threshold
    pub passed: bool,
    /// Whether this attempt moved the node to completed
    pub newly_completed: bool,
    /// Node status after the attempt
    pub status: SkillStatus,
}

/// Result of [`ProgressionEngine::unlock_next`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "skills", rename_all = "snake_case")]
pub enum UnlockOutcome {
    /// These nodes moved from locked to current, in promotion order
    Unlocked(Vec<String>),
    /// The completed skill is the last step of its sequences
    EndOfSequence,
    /// Every successor was already current or completed
    NothingToUnlock,
}

impl UnlockOutcome {
    /// Names promoted by this call
    #[must_use]
    pub fn unlocked(&self) -> &[String] {
        match self {
            Self::Unlocked(names) => names,
            Self::EndOfSequence | Self::NothingToUnlock => &[],
        }
    }
}

/// Combined result of recording an attempt and applying its unlocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptOutcome {
    /// Effect on the attempted node
    pub attempt: AttemptRecord,
    /// Nodes promoted to current as a consequence
    pub unlocked: Vec<String>,
    /// Roadmap completion percentage after the attempt
    pub overall_progress: u8,
}

/// What a load-time migration changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationReport {
    /// Retired skill names removed from the document
    pub removed: Vec<String>,
    /// Whether any sibling `order_index` had to be rewritten
    pub renumbered: bool,
    /// Whether the stored `overallProgress` disagreed with the skill statuses
    pub progress_corrected: bool,
}

impl MigrationReport {
    /// Whether the document differs from what was loaded
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.removed.is_empty() || self.renumbered || self.progress_corrected
    }
}

/// Roadmap progression rules and the operations applying them
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionEngine {
    passing_threshold: f64,
    push: ProgressionPlan,
    pull: ProgressionPlan,
    retired_skills: Vec<String>,
}

impl Default for ProgressionEngine {
    fn default() -> Self {
        Self::new(
            scoring::PASSING_THRESHOLD,
            ProgressionPlan::push(),
            ProgressionPlan::pull(),
            RETIRED_SKILLS,
        )
    }
}

impl ProgressionEngine {
    /// Create an engine with explicit rules
    #[must_use]
    pub fn new(
        passing_threshold: f64,
        push: ProgressionPlan,
        pull: ProgressionPlan,
        retired_skills: &[&str],
    ) -> Self {
        Self {
            passing_threshold,
            push,
            pull,
            retired_skills: retired_skills.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    /// Minimum score that completes a node
    #[must_use]
    pub const fn passing_threshold(&self) -> f64 {
        self.passing_threshold
    }

    /// Whether a score passes
    #[must_use]
    pub fn is_passing(&self, score: f64) -> bool {
        score >= self.passing_threshold
    }

    /// Unlock rules for a track
    #[must_use]
    pub const fn plan(&self, track: Track) -> &ProgressionPlan {
        match track {
            Track::Push => &self.push,
            Track::Pull => &self.pull,
        }
    }

    /// Skill names removed by [`migrate`](Self::migrate)
    #[must_use]
    pub fn retired_skills(&self) -> &[String] {
        &self.retired_skills
    }

    /// Fresh document for a track, as materialized on first access
    #[must_use]
    pub fn materialize(&self, track: Track) -> Roadmap {
        let mut roadmap = catalog::default_roadmap(track);
        roadmap.overall_progress = compute_overall_progress(&roadmap);
        roadmap
    }

    /// Record an attempt's score against a skill or sub-skill
    ///
    /// Raises `best_score` to the new score if higher, increments
    /// `total_attempts`, and marks the node completed when the score passes.
    /// A completed node is never regressed.
    ///
    /// # Errors
    ///
    /// `ScoreOutOfRange` for a non-finite score or one outside 0-100,
    /// `SkillNotFound` when no node has this name.
    pub fn record_attempt(
        &self,
        roadmap: &mut Roadmap,
        skill_key: &str,
        score: f64,
    ) -> Result<AttemptRecord, ProgressionError> {
        if !score.is_finite() || !(scoring::MIN_SCORE..=scoring::MAX_SCORE).contains(&score) {
            return Err(ProgressionError::ScoreOutOfRange { score });
        }

        let passed = self.is_passing(score);
        let node = roadmap
            .find_skill_mut(skill_key)
            .ok_or_else(|| ProgressionError::skill_not_found(skill_key))?;

        node.best_score = node.best_score.max(score);
        node.total_attempts = node.total_attempts.saturating_add(1);

        let newly_completed = passed && node.status != SkillStatus::Completed;
        if passed {
            node.status = SkillStatus::Completed;
        }

        let record = AttemptRecord {
            skill: node.name.clone(),
            score,
            best_score: node.best_score,
            total_attempts: node.total_attempts,
            passed,
            newly_completed,
            status: node.status,
        };

        roadmap.overall_progress = compute_overall_progress(roadmap);
        Ok(record)
    }

    /// Promote the successors of a completed skill to current
    ///
    /// Only locked nodes are promoted. When a promoted node is a sub-skill
    /// whose parent is still locked, the parent is promoted too.
    ///
    /// # Errors
    ///
    /// `SkillNotFound` when the completed skill or one of its configured
    /// successors is missing from the document, `NotInSequence` when the
    /// skill exists but no sequence of this track references it.
    pub fn unlock_next(
        &self,
        roadmap: &mut Roadmap,
        completed_key: &str,
    ) -> Result<UnlockOutcome, ProgressionError> {
        if roadmap.locate(completed_key).is_none() {
            return Err(ProgressionError::skill_not_found(completed_key));
        }

        let successors = self
            .plan(roadmap.track)
            .successors(completed_key)
            .ok_or_else(|| ProgressionError::NotInSequence {
                skill: completed_key.to_owned(),
            })?;

        if successors.is_empty() {
            return Ok(UnlockOutcome::EndOfSequence);
        }

        // Resolve everything before mutating so a broken plan leaves the document intact
        let paths = successors
            .iter()
            .map(|name| {
                roadmap
                    .locate(name)
                    .ok_or_else(|| ProgressionError::skill_not_found(name))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut unlocked = Vec::new();
        for path in paths {
            unlocked.extend(promote(roadmap, path));
        }

        roadmap.overall_progress = compute_overall_progress(roadmap);

        if unlocked.is_empty() {
            Ok(UnlockOutcome::NothingToUnlock)
        } else {
            Ok(UnlockOutcome::Unlocked(unlocked))
        }
    }

    /// Record an attempt and, when it passes, unlock what follows
    ///
    /// A passing attempt on a node outside every sequence (such as a parent
    /// skill) simply unlocks nothing.
    ///
    /// A configured successor missing from the document is skipped with a
    /// warning; the attempt is still recorded.
    ///
    /// # Errors
    ///
    /// Same as [`record_attempt`](Self::record_attempt). Nothing is applied to
    /// `roadmap` when an error is returned.
    pub fn apply_attempt(
        &self,
        roadmap: &mut Roadmap,
        skill_key: &str,
        score: f64,
    ) -> Result<AttemptOutcome, ProgressionError> {
        let attempt = self.record_attempt(roadmap, skill_key, score)?;

        let unlocked = if attempt.passed {
            match self.unlock_next(roadmap, skill_key) {
                Ok(outcome) => outcome.unlocked().to_vec(),
                Err(ProgressionError::NotInSequence { .. }) => Vec::new(),
                Err(ProgressionError::SkillNotFound { skill }) => {
                    tracing::warn!(
                        completed = %skill_key,
                        missing = %skill,
                        roadmap = %roadmap.name,
                        "Successor missing from roadmap, skipping unlock"
                    );
                    Vec::new()
                }
                Err(e) => return Err(e),
            }
        } else {
            Vec::new()
        };

        Ok(AttemptOutcome {
            attempt,
            unlocked,
            overall_progress: roadmap.overall_progress,
        })
    }

    /// Load-time schema migration
    ///
    /// Drops retired skills wherever they appear, renumbers every sibling list
    /// contiguously from 1, and re-derives `overallProgress`. Running it twice
    /// is the same as running it once.
    pub fn migrate(&self, roadmap: &mut Roadmap) -> MigrationReport {
        let mut report = MigrationReport::default();
        let is_retired = |skill: &Skill| self.retired_skills.iter().any(|r| *r == skill.name);

        report.removed.extend(drain_retired(&mut roadmap.skills, is_retired));
        for skill in &mut roadmap.skills {
            report
                .removed
                .extend(drain_retired(&mut skill.sub_skills, is_retired));
        }

        report.renumbered |= renumber(&mut roadmap.skills);
        for skill in &mut roadmap.skills {
            report.renumbered |= renumber(&mut skill.sub_skills);
        }

        let progress = compute_overall_progress(roadmap);
        report.progress_corrected = progress != roadmap.overall_progress;
        roadmap.overall_progress = progress;

        if !report.removed.is_empty() {
            tracing::debug!(removed = ?report.removed, roadmap = %roadmap.name, "Removed retired skills");
        }

        report
    }
}

/// Completion percentage over leaf progress units
///
/// Sub-skills are counted individually and their parent is not counted;
/// skills without sub-skills count once. Rounds half up; an empty tree is 0.
#[must_use]
pub fn compute_overall_progress(roadmap: &Roadmap) -> u8 {
    let (total, completed) = roadmap
        .progress_units()
        .fold((0_u64, 0_u64), |(total, completed), unit| {
            (total + 1, completed + u64::from(unit.is_completed()))
        });

    if total == 0 {
        return 0;
    }

    // round(100 * completed / total) in integer arithmetic
    let percent = (200 * completed + total) / (2 * total);
    u8::try_from(percent).unwrap_or(100)
}

/// Promote a node (and its locked parent) to current; returns promoted names
fn promote(roadmap: &mut Roadmap, path: SkillPath) -> Vec<String> {
    let mut promoted = Vec::new();

    if let Some(node) = roadmap.skill_at_mut(path) {
        if node.status == SkillStatus::Locked {
            node.status = SkillStatus::Current;
            promoted.push(node.name.clone());
        }
    }

    if let SkillPath::SubSkill { parent, .. } = path {
        if let Some(parent) = roadmap.skill_at_mut(SkillPath::TopLevel(parent)) {
            if parent.status == SkillStatus::Locked {
                parent.status = SkillStatus::Current;
                promoted.push(parent.name.clone());
            }
        }
    }

    promoted
}

fn drain_retired(skills: &mut Vec<Skill>, is_retired: impl Fn(&Skill) -> bool) -> Vec<String> {
    let mut removed = Vec::new();
    skills.retain(|skill| {
        if is_retired(skill) {
            removed.push(skill.name.clone());
            false
        } else {
            true
        }
    });
    removed
}

fn renumber(skills: &mut [Skill]) -> bool {
    let mut changed = false;
    for (skill, order_index) in skills.iter_mut().zip(1..) {
        if skill.order_index != order_index {
            skill.order_index = order_index;
            changed = true;
        }
    }
    changed
}
