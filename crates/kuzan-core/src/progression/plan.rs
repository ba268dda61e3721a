// ABOUTME: Linear unlock sequences and cross-sequence bridges for each track
// ABOUTME: Answers which skills follow a completed skill in the progression order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

use crate::constants::skills::{
    BACK_LEVER_ADVANCED_TUCK, BACK_LEVER_FULL, BACK_LEVER_STRADDLE, BACK_LEVER_TUCK, ELBOW_LEVER,
    FRONT_LEVER_ADVANCED_TUCK, FRONT_LEVER_FULL, FRONT_LEVER_STRADDLE, FRONT_LEVER_TUCK, L_SIT,
    PLANCHE_ADVANCED_TUCK, PLANCHE_FULL, PLANCHE_STRADDLE, PLANCHE_TUCK,
};
use serde::{Deserialize, Serialize};

/// Ordered list of skill names unlocked one after another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionSequence {
    /// Label used in logs
    pub name: String,
    /// Skill names in unlock order
    pub steps: Vec<String>,
}

impl ProgressionSequence {
    /// Build a sequence from static names
    #[must_use]
    pub fn new(name: &str, steps: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            steps: steps.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// Explicit edge unlocking `unlocks` once `after` is completed
///
/// Used where one sequence hands over to another, e.g. finishing the back
/// lever opens the front lever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceBridge {
    /// Completed skill that triggers the edge
    pub after: String,
    /// Skill promoted to current
    pub unlocks: String,
}

impl SequenceBridge {
    /// Build a bridge from static names
    #[must_use]
    pub fn new(after: &str, unlocks: &str) -> Self {
        Self {
            after: after.to_owned(),
            unlocks: unlocks.to_owned(),
        }
    }
}

/// All unlock rules for one track
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionPlan {
    /// Independent linear sequences
    pub sequences: Vec<ProgressionSequence>,
    /// Cross-sequence edges
    pub bridges: Vec<SequenceBridge>,
}

impl ProgressionPlan {
    /// Build a plan from sequences and bridges
    #[must_use]
    pub const fn new(sequences: Vec<ProgressionSequence>, bridges: Vec<SequenceBridge>) -> Self {
        Self {
            sequences,
            bridges,
        }
    }

    /// Push track: one sequence from the elbow lever to the full planche
    #[must_use]
    pub fn push() -> Self {
        Self::new(
            vec![ProgressionSequence::new(
                "push",
                &[
                    ELBOW_LEVER,
                    L_SIT,
                    PLANCHE_TUCK,
                    PLANCHE_ADVANCED_TUCK,
                    PLANCHE_STRADDLE,
                    PLANCHE_FULL,
                ],
            )],
            Vec::new(),
        )
    }

    /// Pull track: back lever then front lever, joined by a bridge
    #[must_use]
    pub fn pull() -> Self {
        Self::new(
            vec![
                ProgressionSequence::new(
                    "back_lever",
                    &[
                        BACK_LEVER_TUCK,
                        BACK_LEVER_ADVANCED_TUCK,
                        BACK_LEVER_STRADDLE,
                        BACK_LEVER_FULL,
                    ],
                ),
                ProgressionSequence::new(
                    "front_lever",
                    &[
                        FRONT_LEVER_TUCK,
                        FRONT_LEVER_ADVANCED_TUCK,
                        FRONT_LEVER_STRADDLE,
                        FRONT_LEVER_FULL,
                    ],
                ),
            ],
            vec![SequenceBridge::new(BACK_LEVER_FULL, FRONT_LEVER_TUCK)],
        )
    }

    /// Whether any sequence or bridge mentions `skill` as a completable step
    #[must_use]
    pub fn contains(&self, skill: &str) -> bool {
        self.sequences
            .iter()
            .any(|sequence| sequence.steps.iter().any(|step| step == skill))
            || self.bridges.iter().any(|bridge| bridge.after == skill)
    }

    /// Skills that follow `skill` once it is completed
    ///
    /// Returns `None` when `skill` belongs to no sequence, and an empty list
    /// when it is the last step with no outgoing bridge.
    #[must_use]
    pub fn successors(&self, skill: &str) -> Option<Vec<&str>> {
        if !self.contains(skill) {
            return None;
        }

        let mut next: Vec<&str> = Vec::new();
        for sequence in &self.sequences {
            if let Some(index) = sequence.steps.iter().position(|step| step == skill) {
                if let Some(step) = sequence.steps.get(index + 1) {
                    next.push(step);
                }
            }
        }
        for bridge in self.bridges.iter().filter(|b| b.after == skill) {
            next.push(&bridge.unlocks);
        }
        next.dedup();

        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_successors() {
        let plan = ProgressionPlan::push();
        assert_eq!(plan.successors(ELBOW_LEVER), Some(vec![L_SIT]));
        assert_eq!(plan.successors(L_SIT), Some(vec![PLANCHE_TUCK]));
        assert_eq!(plan.successors(PLANCHE_FULL), Some(Vec::new()));
        assert_eq!(plan.successors("planche"), None);
    }

    #[test]
    fn test_pull_bridge_from_back_lever_to_front_lever() {
        let plan = ProgressionPlan::pull();
        assert_eq!(plan.successors(BACK_LEVER_FULL), Some(vec![FRONT_LEVER_TUCK]));
        assert_eq!(
            plan.successors(FRONT_LEVER_STRADDLE),
            Some(vec![FRONT_LEVER_FULL])
        );
        assert_eq!(plan.successors(FRONT_LEVER_FULL), Some(Vec::new()));
    }
}
