// ABOUTME: Progression and persistence constants shared by the engine and the server
// ABOUTME: Passing threshold, retired catalog entries, and document key names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! Application constants organized by domain

/// Scoring constants
pub mod scoring {
    /// Minimum score that marks a progress unit as completed
    pub const PASSING_THRESHOLD: f64 = 65.0;

    /// Lowest score the analysis service can report
    pub const MIN_SCORE: f64 = 0.0;

    /// Highest score the analysis service can report
    pub const MAX_SCORE: f64 = 100.0;
}

/// Catalog maintenance constants
pub mod catalog {
    /// Skills removed from the catalog that may still linger in persisted documents
    pub const RETIRED_SKILLS: &[&str] = &["planche_lean"];
}

/// Keys of persisted documents
pub mod documents {
    /// Prefix of the per-track roadmap document key
    pub const ROADMAP_KEY_PREFIX: &str = "roadmap_";

    /// Key of the persisted track selection
    pub const SELECTED_TRACK_KEY: &str = "selectedSkillType";
}

/// Skill names referenced by the progression plans
pub mod skills {
    /// Push track
    pub const ELBOW_LEVER: &str = "elbow_lever";
    /// Push track
    pub const L_SIT: &str = "l_sit";
    /// Push track parent of the planche progression
    pub const PLANCHE: &str = "planche";
    /// Planche progression
    pub const PLANCHE_TUCK: &str = "planche_tuck";
    /// Planche progression
    pub const PLANCHE_ADVANCED_TUCK: &str = "planche_advanced_tuck";
    /// Planche progression
    pub const PLANCHE_STRADDLE: &str = "planche_straddle";
    /// Planche progression
    pub const PLANCHE_FULL: &str = "planche_full";

    /// Pull track parent of the back lever progression
    pub const BACK_LEVER: &str = "back_lever";
    /// Back lever progression
    pub const BACK_LEVER_TUCK: &str = "back_lever_tuck";
    /// Back lever progression
    pub const BACK_LEVER_ADVANCED_TUCK: &str = "back_lever_advanced_tuck";
    /// Back lever progression
    pub const BACK_LEVER_STRADDLE: &str = "back_lever_straddle";
    /// Back lever progression
    pub const BACK_LEVER_FULL: &str = "back_lever_full";

    /// Pull track parent of the front lever progression
    pub const FRONT_LEVER: &str = "front_lever";
    /// Front lever progression
    pub const FRONT_LEVER_TUCK: &str = "front_lever_tuck";
    /// Front lever progression
    pub const FRONT_LEVER_ADVANCED_TUCK: &str = "front_lever_advanced_tuck";
    /// Front lever progression
    pub const FRONT_LEVER_STRADDLE: &str = "front_lever_straddle";
    /// Front lever progression
    pub const FRONT_LEVER_FULL: &str = "front_lever_full";
}
