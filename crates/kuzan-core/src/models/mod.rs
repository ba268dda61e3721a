// ABOUTME: Core data models for the Kuzan roadmap progression system
// ABOUTME: Re-exports Track, Roadmap, Skill and the status and difficulty enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! # Data Models
//!
//! A [`Roadmap`] is the persisted document for one [`Track`]. It owns an
//! ordered tree of [`Skill`]s, at most two levels deep, each carrying its
//! live progression state.

mod roadmap;
mod track;

pub use roadmap::{Difficulty, Roadmap, Skill, SkillPath, SkillStatus};
pub use track::Track;
