// ABOUTME: Tests for the static roadmap catalog and its persisted JSON shape
// ABOUTME: Initial statuses, progression coverage, and document field names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use kuzan_core::catalog::default_roadmap;
use kuzan_core::models::{Roadmap, SkillStatus, Track};
use kuzan_core::progression::ProgressionPlan;

fn current_names(roadmap: &Roadmap) -> Vec<&str> {
    roadmap
        .all_skills()
        .filter(|s| s.status == SkillStatus::Current)
        .map(|s| s.name.as_str())
        .collect()
}

#[test]
fn test_initial_frontier() {
    assert_eq!(current_names(&default_roadmap(Track::Push)), vec!["elbow_lever"]);
    assert_eq!(
        current_names(&default_roadmap(Track::Pull)),
        vec!["back_lever", "back_lever_tuck"]
    );
}

#[test]
fn test_fresh_documents_have_no_attempts() {
    for track in Track::ALL {
        let roadmap = default_roadmap(track);
        assert_eq!(roadmap.track, track);
        assert!(roadmap
            .all_skills()
            .all(|s| s.total_attempts == 0 && s.best_score.abs() < f64::EPSILON));
    }
}

#[test]
fn test_every_sequence_step_exists_in_its_roadmap() {
    for (track, plan) in [
        (Track::Push, ProgressionPlan::push()),
        (Track::Pull, ProgressionPlan::pull()),
    ] {
        let roadmap = default_roadmap(track);
        for sequence in &plan.sequences {
            for step in &sequence.steps {
                assert!(roadmap.find_skill(step).is_some(), "{step} missing");
            }
        }
        for bridge in &plan.bridges {
            assert!(roadmap.find_skill(&bridge.after).is_some());
            assert!(roadmap.find_skill(&bridge.unlocks).is_some());
        }
    }
}

#[test]
fn test_every_progress_unit_is_reachable() {
    for (track, plan) in [
        (Track::Push, ProgressionPlan::push()),
        (Track::Pull, ProgressionPlan::pull()),
    ] {
        for unit in default_roadmap(track).progress_units() {
            assert!(plan.contains(&unit.name), "{} not in any sequence", unit.name);
        }
    }
}

#[test]
fn test_document_json_field_names() {
    let json = serde_json::to_value(default_roadmap(Track::Push)).unwrap();

    assert_eq!(json["overallProgress"], 0);
    assert!(json.get("updated_at").is_none());
    let planche = &json["skills"][2];
    assert_eq!(planche["name"], "planche");
    assert_eq!(planche["subSkills"].as_array().unwrap().len(), 4);
    assert_eq!(planche["subSkills"][0]["is_sub_skill"], true);
    assert_eq!(planche["subSkills"][0]["parent_skill_id"], planche["id"]);
    assert_eq!(planche["subSkills"][0]["analysis_id"], "tuck_planche");
    assert!(json["skills"][0].get("subSkills").is_none());
}

#[test]
fn test_document_round_trips_through_json() {
    let roadmap = default_roadmap(Track::Pull);
    let json = serde_json::to_string(&roadmap).unwrap();
    let parsed: Roadmap = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, roadmap);
}
