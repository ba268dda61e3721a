// ABOUTME: Integration tests for roadmap document storage
// ABOUTME: Exercises the SQLite store on disk and the in-process store through RoadmapStore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use kuzan::config::DatabaseUrl;
use kuzan::database::{open_store, Database, MemoryStore, RoadmapStore};
use kuzan::errors::ErrorCode;
use kuzan_core::models::{SkillStatus, Track};
use kuzan_core::progression::ProgressionEngine;
use tempfile::TempDir;

fn sqlite_url(dir: &TempDir) -> String {
    format!("sqlite:{}/nested/kuzan.db", dir.path().display())
}

async fn assert_store_contract(store: &dyn RoadmapStore) {
    let engine = ProgressionEngine::default();

    assert!(store.load(Track::Push).await.unwrap().is_none());
    assert!(store.selected_track().await.unwrap().is_none());

    let mut push = engine.materialize(Track::Push);
    engine.apply_attempt(&mut push, "elbow_lever", 88.0).unwrap();
    store.save(Track::Push, &push).await.unwrap();

    let loaded = store.load(Track::Push).await.unwrap().unwrap();
    assert_eq!(loaded, push);
    assert!(store.load(Track::Pull).await.unwrap().is_none());

    // Whole-document replace
    let fresh = engine.materialize(Track::Push);
    store.save(Track::Push, &fresh).await.unwrap();
    let loaded = store.load(Track::Push).await.unwrap().unwrap();
    assert_eq!(
        loaded.find_skill("elbow_lever").unwrap().status,
        SkillStatus::Current
    );

    store.select_track(Track::Pull).await.unwrap();
    assert_eq!(store.selected_track().await.unwrap(), Some(Track::Pull));
}

#[tokio::test]
async fn test_memory_store_contract() {
    assert_store_contract(&MemoryStore::new()).await;
}

#[tokio::test]
async fn test_sqlite_store_contract() {
    let db = Database::new("sqlite::memory:").await.unwrap();
    assert_store_contract(&db).await;
}

#[tokio::test]
async fn test_sqlite_file_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let url = sqlite_url(&dir);
    let engine = ProgressionEngine::default();

    {
        let db = Database::new(&url).await.unwrap();
        let mut pull = engine.materialize(Track::Pull);
        engine
            .apply_attempt(&mut pull, "back_lever_tuck", 70.0)
            .unwrap();
        db.save(Track::Pull, &pull).await.unwrap();
        db.select_track(Track::Pull).await.unwrap();
        db.pool().close().await;
    }

    assert!(dir.path().join("nested/kuzan.db").exists());

    let db = Database::new(&url).await.unwrap();
    let pull = db.load(Track::Pull).await.unwrap().unwrap();
    assert_eq!(
        pull.find_skill("back_lever_tuck").unwrap().status,
        SkillStatus::Completed
    );
    assert_eq!(db.selected_track().await.unwrap(), Some(Track::Pull));
}

#[tokio::test]
async fn test_documents_use_track_keys() {
    let db = Database::new("sqlite::memory:").await.unwrap();
    let roadmap = ProgressionEngine::default().materialize(Track::Push);
    db.save(Track::Push, &roadmap).await.unwrap();
    db.select_track(Track::Push).await.unwrap();

    let raw = db.get_document("roadmap_push").await.unwrap().unwrap();
    assert!(raw.contains("\"overallProgress\""));
    assert_eq!(
        db.get_document("selectedSkillType").await.unwrap().as_deref(),
        Some("push")
    );
}

#[tokio::test]
async fn test_corrupt_document_is_an_error() {
    let db = Database::new("sqlite::memory:").await.unwrap();
    db.put_document("roadmap_pull", "{not json").await.unwrap();

    let err = db.load(Track::Pull).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_invalid_selection_is_ignored() {
    let db = Database::new("sqlite::memory:").await.unwrap();
    db.put_document("selectedSkillType", "legs").await.unwrap();

    assert_eq!(db.selected_track().await.unwrap(), None);
}

#[tokio::test]
async fn test_open_store_honours_configuration() {
    let memory = open_store(&DatabaseUrl::Memory).await.unwrap();
    assert!(memory.load(Track::Push).await.unwrap().is_none());

    let dir = TempDir::new().unwrap();
    let url = DatabaseUrl::parse_url(&sqlite_url(&dir)).unwrap();
    let store = open_store(&url).await.unwrap();
    store.select_track(Track::Push).await.unwrap();
    assert_eq!(store.selected_track().await.unwrap(), Some(Track::Push));
}
