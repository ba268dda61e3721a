// ABOUTME: Core types, catalog, and progression engine for the Kuzan calisthenics trainer
// ABOUTME: Foundation crate with error handling, roadmap models, and pure progression logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

#![deny(unsafe_code)]

//! # Kuzan Core
//!
//! Foundation crate shared by the Kuzan server. Everything in here is pure:
//! no I/O, no async, no global state.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Scoring threshold, retired catalog entries, document keys
//! - **models**: `Track`, `Roadmap`, `Skill` and their enums
//! - **catalog**: Default roadmap documents for each track
//! - **progression**: The roadmap state machine
//! - **achievements** / **summary**: Derived read-only views

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Roadmap document data model
pub mod models;

/// Static default roadmaps
pub mod catalog;

/// Attempt recording, unlocking, progress aggregation and migration
pub mod progression;

/// Achievement badges derived from a roadmap
pub mod achievements;

/// Dashboard aggregates for a roadmap
pub mod summary;
