// ABOUTME: Main library entry point for the Kuzan calisthenics roadmap server
// ABOUTME: HTTP API, persistence, and pose analysis integration around kuzan-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

#![deny(unsafe_code)]

//! # Kuzan
//!
//! Calisthenics skill roadmaps with pose-scored progression. Each training
//! track (push or pull) is a sequence of skill units; photo attempts are
//! scored by an external pose analysis service and passing attempts unlock
//! the next unit.
//!
//! ## Architecture
//!
//! - **`kuzan_core`**: roadmap models, catalog and the progression engine
//! - **Database**: document store keyed by track
//! - **External**: pose analysis HTTP client
//! - **Services**: load, migrate, score and persist roadmaps
//! - **Routes**: axum handlers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use kuzan::config::ServerConfig;
//! use kuzan::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Kuzan configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration loaded from the environment
pub mod config;

/// Application constants and environment lookups
pub mod constants;

/// Roadmap document storage
pub mod database;

/// Error types shared with `kuzan_core`
pub mod errors;

/// External service clients
pub mod external;

/// Logging setup and domain log events
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared server resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Roadmap business logic
pub mod services;
