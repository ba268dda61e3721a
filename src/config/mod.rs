// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven ServerConfig and its typed parts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! Configuration module for the Kuzan server
//!
//! Configuration is environment-only. See [`environment::ServerConfig::from_env`]
//! for the variables that are read.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    AnalysisServiceConfig, CorsConfig, DatabaseConfig, DatabaseUrl, Environment, LimitsConfig,
    LogLevel, ServerConfig,
};
