// ABOUTME: Server-side constants and environment-based configuration defaults
// ABOUTME: Ports, service identity, upstream analysis defaults, and request limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! # Constants Module
//!
//! Server constants and environment variable accessors. Domain constants
//! (passing threshold, document keys) live in `kuzan_core::constants` and
//! are re-exported here.

pub use kuzan_core::constants::{catalog, documents, scoring, skills};

use std::env;

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Service identity used in logs
pub mod service_names {
    /// Server binary name
    pub const KUZAN_SERVER: &str = "kuzan-server";

    /// Upstream pose analysis service, as named in errors and logs
    pub const ANALYSIS_SERVICE: &str = "Pose analysis service";
}

/// Default values for optional settings
pub mod defaults {
    /// Default on-disk database
    pub const DATABASE_URL: &str = "sqlite:./data/kuzan.db";

    /// Default upstream analysis service base URL
    pub const ANALYSIS_SERVICE_URL: &str = "http://localhost:8000";

    /// Default CORS origin of the web client
    pub const CORS_ALLOWED_ORIGINS: &str = "http://localhost:3000";
}

/// Request limits
pub mod limits {
    /// Default maximum request body size for uploads (10 MiB)
    pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
}

/// Environment-based configuration
pub mod env_config {
    use super::{defaults, env, limits, ports};

    /// HTTP port from `HTTP_PORT` or the default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(ports::DEFAULT_HTTP_PORT)
    }

    /// Database URL from `DATABASE_URL` or the default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| defaults::DATABASE_URL.to_owned())
    }

    /// Log level from `RUST_LOG` or `info`
    #[must_use]
    pub fn log_level() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned())
    }

    /// Deployment environment from `ENVIRONMENT` or `development`
    #[must_use]
    pub fn environment() -> String {
        env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_owned())
    }

    /// Analysis service base URL from `ANALYSIS_SERVICE_URL` or the default
    #[must_use]
    pub fn analysis_service_url() -> String {
        env::var("ANALYSIS_SERVICE_URL")
            .unwrap_or_else(|_| defaults::ANALYSIS_SERVICE_URL.to_owned())
    }

    /// Raw `ANALYSIS_TIMEOUT_SECS`, unset when absent
    #[must_use]
    pub fn analysis_timeout_secs() -> Option<String> {
        env::var("ANALYSIS_TIMEOUT_SECS").ok()
    }

    /// Comma separated CORS origins from `CORS_ALLOWED_ORIGINS` or the default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| defaults::CORS_ALLOWED_ORIGINS.to_owned())
    }

    /// Upload limit from `MAX_UPLOAD_BYTES` or the default
    #[must_use]
    pub fn max_upload_bytes() -> usize {
        env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(limits::DEFAULT_MAX_UPLOAD_BYTES)
    }
}
