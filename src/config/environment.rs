// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed, validated ServerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Where roadmap documents are stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Database file path
        path: PathBuf,
    },
    /// `SQLite` in-memory database
    SQLiteMemory,
    /// In-process map, nothing touches disk
    Memory,
}

impl DatabaseUrl {
    /// Parse a `DATABASE_URL` value
    ///
    /// `memory` selects the in-process store, `sqlite::memory:` an in-memory
    /// `SQLite` database; anything else is a `SQLite` file path with or without
    /// the `sqlite:` prefix.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty value
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                "DATABASE_URL cannot be empty",
            ));
        }

        if s.eq_ignore_ascii_case("memory") {
            return Ok(Self::Memory);
        }

        let path = s.strip_prefix("sqlite:").unwrap_or(s);
        if path == ":memory:" {
            Ok(Self::SQLiteMemory)
        } else {
            Ok(Self::SQLite {
                path: PathBuf::from(path),
            })
        }
    }

    /// Connection string for sqlx
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::SQLiteMemory => "sqlite::memory:".to_owned(),
            Self::Memory => "memory".to_owned(),
        }
    }

    /// Whether this is the in-process store
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// Whether this is backed by `SQLite`
    #[must_use]
    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SQLite { .. } | Self::SQLiteMemory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/kuzan.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Storage location
    pub url: DatabaseUrl,
}

/// Upstream pose analysis service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisServiceConfig {
    /// Base URL, `/analyze` is appended
    pub base_url: String,
    /// Request timeout in seconds; transport default when unset
    pub timeout_secs: Option<u64>,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma separated origins, or `*`
    pub allowed_origins: String,
}

/// HTTP request limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes
    pub max_upload_bytes: usize,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Analysis service configuration
    pub analysis: AnalysisServiceConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Request limits
    pub limits: LimitsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: crate::constants::ports::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            log_level: LogLevel::default(),
            database: DatabaseConfig {
                url: DatabaseUrl::default(),
            },
            analysis: AnalysisServiceConfig {
                base_url: defaults::ANALYSIS_SERVICE_URL.to_owned(),
                timeout_secs: None,
            },
            cors: CorsConfig {
                allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
            },
            limits: LimitsConfig {
                max_upload_bytes: crate::constants::limits::DEFAULT_MAX_UPLOAD_BYTES,
            },
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but malformed, or when the
    /// resulting configuration fails [`validate`](Self::validate)
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let timeout_secs = env_config::analysis_timeout_secs()
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|e| {
                    AppError::new(
                        ErrorCode::ConfigInvalid,
                        format!("Invalid ANALYSIS_TIMEOUT_SECS value '{raw}': {e}"),
                    )
                })
            })
            .transpose()?;

        let config = Self {
            http_port: env_config::http_port(),
            environment: Environment::from_str_or_default(&env_config::environment()),
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_config::database_url())?,
            },
            analysis: AnalysisServiceConfig {
                base_url: env_config::analysis_service_url()
                    .trim_end_matches('/')
                    .to_owned(),
                timeout_secs,
            },
            cors: CorsConfig {
                allowed_origins: env_config::cors_allowed_origins(),
            },
            limits: LimitsConfig {
                max_upload_bytes: env_config::max_upload_bytes(),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` describing the first offending setting
    pub fn validate(&self) -> AppResult<()> {
        if !(self.analysis.base_url.starts_with("http://")
            || self.analysis.base_url.starts_with("https://"))
        {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!(
                    "ANALYSIS_SERVICE_URL must be an http(s) URL, got '{}'",
                    self.analysis.base_url
                ),
            ));
        }

        if self.analysis.timeout_secs == Some(0) {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                "ANALYSIS_TIMEOUT_SECS must be greater than zero",
            ));
        }

        if self.limits.max_upload_bytes == 0 {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                "MAX_UPLOAD_BYTES must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Kuzan Server Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - Analysis Service: {}\n\
             - Analysis Timeout: {}\n\
             - CORS Origins: {}\n\
             - Max Upload: {} bytes",
            self.http_port,
            self.environment,
            self.log_level,
            if self.database.url.is_memory() {
                "In-memory"
            } else {
                "SQLite"
            },
            self.analysis.base_url,
            self.analysis
                .timeout_secs
                .map_or_else(|| "transport default".to_owned(), |s| format!("{s}s")),
            self.cors.allowed_origins,
            self.limits.max_upload_bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_parsing() {
        assert_eq!(DatabaseUrl::parse_url("memory").unwrap(), DatabaseUrl::Memory);
        assert_eq!(
            DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
            DatabaseUrl::SQLiteMemory
        );
        let file = DatabaseUrl::parse_url("sqlite:./data/test.db").unwrap();
        assert!(file.is_sqlite());
        assert_eq!(file.to_connection_string(), "sqlite:./data/test.db");

        let bare = DatabaseUrl::parse_url("./some/path.db").unwrap();
        assert_eq!(bare.to_connection_string(), "sqlite:./some/path.db");

        assert!(DatabaseUrl::parse_url("  ").is_err());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ServerConfig::default();
        assert!(config.validate().is_ok());

        config.analysis.base_url = "localhost:8000".to_owned();
        assert!(config.validate().is_err());

        config = ServerConfig::default();
        config.analysis.timeout_secs = Some(0);
        assert!(config.validate().is_err());

        config = ServerConfig::default();
        config.limits.max_upload_bytes = 0;
        assert!(config.validate().is_err());
    }
}
