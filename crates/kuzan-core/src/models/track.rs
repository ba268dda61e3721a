// ABOUTME: Training track enumeration selecting which roadmap applies
// ABOUTME: Provides parsing, display, and the persisted document key for each track
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kuzan Contributors

use crate::constants::documents::ROADMAP_KEY_PREFIX;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level training choice; exactly one roadmap document exists per track
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    /// Pushing static holds (elbow lever, L-sit, planche)
    #[default]
    Push,
    /// Pulling static holds (back lever, front lever)
    Pull,
}

impl Track {
    /// Every track, in display order
    pub const ALL: [Self; 2] = [Self::Push, Self::Pull];

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Pull => "pull",
        }
    }

    /// Key under which this track's roadmap document is persisted
    #[must_use]
    pub fn document_key(self) -> String {
        format!("{ROADMAP_KEY_PREFIX}{}", self.as_str())
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Track {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "push" => Ok(Self::Push),
            "pull" => Ok(Self::Pull),
            other => Err(AppError::invalid_input(format!(
                "Unknown track '{other}', expected 'push' or 'pull'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("PUSH".parse::<Track>().unwrap(), Track::Push);
        assert_eq!(" pull ".parse::<Track>().unwrap(), Track::Pull);
        assert!("legs".parse::<Track>().is_err());
    }

    #[test]
    fn test_document_key() {
        assert_eq!(Track::Push.document_key(), "roadmap_push");
        assert_eq!(Track::Pull.document_key(), "roadmap_pull");
    }
}
