// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use serde::{Deserialize, Serialize};

/// Packaging rules, at service level or per function.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Glob include/exclude patterns; a leading `!` excludes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individually: Option<bool>,
    /// Prebuilt deployment archive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<String>,
}

impl Package {
    pub fn individually() -> Self {
        Self {
            individually: Some(true),
            ..Self::default()
        }
    }

    pub fn artifact(path: impl Into<String>) -> Self {
        Self {
            artifact: Some(path.into()),
            ..Self::default()
        }
    }
}
