// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use sls_content::ContentError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while reading or writing a serverless configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document did not match the schema; `path` locates the failing node.
    #[error("Failed to decode serverless config at `{path}`: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to encode serverless config: {0}")]
    Encode(#[source] serde_yaml::Error),

    #[error(transparent)]
    Content(#[from] ContentError),
}
