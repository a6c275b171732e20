// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::fmt::Display;
use thiserror::Error;

/// Convenient result alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors raised while building, decoding or resolving dynamic content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// A native value outside the representable domain (byte blobs,
    /// integers that do not fit `i64`, non-string map keys).
    #[error("Unsupported value kind: {kind}")]
    UnsupportedValueKind { kind: &'static str },

    /// A parsed node matched none of the decode probes.
    #[error("Unrepresentable node at `{path}`: found {found}")]
    UnrepresentableNode { path: String, found: &'static str },

    /// Neither the structured nor the scalar shape of a sum field decoded.
    #[error(
        "Ambiguous shape for `{field}`: not a `{key}` object ({structured}) and not a scalar ({scalar})"
    )]
    AmbiguousShapeUnresolved {
        field: &'static str,
        key: &'static str,
        structured: String,
        scalar: String,
    },

    /// Two mapping keys rendered to the same text (`1` and `'1'`).
    #[error("Duplicate key `{key}` in mapping at `{path}`")]
    DuplicateKey { path: String, key: String },

    /// Nesting exceeded the configured decode depth.
    #[error("Content nested deeper than {limit} levels at `{path}`")]
    DepthLimitExceeded { path: String, limit: usize },

    /// Message raised by a serde implementation.
    #[error("{0}")]
    Custom(String),
}

impl serde::ser::Error for ContentError {
    fn custom<T: Display>(msg: T) -> Self {
        ContentError::Custom(msg.to_string())
    }
}
