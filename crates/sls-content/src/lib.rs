// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Dynamic content model for free-form configuration documents.
//!
//! [`Content`] holds any YAML node the schema does not model with a typed
//! record. Decoding commits to the first of a fixed sequence of type probes
//! (null, string, integer, float, bool, mapping, sequence), so the variant a
//! scalar lands in is decided by the YAML parser's scalar resolution:
//!
//! ```
//! use sls_content::Content;
//!
//! let content: Content = serde_yaml::from_str("{a: 123, b: '123', c: yes, d: 2.0}").unwrap();
//! assert_eq!(content.get("a"), Some(&Content::Int(123)));
//! assert_eq!(content.get("b"), Some(&Content::String("123".into())));
//! assert_eq!(content.get("c"), Some(&Content::String("yes".into())));
//! assert_eq!(content.get("d"), Some(&Content::Double(2.0)));
//! ```
//!
//! The crate also provides [`Defaultable`] for fields with a fixed fallback and
//! the [`sum_field`] machinery for fields that are either a scalar or a keyed
//! object.

pub mod content;
pub mod decode;
pub mod defaultable;
pub mod error;
mod native;
pub mod node;
pub mod sum_field;

pub use content::Content;
pub use decode::{DecodeOptions, DEFAULT_MAX_DEPTH};
pub use defaultable::{
    DefaultEmptyList, DefaultEmptyMap, DefaultEmptyString, DefaultFalse, DefaultFirstCase, DefaultKind,
    DefaultPolicy, DefaultTrue, Defaultable,
};
pub use error::{ContentError, Result};
pub use node::ParseNode;
pub use sum_field::{Shape, SumField};
