// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Probe-ordered decoding of parser nodes into [`Content`].

use crate::{Content, ContentError, ParseNode, Result};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

/// Default nesting limit applied by [`Content::decode`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs for [`Content::decode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting depth below the root node.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Location of the node being decoded, rendered like `a.b[2].c`.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodePath {
    segments: Vec<Segment>,
}

impl NodePath {
    fn depth(&self) -> usize {
        self.segments.len()
    }

    fn push_key(&mut self, key: &str) {
        self.segments.push(Segment::Key(key.to_string()));
    }

    fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{}", key)?,
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Decode `node`, committing to the first probe that succeeds:
/// null, string, integer, float, bool, mapping, sequence.
pub(crate) fn decode_node<N: ParseNode>(
    node: &N,
    options: &DecodeOptions,
    path: &mut NodePath,
) -> Result<Content> {
    if path.depth() > options.max_depth {
        return Err(ContentError::DepthLimitExceeded {
            path: path.to_string(),
            limit: options.max_depth,
        });
    }

    if node.is_null() {
        return Ok(Content::Null);
    }
    if let Some(s) = node.probe_str() {
        return Ok(Content::String(s.to_string()));
    }
    if let Some(i) = node.probe_i64() {
        return Ok(Content::Int(i));
    }
    if let Some(d) = node.probe_f64() {
        return Ok(Content::Double(d));
    }
    if let Some(b) = node.probe_bool() {
        return Ok(Content::Bool(b));
    }
    if let Some(entries) = node.probe_mapping() {
        let mut map = BTreeMap::new();
        for (key, child) in entries {
            let slot = match map.entry(key.into_owned()) {
                Entry::Vacant(slot) => slot,
                Entry::Occupied(taken) => {
                    return Err(ContentError::DuplicateKey {
                        path: path.to_string(),
                        key: taken.key().clone(),
                    })
                }
            };
            path.push_key(slot.key());
            let value = decode_node(child, options, path)?;
            path.pop();
            slot.insert(value);
        }
        return Ok(Content::Map(map));
    }
    if let Some(items) = node.probe_sequence() {
        let mut array = Vec::with_capacity(items.len());
        for (index, child) in items.iter().enumerate() {
            path.push_index(index);
            array.push(decode_node(child, options, path)?);
            path.pop();
        }
        return Ok(Content::Array(array));
    }

    Err(ContentError::UnrepresentableNode {
        path: path.to_string(),
        found: node.kind(),
    })
}
