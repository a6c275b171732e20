// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Parser node probing.
//!
//! A [`ParseNode`] is the parser's own discriminated node seen through a small
//! set of "can this be read as X" probes. [`Content`](crate::Content) decoding
//! only talks to this trait, so the type inference it performs depends on the
//! parser's scalar resolution and on nothing else.

use std::borrow::Cow;

/// Probe interface over a parsed document node.
///
/// Every probe is partial: it returns `None` when the node cannot be read as
/// the requested type, and never fails otherwise.
pub trait ParseNode: Sized {
    /// Explicit null / absent node.
    fn is_null(&self) -> bool;

    fn probe_str(&self) -> Option<&str>;

    fn probe_i64(&self) -> Option<i64>;

    fn probe_f64(&self) -> Option<f64>;

    fn probe_bool(&self) -> Option<bool>;

    /// Mapping entries with their keys rendered as text. Returns `None` when
    /// the node is not a mapping or when any key has no scalar text form.
    fn probe_mapping(&self) -> Option<Vec<(Cow<'_, str>, &Self)>>;

    fn probe_sequence(&self) -> Option<&[Self]>;

    /// Short description of the node kind, used in diagnostics.
    fn kind(&self) -> &'static str;
}

fn yaml_key_text(key: &serde_yaml::Value) -> Option<Cow<'_, str>> {
    use serde_yaml::Value;
    match key {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

// serde_yaml's own accessors look through `!Tag` wrappers, so every probe
// matches the untagged variant directly.
impl ParseNode for serde_yaml::Value {
    fn is_null(&self) -> bool {
        matches!(self, serde_yaml::Value::Null)
    }

    fn probe_str(&self) -> Option<&str> {
        match self {
            serde_yaml::Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn probe_i64(&self) -> Option<i64> {
        match self {
            serde_yaml::Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    fn probe_f64(&self) -> Option<f64> {
        match self {
            serde_yaml::Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    fn probe_bool(&self) -> Option<bool> {
        match self {
            serde_yaml::Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn probe_mapping(&self) -> Option<Vec<(Cow<'_, str>, &Self)>> {
        let serde_yaml::Value::Mapping(map) = self else {
            return None;
        };
        map.iter().map(|(k, v)| yaml_key_text(k).map(|k| (k, v))).collect()
    }

    fn probe_sequence(&self) -> Option<&[Self]> {
        match self {
            serde_yaml::Value::Sequence(seq) => Some(seq.as_slice()),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        use serde_yaml::Value;
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(map) if map.keys().any(|k| yaml_key_text(k).is_none()) => {
                "mapping with a non-scalar key"
            }
            Value::Mapping(_) => "mapping",
            Value::Tagged(_) => "tagged node",
        }
    }
}

impl ParseNode for serde_json::Value {
    fn is_null(&self) -> bool {
        self.is_null()
    }

    fn probe_str(&self) -> Option<&str> {
        self.as_str()
    }

    fn probe_i64(&self) -> Option<i64> {
        self.as_i64()
    }

    fn probe_f64(&self) -> Option<f64> {
        self.as_f64()
    }

    fn probe_bool(&self) -> Option<bool> {
        self.as_bool()
    }

    fn probe_mapping(&self) -> Option<Vec<(Cow<'_, str>, &Self)>> {
        self.as_object()
            .map(|obj| obj.iter().map(|(k, v)| (Cow::Borrowed(k.as_str()), v)).collect())
    }

    fn probe_sequence(&self) -> Option<&[Self]> {
        self.as_array().map(|arr| arr.as_slice())
    }

    fn kind(&self) -> &'static str {
        use serde_json::Value;
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}
