// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! The recursive dynamic value stored in free-form configuration fields.

use crate::decode::{decode_node, DecodeOptions, NodePath};
use crate::native::ContentSerializer;
use crate::{ContentError, ParseNode, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Any node of a configuration document.
///
/// Equality is structural and exact: numeric variants never compare across
/// each other, so `Int(2) != Double(2.0)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Array(Vec<Content>),
    Map(BTreeMap<String, Content>),
}

impl Content {
    /// Build content from any serializable native value.
    ///
    /// Fails with [`ContentError::UnsupportedValueKind`] on the first value
    /// outside the representable domain; no partial tree is returned.
    pub fn from_native<T: Serialize + ?Sized>(value: &T) -> Result<Content> {
        value.serialize(ContentSerializer)
    }

    /// Decode a parser node with the default [`DecodeOptions`].
    pub fn decode<N: ParseNode>(node: &N) -> Result<Content> {
        Self::decode_with(node, &DecodeOptions::default())
    }

    pub fn decode_with<N: ParseNode>(node: &N, options: &DecodeOptions) -> Result<Content> {
        decode_node(node, options, &mut NodePath::default())
    }

    /// Emit this tree as the YAML parser's node model.
    pub fn to_yaml_node(&self) -> serde_yaml::Value {
        use serde_yaml::Value;
        match self {
            Content::Null => Value::Null,
            Content::Bool(b) => Value::Bool(*b),
            Content::Int(i) => Value::Number((*i).into()),
            Content::Double(d) => Value::Number((*d).into()),
            Content::String(s) => Value::String(s.clone()),
            Content::Array(items) => Value::Sequence(items.iter().map(Content::to_yaml_node).collect()),
            Content::Map(map) => Value::Mapping(
                map.iter()
                    .map(|(k, v)| (Value::String(k.clone()), v.to_yaml_node()))
                    .collect(),
            ),
        }
    }

    /// Untyped view used to compare against hand-built fixtures.
    ///
    /// Non-finite doubles have no JSON form and unwrap to null.
    pub fn native_value(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            Content::Null => Value::Null,
            Content::Bool(b) => Value::Bool(*b),
            Content::Int(i) => Value::from(*i),
            Content::Double(d) => serde_json::Number::from_f64(*d).map_or(Value::Null, Value::Number),
            Content::String(s) => Value::String(s.clone()),
            Content::Array(items) => Value::Array(items.iter().map(Content::native_value).collect()),
            Content::Map(map) => Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.native_value())).collect(),
            ),
        }
    }

    /// Extract a typed record from this sub-tree.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T> {
        serde_yaml::from_value(self.to_yaml_node()).map_err(|e| ContentError::Custom(e.to_string()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Content::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Content::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Content::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Content::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Content::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Content]> {
        match self {
            Content::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Content>> {
        match self {
            Content::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Look up `key` when this is a map.
    pub fn get(&self, key: &str) -> Option<&Content> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Null => "null",
            Content::Bool(_) => "bool",
            Content::Int(_) => "int",
            Content::Double(_) => "double",
            Content::String(_) => "string",
            Content::Array(_) => "array",
            Content::Map(_) => "map",
        }
    }
}

impl Serialize for Content {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Content::Null => serializer.serialize_unit(),
            Content::Bool(b) => serializer.serialize_bool(*b),
            Content::Int(i) => serializer.serialize_i64(*i),
            Content::Double(d) => serializer.serialize_f64(*d),
            Content::String(s) => serializer.serialize_str(s),
            Content::Array(items) => serializer.collect_seq(items),
            Content::Map(map) => serializer.collect_map(map),
        }
    }
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Buffer the node so the probes run in a fixed order regardless of the
        // deserializer's own type hints.
        let node = serde_yaml::Value::deserialize(deserializer)?;
        Content::decode(&node).map_err(serde::de::Error::custom)
    }
}

impl From<bool> for Content {
    fn from(value: bool) -> Self {
        Content::Bool(value)
    }
}

impl From<i32> for Content {
    fn from(value: i32) -> Self {
        Content::Int(value.into())
    }
}

impl From<u32> for Content {
    fn from(value: u32) -> Self {
        Content::Int(value.into())
    }
}

impl From<i64> for Content {
    fn from(value: i64) -> Self {
        Content::Int(value)
    }
}

impl From<f64> for Content {
    fn from(value: f64) -> Self {
        Content::Double(value)
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::String(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::String(value)
    }
}

impl From<Vec<Content>> for Content {
    fn from(value: Vec<Content>) -> Self {
        Content::Array(value)
    }
}

impl From<BTreeMap<String, Content>> for Content {
    fn from(value: BTreeMap<String, Content>) -> Self {
        Content::Map(value)
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        value.map_or(Content::Null, Into::into)
    }
}

impl FromIterator<Content> for Content {
    fn from_iter<I: IntoIterator<Item = Content>>(iter: I) -> Self {
        Content::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Content)> for Content {
    fn from_iter<I: IntoIterator<Item = (K, Content)>>(iter: I) -> Self {
        Content::Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
