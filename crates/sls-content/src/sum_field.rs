// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Fields written either as a bare scalar or as an object under a fixed key.
//!
//! `iam: arn:aws:iam::123:role/x` references an existing entity while
//! `iam: {role: {...}}` specifies one inline. Decoding tries the structured
//! shape first and falls back to the scalar shape on any failure; if neither
//! decodes the field is rejected with both reasons attached.

use crate::{ContentError, Result};
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The two mutually exclusive forms of a sum field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<S, T> {
    Scalar(S),
    Structured(T),
}

/// A schema type whose value is one of two shapes.
///
/// Implementors get `Deserialize`/`Serialize` by delegating to
/// [`deserialize`] and [`serialize`] in this module.
pub trait SumField: Sized {
    type Scalar: DeserializeOwned + Serialize;
    type Structured: DeserializeOwned + Serialize;

    /// Field name used in diagnostics.
    const FIELD: &'static str;
    /// Key wrapping the structured shape.
    const KEY: &'static str;

    fn from_shape(shape: Shape<Self::Scalar, Self::Structured>) -> Self;

    fn as_shape(&self) -> Shape<&Self::Scalar, &Self::Structured>;
}

/// Decode a sum field from a YAML node, structured shape first.
pub fn decode<F: SumField>(node: &serde_yaml::Value) -> Result<F> {
    use serde_yaml::Value;

    // Tags are matched exactly: `Value::get` and the value deserializer both
    // see through `!Tag` wrappers.
    if let Value::Tagged(tagged) = node {
        let reason = format!("tagged node `{}`", tagged.tag);
        return Err(ContentError::AmbiguousShapeUnresolved {
            field: F::FIELD,
            key: F::KEY,
            structured: reason.clone(),
            scalar: reason,
        });
    }

    let structured = match node {
        Value::Mapping(map) => match map.get(F::KEY) {
            Some(inner) => serde_yaml::from_value::<F::Structured>(inner.clone()).map_err(|e| e.to_string()),
            None => Err(format!("no `{}` key", F::KEY)),
        },
        other => Err(format!("expected a mapping, found {}", crate::ParseNode::kind(other))),
    };
    let structured_err = match structured {
        Ok(value) => return Ok(F::from_shape(Shape::Structured(value))),
        Err(err) => err,
    };

    match serde_yaml::from_value::<F::Scalar>(node.clone()) {
        Ok(value) => {
            tracing::debug!(
                field = F::FIELD,
                reason = %structured_err,
                "structured shape rejected, decoded as scalar"
            );
            Ok(F::from_shape(Shape::Scalar(value)))
        }
        Err(scalar_err) => Err(ContentError::AmbiguousShapeUnresolved {
            field: F::FIELD,
            key: F::KEY,
            structured: structured_err,
            scalar: scalar_err.to_string(),
        }),
    }
}

/// `Deserialize` body for [`SumField`] implementors.
pub fn deserialize<'de, D, F>(deserializer: D) -> std::result::Result<F, D::Error>
where
    D: Deserializer<'de>,
    F: SumField,
{
    let node = serde_yaml::Value::deserialize(deserializer)?;
    decode(&node).map_err(serde::de::Error::custom)
}

/// `Serialize` body for [`SumField`] implementors.
pub fn serialize<F, S>(field: &F, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    F: SumField,
    S: Serializer,
{
    match field.as_shape() {
        Shape::Scalar(scalar) => scalar.serialize(serializer),
        Shape::Structured(structured) => {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry(F::KEY, structured)?;
            map.end()
        }
    }
}
