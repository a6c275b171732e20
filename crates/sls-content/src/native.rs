// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Construction of [`Content`] from native Rust values.
//!
//! The serializer accepts null, booleans, integers that fit `i64`, floats,
//! strings, sequences and string-keyed maps. Everything else is rejected with
//! [`ContentError::UnsupportedValueKind`] and the conversion stops there.

use crate::{Content, ContentError, Result};
use serde::ser::{self, Serialize};
use std::collections::BTreeMap;

pub(crate) struct ContentSerializer;

fn unsupported(kind: &'static str) -> ContentError {
    ContentError::UnsupportedValueKind { kind }
}

impl ser::Serializer for ContentSerializer {
    type Ok = Content;
    type Error = ContentError;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Content> {
        Ok(Content::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Content> {
        Ok(Content::Int(v.into()))
    }

    fn serialize_i16(self, v: i16) -> Result<Content> {
        Ok(Content::Int(v.into()))
    }

    fn serialize_i32(self, v: i32) -> Result<Content> {
        Ok(Content::Int(v.into()))
    }

    fn serialize_i64(self, v: i64) -> Result<Content> {
        Ok(Content::Int(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Content> {
        i64::try_from(v)
            .map(Content::Int)
            .map_err(|_| unsupported("integer outside the i64 range"))
    }

    fn serialize_u8(self, v: u8) -> Result<Content> {
        Ok(Content::Int(v.into()))
    }

    fn serialize_u16(self, v: u16) -> Result<Content> {
        Ok(Content::Int(v.into()))
    }

    fn serialize_u32(self, v: u32) -> Result<Content> {
        Ok(Content::Int(v.into()))
    }

    fn serialize_u64(self, v: u64) -> Result<Content> {
        i64::try_from(v)
            .map(Content::Int)
            .map_err(|_| unsupported("integer outside the i64 range"))
    }

    fn serialize_u128(self, v: u128) -> Result<Content> {
        i64::try_from(v)
            .map(Content::Int)
            .map_err(|_| unsupported("integer outside the i64 range"))
    }

    fn serialize_f32(self, v: f32) -> Result<Content> {
        Ok(Content::Double(v.into()))
    }

    fn serialize_f64(self, v: f64) -> Result<Content> {
        Ok(Content::Double(v))
    }

    fn serialize_char(self, v: char) -> Result<Content> {
        Ok(Content::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Content> {
        Ok(Content::String(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Content> {
        Err(unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<Content> {
        Ok(Content::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Content> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Content> {
        Ok(Content::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Content> {
        Ok(Content::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Content> {
        Ok(Content::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Content> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Content> {
        let mut map = BTreeMap::new();
        map.insert(variant.to_string(), value.serialize(ContentSerializer)?);
        Ok(Content::Map(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            map: BTreeMap::new(),
            next_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            map: BTreeMap::new(),
        })
    }
}

pub(crate) struct SerializeVec {
    items: Vec<Content>,
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Content;
    type Error = ContentError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(ContentSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Content> {
        Ok(Content::Array(self.items))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Content;
    type Error = ContentError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Content> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Content;
    type Error = ContentError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Content> {
        ser::SerializeSeq::end(self)
    }
}

pub(crate) struct SerializeTupleVariant {
    variant: &'static str,
    items: Vec<Content>,
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Content;
    type Error = ContentError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(ContentSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Content> {
        let mut map = BTreeMap::new();
        map.insert(self.variant.to_string(), Content::Array(self.items));
        Ok(Content::Map(map))
    }
}

pub(crate) struct SerializeMap {
    map: BTreeMap<String, Content>,
    next_key: Option<String>,
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Content;
    type Error = ContentError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<()> {
        match key.serialize(ContentSerializer)? {
            Content::String(key) => {
                self.next_key = Some(key);
                Ok(())
            }
            _ => Err(unsupported("non-string map key")),
        }
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| ContentError::Custom("map value serialized before its key".to_string()))?;
        self.map.insert(key, value.serialize(ContentSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Content> {
        Ok(Content::Map(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Content;
    type Error = ContentError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        self.map.insert(key.to_string(), value.serialize(ContentSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Content> {
        Ok(Content::Map(self.map))
    }
}

pub(crate) struct SerializeStructVariant {
    variant: &'static str,
    map: BTreeMap<String, Content>,
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Content;
    type Error = ContentError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        self.map.insert(key.to_string(), value.serialize(ContentSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Content> {
        let mut outer = BTreeMap::new();
        outer.insert(self.variant.to_string(), Content::Map(self.map));
        Ok(Content::Map(outer))
    }
}
