// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Fields that fall back to a fixed default when their key is missing.
//!
//! A [`Defaultable`] pairs a value with a policy marker chosen where the owning
//! record is declared. Absent keys and explicit nulls both decode to the
//! policy default; encoding always writes the value, so a default that was
//! filled in on decode becomes an explicit key on the next encode.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use sls_content::{DefaultFalse, DefaultEmptyList};
//!
//! #[derive(Deserialize, Serialize)]
//! struct Section {
//!     #[serde(default)]
//!     enabled: DefaultFalse,
//!     #[serde(default)]
//!     patterns: DefaultEmptyList<String>,
//! }
//!
//! let section: Section = serde_yaml::from_str("patterns: ['!**/*']").unwrap();
//! assert!(!*section.enabled);
//! assert_eq!(section.patterns.len(), 1);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use strum::IntoEnumIterator;

mod sealed {
    pub trait Sealed {}
}

/// The closed set of default policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum DefaultKind {
    True,
    False,
    EmptyString,
    EmptyList,
    EmptyMap,
    FirstCase,
}

/// A default policy applicable to values of type `T`.
///
/// Implemented only by the marker types in this module.
pub trait DefaultPolicy<T>: sealed::Sealed {
    const KIND: DefaultKind;

    fn default_value() -> T;
}

/// Defaults to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct True;

/// Defaults to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct False;

/// Defaults to `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyString;

/// Defaults to `[]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyList;

/// Defaults to `{}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyMap;

/// Defaults to the first declared variant of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstCase;

impl sealed::Sealed for True {}
impl sealed::Sealed for False {}
impl sealed::Sealed for EmptyString {}
impl sealed::Sealed for EmptyList {}
impl sealed::Sealed for EmptyMap {}
impl sealed::Sealed for FirstCase {}

impl DefaultPolicy<bool> for True {
    const KIND: DefaultKind = DefaultKind::True;

    fn default_value() -> bool {
        true
    }
}

impl DefaultPolicy<bool> for False {
    const KIND: DefaultKind = DefaultKind::False;

    fn default_value() -> bool {
        false
    }
}

impl DefaultPolicy<String> for EmptyString {
    const KIND: DefaultKind = DefaultKind::EmptyString;

    fn default_value() -> String {
        String::new()
    }
}

impl<U> DefaultPolicy<Vec<U>> for EmptyList {
    const KIND: DefaultKind = DefaultKind::EmptyList;

    fn default_value() -> Vec<U> {
        Vec::new()
    }
}

impl<K: Ord, V> DefaultPolicy<BTreeMap<K, V>> for EmptyMap {
    const KIND: DefaultKind = DefaultKind::EmptyMap;

    fn default_value() -> BTreeMap<K, V> {
        BTreeMap::new()
    }
}

impl<K: Eq + Hash, V, S: BuildHasher + Default> DefaultPolicy<HashMap<K, V, S>> for EmptyMap {
    const KIND: DefaultKind = DefaultKind::EmptyMap;

    fn default_value() -> HashMap<K, V, S> {
        HashMap::default()
    }
}

/// `E::default()` is only consulted when `E` has no variants to iterate.
impl<E: IntoEnumIterator + Default> DefaultPolicy<E> for FirstCase {
    const KIND: DefaultKind = DefaultKind::FirstCase;

    fn default_value() -> E {
        E::iter().next().unwrap_or_default()
    }
}

/// A `T` that decodes to `P`'s default when its key is absent or null.
///
/// Pair it with `#[serde(default)]` on the owning field.
pub struct Defaultable<T, P> {
    value: T,
    _policy: PhantomData<fn() -> P>,
}

pub type DefaultTrue = Defaultable<bool, True>;
pub type DefaultFalse = Defaultable<bool, False>;
pub type DefaultEmptyString = Defaultable<String, EmptyString>;
pub type DefaultEmptyList<U> = Defaultable<Vec<U>, EmptyList>;
pub type DefaultEmptyMap<M> = Defaultable<M, EmptyMap>;
pub type DefaultFirstCase<E> = Defaultable<E, FirstCase>;

impl<T, P> Defaultable<T, P> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            _policy: PhantomData,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, P: DefaultPolicy<T>> Defaultable<T, P> {
    pub fn policy(&self) -> DefaultKind {
        P::KIND
    }

    /// Whether the current value equals the policy default.
    pub fn is_default(&self) -> bool
    where
        T: PartialEq,
    {
        self.value == P::default_value()
    }
}

impl<T, P: DefaultPolicy<T>> Default for Defaultable<T, P> {
    fn default() -> Self {
        Self::new(P::default_value())
    }
}

impl<T, P> From<T> for Defaultable<T, P> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, P> Deref for Defaultable<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, P> DerefMut for Defaultable<T, P> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: Clone, P> Clone for Defaultable<T, P> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: PartialEq, P> PartialEq for Defaultable<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, P> Eq for Defaultable<T, P> {}

impl<T: Hash, P> Hash for Defaultable<T, P> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug, P> fmt::Debug for Defaultable<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: fmt::Display, P> fmt::Display for Defaultable<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<'de, T, P> Deserialize<'de> for Defaultable<T, P>
where
    T: Deserialize<'de>,
    P: DefaultPolicy<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<T>::deserialize(deserializer)? {
            Some(value) => Ok(Self::new(value)),
            None => {
                tracing::trace!(policy = %P::KIND, "explicit null replaced by default");
                Ok(Self::default())
            }
        }
    }
}

impl<T: Serialize, P> Serialize for Defaultable<T, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}
