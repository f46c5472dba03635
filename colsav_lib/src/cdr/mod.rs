//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the canonical data representation (CDR) used to project save records
//! into a structured, human-readable tree, and to parse that tree back.
//!
//! The tree is JSON-compatible: primitives (null, bool, integer, double, string), lists, and
//! tables whose key order is preserved. It exists for analysis and research into the original
//! game's files, so the packed types render in the most diff-friendly form available: bit
//! arrays as strings of `0`/`1` characters, byte blobs as strings of hex pairs.
//!
//! Every record's table carries a `__key_order` list naming its fields in canonical order.
//! Decoders only use it to render output back in the original order; it has no semantic
//! meaning. Unknown keys in an input table are an error.

use itertools::Itertools;

use std::fmt;

pub use self::converter::{Converter, TableTracker};

pub mod converter;

#[cfg(test)] mod cdr_test;

/// Key under which each record's table stores its field order.
pub const KEY_ORDER: &str = "__key_order";

//---------------------------------------------------------------------------//
//                              Enums & Structs
//---------------------------------------------------------------------------//

/// A node of the canonical tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    String(String),
    List(Vec<Value>),
    Table(Table),
}

/// A table of the canonical tree. Keys are strings and their order is preserved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    entries: Vec<(String, Value)>,
}

/// Error found while converting between the canonical tree and a typed value.
///
/// The message is the contract; the path locates the offending field when the conversion
/// failed below the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvError {
    path: String,
    message: String,
}

//---------------------------------------------------------------------------//
//                           Trait Definitions
//---------------------------------------------------------------------------//

/// A generic trait to project typed values into the canonical tree.
pub trait ToCanonical {

    /// This method builds the canonical form of `self`.
    fn to_canonical(&self) -> Value;
}

/// A generic trait to rebuild typed values from the canonical tree.
pub trait FromCanonical: Sized {

    /// This method tries to rebuild `Self` from a canonical value, reporting failures with
    /// the field path tracked by the provided [`Converter`].
    fn from_canonical(conv: &mut Converter, value: &Value) -> Result<Self, ConvError>;
}

//---------------------------------------------------------------------------//
//                             Implementations
//---------------------------------------------------------------------------//

impl Table {

    pub fn new() -> Self {
        Self::default()
    }

    /// This function appends a key/value pair at the end of the table, replacing the value
    /// in place if the key is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, old)) => *old = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Value {

    /// This function renders the canonical tree as a [`serde_json::Value`], preserving the
    /// table key order.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(value) => serde_json::Value::Bool(*value),
            Self::Integer(value) => serde_json::Value::from(*value),
            Self::Double(value) => serde_json::Value::from(*value),
            Self::String(value) => serde_json::Value::from(value.as_str()),
            Self::List(values) => serde_json::Value::Array(values.iter().map(Self::to_json).collect()),
            Self::Table(table) => {
                let mut map = serde_json::Map::with_capacity(table.len());
                for (key, value) in table.iter() {
                    map.insert(key.to_owned(), value.to_json());
                }
                serde_json::Value::Object(map)
            },
        }
    }

    /// This function rebuilds a canonical tree from a [`serde_json::Value`].
    ///
    /// Numbers that fit an i64 become integers; anything else numeric becomes a double.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(value) => Self::Bool(*value),
            serde_json::Value::Number(value) => match value.as_i64() {
                Some(value) => Self::Integer(value),
                None => Self::Double(value.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(value) => Self::String(value.to_owned()),
            serde_json::Value::Array(values) => Self::List(values.iter().map(Self::from_json).collect()),
            serde_json::Value::Object(map) => {
                let mut table = Table::new();
                for (key, value) in map {
                    table.insert(key, Self::from_json(value));
                }
                Self::Table(table)
            },
        }
    }

    /// This function renders the canonical tree as pretty-printed JSON text.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
    }

    /// This function parses JSON text into a canonical tree.
    pub fn from_json_str(data: &str) -> Result<Self, ConvError> {
        let json: serde_json::Value = serde_json::from_str(data)
            .map_err(|error| ConvError::new("", format!("failed to parse json: {error}.")))?;
        Ok(Self::from_json(&json))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl ConvError {

    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Dotted path of the field the conversion failed on. Empty at the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConvError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for ConvError {}

//---------------------------------------------------------------------------//
//                  Implementations for primitive types
//---------------------------------------------------------------------------//

macro_rules! canonical_int {
    ($($ty:ty),*) => {$(
        impl ToCanonical for $ty {
            fn to_canonical(&self) -> Value {
                Value::Integer(*self as i64)
            }
        }

        impl FromCanonical for $ty {
            fn from_canonical(conv: &mut Converter, value: &Value) -> Result<Self, ConvError> {
                let integer = conv.expect_integer(value)?;
                <$ty>::try_from(integer).map_err(|_| conv.error(format!(
                    "expected an integer between {} and {}, instead found {}.",
                    <$ty>::MIN, <$ty>::MAX, integer
                )))
            }
        }
    )*};
}

canonical_int!(u8, u16, u32, i8, i16, i32, i64);

impl ToCanonical for bool {
    fn to_canonical(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromCanonical for bool {
    fn from_canonical(conv: &mut Converter, value: &Value) -> Result<Self, ConvError> {
        conv.expect_bool(value)
    }
}

impl ToCanonical for String {
    fn to_canonical(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl FromCanonical for String {
    fn from_canonical(conv: &mut Converter, value: &Value) -> Result<Self, ConvError> {
        conv.expect_string(value).map(ToOwned::to_owned)
    }
}

impl<T: ToCanonical, const N: usize> ToCanonical for [T; N] {
    fn to_canonical(&self) -> Value {
        Value::List(self.iter().map(ToCanonical::to_canonical).collect())
    }
}

impl<T: FromCanonical + Default, const N: usize> FromCanonical for [T; N] {
    fn from_canonical(conv: &mut Converter, value: &Value) -> Result<Self, ConvError> {
        let list = conv.expect_list(value)?;
        if list.len() != N {
            return conv.err(format!("expected list of length {} but found length {}.", N, list.len()));
        }
        let mut out: [T; N] = std::array::from_fn(|_| T::default());
        for (index, element) in list.iter().enumerate() {
            out[index] = conv.frame(&index.to_string(), |conv| T::from_canonical(conv, element))?;
        }
        Ok(out)
    }
}

impl<T: ToCanonical> ToCanonical for Vec<T> {
    fn to_canonical(&self) -> Value {
        Value::List(self.iter().map(ToCanonical::to_canonical).collect())
    }
}

impl<T: FromCanonical> FromCanonical for Vec<T> {
    fn from_canonical(conv: &mut Converter, value: &Value) -> Result<Self, ConvError> {
        let list = conv.expect_list(value)?;
        let mut out = Vec::with_capacity(list.len());
        for (index, element) in list.iter().enumerate() {
            out.push(conv.frame(&index.to_string(), |conv| T::from_canonical(conv, element))?);
        }
        Ok(out)
    }
}

/// This function builds the `__key_order` list for a record's table.
pub fn key_order_list(keys: &[&str]) -> Value {
    Value::List(keys.iter().map(|key| Value::String((*key).to_owned())).collect())
}

/// This function formats a list of keys for an error message.
pub(crate) fn join_keys<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    keys.map(|key| format!("'{key}'")).join(", ")
}
