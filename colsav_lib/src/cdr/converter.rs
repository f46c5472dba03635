//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Module with the [`Converter`], which drives canonical-tree parsing and keeps the context
//! needed to build useful error messages.

use super::{join_keys, ConvError, Table, Value, KEY_ORDER};

//---------------------------------------------------------------------------//
//                              Enums & Structs
//---------------------------------------------------------------------------//

/// Parsing context for canonical-tree conversions.
///
/// It tracks the dotted path of the field currently being converted, so errors raised deep
/// inside a record name the offending field.
#[derive(Debug, Default)]
pub struct Converter {
    path: Vec<String>,
}

/// Tracker for the keys consumed out of one table.
///
/// Each record decoder marks the keys it reads; [`TableTracker::finish`] then reports any
/// the decoder did not recognize. The [`KEY_ORDER`] pseudo-key is always accepted.
pub struct TableTracker<'a> {
    table: &'a Table,
    used: Vec<bool>,
}

//---------------------------------------------------------------------------//
//                             Implementations
//---------------------------------------------------------------------------//

impl Converter {

    pub fn new() -> Self {
        Self::default()
    }

    /// This function runs `op` with `key` appended to the tracked field path.
    pub fn frame<T>(&mut self, key: &str, op: impl FnOnce(&mut Self) -> Result<T, ConvError>) -> Result<T, ConvError> {
        self.path.push(key.to_owned());
        let result = op(self);
        self.path.pop();
        result
    }

    /// This function builds a [`ConvError`] at the current field path.
    pub fn error(&self, message: impl Into<String>) -> ConvError {
        ConvError::new(self.path.join("."), message)
    }

    /// Shorthand for `Err(self.error(message))`.
    pub fn err<T>(&self, message: impl Into<String>) -> Result<T, ConvError> {
        Err(self.error(message))
    }

    pub fn expect_bool(&self, value: &Value) -> Result<bool, ConvError> {
        match value {
            Value::Bool(value) => Ok(*value),
            _ => self.err("expected a bool."),
        }
    }

    pub fn expect_integer(&self, value: &Value) -> Result<i64, ConvError> {
        match value {
            Value::Integer(value) => Ok(*value),
            _ => self.err("expected an integer."),
        }
    }

    pub fn expect_string<'a>(&self, value: &'a Value) -> Result<&'a str, ConvError> {
        match value {
            Value::String(value) => Ok(value),
            _ => self.err("expected a string."),
        }
    }

    pub fn expect_list<'a>(&self, value: &'a Value) -> Result<&'a [Value], ConvError> {
        match value {
            Value::List(values) => Ok(values),
            _ => self.err("expected a list."),
        }
    }

    pub fn expect_table<'a>(&self, value: &'a Value) -> Result<&'a Table, ConvError> {
        match value {
            Value::Table(table) => Ok(table),
            _ => self.err("expected a table."),
        }
    }
}

impl<'a> TableTracker<'a> {

    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            used: vec![false; table.len()],
        }
    }

    /// This function returns the value under `key`, marking the key as consumed.
    ///
    /// Missing keys are an error: every field of a record must be present in its table.
    pub fn field(&mut self, conv: &Converter, key: &str) -> Result<&'a Value, ConvError> {
        match self.table.keys().position(|candidate| candidate == key) {
            Some(position) => {
                self.used[position] = true;
                Ok(self.table.iter().nth(position).map(|(_, value)| value).unwrap_or(&Value::Null))
            },
            None => conv.err(format!("key '{key}' not found in table.")),
        }
    }

    /// This function reports the keys of the table no call to [`Self::field`] consumed.
    pub fn finish(self, conv: &Converter) -> Result<(), ConvError> {
        let leftover = self.table.keys()
            .enumerate()
            .filter(|(position, key)| !self.used[*position] && *key != KEY_ORDER)
            .map(|(_, key)| key)
            .collect::<Vec<_>>();
        if leftover.is_empty() {
            Ok(())
        } else {
            conv.err(format!("unrecognized key(s) in table: {}.", join_keys(leftover.into_iter())))
        }
    }
}
