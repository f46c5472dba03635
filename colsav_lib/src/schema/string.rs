//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Module with the [`FixedString`] type, an ASCII string backed by a fixed-size buffer.
//!
//! The string has a null terminator if and only if it is shorter than the buffer: a
//! 24-character name in a 24-byte field fills it completely.

use std::fmt;

use crate::binary::{ReadBytes, WriteBytes};
use crate::cdr::{ConvError, Converter, FromCanonical, ToCanonical, Value};
use crate::error::Result;
use crate::files::{Decodeable, Encodeable};
use crate::schema::ToText;

//---------------------------------------------------------------------------//
//                              Enums & Structs
//---------------------------------------------------------------------------//

/// A string backed by an `N`-byte buffer. Equality is componentwise over the whole buffer,
/// so two values that print the same but differ after the terminator are not equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedString<const N: usize>(pub [u8; N]);

//---------------------------------------------------------------------------//
//                             Implementations
//---------------------------------------------------------------------------//

impl<const N: usize> FixedString<N> {

    pub fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// This function overwrites the buffer with the provided string, null-padding the rest.
    ///
    /// It fails when the string does not fit the buffer.
    pub fn populate_from_str(&mut self, string: &str) -> bool {
        if string.len() > N {
            return false;
        }
        self.0 = [0; N];
        self.0[..string.len()].copy_from_slice(string.as_bytes());
        true
    }

    /// This function returns the text held by the buffer, up to its null terminator.
    pub fn to_text_string(&self) -> String {
        let end = self.0.iter().position(|byte| *byte == 0).unwrap_or(N);
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> ToText for FixedString<N> {
    fn push_text(&self, out: &mut String) {
        out.push_str(&self.to_text_string());
    }
}

impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_text_string())
    }
}

impl<const N: usize> Decodeable for FixedString<N> {
    fn decode<R: ReadBytes>(data: &mut R) -> Result<Self> {
        let mut bytes = [0; N];
        data.read_exact(&mut bytes)?;
        Ok(Self(bytes))
    }
}

impl<const N: usize> Encodeable for FixedString<N> {
    fn encode<W: WriteBytes>(&self, buffer: &mut W) -> Result<()> {
        buffer.write_slice(&self.0)
    }
}

impl<const N: usize> ToCanonical for FixedString<N> {
    fn to_canonical(&self) -> Value {
        Value::String(self.to_text_string())
    }
}

impl<const N: usize> FromCanonical for FixedString<N> {
    fn from_canonical(conv: &mut Converter, value: &Value) -> Result<Self, ConvError> {
        let text = conv.expect_string(value)?;
        if text.len() > N {
            return conv.err(format!("expected string with length <= {}, but instead found length {}.", N, text.len()));
        }
        let mut out = Self::default();
        out.0[..text.len()].copy_from_slice(text.as_bytes());
        Ok(out)
    }
}
