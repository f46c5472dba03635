//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Module with the [`FixedBytes`] type, a fixed-size blob of uninterpreted bytes.
//!
//! The meaning of many regions of the save format is simply not known. Those regions are
//! carried as opaque bytes and never interpreted, so they round-trip bit-for-bit. Their
//! canonical form is a string of space-separated hex pairs (JSON has no hex numbers, and a
//! hex string diffs well).

use std::fmt;

use crate::binary::{ReadBytes, WriteBytes};
use crate::cdr::{ConvError, Converter, FromCanonical, ToCanonical, Value};
use crate::error::Result;
use crate::files::{Decodeable, Encodeable};
use crate::schema::ToText;

//---------------------------------------------------------------------------//
//                              Enums & Structs
//---------------------------------------------------------------------------//

/// An array of `N` uninterpreted bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedBytes<const N: usize>(pub [u8; N]);

//---------------------------------------------------------------------------//
//                             Implementations
//---------------------------------------------------------------------------//

impl<const N: usize> FixedBytes<N> {

    pub fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> Default for FixedBytes<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> ToText for FixedBytes<N> {
    fn push_text(&self, out: &mut String) {
        for (index, byte) in self.0.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{byte:02x}"));
        }
    }
}

impl<const N: usize> fmt::Display for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut out = String::with_capacity(N * 3);
        self.push_text(&mut out);
        f.write_str(&out)
    }
}

impl<const N: usize> Decodeable for FixedBytes<N> {
    fn decode<R: ReadBytes>(data: &mut R) -> Result<Self> {
        let mut bytes = [0; N];
        data.read_exact(&mut bytes)?;
        Ok(Self(bytes))
    }
}

impl<const N: usize> Encodeable for FixedBytes<N> {
    fn encode<W: WriteBytes>(&self, buffer: &mut W) -> Result<()> {
        buffer.write_slice(&self.0)
    }
}

impl<const N: usize> ToCanonical for FixedBytes<N> {
    fn to_canonical(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl<const N: usize> FromCanonical for FixedBytes<N> {
    fn from_canonical(conv: &mut Converter, value: &Value) -> Result<Self, ConvError> {
        let text = conv.expect_string(value)?;
        let parts = if text.is_empty() {
            vec![]
        } else {
            text.split(' ').collect::<Vec<_>>()
        };
        if parts.len() != N {
            return conv.err(format!("expected byte string of length {} but found length {}.", N, parts.len()));
        }
        let mut bytes = [0; N];
        for (index, part) in parts.iter().enumerate() {
            if part.len() != 2 {
                return conv.err(format!("expected a hex byte but found '{part}'."));
            }
            bytes[index] = u8::from_str_radix(part, 16)
                .map_err(|_| conv.error(format!("expected a hex byte but found '{part}'.")))?;
        }
        Ok(Self(bytes))
    }
}
