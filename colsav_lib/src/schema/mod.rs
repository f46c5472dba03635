//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the schema of the classic save layout: the packed-value wrappers,
//! the enums, and the record types, together with the generators that derive their three
//! codec passes (binary, text, canonical) from a single declaration each.
//!
//! Hand-writing ~80 records three ways guarantees drift, so each record is declared exactly
//! once with [`schema_enum!`], [`bit_struct!`] or [`record!`] (see `macros.rs`), and those
//! declarations are the source of truth for every pass.
//!
//! [`schema_enum!`]: crate::schema_enum
//! [`bit_struct!`]: crate::bit_struct
//! [`record!`]: crate::record

use std::fmt::Write as _;

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::Result;

pub use self::bits::Bits;
pub use self::bytes::FixedBytes;
pub use self::string::FixedString;
pub use self::enums::*;
pub use self::records::*;

pub mod bits;
pub mod bytes;
pub mod string;
pub mod macros;
pub mod enums;
pub mod records;

#[cfg(test)] mod bits_test;
#[cfg(test)] mod schema_test;

//---------------------------------------------------------------------------//
//                           Trait Definitions
//---------------------------------------------------------------------------//

/// A generic trait to render schema values as display text.
///
/// This is display-only (there is no reverse); round-trippable output goes through the
/// canonical tree instead.
pub trait ToText {

    /// This method appends the display form of `self` to `out`.
    fn push_text(&self, out: &mut String);
}

/// This function returns the display form of any schema value.
pub fn to_text<T: ToText + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    value.push_text(&mut out);
    out
}

//---------------------------------------------------------------------------//
//                  Implementations for primitive types
//---------------------------------------------------------------------------//

macro_rules! text_display {
    ($($ty:ty),*) => {$(
        impl ToText for $ty {
            fn push_text(&self, out: &mut String) {
                let _ = write!(out, "{self}");
            }
        }
    )*};
}

text_display!(u8, u16, u32, u64, i8, i16, i32, bool);

impl<T: ToText, const N: usize> ToText for [T; N] {
    fn push_text(&self, out: &mut String) {
        out.push('[');
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            element.push_text(out);
        }
        out.push(']');
    }
}

impl<T: ToText> ToText for Vec<T> {
    fn push_text(&self, out: &mut String) {
        out.push('[');
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            element.push_text(out);
        }
        out.push(']');
    }
}

//---------------------------------------------------------------------------//
//                              Word helpers
//---------------------------------------------------------------------------//

/// This function reads one little-endian word of `bits` bits, for the packed bit-records.
pub(crate) fn read_word<R: ReadBytes>(data: &mut R, bits: usize) -> Result<u64> {
    Ok(match bits {
        8 => u64::from(data.read_u8()?),
        16 => u64::from(data.read_u16()?),
        24 => u64::from(data.read_u24()?),
        32 => u64::from(data.read_u32()?),
        48 => data.read_u48()?,
        _ => unreachable!("bit-records are 8/16/24/32/48 bits wide"),
    })
}

/// This function writes one little-endian word of `bits` bits, for the packed bit-records.
pub(crate) fn write_word<W: WriteBytes>(buffer: &mut W, bits: usize, word: u64) -> Result<()> {
    match bits {
        8 => buffer.write_u8(word as u8),
        16 => buffer.write_u16(word as u16),
        24 => buffer.write_u24(word as u32),
        32 => buffer.write_u32(word as u32),
        48 => buffer.write_u48(word),
        _ => unreachable!("bit-records are 8/16/24/32/48 bits wide"),
    }
}
