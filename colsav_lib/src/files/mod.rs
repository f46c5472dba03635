//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the file abstractions used by this lib to decode/encode the classic
//! game's files.
//!
//! # Known file types
//!
//! | File Type      | Extension | Decoding Supported | Encoding Supported |
//! | -------------- | --------- | ------------------ | ------------------ |
//! | [`ColonySav`]  | `.SAV`    | Yes                | Yes                |
//! | [`MapFile`]    | `.MP`     | Yes                | Yes                |
//!
//! For more information about a specific file type, including its binary format spec,
//! please **check its respective module**.
//!
//! [`ColonySav`]: crate::files::sav::ColonySav
//! [`MapFile`]: crate::files::map::MapFile

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::Result;

pub mod map;
pub mod sav;

//---------------------------------------------------------------------------//
//                           Trait Definitions
//---------------------------------------------------------------------------//

/// A generic trait to implement decoding logic from anything implementing [`ReadBytes`]
/// into structured types.
pub trait Decodeable: Sized {

    /// This method provides a generic and expandable way to decode anything implementing
    /// [`ReadBytes`] into the implementor's structure.
    fn decode<R: ReadBytes>(data: &mut R) -> Result<Self>;
}

/// A generic trait to implement encoding logic from structured types into anything
/// implementing [`WriteBytes`].
pub trait Encodeable {

    /// This method provides a generic and expandable way to encode any implementor's
    /// structure into anything implementing [`WriteBytes`].
    fn encode<W: WriteBytes>(&self, buffer: &mut W) -> Result<()>;
}

//---------------------------------------------------------------------------//
//                  Implementations for primitive types
//---------------------------------------------------------------------------//

macro_rules! primitive_codec {
    ($($ty:ty, $read:ident, $write:ident;)*) => {$(
        impl Decodeable for $ty {
            fn decode<R: ReadBytes>(data: &mut R) -> Result<Self> {
                data.$read()
            }
        }

        impl Encodeable for $ty {
            fn encode<W: WriteBytes>(&self, buffer: &mut W) -> Result<()> {
                buffer.$write(*self)
            }
        }
    )*};
}

primitive_codec! {
    u8, read_u8, write_u8;
    u16, read_u16, write_u16;
    u32, read_u32, write_u32;
    u64, read_u64, write_u64;
    i8, read_i8, write_i8;
    i16, read_i16, write_i16;
    i32, read_i32, write_i32;
}

impl<T: Decodeable + Default, const N: usize> Decodeable for [T; N] {
    fn decode<R: ReadBytes>(data: &mut R) -> Result<Self> {
        let mut out: [T; N] = std::array::from_fn(|_| T::default());
        for slot in &mut out {
            *slot = T::decode(data)?;
        }
        Ok(out)
    }
}

impl<T: Encodeable, const N: usize> Encodeable for [T; N] {
    fn encode<W: WriteBytes>(&self, buffer: &mut W) -> Result<()> {
        for element in self {
            element.encode(buffer)?;
        }
        Ok(())
    }
}

impl<T: Encodeable> Encodeable for Vec<T> {
    fn encode<W: WriteBytes>(&self, buffer: &mut W) -> Result<()> {
        for element in self {
            element.encode(buffer)?;
        }
        Ok(())
    }
}

/// This function reads `count` consecutive elements, for the vectors whose lengths come
/// from fields read earlier.
pub(crate) fn read_vec<T: Decodeable, R: ReadBytes>(data: &mut R, count: usize) -> Result<Vec<T>> {
    let mut out = Vec::with_capacity(count.min(1 << 20));
    for _ in 0..count {
        out.push(T::decode(data)?);
    }
    Ok(out)
}
