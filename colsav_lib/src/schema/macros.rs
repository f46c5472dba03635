//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Module with the generators that expand one schema declaration into its three codec
//! passes: binary, text, and canonical.
//!
//! There are three shapes of schema type, each with its own generator:
//!
//! - [`schema_enum!`] — an integer-backed enum with explicit, possibly sparse discriminants.
//! - [`bit_struct!`] — a packed record whose fields share one little-endian word, first
//!   field in the least significant bits.
//! - [`record!`] — an aggregate of named fields, serialized in declared order.
//!
//! [`schema_enum!`]: crate::schema_enum
//! [`bit_struct!`]: crate::bit_struct
//! [`record!`]: crate::record

/// This macro expands an enum declaration into its type and its three codec passes.
///
/// Each variant binds an explicit integer value, a canonical name, and a display name (in
/// that order). Discriminants outside the declared set are preserved through the
/// `Unrecognized` variant, so re-encoding an unknown value produces the original bytes.
#[macro_export]
macro_rules! schema_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $repr:ty, $schema_name:literal, {
            $( $variant:ident = $value:literal, $cdr_name:literal, $display:literal; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {
            $( $variant, )*

            /// Catch-all for discriminants outside the known set, kept so they round-trip.
            Unrecognized($repr),
        }

        impl $name {

            /// Name of this type in the save schema, as used in canonical error messages.
            pub const SCHEMA_NAME: &'static str = $schema_name;

            /// This function decodes a raw discriminant, preserving unknown values.
            pub fn from_raw(raw: $repr) -> Self {
                match raw {
                    $( $value => Self::$variant, )*
                    other => Self::Unrecognized(other),
                }
            }

            /// This function returns the raw discriminant of this value.
            pub fn to_raw(self) -> $repr {
                match self {
                    $( Self::$variant => $value, )*
                    Self::Unrecognized(raw) => raw,
                }
            }

            /// Same as [`Self::from_raw`], but from the word a packed record was read from.
            pub fn from_bits(raw: u64) -> Self {
                Self::from_raw(raw as $repr)
            }

            /// Same as [`Self::to_raw`], but widened for packing into a record's word.
            pub fn to_bits(self) -> u64 {
                self.to_raw() as u64
            }

            fn canonical_name(self) -> Option<&'static str> {
                match self {
                    $( Self::$variant => Some($cdr_name), )*
                    Self::Unrecognized(_) => None,
                }
            }

            fn from_canonical_name(name: &str) -> Option<Self> {
                match name {
                    $( $cdr_name => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::from_raw(0)
            }
        }

        impl $crate::schema::ToText for $name {
            fn push_text(&self, out: &mut String) {
                match self {
                    $( Self::$variant => out.push_str($display), )*
                    Self::Unrecognized(_) => out.push_str("<unrecognized>"),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(&$crate::schema::to_text(self))
            }
        }

        impl $crate::files::Decodeable for $name {
            fn decode<R: $crate::binary::ReadBytes>(data: &mut R) -> $crate::error::Result<Self> {
                Ok(Self::from_raw(<$repr as $crate::files::Decodeable>::decode(data)?))
            }
        }

        impl $crate::files::Encodeable for $name {
            fn encode<W: $crate::binary::WriteBytes>(&self, buffer: &mut W) -> $crate::error::Result<()> {
                $crate::files::Encodeable::encode(&self.to_raw(), buffer)
            }
        }

        impl $crate::cdr::ToCanonical for $name {
            fn to_canonical(&self) -> $crate::cdr::Value {
                match self.canonical_name() {
                    Some(name) => $crate::cdr::Value::String(name.to_owned()),
                    None => $crate::cdr::Value::Null,
                }
            }
        }

        impl $crate::cdr::FromCanonical for $name {
            fn from_canonical(conv: &mut $crate::cdr::Converter, value: &$crate::cdr::Value) -> Result<Self, $crate::cdr::ConvError> {
                let text = conv.expect_string(value)?;
                Self::from_canonical_name(text).ok_or_else(|| conv.error(
                    format!("unrecognized value for enum {}: '{}'", Self::SCHEMA_NAME, text)
                ))
            }
        }
    };
}

/// Field type of one packed subfield. Internal to [`bit_struct!`].
#[macro_export]
macro_rules! bit_field_ty {
    (flag, $w:literal) => { bool };
    (uint, $w:literal) => { u8 };
    (bits, $w:literal) => { $crate::schema::Bits<{ $w }> };
    (enum $ty:ty, $w:literal) => { $ty };
}

/// Extraction of one packed subfield from the low bits of a word. Internal to [`bit_struct!`].
#[macro_export]
macro_rules! bit_field_from_word {
    (flag, $word:expr, $w:literal) => { ($word & 1) != 0 };
    (uint, $word:expr, $w:literal) => { ($word & ((1u64 << $w) - 1)) as u8 };
    (bits, $word:expr, $w:literal) => { $crate::schema::Bits::<{ $w }>::new($word & ((1u64 << $w) - 1)) };
    (enum $ty:ty, $word:expr, $w:literal) => { <$ty>::from_bits($word & ((1u64 << $w) - 1)) };
}

/// Projection of one packed subfield into a word. Internal to [`bit_struct!`].
#[macro_export]
macro_rules! bit_field_to_word {
    (flag, $value:expr, $w:literal) => { u64::from($value) };
    (uint, $value:expr, $w:literal) => { u64::from($value) & ((1u64 << $w) - 1) };
    (bits, $value:expr, $w:literal) => { $value.n() };
    (enum $ty:ty, $value:expr, $w:literal) => { $value.to_bits() & ((1u64 << $w) - 1) };
}

/// Canonical decoding of one packed subfield. Internal to [`bit_struct!`].
#[macro_export]
macro_rules! bit_field_from_canonical {
    (flag, $conv:expr, $value:expr, $w:literal) => {
        <bool as $crate::cdr::FromCanonical>::from_canonical($conv, $value)
    };
    (uint, $conv:expr, $value:expr, $w:literal) => {{
        let integer = <u8 as $crate::cdr::FromCanonical>::from_canonical($conv, $value)?;
        if u64::from(integer) >= (1u64 << $w) {
            $conv.err(format!(
                "expected an integer between 0 and {}, instead found {}.",
                (1u64 << $w) - 1, integer
            ))
        } else {
            Ok(integer)
        }
    }};
    (bits, $conv:expr, $value:expr, $w:literal) => {
        <$crate::schema::Bits<{ $w }> as $crate::cdr::FromCanonical>::from_canonical($conv, $value)
    };
    (enum $ty:ty, $conv:expr, $value:expr, $w:literal) => {
        <$ty as $crate::cdr::FromCanonical>::from_canonical($conv, $value)
    };
}

/// This macro expands a packed bit-record declaration into its type and its three codec
/// passes.
///
/// The record's total width is 8, 16, 24, 32 or 48 bits; the widths of its fields must add
/// up to it. On disk the whole record is one little-endian word, with the first declared
/// field in the least significant bits. Field kinds: `flag` (one bit), `uint` (small
/// unsigned counter), `bits` (opaque bit array), `enum` (a [`schema_enum!`] type).
///
/// [`schema_enum!`]: crate::schema_enum
#[macro_export]
macro_rules! bit_struct {
    (
        $(#[$meta:meta])*
        $name:ident, $total:literal, $schema_name:literal, {
            $( $kind:tt $fname:ident $(: $fty:ty)?, $width:literal, $key:literal; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            $( pub $fname: $crate::bit_field_ty!($kind $($fty)?, $width), )*
        }

        impl $name {

            /// Name of this type in the save schema.
            pub const SCHEMA_NAME: &'static str = $schema_name;

            /// Total width of this record on disk, in bits.
            pub const BITS: usize = $total;
        }

        impl $crate::schema::ToText for $name {
            fn push_text(&self, out: &mut String) {
                out.push_str(stringify!($name));
                out.push('{');
                let mut first = true;
                $(
                    if !first {
                        out.push(',');
                    }
                    first = false;
                    out.push_str(stringify!($fname));
                    out.push('=');
                    $crate::schema::ToText::push_text(&self.$fname, out);
                )*
                let _ = first;
                out.push('}');
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(&$crate::schema::to_text(self))
            }
        }

        impl $crate::files::Decodeable for $name {
            fn decode<R: $crate::binary::ReadBytes>(data: &mut R) -> $crate::error::Result<Self> {
                let mut word = $crate::schema::read_word(data, $total)?;
                $(
                    let $fname = $crate::bit_field_from_word!($kind $($fty)?, word, $width);
                    word >>= $width;
                )*
                let _ = word;
                Ok(Self { $( $fname, )* })
            }
        }

        impl $crate::files::Encodeable for $name {
            fn encode<W: $crate::binary::WriteBytes>(&self, buffer: &mut W) -> $crate::error::Result<()> {
                let mut word = 0u64;
                let mut shift = 0u32;
                $(
                    word |= $crate::bit_field_to_word!($kind $($fty)?, self.$fname, $width) << shift;
                    shift += $width;
                )*
                let _ = shift;
                $crate::schema::write_word(buffer, $total, word)
            }
        }

        impl $crate::cdr::ToCanonical for $name {
            fn to_canonical(&self) -> $crate::cdr::Value {
                let mut table = $crate::cdr::Table::new();
                table.insert($crate::cdr::KEY_ORDER, $crate::cdr::key_order_list(&[$( $key, )*]));
                $(
                    table.insert($key, $crate::cdr::ToCanonical::to_canonical(&self.$fname));
                )*
                $crate::cdr::Value::Table(table)
            }
        }

        impl $crate::cdr::FromCanonical for $name {
            fn from_canonical(conv: &mut $crate::cdr::Converter, value: &$crate::cdr::Value) -> Result<Self, $crate::cdr::ConvError> {
                let table = conv.expect_table(value)?;
                let mut tracker = $crate::cdr::TableTracker::new(table);
                $(
                    let $fname = {
                        let field_value = tracker.field(conv, $key)?;
                        conv.frame($key, |conv| $crate::bit_field_from_canonical!($kind $($fty)?, conv, field_value, $width))?
                    };
                )*
                tracker.finish(conv)?;
                Ok(Self { $( $fname, )* })
            }
        }
    };
}

/// This macro expands an aggregate record declaration into its type and its three codec
/// passes.
///
/// Fields are serialized in declared order. Fixed arrays iterate element-wise; dynamically
/// sized vectors never appear here (the only records containing them have hand-written
/// codecs, because their lengths come from fields read earlier).
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $name:ident, $schema_name:literal, {
            $( $fname:ident: $fty:ty, $key:literal; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $( pub $fname: $fty, )*
        }

        impl $name {

            /// Name of this type in the save schema.
            pub const SCHEMA_NAME: &'static str = $schema_name;
        }

        impl $crate::schema::ToText for $name {
            fn push_text(&self, out: &mut String) {
                out.push_str(stringify!($name));
                out.push('{');
                let mut first = true;
                $(
                    if !first {
                        out.push(',');
                    }
                    first = false;
                    out.push_str(stringify!($fname));
                    out.push('=');
                    $crate::schema::ToText::push_text(&self.$fname, out);
                )*
                let _ = first;
                out.push('}');
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(&$crate::schema::to_text(self))
            }
        }

        impl $crate::files::Decodeable for $name {
            fn decode<R: $crate::binary::ReadBytes>(data: &mut R) -> $crate::error::Result<Self> {
                Ok(Self {
                    $( $fname: <$fty as $crate::files::Decodeable>::decode(data)?, )*
                })
            }
        }

        impl $crate::files::Encodeable for $name {
            fn encode<W: $crate::binary::WriteBytes>(&self, buffer: &mut W) -> $crate::error::Result<()> {
                $(
                    $crate::files::Encodeable::encode(&self.$fname, buffer)?;
                )*
                Ok(())
            }
        }

        impl $crate::cdr::ToCanonical for $name {
            fn to_canonical(&self) -> $crate::cdr::Value {
                let mut table = $crate::cdr::Table::new();
                table.insert($crate::cdr::KEY_ORDER, $crate::cdr::key_order_list(&[$( $key, )*]));
                $(
                    table.insert($key, $crate::cdr::ToCanonical::to_canonical(&self.$fname));
                )*
                $crate::cdr::Value::Table(table)
            }
        }

        impl $crate::cdr::FromCanonical for $name {
            fn from_canonical(conv: &mut $crate::cdr::Converter, value: &$crate::cdr::Value) -> Result<Self, $crate::cdr::ConvError> {
                let table = conv.expect_table(value)?;
                let mut tracker = $crate::cdr::TableTracker::new(table);
                $(
                    let $fname = {
                        let field_value = tracker.field(conv, $key)?;
                        conv.frame($key, |conv| <$fty as $crate::cdr::FromCanonical>::from_canonical(conv, field_value))?
                    };
                )*
                tracker.finish(conv)?;
                Ok(Self { $( $fname, )* })
            }
        }
    };
}
