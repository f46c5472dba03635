//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Tests for the [`Bits`] type.
//!
//! [`Bits`]: crate::schema::Bits

use std::io::Cursor;

use crate::cdr::{Converter, FromCanonical, ToCanonical, Value};
use crate::files::{Decodeable, Encodeable};
use crate::schema::to_text;

use super::Bits;

//---------------------------------------------------------------------------//
//                                  Tests
//---------------------------------------------------------------------------//

#[test]
fn default_construction() {
    assert_eq!(Bits::<0>::default().n(), 0);
    assert_eq!(Bits::<1>::default().n(), 0);
    assert_eq!(Bits::<10>::default().n(), 0);
    assert_eq!(Bits::<64>::default().n(), 0);
}

#[test]
fn clamping() {
    assert_eq!(Bits::<0>::new(1).n(), 0);
    assert_eq!(Bits::<6>::new(255).n(), 63);
    assert_eq!(Bits::<63>::new(9_223_372_036_854_775_807).n(), 9_223_372_036_854_775_807);
    assert_eq!(Bits::<63>::new(9_223_372_036_854_775_808).n(), 0);
    assert_eq!(Bits::<64>::new(u64::MAX).n(), u64::MAX);
}

#[test]
fn text_form() {
    assert_eq!(to_text(&Bits::<0>::new(1)), "");
    assert_eq!(to_text(&Bits::<1>::new(1)), "1");
    assert_eq!(to_text(&Bits::<2>::new(1)), "01");
    assert_eq!(to_text(&Bits::<3>::new(4)), "100");
    assert_eq!(to_text(&Bits::<8>::new(255)), "11111111");
    assert_eq!(to_text(&Bits::<10>::new(123)), "0001111011");
    assert_eq!(to_text(&Bits::<32>::new(0)), "00000000000000000000000000000000");
}

#[test]
fn to_canonical() {
    assert_eq!(Bits::<1>::new(0).to_canonical(), Value::from("0"));
    assert_eq!(Bits::<2>::new(3).to_canonical(), Value::from("11"));
    assert_eq!(Bits::<3>::new(5).to_canonical(), Value::from("101"));
    assert_eq!(Bits::<10>::new(555).to_canonical(), Value::from("1000101011"));
}

#[test]
fn from_canonical() {
    let mut conv = Converter::new();

    assert_eq!(Bits::<0>::from_canonical(&mut conv, &Value::from("")).unwrap(), Bits::<0>::new(0));
    assert_eq!(Bits::<3>::from_canonical(&mut conv, &Value::from("101")).unwrap(), Bits::<3>::new(5));
    assert_eq!(Bits::<10>::from_canonical(&mut conv, &Value::from("1000101011")).unwrap(), Bits::<10>::new(555));

    let error = Bits::<8>::from_canonical(&mut conv, &Value::from("111111111")).unwrap_err();
    assert_eq!(error.message(), "expected bit string of length 8 but found length 9.");

    let error = Bits::<8>::from_canonical(&mut conv, &Value::from("1111g111")).unwrap_err();
    assert_eq!(error.message(), "expected bit value '1' or '0' but found 'g'.");
}

#[test]
fn read_binary() {
    let mut cursor = Cursor::new(vec![128u8, 200, 1, 2, 3, 4, 5, 6]);
    assert_eq!(Bits::<8>::decode(&mut cursor).unwrap(), Bits::<8>::new(128));
    assert_eq!(cursor.position(), 1);

    let mut cursor = Cursor::new(vec![128u8, 200]);
    assert_eq!(Bits::<16>::decode(&mut cursor).unwrap(), Bits::<16>::new((200 << 8) + 128));

    // A 40-bit quantity assembles little-endian.
    let mut cursor = Cursor::new(vec![0xfeu8, 1, 2, 10, 4]);
    assert_eq!(Bits::<40>::decode(&mut cursor).unwrap(), Bits::<40>::new(0x04_0a_02_01_fe));
    assert_eq!(cursor.position(), 5);

    // Widths that are not byte-aligned have no binary form.
    assert!(Bits::<3>::decode(&mut Cursor::new(vec![0u8])).is_err());
}

#[test]
fn write_binary() {
    let mut data = vec![];
    Bits::<8>::new(0xfe).encode(&mut data).unwrap();
    assert_eq!(data, vec![0xfe]);

    let mut data = vec![];
    Bits::<16>::new(0xfe).encode(&mut data).unwrap();
    assert_eq!(data, vec![0xfe, 0]);

    let mut data = vec![];
    Bits::<40>::new(0x04_0a_02_01_fe).encode(&mut data).unwrap();
    assert_eq!(data, vec![0xfe, 1, 2, 10, 4]);

    let mut data = vec![];
    assert!(Bits::<3>::new(1).encode(&mut data).is_err());
}
