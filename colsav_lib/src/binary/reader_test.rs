//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Tests for the [`ReadBytes`] trait.
//!
//! [`ReadBytes`]: crate::binary::ReadBytes

use std::io::Cursor;

use super::ReadBytes;

//---------------------------------------------------------------------------//
//                                  Tests
//---------------------------------------------------------------------------//

/// Test for `ReadBytes::len()`.
#[test]
fn len() {
    assert_eq!(ReadBytes::len(&mut Cursor::new([0, 0, 0, 0])).unwrap(), 4);
    assert_eq!(ReadBytes::len(&mut Cursor::new([])).unwrap(), 0);
}

/// Test for `ReadBytes::read_slice()`.
#[test]
fn read_slice() {

    // Check the reader works with proper slice and size.
    assert_eq!(ReadBytes::read_slice(&mut Cursor::new([1, 2, 3, 4]), 4, false).unwrap(), vec![1, 2, 3, 4]);
    assert_eq!(ReadBytes::read_slice(&mut Cursor::new(vec![0u8; 0]), 0, false).unwrap(), vec![0u8; 0]);

    // Check the rewind logic doesn't consume the data.
    let mut cursor = Cursor::new([1, 2, 3, 4]);
    assert_eq!(ReadBytes::read_slice(&mut cursor, 4, true).unwrap(), vec![1, 2, 3, 4]);
    assert_eq!(cursor.position(), 0);

    // Check the reader returns an error for an invalid size value for the data provided.
    assert!(ReadBytes::read_slice(&mut Cursor::new([]), 4, false).is_err());
}

/// Test for `ReadBytes::remaining()` and `ReadBytes::eof()`.
#[test]
fn remaining_and_eof() {
    let mut cursor = Cursor::new([1, 2, 3, 4]);
    assert_eq!(ReadBytes::remaining(&mut cursor).unwrap(), 4);
    assert!(!ReadBytes::eof(&mut cursor).unwrap());

    let _ = ReadBytes::read_u24(&mut cursor).unwrap();
    assert_eq!(ReadBytes::remaining(&mut cursor).unwrap(), 1);

    let _ = ReadBytes::read_u8(&mut cursor).unwrap();
    assert!(ReadBytes::eof(&mut cursor).unwrap());
}

/// Test for `ReadBytes::read_remainder()`.
#[test]
fn read_remainder() {
    let mut cursor = Cursor::new([1, 2, 3, 4]);
    let _ = ReadBytes::read_u16(&mut cursor).unwrap();
    assert_eq!(ReadBytes::read_remainder(&mut cursor).unwrap(), vec![3, 4]);
    assert_eq!(ReadBytes::read_remainder(&mut cursor).unwrap(), vec![0u8; 0]);
}

/// Test for `ReadBytes::read_u8()`.
#[test]
fn read_u8() {
    assert_eq!(ReadBytes::read_u8(&mut Cursor::new([10])).unwrap(), 10);
    assert!(ReadBytes::read_u8(&mut Cursor::new([])).is_err());
}

/// Test for `ReadBytes::read_u16()`.
#[test]
fn read_u16() {
    assert_eq!(ReadBytes::read_u16(&mut Cursor::new([10, 0])).unwrap(), 10);
    assert!(ReadBytes::read_u16(&mut Cursor::new([10])).is_err());
}

/// Test for `ReadBytes::read_u24()`.
#[test]
fn read_u24() {
    assert_eq!(ReadBytes::read_u24(&mut Cursor::new([152, 150, 129])).unwrap(), 8_492_696);
    assert!(ReadBytes::read_u24(&mut Cursor::new([152, 150])).is_err());
}

/// Test for `ReadBytes::read_u32()`.
#[test]
fn read_u32() {
    assert_eq!(ReadBytes::read_u32(&mut Cursor::new([10, 0, 0, 0])).unwrap(), 10);
    assert!(ReadBytes::read_u32(&mut Cursor::new([10, 0, 0])).is_err());
}

/// Test for `ReadBytes::read_u48()`.
#[test]
fn read_u48() {
    assert_eq!(ReadBytes::read_u48(&mut Cursor::new([0xfe, 1, 2, 10, 4, 0])).unwrap(), 0x00_04_0a_02_01_fe);
    assert!(ReadBytes::read_u48(&mut Cursor::new([10, 0, 0, 0, 0])).is_err());
}

/// Test for `ReadBytes::read_u64()`.
#[test]
fn read_u64() {
    assert_eq!(ReadBytes::read_u64(&mut Cursor::new([10, 0, 0, 0, 0, 0, 0, 0])).unwrap(), 10);
    assert!(ReadBytes::read_u64(&mut Cursor::new([10, 0, 0, 0])).is_err());
}

/// Test for `ReadBytes::read_i8()`.
#[test]
fn read_i8() {
    assert_eq!(ReadBytes::read_i8(&mut Cursor::new([254])).unwrap(), -2);
    assert!(ReadBytes::read_i8(&mut Cursor::new([])).is_err());
}

/// Test for `ReadBytes::read_i16()`.
#[test]
fn read_i16() {
    assert_eq!(ReadBytes::read_i16(&mut Cursor::new([254, 254])).unwrap(), -258);
    assert!(ReadBytes::read_i16(&mut Cursor::new([254])).is_err());
}

/// Test for `ReadBytes::read_i32()`.
#[test]
fn read_i32() {
    assert_eq!(ReadBytes::read_i32(&mut Cursor::new([10, 0, 0, 0])).unwrap(), 10);
    assert!(ReadBytes::read_i32(&mut Cursor::new([10, 0])).is_err());
}
