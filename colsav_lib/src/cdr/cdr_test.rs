//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Tests for the canonical tree and its converter.

use super::*;

//---------------------------------------------------------------------------//
//                                  Tests
//---------------------------------------------------------------------------//

/// Tables must keep their insertion order, unlike a plain map.
#[test]
fn table_preserves_order() {
    let mut table = Table::new();
    table.insert("zebra", Value::Integer(1));
    table.insert("aardvark", Value::Integer(2));
    table.insert("mongoose", Value::Integer(3));

    assert_eq!(table.keys().collect::<Vec<_>>(), vec!["zebra", "aardvark", "mongoose"]);

    // Replacing a value must not move the key.
    table.insert("aardvark", Value::Integer(4));
    assert_eq!(table.keys().collect::<Vec<_>>(), vec!["zebra", "aardvark", "mongoose"]);
    assert_eq!(table.get("aardvark"), Some(&Value::Integer(4)));
}

/// JSON round-trip of a mixed tree, including key order.
#[test]
fn json_round_trip() {
    let mut inner = Table::new();
    inner.insert("flag", Value::Bool(true));
    inner.insert("count", Value::Integer(-3));

    let mut table = Table::new();
    table.insert("name", Value::from("La Navidad"));
    table.insert("inner", Value::Table(inner));
    table.insert("list", Value::List(vec![Value::Integer(1), Value::Null, Value::from("x")]));

    let tree = Value::Table(table);
    let text = tree.to_json_string();
    let parsed = Value::from_json_str(&text).unwrap();
    assert_eq!(parsed, tree);

    // Key order must survive the rendering.
    let json = tree.to_json();
    let keys = json.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
    assert_eq!(keys, vec!["name", "inner", "list"]);
}

/// The converter must report the dotted path of the failing field.
#[test]
fn error_paths() {
    let mut conv = Converter::new();
    let error = conv.frame("header", |conv| {
        conv.frame("year", |conv| conv.err::<()>("expected an integer."))
    }).unwrap_err();

    assert_eq!(error.path(), "header.year");
    assert_eq!(error.message(), "expected an integer.");
    assert_eq!(error.to_string(), "header.year: expected an integer.");
}

/// Unknown keys in an input table are an error; `__key_order` never is.
#[test]
fn table_tracker() {
    let mut table = Table::new();
    table.insert(KEY_ORDER, Value::List(vec![Value::from("good")]));
    table.insert("good", Value::Integer(1));
    table.insert("bogus_a", Value::Integer(2));
    table.insert("bogus_b", Value::Integer(3));

    let conv = Converter::new();
    let mut tracker = TableTracker::new(&table);
    assert_eq!(tracker.field(&conv, "good").unwrap(), &Value::Integer(1));
    assert!(tracker.field(&conv, "missing").is_err());

    let error = tracker.finish(&conv).unwrap_err();
    assert_eq!(error.message(), "unrecognized key(s) in table: 'bogus_a', 'bogus_b'.");
}

/// Integer decoding rejects out-of-range and mistyped values.
#[test]
fn integer_bounds() {
    let mut conv = Converter::new();

    assert_eq!(u8::from_canonical(&mut conv, &Value::Integer(255)).unwrap(), 255);
    assert_eq!(i16::from_canonical(&mut conv, &Value::Integer(-300)).unwrap(), -300);

    let error = u8::from_canonical(&mut conv, &Value::Integer(300)).unwrap_err();
    assert_eq!(error.message(), "expected an integer between 0 and 255, instead found 300.");

    assert!(u8::from_canonical(&mut conv, &Value::from("300")).is_err());
}

/// Fixed arrays decode only from lists of the exact length.
#[test]
fn array_length() {
    let mut conv = Converter::new();

    let list = Value::List(vec![Value::Integer(1), Value::Integer(2)]);
    assert_eq!(<[u8; 2]>::from_canonical(&mut conv, &list).unwrap(), [1, 2]);

    let error = <[u8; 3]>::from_canonical(&mut conv, &list).unwrap_err();
    assert_eq!(error.message(), "expected list of length 3 but found length 2.");
}
