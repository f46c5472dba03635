//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Module containing tests for decoding/encoding `*.SAV` files.

use std::io::Cursor;

use crate::cdr::{Converter, FromCanonical, ToCanonical};
use crate::error::ColSavError;
use crate::files::{Decodeable, Encodeable};
use crate::schema::*;

use super::{ColonySav, SIGNATURE};

//---------------------------------------------------------------------------//
//                                 Helpers
//---------------------------------------------------------------------------//

/// A consistent synthetic save with a 4x3 map, one colony, two units and one dwelling.
pub(crate) fn small_sav() -> ColonySav {
    let mut sav = ColonySav::default();
    sav.header.colonize = FixedString::new(*SIGNATURE);
    sav.header.map_size_x = 4;
    sav.header.map_size_y = 3;
    sav.header.year = 1519;
    sav.header.season = SeasonType::Autumn;
    sav.header.turn = 27;
    sav.header.difficulty = DifficultyType::Viceroy;
    sav.header.human_player = Nation2byteType::Netherlands;
    sav.header.fixed_nation_map_view = Nation2byteType::None;
    sav.header.expeditionary_force = ExpeditionaryForce { regulars: 30, dragoons: 10, man_o_wars: 4, artillery: 5 };

    assert!(sav.player[3].name.populate_from_str("Walter Raleigh"));
    assert!(sav.player[3].country_name.populate_from_str("The Netherlands"));
    sav.player[3].control = ControlType::Player;

    let area = sav.map_area();
    sav.tile = vec![Tile { tile: Terrain5bitType::Ttt, hill_river: HillsRiver3bitType::Empty }; area];
    sav.mask = vec![Mask::default(); area];
    sav.path = vec![Path::default(); area];
    sav.seen = vec![Seen::default(); area];

    let mut colony = Colony::default();
    colony.x_y = [2, 1];
    assert!(colony.name.populate_from_str("New Amsterdam"));
    colony.nation_id = NationType::Netherlands;
    colony.population = 4;
    sav.colony = vec![colony];
    sav.header.colony_count = 1;

    let mut ship = Unit::default();
    ship.x_y = [1, 1];
    ship.kind = UnitType::Caravel;
    let mut settler = Unit::default();
    settler.x_y = [2, 1];
    settler.kind = UnitType::Colonist;
    sav.unit = vec![ship, settler];
    sav.header.unit_count = 2;

    let mut dwelling = Dwelling::default();
    dwelling.x_y = [3, 2];
    dwelling.nation_id = NationType::Tupi;
    dwelling.population = 5;
    sav.dwelling = vec![dwelling];
    sav.header.dwelling_count = 1;

    sav
}

//---------------------------------------------------------------------------//
//                                  Tests
//---------------------------------------------------------------------------//

/// Encode and decode back a synthetic save, and make sure re-encoding is byte-identical.
#[test]
fn binary_round_trip() {
    let sav = small_sav();

    let mut before = vec![];
    sav.encode(&mut before).unwrap();

    let decoded = ColonySav::decode(&mut Cursor::new(before.to_vec())).unwrap();
    assert_eq!(decoded, sav);

    let mut after = vec![];
    decoded.encode(&mut after).unwrap();
    assert_eq!(before, after);
}

/// Pin the exact on-disk size of the synthetic save: fixed blocks plus one colony (202),
/// two units (28 each) and one dwelling (18) plus four 12-entry map vectors.
#[test]
fn encoded_size() {
    let sav = small_sav();
    let mut data = vec![];
    sav.encode(&mut data).unwrap();
    assert_eq!(data.len(), 4555 + 202 + 2 * 28 + 18);
}

/// A file without the magic is not a save.
#[test]
fn bad_signature() {
    let sav = small_sav();
    let mut data = vec![];
    sav.encode(&mut data).unwrap();
    data[0] = b'X';

    let error = ColonySav::decode(&mut Cursor::new(data)).unwrap_err();
    assert!(matches!(error, ColSavError::DecodingNotASaveFile));
}

/// The invisible ocean border means no map can be smaller than 3x3.
#[test]
fn map_too_small() {

    // The counts have to stay consistent for the encode to go through, so patch the size
    // directly into the bytes.
    let mut data = vec![];
    small_sav().encode(&mut data).unwrap();
    data[14] = 2; // map_size_y low byte.
    data[15] = 0;

    let error = ColonySav::decode(&mut Cursor::new(data)).unwrap_err();
    assert!(matches!(error, ColSavError::DecodingInvalidMapSize(4, 2)));
}

/// Trailing bytes after the last trade route are an error.
#[test]
fn trailing_data() {
    let mut data = vec![];
    small_sav().encode(&mut data).unwrap();
    data.push(0);

    let error = ColonySav::decode(&mut Cursor::new(data)).unwrap_err();
    assert!(matches!(error, ColSavError::DecodingMismatchSizeError(..)));
}

/// Encoding refuses header counts that disagree with the vectors.
#[test]
fn count_mismatch() {
    let mut sav = small_sav();
    sav.header.unit_count = 5;

    let mut data = vec![];
    let error = sav.encode(&mut data).unwrap_err();
    match error {
        ColSavError::MismatchedCount { field, expected, found } => {
            assert_eq!(field, "unit");
            assert_eq!(expected, 5);
            assert_eq!(found, 2);
        },
        _ => panic!("wrong error: {error}"),
    }
}

/// Full canonical round-trip of a save.
#[test]
fn canonical_round_trip() {
    let sav = small_sav();
    let tree = sav.to_canonical();
    let mut conv = Converter::new();
    assert_eq!(ColonySav::from_canonical(&mut conv, &tree).unwrap(), sav);

    // And through the JSON rendering as well.
    let text = tree.to_json_string();
    let parsed = crate::cdr::Value::from_json_str(&text).unwrap();
    assert_eq!(ColonySav::from_canonical(&mut conv, &parsed).unwrap(), sav);
}
