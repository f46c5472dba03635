//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Tests for the generated schema types: enums, packed bit-records and aggregates.

use std::io::Cursor;

use crate::cdr::{Converter, FromCanonical, ToCanonical, Value};
use crate::files::{Decodeable, Encodeable};
use crate::schema::to_text;

use super::*;

//---------------------------------------------------------------------------//
//                                  Tests
//---------------------------------------------------------------------------//

/// Default construction zeroes every field.
#[test]
fn construction() {
    let header = Header::default();
    assert_eq!(header.turn, 0);
    assert_eq!(header.dwelling_count, 0);
    assert!(!header.game_flags_1.autosave);
    assert!(!header.event.the_fountain_of_youth);

    let tribe = Tribe::default();
    assert_eq!(tribe.tech, TechType::SemiNomadic);
}

#[test]
fn text_form() {

    // Enum with a curated display name.
    assert_eq!(to_text(&UnitType::ManOWar), "Man-O-War");

    // Bit-record.
    let info = NationInfo {
        nation_id: Nation4bitType::Cherokee,
        vis_to_english: true,
        vis_to_french: false,
        vis_to_spanish: true,
        vis_to_dutch: false,
    };
    assert_eq!(
        to_text(&info),
        "NationInfo{nation_id=Cherokee,vis_to_english=true,vis_to_french=false,vis_to_spanish=true,vis_to_dutch=false}"
    );

    // Aggregate record.
    let force = BackupForce { regulars: 1, dragoons: 0, man_o_wars: 2, artillery: 65535 };
    assert_eq!(to_text(&force), "BackupForce{regulars=1,dragoons=0,man_o_wars=2,artillery=65535}");

    // Opaque bit fields inside a record render as bit strings.
    let flags = PlayerFlags { unknown06a: Bits::new(0b0100001), named_new_world: true };
    assert_eq!(to_text(&flags), "PlayerFlags{unknown06a=0100001,named_new_world=true}");
}

/// An integer outside the enumerated set must survive a binary round-trip and show up as
/// null in the canonical form.
#[test]
fn unrecognized_enum_value() {
    let unit = UnitType::from_raw(255);
    assert_eq!(unit, UnitType::Unrecognized(255));
    assert_eq!(to_text(&unit), "<unrecognized>");
    assert_eq!(unit.to_canonical(), Value::Null);

    let mut data = vec![];
    unit.encode(&mut data).unwrap();
    assert_eq!(data, vec![255]);
    assert_eq!(UnitType::decode(&mut Cursor::new(data)).unwrap(), unit);

    let mut conv = Converter::new();
    let error = UnitType::from_canonical(&mut conv, &Value::from("aaa")).unwrap_err();
    assert_eq!(error.message(), "unrecognized value for enum unit_type: 'aaa'");
}

/// Enums keep their sparse discriminants: level two of a 3-bit building level is 0b011.
#[test]
fn sparse_discriminants() {
    assert_eq!(Level3bitType::_2.to_raw(), 0b011);
    assert_eq!(Level3bitType::_3.to_raw(), 0b111);
    assert_eq!(Level3bitType::from_raw(0b010), Level3bitType::Unrecognized(0b010));
    assert_eq!(Level2bitType::_2.to_raw(), 0b11);
    assert_eq!(Relation3bitType::Peace.to_raw(), 0b110);
    assert_eq!(NationType::None.to_raw(), 0xFF);
    assert_eq!(Nation2byteType::None.to_raw(), 0xFFFF);
}

/// The first declared field of a packed record sits in the least significant bits.
#[test]
fn bit_record_lsb_ordering() {

    // TILE packs terrain in bits 0..5 and hills/river in bits 5..8.
    let tile = Tile { tile: Terrain5bitType::Tnt, hill_river: HillsRiver3bitType::Cc };
    let mut data = vec![];
    tile.encode(&mut data).unwrap();
    assert_eq!(data, vec![0b101_11010]);
    assert_eq!(Tile::decode(&mut Cursor::new(data)).unwrap(), tile);

    // PATH packs region id low, visitor nation high.
    let path = Path { region_id: RegionId4bitType::_1, visitor_nation: Nation4bitShortType::Empty };
    let mut data = vec![];
    path.encode(&mut data).unwrap();
    assert_eq!(data, vec![0b1111_0001]);
}

/// The worked example for the colony buildings block: fortification level 2 (0b011),
/// docks level 1, everything else zero.
#[test]
fn buildings_encoding() {
    let buildings = Buildings {
        fortification: Level3bitType::_2,
        armory: Level3bitType::_0,
        docks: Level3bitType::_1,
        ..Default::default()
    };
    let mut data = vec![];
    buildings.encode(&mut data).unwrap();
    assert_eq!(data, vec![0x43, 0, 0, 0, 0, 0]);

    let decoded = Buildings::decode(&mut Cursor::new(data)).unwrap();
    assert_eq!(decoded, buildings);
}

/// Binary round-trip of a 48-bit record with every field populated.
#[test]
fn buildings_round_trip() {
    let buildings = Buildings {
        fortification: Level3bitType::_3,
        armory: Level3bitType::_1,
        docks: Level3bitType::_2,
        town_hall: Level3bitType::_3,
        schoolhouse: Level3bitType::_1,
        warehouse: true,
        unused05a: false,
        stables: true,
        custom_house: true,
        printing_press: Level2bitType::_2,
        weavers_house: Level3bitType::_1,
        tobacconists_house: Level3bitType::_2,
        rum_distillers_house: Level3bitType::_3,
        capitol_unused: Level2bitType::_0,
        fur_traders_house: Level3bitType::_1,
        carpenters_shop: Level2bitType::_1,
        church: Level2bitType::_2,
        blacksmiths_house: Level3bitType::_2,
        unused05b: Bits::new(0b101010),
    };
    let mut data = vec![];
    buildings.encode(&mut data).unwrap();
    assert_eq!(data.len(), 6);
    assert_eq!(Buildings::decode(&mut Cursor::new(data)).unwrap(), buildings);
}

/// Unused/reserved bits round-trip exactly; the codec never clears unknown bits.
#[test]
fn unknown_bits_preserved() {
    for byte in [0x00u8, 0x5a, 0x80, 0xff] {
        let decoded = NationFlags::decode(&mut Cursor::new(vec![byte])).unwrap();
        let mut data = vec![];
        decoded.encode(&mut data).unwrap();
        assert_eq!(data, vec![byte]);
    }
}

/// Canonical round-trip of a bit-record, plus unknown-key rejection.
#[test]
fn bit_record_canonical() {
    let mask = Mask {
        has_unit: HasUnit1bitType::U,
        has_city: HasCity1bitType::Empty,
        suppress: Suppress1bitType::Empty,
        road: Road1bitType::E,
        purchased: Purchased1bitType::Empty,
        pacific: Pacific1bitType::T,
        plowed: Plowed1bitType::Empty,
        unused: Suppress1bitType::Empty,
    };

    let tree = mask.to_canonical();
    let mut conv = Converter::new();
    assert_eq!(Mask::from_canonical(&mut conv, &tree).unwrap(), mask);

    // The table names fields in declared order.
    if let Value::Table(table) = &tree {
        assert_eq!(
            table.get(crate::cdr::KEY_ORDER).unwrap(),
            &crate::cdr::key_order_list(&["has_unit", "has_city", "suppress", "road", "purchased", "pacific", "plowed", "unused"])
        );
    } else {
        panic!("expected a table");
    }

    // A stray key must be rejected.
    if let Value::Table(mut table) = tree {
        table.insert("bogus", Value::Integer(1));
        let error = Mask::from_canonical(&mut conv, &Value::Table(table)).unwrap_err();
        assert_eq!(error.message(), "unrecognized key(s) in table: 'bogus'.");
    }
}

/// Canonical round-trip of an aggregate with arrays, nested records and packed fields.
#[test]
fn aggregate_canonical_round_trip() {
    let mut colony = Colony::default();
    colony.x_y = [12, 34];
    assert!(colony.name.populate_from_str("Roanoke"));
    colony.nation_id = NationType::England;
    colony.population = 7;
    colony.occupation[3] = OccupationType::Fisherman;
    colony.profession[3] = ProfessionType::ExpertFisherman;
    colony.duration[2] = Duration { dur_1: 4, dur_2: 9 };
    colony.buildings.docks = Level3bitType::_1;
    colony.stock.food = -5;
    colony.rebel_divisor = 200;

    let tree = colony.to_canonical();
    let mut conv = Converter::new();
    assert_eq!(Colony::from_canonical(&mut conv, &tree).unwrap(), colony);

    // The coordinate pair uses the punctuated key.
    if let Value::Table(table) = &tree {
        assert!(table.contains_key("x, y"));
        assert!(!table.contains_key("x_y"));
    }
}

/// Binary round-trip of an aggregate with every kind of field.
#[test]
fn aggregate_binary_round_trip() {
    let mut unit = Unit::default();
    unit.x_y = [10, 20];
    unit.kind = UnitType::Galleon;
    unit.nation_info.nation_id = Nation4bitType::Netherlands;
    unit.nation_info.vis_to_dutch = true;
    unit.moves = 6;
    unit.orders = OrdersType::Sentry;
    unit.holds_occupied = 2;
    unit.cargo_items[0] = CargoItems { cargo_1: Cargo4bitType::Rum, cargo_2: Cargo4bitType::Food };
    unit.cargo_hold = [100, 50, 0, 0, 0, 0];
    unit.transport_chain = TransportChain { next_unit_idx: -1, prev_unit_idx: 3 };

    let mut data = vec![];
    unit.encode(&mut data).unwrap();
    assert_eq!(Unit::decode(&mut Cursor::new(data)).unwrap(), unit);
}

/// The normalized stop view reads and writes the same bytes as the raw fields.
#[test]
fn trade_route_stops() {
    let mut route = TradeRoute::default();
    assert!(route.name.populate_from_str("Spice Run"));
    route.land_or_sea = TradeRouteKindType::Sea;
    route.stops_count = 2;

    let stop = RouteStop {
        colony_index: 999,
        loads_count: 2,
        unloads_count: 1,
        loads_cargo: [
            Cargo4bitType::Sugar,
            Cargo4bitType::Rum,
            Cargo4bitType::Food,
            Cargo4bitType::Food,
            Cargo4bitType::Food,
            Cargo4bitType::Food,
        ],
        unloads_cargo: [Cargo4bitType::Tools; 6],
    };
    route.set_stop(1, stop);
    assert_eq!(route.stop(1), stop);
    assert_eq!(route.stop_2_colony_index, 999);
    assert_eq!(route.stop_2_loads_and_unloads_count.loads_count, 2);

    let mut data = vec![];
    route.encode(&mut data).unwrap();
    assert_eq!(TradeRoute::decode(&mut Cursor::new(data)).unwrap(), route);
}

/// Uint subfields reject canonical integers wider than their declared bit width.
#[test]
fn uint_subfield_width() {
    let duration = Duration { dur_1: 15, dur_2: 0 };
    let tree = duration.to_canonical();
    let mut conv = Converter::new();
    assert_eq!(Duration::from_canonical(&mut conv, &tree).unwrap(), duration);

    let mut table = crate::cdr::Table::new();
    table.insert("dur_1", Value::Integer(16));
    table.insert("dur_2", Value::Integer(0));
    let error = Duration::from_canonical(&mut conv, &Value::Table(table)).unwrap_err();
    assert_eq!(error.message(), "expected an integer between 0 and 15, instead found 16.");
    assert_eq!(error.path(), "dur_1");
}

/// The connectivity block is 540 bytes and round-trips both ways.
#[test]
fn connectivity_round_trip() {
    let mut connectivity = Connectivity::default();
    connectivity.sea_lane_connectivity[0] = SeaLaneConnectivity::decode(&mut Cursor::new(vec![0x1c])).unwrap();
    connectivity.sea_lane_connectivity[269] = SeaLaneConnectivity { north: true, ..Default::default() };
    connectivity.land_connectivity[100] = LandConnectivity { swest: true, east: true, ..Default::default() };

    let mut data = vec![];
    connectivity.encode(&mut data).unwrap();
    assert_eq!(data.len(), 540);
    assert_eq!(data[0], 0x1c);
    assert_eq!(Connectivity::decode(&mut Cursor::new(data)).unwrap(), connectivity);

    let tree = connectivity.to_canonical();
    let mut conv = Converter::new();
    assert_eq!(Connectivity::from_canonical(&mut conv, &tree).unwrap(), connectivity);
}
