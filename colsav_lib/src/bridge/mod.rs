//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module translates between the classic save representation and the modern game's
//! normalized state tree, in both directions.
//!
//! Each domain (players, terrain, colonies, trade routes, land view) has its own
//! translator in a submodule; [`convert_to_ng`] and [`convert_to_og`] orchestrate them.
//! Translation can fail: the modern model is strictly richer than the classic format, so
//! going legacy-ward any feature without a legacy equivalent (a thirteenth trade route, a
//! major river on hills, a human-controlled expeditionary force...) is reported as an
//! error whose message names the offending feature. Nothing is ever silently dropped.
//!
//! ID conventions: the modern tree uses 1-based entity IDs, the classic tree 0-based
//! vector indices. With an empty [`IdMap`] the translators use `id = index + 1`; callers
//! that need a different correspondence (e.g. re-importing a save whose entities were
//! re-ordered) can pre-populate the map.

use std::collections::BTreeMap;

use crate::connectivity::{populate_connectivity, populate_region_ids};
use crate::error::{ColSavError, Result};
use crate::files::map::MapFile;
use crate::files::sav::{ColonySav, SIGNATURE};
use crate::schema::{Cargo4bitType, ControlType, FixedBytes, FixedString, Nation2byteType};
use crate::state::{Commodity, Nation, PlayerKind, RealTerrain, RootState};

pub mod colonies;
pub mod land_view;
pub mod players;
pub mod terrain;
pub mod trade_routes;


//---------------------------------------------------------------------------//
//                              Enums & Structs
//---------------------------------------------------------------------------//

/// Correspondence between modern entity IDs and classic vector indices, for the two
/// entity kinds the classic format cross-references by index.
///
/// An empty mapping means the default `id = index + 1` correspondence.
#[derive(Clone, Debug, Default)]
pub struct IdMap {
    pub trade_route_ids: BTreeMap<u32, u32>,
    pub colony_ids: BTreeMap<u32, u32>,
}

/// Which nations ended up on which side of the declaration of independence, derived from
/// the player/nation slots of a classic save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OgHumanIndependence {
    /// The nation that declared.
    pub declared: Nation,
    /// The colonial slot the expeditionary force was put into.
    pub ref_slot: Nation,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct OgIndependence {
    /// Present iff the human player has declared independence.
    pub human: Option<OgHumanIndependence>,
    /// AI players that were granted independence by their king.
    pub ai_given_independence: u32,
}

//---------------------------------------------------------------------------//
//                                 Helpers
//---------------------------------------------------------------------------//

/// Shorthand for a translation failure with a user-presentable message.
pub(crate) fn err<T>(message: impl Into<String>) -> Result<T> {
    Err(ColSavError::Translation(message.into()))
}

/// Modern ID for a classic index, honoring the default `index + 1` convention when the
/// mapping is empty.
pub(crate) fn get_ng_id(map: &BTreeMap<u32, u32>, og_index: u32) -> Result<u32> {
    if map.is_empty() {
        return Ok(og_index + 1);
    }
    match map.get(&og_index) {
        Some(id) => Ok(*id),
        None => err(format!("failed to look up legacy index {og_index} in the id map.")),
    }
}

/// Classic index for a modern ID; the reverse of [`get_ng_id`].
pub(crate) fn get_og_index(map: &BTreeMap<u32, u32>, ng_id: u32) -> Result<u32> {
    if map.is_empty() {
        if ng_id == 0 {
            return err("IDs are 1-based; ID 0 cannot be mapped to a legacy index.");
        }
        return Ok(ng_id - 1);
    }
    match map.iter().find(|(_, id)| **id == ng_id) {
        Some((index, _)) => Ok(*index),
        None => err(format!("failed to map ID {ng_id} to a legacy index.")),
    }
}

/// This function derives the independence situation from a classic save.
///
/// Before the declaration only colonial players exist. After it, exactly one slot must be
/// human (the declarer) and exactly one must be AI (the expeditionary force, put by the
/// game into the slot of another colonial nation); anything else cannot be translated.
pub(crate) fn independence_declared(sav: &ColonySav) -> Result<OgIndependence> {
    let mut independence = OgIndependence::default();

    for nation in Nation::ALL {
        let slot = nation.slot_index();
        if sav.player[slot].control == ControlType::Ai
            && sav.nation[slot].nation_flags.granted_independence
        {
            independence.ai_given_independence += 1;
        }
    }

    if !sav.header.game_flags_1.independence_declared {
        return Ok(independence);
    }

    let mut human_that_declared = None;
    let mut found_human_declared = 0;
    let mut ref_slot = None;
    let mut found_ref_slot = 0;

    for nation in Nation::ALL {
        match sav.player[nation.slot_index()].control {
            ControlType::Player => {
                human_that_declared = Some(nation);
                found_human_declared += 1;
            },
            ControlType::Ai => {
                ref_slot = Some(nation);
                found_ref_slot += 1;
            },
            _ => {},
        }
    }

    let (Some(declared), 1) = (human_that_declared, found_human_declared) else {
        return err("independence has been declared but could not find precisely one human player.");
    };
    let (Some(ref_slot), 1) = (ref_slot, found_ref_slot) else {
        return err("independence has been declared but could not find precisely one REF slot.");
    };

    independence.human = Some(OgHumanIndependence { declared, ref_slot });
    Ok(independence)
}

pub(crate) fn nation_to_og_2byte(nation: Nation) -> Nation2byteType {
    match nation {
        Nation::English => Nation2byteType::England,
        Nation::French => Nation2byteType::France,
        Nation::Spanish => Nation2byteType::Spain,
        Nation::Dutch => Nation2byteType::Netherlands,
    }
}

pub(crate) fn og_2byte_to_nation(value: Nation2byteType) -> Option<Nation> {
    match value {
        Nation2byteType::England => Some(Nation::English),
        Nation2byteType::France => Some(Nation::French),
        Nation2byteType::Spain => Some(Nation::Spanish),
        Nation2byteType::Netherlands => Some(Nation::Dutch),
        _ => None,
    }
}

/// Classic nation value for a player slot. More involved than it looks: an
/// expeditionary-force player has no slot of its own in the classic format, so its nation
/// has to be derived from the slot the force occupies in the save being built.
pub(crate) fn player_to_og_2byte(sav: &ColonySav, kind: PlayerKind) -> Result<Nation2byteType> {
    if !kind.is_ref() {
        return Ok(nation_to_og_2byte(kind.nation()));
    }
    match independence_declared(sav)?.human {
        Some(human) => Ok(nation_to_og_2byte(human.ref_slot)),
        None => err("cannot convert an expeditionary-force player to a legacy nation before independence is declared."),
    }
}

pub(crate) fn og_cargo_to_commodity(cargo: Cargo4bitType) -> Commodity {
    match cargo {
        Cargo4bitType::Food => Commodity::Food,
        Cargo4bitType::Sugar => Commodity::Sugar,
        Cargo4bitType::Tobacco => Commodity::Tobacco,
        Cargo4bitType::Cotton => Commodity::Cotton,
        Cargo4bitType::Furs => Commodity::Furs,
        Cargo4bitType::Lumber => Commodity::Lumber,
        Cargo4bitType::Ore => Commodity::Ore,
        Cargo4bitType::Silver => Commodity::Silver,
        Cargo4bitType::Horses => Commodity::Horses,
        Cargo4bitType::Rum => Commodity::Rum,
        Cargo4bitType::Cigars => Commodity::Cigars,
        Cargo4bitType::Cloth => Commodity::Cloth,
        Cargo4bitType::Coats => Commodity::Coats,
        Cargo4bitType::Goods => Commodity::TradeGoods,
        Cargo4bitType::Tools => Commodity::Tools,
        Cargo4bitType::Muskets => Commodity::Muskets,
        // A 4-bit field covers the 16 values above, but the type can carry wider raw
        // values when populated by hand; mask back into range like the game does.
        Cargo4bitType::Unrecognized(raw) => og_cargo_to_commodity(Cargo4bitType::from_raw(raw & 0b1111)),
    }
}

pub(crate) fn commodity_to_og_cargo(commodity: Commodity) -> Cargo4bitType {
    match commodity {
        Commodity::Food => Cargo4bitType::Food,
        Commodity::Sugar => Cargo4bitType::Sugar,
        Commodity::Tobacco => Cargo4bitType::Tobacco,
        Commodity::Cotton => Cargo4bitType::Cotton,
        Commodity::Furs => Cargo4bitType::Furs,
        Commodity::Lumber => Cargo4bitType::Lumber,
        Commodity::Ore => Cargo4bitType::Ore,
        Commodity::Silver => Cargo4bitType::Silver,
        Commodity::Horses => Cargo4bitType::Horses,
        Commodity::Rum => Cargo4bitType::Rum,
        Commodity::Cigars => Cargo4bitType::Cigars,
        Commodity::Cloth => Cargo4bitType::Cloth,
        Commodity::Coats => Cargo4bitType::Coats,
        Commodity::TradeGoods => Cargo4bitType::Goods,
        Commodity::Tools => Cargo4bitType::Tools,
        Commodity::Muskets => Cargo4bitType::Muskets,
    }
}

/// The nation of the human player of a modern game. There may be several human players
/// (the modern game supports that); the classic format wants exactly one, so the first
/// one in slot order is picked.
pub(crate) fn find_human_nation_ng(root: &RootState) -> Option<Nation> {
    use crate::state::PlayerControl;
    PlayerKind::ALL.iter()
        .filter_map(|kind| root.players.players.get(kind))
        .find(|player| player.control == PlayerControl::Human)
        .map(|player| player.nation)
}

/// The nation of the human player of a classic save.
pub(crate) fn find_human_player_og(sav: &ColonySav) -> Option<Nation> {
    Nation::ALL.into_iter()
        .find(|nation| sav.player[nation.slot_index()].control == ControlType::Player)
}

//---------------------------------------------------------------------------//
//                                Public API
//---------------------------------------------------------------------------//

/// This function converts a classic save into the modern state tree.
pub fn convert_to_ng(input: &ColonySav, out: &mut RootState, id_map: &IdMap) -> Result<()> {
    let Some(human_nation) = find_human_player_og(input) else {
        return err("Cannot find any players under human control.");
    };
    let human = PlayerKind::colonial_for(human_nation);

    players::convert_players_to_ng(input, &mut out.players)?;

    terrain::tiles_to_map_squares(
        input.header.map_size_x,
        input.header.map_size_y,
        &input.tile,
        &mut out.terrain,
    )?;

    colonies::convert_colonies_to_ng(input, &mut out.colonies, id_map)?;

    trade_routes::convert_trade_routes_to_ng(input, human, &mut out.trade_routes, id_map)?;

    land_view::convert_landview_to_ng(input, &mut out.land_view)?;

    Ok(())
}

/// This function converts the modern state tree into a classic save.
///
/// The output value is usually default-constructed by the caller, but a save loaded from
/// disk works too: fields the modern model does not track (the `unknownNN` blocks, the
/// tribes...) are then carried through untouched.
pub fn convert_to_og(input: &RootState, out: &mut ColonySav, id_map: &mut IdMap) -> Result<()> {
    let Some(human_nation) = find_human_nation_ng(input) else {
        return err("There must be at least one human player enabled.");
    };
    let human_kind = PlayerKind::colonial_for(human_nation);
    let Some(human_player) = input.players.players.get(&human_kind) else {
        return err(format!("failed to look up the player object for the human player {human_kind:?}."));
    };

    // Header.
    out.header.colonize = FixedString::new(*SIGNATURE);
    out.header.human_player = nation_to_og_2byte(human_nation);
    let declared = human_player.revolution.status >= crate::state::RevolutionStatus::Declared;
    out.header.game_flags_1.independence_declared = declared;

    players::convert_players_to_og(input, human_player, out)?;

    terrain::map_squares_to_tiles(
        &input.terrain,
        &mut out.header.map_size_x,
        &mut out.header.map_size_y,
        &mut out.tile,
    )?;

    // The other three map matrices have to match the tile matrix in size for the save to
    // be encodable; anything the modern model does not track stays zeroed.
    let map_area = out.map_area();
    out.mask.resize(map_area, Default::default());
    out.path.resize(map_area, Default::default());
    out.seen.resize(map_area, Default::default());

    colonies::convert_colonies_to_og(input, out, id_map)?;

    trade_routes::convert_trade_routes_to_og(input, human_player, out, id_map)?;

    land_view::convert_landview_to_og(&input.land_view, out)?;

    // Rebuild the analysis sections from the freshly written tiles. Only the region ids
    // are populated in the PATH matrix; the visitor-nation half belongs to a separate
    // pass.
    populate_region_ids(
        &out.tile,
        &mut out.path,
        usize::from(out.header.map_size_x),
        usize::from(out.header.map_size_y),
    )?;
    populate_connectivity(&out.tile, &out.path, &mut out.connectivity)?;

    Ok(())
}

/// This function converts a classic map file into modern terrain.
pub fn convert_map_to_ng(input: &MapFile, out: &mut RealTerrain) -> Result<()> {
    terrain::tiles_to_map_squares(input.map_size_x, input.map_size_y, &input.tile, out)
}

/// This function converts modern terrain into a classic map file.
pub fn convert_map_to_og(input: &RealTerrain, out: &mut MapFile) -> Result<()> {
    terrain::map_squares_to_tiles(input, &mut out.map_size_x, &mut out.map_size_y, &mut out.tile)?;

    // Observed in every map file the editor writes; meaning unknown.
    out.unknown = FixedBytes::new([0x04, 0x00]);

    out.mask = vec![Default::default(); out.map_area()];
    out.path = vec![Default::default(); out.map_area()];

    // Only the region ids, but that is fine for a pure map conversion.
    populate_region_ids(
        &out.tile,
        &mut out.path,
        usize::from(out.map_size_x),
        usize::from(out.map_size_y),
    )?;

    Ok(())
}
