//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Module with every record of the classic save layout, packed and aggregate.
//!
//! Field names, sizes and order come from years of community research into the format; the
//! many `unknownNN` fields are exactly that — bytes whose meaning nobody has pinned down.
//! They are carried as opaque values and must round-trip bit-for-bit, so resist the
//! temptation to interpret them.
//!
//! The top-level save record lives in [`crate::files::sav`] because its vectors have
//! dynamic lengths and its codec is written by hand.

use crate::{bit_struct, record};
use crate::binary::{ReadBytes, WriteBytes};
use crate::cdr::{self, ConvError, Converter, FromCanonical, TableTracker, ToCanonical, Value};
use crate::error::Result;
use crate::files::{Decodeable, Encodeable};
use crate::schema::{FixedBytes, FixedString, ToText};

use super::enums::*;

//---------------------------------------------------------------------------//
//                            Packed bit-records
//---------------------------------------------------------------------------//

bit_struct! {
    TutorialHelp, 8, "TutorialHelp", {
        flag hint_pioneer, 1, "hint_pioneer";
        flag hint_soldier, 1, "hint_soldier";
        flag unknown02, 1, "unknown02";
        flag hint_new_colonist_in_colony, 1, "hint_new_colonist_in_colony";
        flag hint_food_deficit, 1, "hint_food_deficit";
        flag hint_harbor, 1, "hint_harbor";
        flag unknown06, 1, "unknown06";
        flag hint_native_convert, 1, "hint_native_convert";
    }
}

bit_struct! {
    /// Game-wide flags. `independence_declared` is the one the bridge cares most about:
    /// it decides whether an REF slot must be derived.
    GameFlags1, 16, "GameFlags1", {
        flag independence_declared, 1, "independence_declared";
        flag deploy_intervention_force, 1, "deploy_intervention_force";
        flag independence_war_intro, 1, "independence_war_intro";
        flag won_independence, 1, "won_independence";
        flag score_sequence_done, 1, "score_sequence_done";
        flag ref_will_forfeight, 1, "ref_will_forfeight";
        flag ref_captured_colony, 1, "ref_captured_colony";
        flag tutorial_hints, 1, "tutorial_hints";
        flag disable_water_color_cycling, 1, "disable_water_color_cycling";
        flag combat_analysis, 1, "combat_analysis";
        flag autosave, 1, "autosave";
        flag end_of_turn, 1, "end_of_turn";
        flag fast_piece_slide, 1, "fast_piece_slide";
        flag cheats_enabled, 1, "cheats_enabled";
        flag show_foreign_moves, 1, "show_foreign_moves";
        flag show_indian_moves, 1, "show_indian_moves";
    }
}

bit_struct! {
    ColonyReportOptionsToDisable, 16, "ColonyReportOptionsToDisable", {
        flag labels_on_cargo_and_terrain, 1, "labels_on_cargo_and_terrain";
        flag labels_on_buildings, 1, "labels_on_buildings";
        flag report_new_cargos_available, 1, "report_new_cargos_available";
        flag report_inefficient_government, 1, "report_inefficient_government";
        flag report_tools_needed_for_production, 1, "report_tools_needed_for_production";
        flag report_raw_materials_shortages, 1, "report_raw_materials_shortages";
        flag report_food_shortages, 1, "report_food_shortages";
        flag report_when_colonists_trained, 1, "report_when_colonists_trained";
        flag report_sons_of_liberty_membership, 1, "report_sons_of_liberty_membership";
        flag report_rebel_majorities, 1, "report_rebel_majorities";
        bits unused03, 6, "unused03";
    }
}

bit_struct! {
    GameFlags2, 16, "GameFlags2", {
        flag how_to_win, 1, "how_to_win";
        flag background_music, 1, "background_music";
        flag event_music, 1, "event_music";
        flag sound_effects, 1, "sound_effects";
        flag hint_how_to_move_ship, 1, "hint_how_to_move_ship";
        flag unknown_hint01, 1, "unknown_hint01";
        flag hint_lumber_abundance, 1, "hint_lumber_abundance";
        flag hint_colony_view, 1, "hint_colony_view";
        flag hint_dock_units_waiting, 1, "hint_dock_units_waiting";
        flag hint_full_cargo, 1, "hint_full_cargo";
        flag hint_build_stockade, 1, "hint_build_stockade";
        flag hint_free_colonist, 1, "hint_free_colonist";
        flag unknown_hint08, 1, "unknown_hint08";
        flag unknown_hint09, 1, "unknown_hint09";
        flag hint_ship_valuable, 1, "hint_ship_valuable";
        flag hint_ship_in_colony, 1, "hint_ship_in_colony";
    }
}

bit_struct! {
    /// One bit per woodcut/cutscene the player has already seen.
    Event, 16, "Event", {
        flag discovery_of_the_new_world, 1, "discovery_of_the_new_world";
        flag building_a_colony, 1, "building_a_colony";
        flag meeting_the_natives, 1, "meeting_the_natives";
        flag the_aztec_empire, 1, "the_aztec_empire";
        flag the_inca_nation, 1, "the_inca_nation";
        flag discovery_of_the_pacific_ocean, 1, "discovery_of_the_pacific_ocean";
        flag entering_indian_village, 1, "entering_indian_village";
        flag the_fountain_of_youth, 1, "the_fountain_of_youth";
        flag cargo_from_the_new_world, 1, "cargo_from_the_new_world";
        flag meeting_fellow_europeans, 1, "meeting_fellow_europeans";
        flag colony_burning, 1, "colony_burning";
        flag colony_destroyed, 1, "colony_destroyed";
        flag indian_raid, 1, "indian_raid";
        flag woodcut14, 1, "woodcut14";
        flag woodcut15, 1, "woodcut15";
        flag woodcut16, 1, "woodcut16";
    }
}

bit_struct! {
    PlayerFlags, 8, "PlayerFlags", {
        bits unknown06a, 7, "unknown06a";
        flag named_new_world, 1, "named_new_world";
    }
}

bit_struct! {
    ColonyFlags, 8, "ColonyFlags", {
        flag unknown00, 1, "unknown00";
        flag level2_sol_bonus, 1, "level2_sol_bonus";
        flag level1_sol_bonus, 1, "level1_sol_bonus";
        flag inefficient_govt_notified, 1, "inefficient_govt_notified";
        flag unknown04, 1, "unknown04";
        flag unknown05, 1, "unknown05";
        flag port_colony, 1, "port_colony";
        flag construction_complete_blinking, 1, "construction_complete_blinking";
    }
}

bit_struct! {
    Duration, 8, "Duration", {
        uint dur_1, 4, "dur_1";
        uint dur_2, 4, "dur_2";
    }
}

bit_struct! {
    /// Building levels of one colony, packed five bytes deep plus padding. Most buildings
    /// use the one-set-bit-per-level encoding of [`Level3bitType`].
    Buildings, 48, "Buildings", {
        enum fortification: Level3bitType, 3, "fortification";
        enum armory: Level3bitType, 3, "armory";
        enum docks: Level3bitType, 3, "docks";
        enum town_hall: Level3bitType, 3, "town_hall";
        enum schoolhouse: Level3bitType, 3, "schoolhouse";
        flag warehouse, 1, "warehouse";
        flag unused05a, 1, "unused05a";
        flag stables, 1, "stables";
        flag custom_house, 1, "custom_house";
        enum printing_press: Level2bitType, 2, "printing_press";
        enum weavers_house: Level3bitType, 3, "weavers_house";
        enum tobacconists_house: Level3bitType, 3, "tobacconists_house";
        enum rum_distillers_house: Level3bitType, 3, "rum_distillers_house";
        enum capitol_unused: Level2bitType, 2, "capitol_unused";
        enum fur_traders_house: Level3bitType, 3, "fur_traders_house";
        enum carpenters_shop: Level2bitType, 2, "carpenters_shop";
        enum church: Level2bitType, 2, "church";
        enum blacksmiths_house: Level3bitType, 3, "blacksmiths_house";
        bits unused05b, 6, "unused05b";
    }
}

bit_struct! {
    CustomHouseFlags, 16, "CustomHouseFlags", {
        flag food, 1, "food";
        flag sugar, 1, "sugar";
        flag tobacco, 1, "tobacco";
        flag cotton, 1, "cotton";
        flag furs, 1, "furs";
        flag lumber, 1, "lumber";
        flag ore, 1, "ore";
        flag silver, 1, "silver";
        flag horses, 1, "horses";
        flag rum, 1, "rum";
        flag cigars, 1, "cigars";
        flag cloth, 1, "cloth";
        flag coats, 1, "coats";
        flag trade_goods, 1, "trade_goods";
        flag tools, 1, "tools";
        flag muskets, 1, "muskets";
    }
}

bit_struct! {
    NationInfo, 8, "NationInfo", {
        enum nation_id: Nation4bitType, 4, "nation_id";
        flag vis_to_english, 1, "vis_to_english";
        flag vis_to_french, 1, "vis_to_french";
        flag vis_to_spanish, 1, "vis_to_spanish";
        flag vis_to_dutch, 1, "vis_to_dutch";
    }
}

bit_struct! {
    Unknown15, 8, "Unknown15", {
        bits unknown15a, 7, "unknown15a";
        flag damaged, 1, "damaged";
    }
}

bit_struct! {
    CargoItems, 8, "CargoItems", {
        enum cargo_1: Cargo4bitType, 4, "cargo_1";
        enum cargo_2: Cargo4bitType, 4, "cargo_2";
    }
}

bit_struct! {
    NationFlags, 8, "NationFlags", {
        bits unknown19a, 2, "unknown19a";
        flag granted_independence, 1, "granted_independence";
        flag promoted_continental_units, 1, "promoted_continental_units";
        bits unknown19b, 2, "unknown19b";
        flag immigration_started, 1, "immigration_started";
        bits unknown19c, 1, "unknown19c";
    }
}

bit_struct! {
    FoundingFathers, 32, "FoundingFathers", {
        flag adam_smith, 1, "adam_smith";
        flag jakob_fugger, 1, "jakob_fugger";
        flag peter_minuit, 1, "peter_minuit";
        flag peter_stuyvesant, 1, "peter_stuyvesant";
        flag jan_de_witt, 1, "jan_de_witt";
        flag ferdinand_magellan, 1, "ferdinand_magellan";
        flag francisco_coronado, 1, "francisco_coronado";
        flag hernando_de_soto, 1, "hernando_de_soto";
        flag henry_hudson, 1, "henry_hudson";
        flag sieur_de_la_salle, 1, "sieur_de_la_salle";
        flag hernan_cortes, 1, "hernan_cortes";
        flag george_washington, 1, "george_washington";
        flag paul_revere, 1, "paul_revere";
        flag francis_drake, 1, "francis_drake";
        flag john_paul_jones, 1, "john_paul_jones";
        flag thomas_jefferson, 1, "thomas_jefferson";
        flag pocahontas, 1, "pocahontas";
        flag thomas_paine, 1, "thomas_paine";
        flag simon_bolivar, 1, "simon_bolivar";
        flag benjamin_franklin, 1, "benjamin_franklin";
        flag william_brewster, 1, "william_brewster";
        flag william_penn, 1, "william_penn";
        flag jean_de_brebeuf, 1, "jean_de_brebeuf";
        flag juan_de_sepulveda, 1, "juan_de_sepulveda";
        flag bartolme_de_las_casas, 1, "bartolme_de_las_casas";
        bits unknown00, 7, "unknown00";
    }
}

bit_struct! {
    BoycottBitmap, 16, "BoycottBitmap", {
        flag food, 1, "food";
        flag sugar, 1, "sugar";
        flag tobacco, 1, "tobacco";
        flag cotton, 1, "cotton";
        flag furs, 1, "furs";
        flag lumber, 1, "lumber";
        flag ore, 1, "ore";
        flag silver, 1, "silver";
        flag horses, 1, "horses";
        flag rum, 1, "rum";
        flag cigars, 1, "cigars";
        flag cloth, 1, "cloth";
        flag coats, 1, "coats";
        flag trade_goods, 1, "trade_goods";
        flag tools, 1, "tools";
        flag muskets, 1, "muskets";
    }
}

bit_struct! {
    RelationByNations, 8, "RelationByNations", {
        uint attitudeq, 4, "attitudeq";
        enum status: Relation3bitType, 3, "status";
        flag irritated_by_piracy, 1, "irritated_by_piracy";
    }
}

bit_struct! {
    RelationByIndian, 8, "RelationByIndian", {
        uint attitudeq, 4, "attitudeq";
        enum status: Relation3bitType, 3, "status";
        flag unused, 1, "unused";
    }
}

bit_struct! {
    BLCS, 8, "BLCS", {
        flag brave_missing, 1, "brave_missing";
        flag learned, 1, "learned";
        flag capital, 1, "capital";
        flag scouted, 1, "scouted";
        bits unused09, 4, "unused09";
    }
}

bit_struct! {
    Mission, 8, "Mission", {
        enum nation_id: Nation4bitType, 4, "nation_id";
        flag expert, 1, "expert";
        bits unknown, 3, "unknown";
    }
}

bit_struct! {
    TribeFlags, 8, "TribeFlags", {
        bits unknown01, 5, "unknown01";
        flag joined_ref, 1, "joined_ref";
        bits unknown02, 1, "unknown02";
        flag extinct, 1, "extinct";
    }
}

bit_struct! {
    RelationByNations2, 8, "RelationByNations2", {
        uint attitudeq, 4, "attitudeq";
        enum status: Relation3bitType, 3, "status";
        flag unused, 1, "unused";
    }
}

bit_struct! {
    /// One map tile: terrain code in the low five bits, hills/river code in the top three.
    Tile, 8, "TILE", {
        enum tile: Terrain5bitType, 5, "tile";
        enum hill_river: HillsRiver3bitType, 3, "hill_river";
    }
}

bit_struct! {
    Mask, 8, "MASK", {
        enum has_unit: HasUnit1bitType, 1, "has_unit";
        enum has_city: HasCity1bitType, 1, "has_city";
        enum suppress: Suppress1bitType, 1, "suppress";
        enum road: Road1bitType, 1, "road";
        enum purchased: Purchased1bitType, 1, "purchased";
        enum pacific: Pacific1bitType, 1, "pacific";
        enum plowed: Plowed1bitType, 1, "plowed";
        enum unused: Suppress1bitType, 1, "unused";
    }
}

bit_struct! {
    /// Region labeling of a map tile. Only `region_id` is computed by the analysis pass;
    /// `visitor_nation` belongs to a separate pass and is never touched by it.
    Path, 8, "PATH", {
        enum region_id: RegionId4bitType, 4, "region_id";
        enum visitor_nation: Nation4bitShortType, 4, "visitor_nation";
    }
}

bit_struct! {
    Seen, 8, "SEEN", {
        enum score: RegionId4bitType, 4, "score";
        enum vis2en: VisibleToEnglish1bitType, 1, "vis2en";
        enum vis2fr: VisibleToFrench1bitType, 1, "vis2fr";
        enum vis2sp: VisibleToSpanish1bitType, 1, "vis2sp";
        enum vis2du: VisibleToDutch1bitType, 1, "vis2du";
    }
}

bit_struct! {
    /// Sea-lane reachability of one 4x4 quadrant toward its eight neighbors.
    SeaLaneConnectivity, 8, "SeaLaneConnectivity", {
        flag north, 1, "north";
        flag neast, 1, "neast";
        flag east, 1, "east";
        flag seast, 1, "seast";
        flag south, 1, "south";
        flag swest, 1, "swest";
        flag west, 1, "west";
        flag nwest, 1, "nwest";
    }
}

bit_struct! {
    LandConnectivity, 8, "LandConnectivity", {
        flag north, 1, "north";
        flag neast, 1, "neast";
        flag east, 1, "east";
        flag seast, 1, "seast";
        flag south, 1, "south";
        flag swest, 1, "swest";
        flag west, 1, "west";
        flag nwest, 1, "nwest";
    }
}

bit_struct! {
    Stop1LoadsAndUnloadsCount, 8, "Stop1LoadsAndUnloadsCount", {
        uint unloads_count, 4, "unloads_count";
        uint loads_count, 4, "loads_count";
    }
}

bit_struct! {
    Stop1LoadsCargo, 24, "Stop1LoadsCargo", {
        enum cargo_1: Cargo4bitType, 4, "cargo_1";
        enum cargo_2: Cargo4bitType, 4, "cargo_2";
        enum cargo_3: Cargo4bitType, 4, "cargo_3";
        enum cargo_4: Cargo4bitType, 4, "cargo_4";
        enum cargo_5: Cargo4bitType, 4, "cargo_5";
        enum cargo_6: Cargo4bitType, 4, "cargo_6";
    }
}

bit_struct! {
    Stop1UnloadsCargo, 24, "Stop1UnloadsCargo", {
        enum cargo_1: Cargo4bitType, 4, "cargo_1";
        enum cargo_2: Cargo4bitType, 4, "cargo_2";
        enum cargo_3: Cargo4bitType, 4, "cargo_3";
        enum cargo_4: Cargo4bitType, 4, "cargo_4";
        enum cargo_5: Cargo4bitType, 4, "cargo_5";
        enum cargo_6: Cargo4bitType, 4, "cargo_6";
    }
}

bit_struct! {
    Stop2LoadsAndUnloadsCount, 8, "Stop2LoadsAndUnloadsCount", {
        uint unloads_count, 4, "unloads_count";
        uint loads_count, 4, "loads_count";
    }
}

bit_struct! {
    Stop2LoadsCargo, 24, "Stop2LoadsCargo", {
        enum cargo_1: Cargo4bitType, 4, "cargo_1";
        enum cargo_2: Cargo4bitType, 4, "cargo_2";
        enum cargo_3: Cargo4bitType, 4, "cargo_3";
        enum cargo_4: Cargo4bitType, 4, "cargo_4";
        enum cargo_5: Cargo4bitType, 4, "cargo_5";
        enum cargo_6: Cargo4bitType, 4, "cargo_6";
    }
}

bit_struct! {
    Stop2UnloadsCargo, 24, "Stop2UnloadsCargo", {
        enum cargo_1: Cargo4bitType, 4, "cargo_1";
        enum cargo_2: Cargo4bitType, 4, "cargo_2";
        enum cargo_3: Cargo4bitType, 4, "cargo_3";
        enum cargo_4: Cargo4bitType, 4, "cargo_4";
        enum cargo_5: Cargo4bitType, 4, "cargo_5";
        enum cargo_6: Cargo4bitType, 4, "cargo_6";
    }
}

bit_struct! {
    Stop3LoadsAndUnloadsCount, 8, "Stop3LoadsAndUnloadsCount", {
        uint unloads_count, 4, "unloads_count";
        uint loads_count, 4, "loads_count";
    }
}

bit_struct! {
    Stop3LoadsCargo, 24, "Stop3LoadsCargo", {
        enum cargo_1: Cargo4bitType, 4, "cargo_1";
        enum cargo_2: Cargo4bitType, 4, "cargo_2";
        enum cargo_3: Cargo4bitType, 4, "cargo_3";
        enum cargo_4: Cargo4bitType, 4, "cargo_4";
        enum cargo_5: Cargo4bitType, 4, "cargo_5";
        enum cargo_6: Cargo4bitType, 4, "cargo_6";
    }
}

bit_struct! {
    Stop3UnloadsCargo, 24, "Stop3UnloadsCargo", {
        enum cargo_1: Cargo4bitType, 4, "cargo_1";
        enum cargo_2: Cargo4bitType, 4, "cargo_2";
        enum cargo_3: Cargo4bitType, 4, "cargo_3";
        enum cargo_4: Cargo4bitType, 4, "cargo_4";
        enum cargo_5: Cargo4bitType, 4, "cargo_5";
        enum cargo_6: Cargo4bitType, 4, "cargo_6";
    }
}

bit_struct! {
    Stop4LoadsAndUnloadsCount, 8, "Stop4LoadsAndUnloadsCount", {
        uint unloads_count, 4, "unloads_count";
        uint loads_count, 4, "loads_count";
    }
}

bit_struct! {
    Stop4LoadsCargo, 24, "Stop4LoadsCargo", {
        enum cargo_1: Cargo4bitType, 4, "cargo_1";
        enum cargo_2: Cargo4bitType, 4, "cargo_2";
        enum cargo_3: Cargo4bitType, 4, "cargo_3";
        enum cargo_4: Cargo4bitType, 4, "cargo_4";
        enum cargo_5: Cargo4bitType, 4, "cargo_5";
        enum cargo_6: Cargo4bitType, 4, "cargo_6";
    }
}

bit_struct! {
    Stop4UnloadsCargo, 24, "Stop4UnloadsCargo", {
        enum cargo_1: Cargo4bitType, 4, "cargo_1";
        enum cargo_2: Cargo4bitType, 4, "cargo_2";
        enum cargo_3: Cargo4bitType, 4, "cargo_3";
        enum cargo_4: Cargo4bitType, 4, "cargo_4";
        enum cargo_5: Cargo4bitType, 4, "cargo_5";
        enum cargo_6: Cargo4bitType, 4, "cargo_6";
    }
}

//---------------------------------------------------------------------------//
//                            Aggregate records
//---------------------------------------------------------------------------//

record! {
    ExpeditionaryForce, "ExpeditionaryForce", {
        regulars: u16, "regulars";
        dragoons: u16, "dragoons";
        man_o_wars: u16, "man_o_wars";
        artillery: u16, "artillery";
    }
}

record! {
    BackupForce, "BackupForce", {
        regulars: u16, "regulars";
        dragoons: u16, "dragoons";
        man_o_wars: u16, "man_o_wars";
        artillery: u16, "artillery";
    }
}

record! {
    PriceGroupState, "PriceGroupState", {
        unused1: FixedBytes<18>, "unused1";
        rum: u16, "rum";
        cigars: u16, "cigars";
        cloth: u16, "cloth";
        coats: u16, "coats";
        unused2: FixedBytes<6>, "unused2";
    }
}

record! {
    /// Fixed-size head of the save. The magic, the map dimensions and the four entity
    /// counts here drive the sizes of the dynamic vectors that follow.
    Header, "HEADER", {
        colonize: FixedString<9>, "colonize";
        unknown00: FixedBytes<3>, "unknown00";
        map_size_x: u16, "map_size_x";
        map_size_y: u16, "map_size_y";
        tutorial_help: TutorialHelp, "tutorial_help";
        unknown03: FixedBytes<1>, "unknown03";
        game_flags_1: GameFlags1, "game_flags_1";
        colony_report_options_to_disable: ColonyReportOptionsToDisable, "colony_report_options_to_disable";
        game_flags_2: GameFlags2, "game_flags_2";
        unknown39: FixedBytes<2>, "unknown39";
        year: u16, "year";
        season: SeasonType, "season";
        turn: u16, "turn";
        tile_selection_mode: FixedBytes<1>, "tile_selection_mode";
        unknown40: FixedBytes<1>, "unknown40";
        active_unit: i16, "active_unit";
        nation_turn: Nation2byteType, "nation_turn";
        curr_nation_map_view: Nation2byteType, "curr_nation_map_view";
        human_player: Nation2byteType, "human_player";
        dwelling_count: u16, "dwelling_count";
        unit_count: u16, "unit_count";
        colony_count: u16, "colony_count";
        trade_route_count: u16, "trade_route_count";
        show_entire_map: u16, "show_entire_map";
        fixed_nation_map_view: Nation2byteType, "fixed_nation_map_view";
        difficulty: DifficultyType, "difficulty";
        unknown43a: FixedBytes<1>, "unknown43a";
        unknown43b: FixedBytes<1>, "unknown43b";
        founding_father: FixedBytes<25>, "founding_father";
        unknown44aa: FixedBytes<2>, "unknown44aa";
        manual_save_flag: FixedBytes<1>, "manual_save_flag";
        unknown44ab: FixedBytes<1>, "unknown44ab";
        end_of_turn_sign: EndOfTurnSignType, "end_of_turn_sign";
        nation_relation: FixedBytes<8>, "nation_relation";
        rebel_sentiment_report: i16, "rebel_sentiment_report";
        unknown45a: FixedBytes<6>, "unknown45a";
        last_reported_rebel_sentiment: i16, "last_reported_rebel_sentiment";
        expeditionary_force: ExpeditionaryForce, "expeditionary_force";
        backup_force: BackupForce, "backup_force";
        price_group_state: PriceGroupState, "price_group_state";
        event: Event, "event";
        unknown05: FixedBytes<2>, "unknown05";
    }
}

record! {
    Player, "PLAYER", {
        name: FixedString<24>, "name";
        country_name: FixedString<24>, "country_name";
        player_flags: PlayerFlags, "player_flags";
        control: ControlType, "control";
        founded_colonies: u8, "founded_colonies";
        diplomacy: FixedBytes<1>, "diplomacy";
    }
}

record! {
    Other, "OTHER", {
        unknown51a: FixedBytes<18>, "unknown51a";
        click_before_open_colony_x_y: [u16; 2], "click_before_open_colony_x, y";
        unknown51b: FixedBytes<2>, "unknown51b";
    }
}

record! {
    /// Prime-resource depletion state of the eight tiles around a colony.
    Tiles, "Tiles", {
        tile_n: i8, "tile_n";
        tile_e: i8, "tile_e";
        tile_s: i8, "tile_s";
        tile_w: i8, "tile_w";
        tile_nw: i8, "tile_nw";
        tile_ne: i8, "tile_ne";
        tile_se: i8, "tile_se";
        tile_sw: i8, "tile_sw";
    }
}

record! {
    Stock, "Stock", {
        food: i16, "food";
        sugar: i16, "sugar";
        tobacco: i16, "tobacco";
        cotton: i16, "cotton";
        furs: i16, "furs";
        lumber: i16, "lumber";
        ore: i16, "ore";
        silver: i16, "silver";
        horses: i16, "horses";
        rum: i16, "rum";
        cigars: i16, "cigars";
        cloth: i16, "cloth";
        coats: i16, "coats";
        trade_goods: i16, "trade_goods";
        tools: i16, "tools";
        muskets: i16, "muskets";
    }
}

record! {
    PopulationOnMap, "PopulationOnMap", {
        for_english: u8, "for_english";
        for_french: u8, "for_french";
        for_spanish: u8, "for_spanish";
        for_dutch: u8, "for_dutch";
    }
}

record! {
    FortificationOnMap, "FortificationOnMap", {
        for_english: FortificationLevelType, "for_english";
        for_french: FortificationLevelType, "for_french";
        for_spanish: FortificationLevelType, "for_spanish";
        for_dutch: FortificationLevelType, "for_dutch";
    }
}

record! {
    Colony, "COLONY", {
        x_y: [u8; 2], "x, y";
        name: FixedString<24>, "name";
        nation_id: NationType, "nation_id";
        unknown08a: FixedBytes<1>, "unknown08a";
        colony_flags: ColonyFlags, "colony_flags";
        unknown08b: FixedBytes<2>, "unknown08b";
        population: u8, "population";
        occupation: [OccupationType; 32], "occupation";
        profession: [ProfessionType; 32], "profession";
        duration: [Duration; 16], "duration";
        tiles: Tiles, "tiles";
        unknown10: FixedBytes<12>, "unknown10";
        buildings: Buildings, "buildings";
        custom_house_flags: CustomHouseFlags, "custom_house_flags";
        unknown11: FixedBytes<6>, "unknown11";
        hammers: u16, "hammers";
        building_in_production: FixedBytes<1>, "building_in_production";
        warehouse_level: u8, "warehouse_level";
        unknown12a: FixedBytes<1>, "unknown12a";
        depletion_counter: u8, "depletion_counter";
        hammers_purchased: u16, "hammers_purchased";
        stock: Stock, "stock";
        population_on_map: PopulationOnMap, "population_on_map";
        fortification_on_map: FortificationOnMap, "fortification_on_map";
        rebel_dividend: i32, "rebel_dividend";
        rebel_divisor: i32, "rebel_divisor";
    }
}

record! {
    /// Intrusive doubly-linked list over unit vector indices, used by the game for units
    /// being transported.
    TransportChain, "TransportChain", {
        next_unit_idx: i16, "next_unit_idx";
        prev_unit_idx: i16, "prev_unit_idx";
    }
}

record! {
    Unit, "UNIT", {
        x_y: [u8; 2], "x, y";
        kind: UnitType, "type";
        nation_info: NationInfo, "nation_info";
        unknown15: Unknown15, "unknown15";
        moves: u8, "moves";
        origin_settlement: u8, "origin_settlement";
        ai_plan_mode: FixedString<1>, "ai_plan_mode";
        orders: OrdersType, "orders";
        goto_x: u8, "goto_x";
        goto_y: u8, "goto_y";
        unknown18: FixedBytes<1>, "unknown18";
        holds_occupied: u8, "holds_occupied";
        cargo_items: [CargoItems; 3], "cargo_items";
        cargo_hold: [u8; 6], "cargo_hold";
        turns_worked: u8, "turns_worked";
        profession_or_treasure_amount: u8, "profession_or_treasure_amount";
        transport_chain: TransportChain, "transport_chain";
    }
}

record! {
    IntrinsicVolume, "IntrinsicVolume", {
        food: i16, "food";
        sugar: i16, "sugar";
        tobacco: i16, "tobacco";
        cotton: i16, "cotton";
        furs: i16, "furs";
        lumber: i16, "lumber";
        ore: i16, "ore";
        silver: i16, "silver";
        horses: i16, "horses";
        rum: i16, "rum";
        cigars: i16, "cigars";
        cloth: i16, "cloth";
        coats: i16, "coats";
        trade_goods: i16, "trade_goods";
        tools: i16, "tools";
        muskets: i16, "muskets";
    }
}

record! {
    Trade, "Trade", {
        euro_price: [u8; 16], "euro_price";
        intrinsic_volume: IntrinsicVolume, "intrinsic_volume";
        gold: [i32; 16], "gold";
        tons_traded: [i32; 16], "tons_traded";
        tons_traded2: [i32; 16], "tons_traded2";
    }
}

record! {
    Nation, "NATION", {
        nation_flags: NationFlags, "nation_flags";
        tax_rate: u8, "tax_rate";
        recruit: [ProfessionType; 3], "recruit";
        unused07: FixedBytes<1>, "unused07";
        recruit_count: u8, "recruit_count";
        founding_fathers: FoundingFathers, "founding_fathers";
        unknown21: FixedBytes<1>, "unknown21";
        liberty_bells_total: i16, "liberty_bells_total";
        liberty_bells_last_turn: i16, "liberty_bells_last_turn";
        unknown22: FixedBytes<2>, "unknown22";
        next_founding_father: i16, "next_founding_father";
        founding_father_count: u16, "founding_father_count";
        prob_founding_father_count_end: FixedBytes<2>, "prob_founding_father_count_end";
        villages_burned: u8, "villages_burned";
        rebel_sentiment: i8, "rebel_sentiment";
        unknown23: FixedBytes<4>, "unknown23";
        artillery_bought_count: u16, "artillery_bought_count";
        boycott_bitmap: BoycottBitmap, "boycott_bitmap";
        royal_money: i32, "royal_money";
        player_total_income: i32, "player_total_income";
        gold: i32, "gold";
        current_crosses: u16, "current_crosses";
        needed_crosses: u16, "needed_crosses";
        point_return_from_europe: [u8; 2], "point_return_from_europe";
        relation_by_nations: [RelationByNations; 4], "relation_by_nations";
        relation_by_indian: [RelationByIndian; 8], "relation_by_indian";
        unknown26a: FixedBytes<4>, "unknown26a";
        unknown26b: FixedBytes<2>, "unknown26b";
        unknown26c: FixedBytes<6>, "unknown26c";
        trade: Trade, "trade";
    }
}

record! {
    Alarm, "Alarm", {
        friction: FixedBytes<1>, "friction";
        attacks: FixedBytes<1>, "attacks";
    }
}

record! {
    Dwelling, "DWELLING", {
        x_y: [u8; 2], "x, y";
        nation_id: NationType, "nation_id";
        blcs: BLCS, "blcs";
        population: u8, "population";
        mission: Mission, "mission";
        growth_counter: i8, "growth_counter";
        unknown28a: FixedBytes<1>, "unknown28a";
        last_bought: FixedBytes<1>, "last_bought";
        last_sold: FixedBytes<1>, "last_sold";
        alarm: [Alarm; 4], "alarm";
    }
}

record! {
    Tribe, "TRIBE", {
        capitol_x_y: [u8; 2], "capitol_x, y";
        tech: TechType, "tech";
        tribe_flags: TribeFlags, "tribe_flags";
        unknown31b: FixedBytes<3>, "unknown31b";
        muskets: i8, "muskets";
        horse_herds: u8, "horse_herds";
        unknown31c: FixedBytes<1>, "unknown31c";
        horse_breeding: u16, "horse_breeding";
        unknown31d: FixedBytes<2>, "unknown31d";
        stock: Stock, "stock";
        unknown32: FixedBytes<12>, "unknown32";
        relation_by_nations: [RelationByNations2; 4], "relation_by_nations";
        zeros33: FixedBytes<8>, "zeros33";
        alarm_by_player: [u16; 4], "alarm_by_player";
    }
}

record! {
    NationUnitCount, "NationUnitCount", {
        english: u8, "english";
        french: u8, "french";
        spanish: u8, "spanish";
        dutch: u8, "dutch";
    }
}

record! {
    NationColonyCount, "NationColonyCount", {
        english: u8, "english";
        french: u8, "french";
        spanish: u8, "spanish";
        dutch: u8, "dutch";
    }
}

record! {
    Unknown34a, "Unknown34a", {
        english: FixedBytes<1>, "english";
        french: FixedBytes<1>, "french";
        spanish: FixedBytes<1>, "spanish";
        dutch: FixedBytes<1>, "dutch";
    }
}

record! {
    TotalColoniesPopulation, "TotalColoniesPopulation", {
        english: u8, "english";
        french: u8, "french";
        spanish: u8, "spanish";
        dutch: u8, "dutch";
    }
}

record! {
    Unknown36ab, "Unknown36ab", {
        english: FixedBytes<1>, "english";
        french: FixedBytes<1>, "french";
        spanish: FixedBytes<1>, "spanish";
        dutch: FixedBytes<1>, "dutch";
    }
}

record! {
    ForeignAffairsReport, "ForeignAffairsReport", {
        population: [u8; 4], "population";
        unknown36ab: Unknown36ab, "unknown36ab";
        merchant_marine: [u8; 4], "merchant_marine";
        ship_counts: [u8; 4], "ship_counts";
    }
}

record! {
    UnknownTribeData1, "UnknownTribeData1", {
        inca: FixedBytes<1>, "inca";
        aztec: FixedBytes<1>, "aztec";
        arawak: FixedBytes<1>, "arawak";
        iroquois: FixedBytes<1>, "iroquois";
        cherokee: FixedBytes<1>, "cherokee";
        apache: FixedBytes<1>, "apache";
        sioux: FixedBytes<1>, "sioux";
        tupi: FixedBytes<1>, "tupi";
    }
}

record! {
    UnknownTribeData2, "UnknownTribeData2", {
        inca: FixedBytes<1>, "inca";
        aztec: FixedBytes<1>, "aztec";
        arawak: FixedBytes<1>, "arawak";
        iroquois: FixedBytes<1>, "iroquois";
        cherokee: FixedBytes<1>, "cherokee";
        apache: FixedBytes<1>, "apache";
        sioux: FixedBytes<1>, "sioux";
        tupi: FixedBytes<1>, "tupi";
    }
}

record! {
    TribeDwellingCount, "TribeDwellingCount", {
        inca: u8, "inca";
        aztec: u8, "aztec";
        arawak: u8, "arawak";
        iroquois: u8, "iroquois";
        cherokee: u8, "cherokee";
        apache: u8, "apache";
        sioux: u8, "sioux";
        tupi: u8, "tupi";
    }
}

record! {
    UnknownTribeData4, "UnknownTribeData4", {
        inca: FixedBytes<1>, "inca";
        aztec: FixedBytes<1>, "aztec";
        arawak: FixedBytes<1>, "arawak";
        iroquois: FixedBytes<1>, "iroquois";
        cherokee: FixedBytes<1>, "cherokee";
        apache: FixedBytes<1>, "apache";
        sioux: FixedBytes<1>, "sioux";
        tupi: FixedBytes<1>, "tupi";
    }
}

record! {
    UnknownTribeData5, "UnknownTribeData5", {
        inca: FixedBytes<1>, "inca";
        aztec: FixedBytes<1>, "aztec";
        arawak: FixedBytes<1>, "arawak";
        iroquois: FixedBytes<1>, "iroquois";
        cherokee: FixedBytes<1>, "cherokee";
        apache: FixedBytes<1>, "apache";
        sioux: FixedBytes<1>, "sioux";
        tupi: FixedBytes<1>, "tupi";
    }
}

record! {
    UnknownTribeData6, "UnknownTribeData6", {
        inca: FixedBytes<1>, "inca";
        aztec: FixedBytes<1>, "aztec";
        arawak: FixedBytes<1>, "arawak";
        iroquois: FixedBytes<1>, "iroquois";
        cherokee: FixedBytes<1>, "cherokee";
        apache: FixedBytes<1>, "apache";
        sioux: FixedBytes<1>, "sioux";
        tupi: FixedBytes<1>, "tupi";
    }
}

record! {
    /// Grab-bag block between the tribes and the map. The land-view fields at its tail
    /// (white box, zoom, viewport) are what the bridge translates.
    Stuff, "STUFF", {
        unknown34: FixedBytes<12>, "unknown34";
        nation_unit_count: NationUnitCount, "nation_unit_count";
        nation_colony_count: NationColonyCount, "nation_colony_count";
        unknown34a: Unknown34a, "unknown34a";
        total_colonies_population: TotalColoniesPopulation, "total_colonies_population";
        foreign_affairs_report: ForeignAffairsReport, "foreign_affairs_report";
        unknown36ac: [FixedBytes<64>; 8], "unknown36ac";
        unknown36ad: FixedBytes<8>, "unknown36ad";
        show_colony_prod_quantities: YesNoByte, "show_colony_prod_quantities";
        unknown_tribe_data_1: UnknownTribeData1, "unknown_tribe_data_1";
        unknown_tribe_data_2: UnknownTribeData2, "unknown_tribe_data_2";
        tribe_dwelling_count: TribeDwellingCount, "tribe_dwelling_count";
        unknown_tribe_data_4: UnknownTribeData4, "unknown_tribe_data_4";
        unknown_tribe_data_5: UnknownTribeData5, "unknown_tribe_data_5";
        unknown_tribe_data_6: UnknownTribeData6, "unknown_tribe_data_6";
        unknown36b: FixedBytes<104>, "unknown36b";
        white_box_x: u16, "white_box_x";
        white_box_y: u16, "white_box_y";
        zoom_level: u8, "zoom_level";
        unknown37: FixedBytes<1>, "unknown37";
        viewport_x: u16, "viewport_x";
        viewport_y: u16, "viewport_y";
    }
}

record! {
    /// One of the twelve fixed trade-route slots. The four stops are spelled out field by
    /// field because that is how they sit on disk; [`TradeRoute::stop`] and
    /// [`TradeRoute::set_stop`] give a normalized view per stop index.
    TradeRoute, "TRADEROUTE", {
        name: FixedString<32>, "name";
        land_or_sea: TradeRouteKindType, "land_or_sea";
        stops_count: u8, "stops_count";
        stop_1_colony_index: u16, "stop_1_colony_index";
        stop_1_loads_and_unloads_count: Stop1LoadsAndUnloadsCount, "stop_1_loads_and_unloads_count";
        stop_1_loads_cargo: Stop1LoadsCargo, "stop_1_loads_cargo";
        stop_1_unloads_cargo: Stop1UnloadsCargo, "stop_1_unloads_cargo";
        unknown47: FixedBytes<1>, "unknown47";
        stop_2_colony_index: u16, "stop_2_colony_index";
        stop_2_loads_and_unloads_count: Stop2LoadsAndUnloadsCount, "stop_2_loads_and_unloads_count";
        stop_2_loads_cargo: Stop2LoadsCargo, "stop_2_loads_cargo";
        stop_2_unloads_cargo: Stop2UnloadsCargo, "stop_2_unloads_cargo";
        unknown48: FixedBytes<1>, "unknown48";
        stop_3_colony_index: u16, "stop_3_colony_index";
        stop_3_loads_and_unloads_count: Stop3LoadsAndUnloadsCount, "stop_3_loads_and_unloads_count";
        stop_3_loads_cargo: Stop3LoadsCargo, "stop_3_loads_cargo";
        stop_3_unloads_cargo: Stop3UnloadsCargo, "stop_3_unloads_cargo";
        unknown49: FixedBytes<1>, "unknown49";
        stop_4_colony_index: u16, "stop_4_colony_index";
        stop_4_loads_and_unloads_count: Stop4LoadsAndUnloadsCount, "stop_4_loads_and_unloads_count";
        stop_4_loads_cargo: Stop4LoadsCargo, "stop_4_loads_cargo";
        stop_4_unloads_cargo: Stop4UnloadsCargo, "stop_4_unloads_cargo";
        unknown50: FixedBytes<1>, "unknown50";
    }
}

//---------------------------------------------------------------------------//
//                        Trade-route stop helpers
//---------------------------------------------------------------------------//

/// Normalized view of one trade-route stop, assembled from the per-stop fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteStop {
    pub colony_index: u16,
    pub loads_count: u8,
    pub unloads_count: u8,
    pub loads_cargo: [Cargo4bitType; 6],
    pub unloads_cargo: [Cargo4bitType; 6],
}

macro_rules! cargo_slots {
    ($ty:ty) => {
        impl $ty {

            /// This function returns the six cargo slots as an array.
            pub fn to_array(self) -> [Cargo4bitType; 6] {
                [self.cargo_1, self.cargo_2, self.cargo_3, self.cargo_4, self.cargo_5, self.cargo_6]
            }

            /// This function rebuilds the six cargo slots from an array.
            pub fn from_array(cargo: [Cargo4bitType; 6]) -> Self {
                Self {
                    cargo_1: cargo[0],
                    cargo_2: cargo[1],
                    cargo_3: cargo[2],
                    cargo_4: cargo[3],
                    cargo_5: cargo[4],
                    cargo_6: cargo[5],
                }
            }
        }
    };
}

cargo_slots!(Stop1LoadsCargo);
cargo_slots!(Stop1UnloadsCargo);
cargo_slots!(Stop2LoadsCargo);
cargo_slots!(Stop2UnloadsCargo);
cargo_slots!(Stop3LoadsCargo);
cargo_slots!(Stop3UnloadsCargo);
cargo_slots!(Stop4LoadsCargo);
cargo_slots!(Stop4UnloadsCargo);

impl TradeRoute {

    /// Stops one route can hold on disk.
    pub const MAX_STOPS: usize = 4;

    /// This function returns the normalized view of stop `index` (0-based).
    pub fn stop(&self, index: usize) -> RouteStop {
        match index {
            0 => RouteStop {
                colony_index: self.stop_1_colony_index,
                loads_count: self.stop_1_loads_and_unloads_count.loads_count,
                unloads_count: self.stop_1_loads_and_unloads_count.unloads_count,
                loads_cargo: self.stop_1_loads_cargo.to_array(),
                unloads_cargo: self.stop_1_unloads_cargo.to_array(),
            },
            1 => RouteStop {
                colony_index: self.stop_2_colony_index,
                loads_count: self.stop_2_loads_and_unloads_count.loads_count,
                unloads_count: self.stop_2_loads_and_unloads_count.unloads_count,
                loads_cargo: self.stop_2_loads_cargo.to_array(),
                unloads_cargo: self.stop_2_unloads_cargo.to_array(),
            },
            2 => RouteStop {
                colony_index: self.stop_3_colony_index,
                loads_count: self.stop_3_loads_and_unloads_count.loads_count,
                unloads_count: self.stop_3_loads_and_unloads_count.unloads_count,
                loads_cargo: self.stop_3_loads_cargo.to_array(),
                unloads_cargo: self.stop_3_unloads_cargo.to_array(),
            },
            3 => RouteStop {
                colony_index: self.stop_4_colony_index,
                loads_count: self.stop_4_loads_and_unloads_count.loads_count,
                unloads_count: self.stop_4_loads_and_unloads_count.unloads_count,
                loads_cargo: self.stop_4_loads_cargo.to_array(),
                unloads_cargo: self.stop_4_unloads_cargo.to_array(),
            },
            _ => panic!("a trade route only has {} stops", Self::MAX_STOPS),
        }
    }

    /// This function writes the normalized view of stop `index` (0-based) back into the
    /// per-stop fields.
    pub fn set_stop(&mut self, index: usize, stop: RouteStop) {
        match index {
            0 => {
                self.stop_1_colony_index = stop.colony_index;
                self.stop_1_loads_and_unloads_count.loads_count = stop.loads_count;
                self.stop_1_loads_and_unloads_count.unloads_count = stop.unloads_count;
                self.stop_1_loads_cargo = Stop1LoadsCargo::from_array(stop.loads_cargo);
                self.stop_1_unloads_cargo = Stop1UnloadsCargo::from_array(stop.unloads_cargo);
            },
            1 => {
                self.stop_2_colony_index = stop.colony_index;
                self.stop_2_loads_and_unloads_count.loads_count = stop.loads_count;
                self.stop_2_loads_and_unloads_count.unloads_count = stop.unloads_count;
                self.stop_2_loads_cargo = Stop2LoadsCargo::from_array(stop.loads_cargo);
                self.stop_2_unloads_cargo = Stop2UnloadsCargo::from_array(stop.unloads_cargo);
            },
            2 => {
                self.stop_3_colony_index = stop.colony_index;
                self.stop_3_loads_and_unloads_count.loads_count = stop.loads_count;
                self.stop_3_loads_and_unloads_count.unloads_count = stop.unloads_count;
                self.stop_3_loads_cargo = Stop3LoadsCargo::from_array(stop.loads_cargo);
                self.stop_3_unloads_cargo = Stop3UnloadsCargo::from_array(stop.unloads_cargo);
            },
            3 => {
                self.stop_4_colony_index = stop.colony_index;
                self.stop_4_loads_and_unloads_count.loads_count = stop.loads_count;
                self.stop_4_loads_and_unloads_count.unloads_count = stop.unloads_count;
                self.stop_4_loads_cargo = Stop4LoadsCargo::from_array(stop.loads_cargo);
                self.stop_4_unloads_cargo = Stop4UnloadsCargo::from_array(stop.unloads_cargo);
            },
            _ => panic!("a trade route only has {} stops", Self::MAX_STOPS),
        }
    }
}

//---------------------------------------------------------------------------//
//                             Connectivity
//---------------------------------------------------------------------------//

/// Per-quadrant connectivity block: 270 sea-lane bytes followed by 270 land bytes, one per
/// 4x4 quadrant of the standard 58x72 map, stored column-major (`qx * 18 + qy`).
///
/// This record is written out by hand because its 270-element arrays are beyond what the
/// standard library derives `Default` for.
#[derive(Clone, Debug, PartialEq)]
pub struct Connectivity {
    pub sea_lane_connectivity: [SeaLaneConnectivity; 270],
    pub land_connectivity: [LandConnectivity; 270],
}

impl Connectivity {

    /// Name of this type in the save schema.
    pub const SCHEMA_NAME: &'static str = "CONNECTIVITY";

    /// Quadrants per map: 15 columns of 18 rows.
    pub const QUADS: usize = 270;
}

impl Default for Connectivity {
    fn default() -> Self {
        Self {
            sea_lane_connectivity: [SeaLaneConnectivity::default(); 270],
            land_connectivity: [LandConnectivity::default(); 270],
        }
    }
}

impl ToText for Connectivity {
    fn push_text(&self, out: &mut String) {
        out.push_str("Connectivity{sea_lane_connectivity=");
        self.sea_lane_connectivity.push_text(out);
        out.push_str(",land_connectivity=");
        self.land_connectivity.push_text(out);
        out.push('}');
    }
}

impl std::fmt::Display for Connectivity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&crate::schema::to_text(self))
    }
}

impl Decodeable for Connectivity {
    fn decode<R: ReadBytes>(data: &mut R) -> Result<Self> {
        Ok(Self {
            sea_lane_connectivity: <[SeaLaneConnectivity; 270]>::decode(data)?,
            land_connectivity: <[LandConnectivity; 270]>::decode(data)?,
        })
    }
}

impl Encodeable for Connectivity {
    fn encode<W: WriteBytes>(&self, buffer: &mut W) -> Result<()> {
        self.sea_lane_connectivity.encode(buffer)?;
        self.land_connectivity.encode(buffer)
    }
}

impl ToCanonical for Connectivity {
    fn to_canonical(&self) -> Value {
        let mut table = cdr::Table::new();
        table.insert(cdr::KEY_ORDER, cdr::key_order_list(&["sea_lane_connectivity", "land_connectivity"]));
        table.insert("sea_lane_connectivity", self.sea_lane_connectivity.to_canonical());
        table.insert("land_connectivity", self.land_connectivity.to_canonical());
        Value::Table(table)
    }
}

impl FromCanonical for Connectivity {
    fn from_canonical(conv: &mut Converter, value: &Value) -> Result<Self, ConvError> {
        let table = conv.expect_table(value)?;
        let mut tracker = TableTracker::new(table);

        let sea = tracker.field(conv, "sea_lane_connectivity")?;
        let sea_lane_connectivity = conv.frame("sea_lane_connectivity", |conv| {
            <[SeaLaneConnectivity; 270]>::from_canonical(conv, sea)
        })?;

        let land = tracker.field(conv, "land_connectivity")?;
        let land_connectivity = conv.frame("land_connectivity", |conv| {
            <[LandConnectivity; 270]>::from_canonical(conv, land)
        })?;

        tracker.finish(conv)?;
        Ok(Self { sea_lane_connectivity, land_connectivity })
    }
}
