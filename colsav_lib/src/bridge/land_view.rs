//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Land-view translation.
//!
//! The classic zoom is a 2-bit level (1.0x, 0.5x, 0.25x, 0.125x) while the modern
//! viewport zoom is a free scalar, so legacy-ward it is bucketed to the nearest level.
//! The viewport center is stored in tiles on the classic side and in pixels (32 per
//! tile) on the modern side, with the usual one-tile offset for the invisible ocean
//! ring. Map-reveal state has three classic variants: entire map, no special view, or a
//! fixed nation's view.

use crate::error::Result;
use crate::files::sav::ColonySav;
use crate::schema::Nation2byteType;
use crate::state::{Coord, LandViewState, MapRevealed, PlayerKind};

use super::{err, og_2byte_to_nation, player_to_og_2byte};

//---------------------------------------------------------------------------//
//                              Implementation
//---------------------------------------------------------------------------//

pub(crate) fn convert_landview_to_ng(sav: &ColonySav, out: &mut LandViewState) -> Result<()> {
    out.viewport.zoom = match sav.stuff.zoom_level {
        0 => 1.0,
        1 => 0.5,
        2 => 0.25,
        3 => 0.125,
        _ => 1.0,
    };

    out.viewport.center_x = f64::from((i32::from(sav.stuff.viewport_x) - 1) * 32);
    out.viewport.center_y = f64::from((i32::from(sav.stuff.viewport_y) - 1) * 32);

    out.white_box = Coord {
        x: i32::from(sav.stuff.white_box_x) - 1,
        y: i32::from(sav.stuff.white_box_y) - 1,
    };

    out.map_revealed = if sav.header.show_entire_map != 0 {
        MapRevealed::Entire
    } else if sav.header.fixed_nation_map_view == Nation2byteType::None {
        MapRevealed::NoSpecialView
    } else {
        let Some(nation) = og_2byte_to_nation(sav.header.fixed_nation_map_view) else {
            return err(format!(
                "unrecognized fixed_nation_map_view value: {}",
                crate::schema::to_text(&sav.header.fixed_nation_map_view)
            ));
        };
        MapRevealed::Player { player: PlayerKind::colonial_for(nation) }
    };

    Ok(())
}

pub(crate) fn convert_landview_to_og(input: &LandViewState, out: &mut ColonySav) -> Result<()> {
    out.stuff.zoom_level = if input.viewport.zoom >= 0.75 {
        0
    } else if input.viewport.zoom >= 0.37 {
        1
    } else if input.viewport.zoom >= 0.19 {
        2
    } else {
        3
    };

    if out.header.map_size_x == 0 || out.header.map_size_y == 0 {
        return err("The map size must be populated before converting the land view state.");
    }

    out.stuff.viewport_x = ((input.viewport.center_x / 32.0).floor() as i32 + 1)
        .clamp(1, i32::from(out.header.map_size_x) - 1) as u16;
    out.stuff.viewport_y = ((input.viewport.center_y / 32.0).floor() as i32 + 1)
        .clamp(1, i32::from(out.header.map_size_y) - 1) as u16;

    out.stuff.white_box_x = (input.white_box.x + 1).max(0) as u16;
    out.stuff.white_box_y = (input.white_box.y + 1).max(0) as u16;

    match input.map_revealed {
        MapRevealed::NoSpecialView => {
            out.header.show_entire_map = 0;
            out.header.fixed_nation_map_view = Nation2byteType::None;
        },
        MapRevealed::Entire => {
            out.header.show_entire_map = 1;
            out.header.fixed_nation_map_view = Nation2byteType::None;
        },
        MapRevealed::Player { player } => {
            let nation = player_to_og_2byte(out, player)?;
            out.header.show_entire_map = 0;
            out.header.fixed_nation_map_view = nation;
        },
    }

    Ok(())
}
