//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Terrain translation.
//!
//! The classic format packs a tile into a 5-bit terrain code (ground type, forest flag,
//! arctic and the two ocean codes) plus a 3-bit hills/river code. The modern model keeps
//! surface, ground, overlay, river and sea-lane as independent fields. Both translation
//! tables are exhaustive; combinations the classic game cannot express (a major river on
//! hills or mountains, any river on mountains) are reported as errors legacy-ward.
//!
//! The classic map is always two tiles wider and taller than the modern map: its outer
//! ring is invisible ocean. Going modern-ward the ring is stripped; going legacy-ward it
//! is reconstituted as ocean.

use crate::error::Result;
use crate::schema::{HillsRiver3bitType, Terrain5bitType, Tile};
use crate::state::{GroundTerrain, LandOverlay, MapSquare, Matrix, RealTerrain, River, Surface};

use super::err;

//---------------------------------------------------------------------------//
//                           Per-tile translation
//---------------------------------------------------------------------------//

/// This function translates one classic tile into a modern map square.
pub fn map_square_from_tile(tile: Tile) -> Result<MapSquare> {
    let mut square = MapSquare {
        surface: Surface::Land,
        ground: GroundTerrain::Tundra,
        overlay: None,
        river: None,
        sea_lane: false,
    };

    match tile.tile {
        Terrain5bitType::Tu => square.ground = GroundTerrain::Tundra,
        Terrain5bitType::De => square.ground = GroundTerrain::Desert,
        Terrain5bitType::Pl => square.ground = GroundTerrain::Plains,
        Terrain5bitType::Pr => square.ground = GroundTerrain::Prairie,
        Terrain5bitType::Gr => square.ground = GroundTerrain::Grassland,
        Terrain5bitType::Sa => square.ground = GroundTerrain::Savannah,
        Terrain5bitType::Mr => square.ground = GroundTerrain::Marsh,
        Terrain5bitType::Sw => square.ground = GroundTerrain::Swamp,
        Terrain5bitType::Tuf | Terrain5bitType::Tuw => {
            square.ground = GroundTerrain::Tundra;
            square.overlay = Some(LandOverlay::Forest);
        },
        Terrain5bitType::Def | Terrain5bitType::Dew => {
            square.ground = GroundTerrain::Desert;
            square.overlay = Some(LandOverlay::Forest);
        },
        Terrain5bitType::Plf | Terrain5bitType::Plw => {
            square.ground = GroundTerrain::Plains;
            square.overlay = Some(LandOverlay::Forest);
        },
        Terrain5bitType::Prf | Terrain5bitType::Prw => {
            square.ground = GroundTerrain::Prairie;
            square.overlay = Some(LandOverlay::Forest);
        },
        Terrain5bitType::Grf | Terrain5bitType::Grw => {
            square.ground = GroundTerrain::Grassland;
            square.overlay = Some(LandOverlay::Forest);
        },
        Terrain5bitType::Saf | Terrain5bitType::Saw => {
            square.ground = GroundTerrain::Savannah;
            square.overlay = Some(LandOverlay::Forest);
        },
        Terrain5bitType::Mrf | Terrain5bitType::Mrw => {
            square.ground = GroundTerrain::Marsh;
            square.overlay = Some(LandOverlay::Forest);
        },
        Terrain5bitType::Swf | Terrain5bitType::Sww => {
            square.ground = GroundTerrain::Swamp;
            square.overlay = Some(LandOverlay::Forest);
        },
        Terrain5bitType::Arc => square.ground = GroundTerrain::Arctic,
        Terrain5bitType::Ttt => square.surface = Surface::Water,
        Terrain5bitType::Tnt => {
            square.surface = Surface::Water;
            square.sea_lane = true;
        },
        Terrain5bitType::Unrecognized(raw) => {
            return err(format!("unsupported value for tile.tile: {raw:05b}"));
        },
    }

    match tile.hill_river {
        HillsRiver3bitType::Empty => {},
        HillsRiver3bitType::C => square.overlay = Some(LandOverlay::Hills),
        HillsRiver3bitType::T => square.river = Some(River::Minor),
        HillsRiver3bitType::Tc => {
            square.overlay = Some(LandOverlay::Hills);
            square.river = Some(River::Minor);
        },
        HillsRiver3bitType::Cc => square.overlay = Some(LandOverlay::Mountains),
        HillsRiver3bitType::Tt => square.river = Some(River::Major),
        other => {
            return err(format!("unsupported value for tile.hill_river: {:03b}", other.to_raw()));
        },
    }

    Ok(square)
}

/// This function translates one modern map square into a classic tile.
pub fn tile_from_map_square(square: &MapSquare) -> Result<Tile> {
    let mut tile = Tile::default();

    if square.surface == Surface::Water {
        tile.tile = if square.sea_lane { Terrain5bitType::Tnt } else { Terrain5bitType::Ttt };
        return Ok(tile);
    }

    let forested = square.overlay == Some(LandOverlay::Forest);
    tile.tile = match square.ground {
        GroundTerrain::Arctic => Terrain5bitType::Arc,
        GroundTerrain::Desert => if forested { Terrain5bitType::Def } else { Terrain5bitType::De },
        GroundTerrain::Grassland => if forested { Terrain5bitType::Grf } else { Terrain5bitType::Gr },
        GroundTerrain::Marsh => if forested { Terrain5bitType::Mrf } else { Terrain5bitType::Mr },
        GroundTerrain::Plains => if forested { Terrain5bitType::Plf } else { Terrain5bitType::Pl },
        GroundTerrain::Prairie => if forested { Terrain5bitType::Prf } else { Terrain5bitType::Pr },
        GroundTerrain::Savannah => if forested { Terrain5bitType::Saf } else { Terrain5bitType::Sa },
        GroundTerrain::Swamp => if forested { Terrain5bitType::Swf } else { Terrain5bitType::Sw },
        GroundTerrain::Tundra => if forested { Terrain5bitType::Tuf } else { Terrain5bitType::Tu },
    };

    let has_hills = square.overlay == Some(LandOverlay::Hills);
    let has_mountains = square.overlay == Some(LandOverlay::Mountains);
    let has_mound = has_hills || has_mountains;

    match (has_mound, square.river) {
        (false, None) => {},
        (true, None) => {
            tile.hill_river = if has_mountains { HillsRiver3bitType::Cc } else { HillsRiver3bitType::C };
        },
        (false, Some(river)) => {
            tile.hill_river = match river {
                River::Minor => HillsRiver3bitType::T,
                River::Major => HillsRiver3bitType::Tt,
            };
        },
        (true, Some(river)) => {
            if has_mountains {
                return err("The classic game does not support rivers on mountains tiles.");
            }
            if river == River::Major {
                return err("The classic game does not support major rivers on tiles containing either mountains or hills.");
            }
            // All that is left is hills with a minor river.
            tile.hill_river = HillsRiver3bitType::Tc;
        },
    }

    Ok(tile)
}

//---------------------------------------------------------------------------//
//                            Whole-map translation
//---------------------------------------------------------------------------//

/// This function strips the invisible ocean ring off a classic tile matrix and translates
/// the interior into the modern map.
pub(crate) fn tiles_to_map_squares(
    og_map_size_x: u16,
    og_map_size_y: u16,
    tiles: &[Tile],
    out: &mut RealTerrain,
) -> Result<()> {
    let og_x = usize::from(og_map_size_x);
    let og_y = usize::from(og_map_size_y);
    if og_x <= 2 || og_y <= 2 {
        return err("map size too small");
    }
    if tiles.len() != og_x * og_y {
        return err("inconsistent number of tiles");
    }

    let ng_x = og_x - 2;
    let ng_y = og_y - 2;
    let mut squares = Vec::with_capacity(ng_x * ng_y);
    for y in 1..og_y - 1 {
        for x in 1..og_x - 1 {
            squares.push(map_square_from_tile(tiles[y * og_x + x])?);
        }
    }

    out.map = Matrix::from_vec(squares, ng_x);
    Ok(())
}

/// This function translates the modern map into a classic tile matrix, reconstituting the
/// invisible ocean ring around it, and reports the resulting classic dimensions.
pub(crate) fn map_squares_to_tiles(
    input: &RealTerrain,
    og_map_size_x: &mut u16,
    og_map_size_y: &mut u16,
    tiles: &mut Vec<Tile>,
) -> Result<()> {
    let ng_x = input.map.width();
    let ng_y = input.map.height();
    if ng_x == 0 || ng_y == 0 {
        return err("map size too small");
    }

    let og_x = ng_x + 2;
    let og_y = ng_y + 2;
    *og_map_size_x = og_x as u16;
    *og_map_size_y = og_y as u16;

    let ocean = Tile { tile: Terrain5bitType::Ttt, hill_river: HillsRiver3bitType::Empty };

    tiles.clear();
    tiles.reserve(og_x * og_y);
    for y in 0..og_y {
        for x in 0..og_x {
            if x == 0 || x == og_x - 1 || y == 0 || y == og_y - 1 {
                tiles.push(ocean);
                continue;
            }
            let Some(square) = input.map.get(x - 1, y - 1) else {
                return err("inconsistent map matrix");
            };
            tiles.push(tile_from_map_square(square)?);
        }
    }

    Ok(())
}
