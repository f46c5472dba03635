//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Tests for the region labeling and sea-lane connectivity passes.

use crate::schema::{Connectivity, HillsRiver3bitType, Path, RegionId4bitType, SeaLaneConnectivity, Terrain5bitType, Tile};

use super::*;

//---------------------------------------------------------------------------//
//                                 Helpers
//---------------------------------------------------------------------------//

const OCEAN: Tile = Tile { tile: Terrain5bitType::Ttt, hill_river: HillsRiver3bitType::Empty };
const LAND: Tile = Tile { tile: Terrain5bitType::Gr, hill_river: HillsRiver3bitType::Empty };

fn ocean_map() -> Vec<Tile> {
    vec![OCEAN; MAP_WIDTH * MAP_HEIGHT]
}

fn set(tiles: &mut [Tile], x: usize, y: usize, tile: Tile) {
    tiles[y * MAP_WIDTH + x] = tile;
}

fn region(path: &[Path], x: usize, y: usize) -> RegionId4bitType {
    path[y * MAP_WIDTH + x].region_id
}

fn labeled(tiles: &[Tile]) -> Vec<Path> {
    let mut path = vec![Path::default(); tiles.len()];
    populate_region_ids(tiles, &mut path, MAP_WIDTH, MAP_HEIGHT).unwrap();
    path
}

fn quad(connectivity: &Connectivity, qx: usize, qy: usize) -> SeaLaneConnectivity {
    connectivity.sea_lane_connectivity[qx * 18 + qy]
}

/// Checks that every recorded connection has its reciprocal on the neighbor.
fn assert_symmetric(connectivity: &Connectivity) {
    let at = |qx: i32, qy: i32| -> Option<SeaLaneConnectivity> {
        if qx < 0 || qy < 0 || qx >= 15 || qy >= 18 {
            None
        } else {
            Some(connectivity.sea_lane_connectivity[(qx * 18 + qy) as usize])
        }
    };
    for qx in 0..15 {
        for qy in 0..18 {
            let here = at(qx, qy).unwrap();
            let checks = [
                (here.north, 0, -1, at(qx, qy - 1).map(|q| q.south)),
                (here.neast, 1, -1, at(qx + 1, qy - 1).map(|q| q.swest)),
                (here.east, 1, 0, at(qx + 1, qy).map(|q| q.west)),
                (here.seast, 1, 1, at(qx + 1, qy + 1).map(|q| q.nwest)),
                (here.south, 0, 1, at(qx, qy + 1).map(|q| q.north)),
                (here.swest, -1, 1, at(qx - 1, qy + 1).map(|q| q.neast)),
                (here.west, -1, 0, at(qx - 1, qy).map(|q| q.east)),
                (here.nwest, -1, -1, at(qx - 1, qy - 1).map(|q| q.seast)),
            ];
            for (bit, dx, dy, reciprocal) in checks {
                if bit {
                    assert_eq!(
                        reciprocal, Some(true),
                        "asymmetric connection at quad ({qx},{qy}) toward ({},{})", qx + dx, qy + dy
                    );
                }
            }
        }
    }
}

//---------------------------------------------------------------------------//
//                                  Tests
//---------------------------------------------------------------------------//

/// Every edge-column ocean tile is region 1, interior ocean connected to it too, and no
/// land tile ever is.
#[test]
fn region_ids_ocean_and_land() {
    let mut tiles = ocean_map();

    // A solid block of land with a two-tile lake inside it.
    for y in 10..16 {
        for x in 10..21 {
            set(&mut tiles, x, y, LAND);
        }
    }
    set(&mut tiles, 13, 12, OCEAN);
    set(&mut tiles, 14, 12, OCEAN);

    let path = labeled(&tiles);

    for y in 0..MAP_HEIGHT {
        assert_eq!(region(&path, 0, y), RegionId4bitType::_1);
        assert_eq!(region(&path, MAP_WIDTH - 1, y), RegionId4bitType::_1);
    }

    // Open ocean around the block is all one region.
    assert_eq!(region(&path, 30, 30), RegionId4bitType::_1);
    assert_eq!(region(&path, 9, 12), RegionId4bitType::_1);

    // The land block is one non-1 region.
    let land_region = region(&path, 10, 10);
    assert_ne!(land_region, RegionId4bitType::_1);
    assert_eq!(region(&path, 20, 15), land_region);

    // The lake is water but cannot reach an edge, so it is its own region.
    let lake_region = region(&path, 13, 12);
    assert_ne!(lake_region, RegionId4bitType::_1);
    assert_ne!(lake_region, land_region);
    assert_eq!(region(&path, 14, 12), lake_region);
}

/// Region-1 closure: every ocean tile 4-way adjacent to a region-1 ocean tile is itself
/// region 1.
#[test]
fn region_one_closure() {
    let mut tiles = ocean_map();
    for y in 20..50 {
        set(&mut tiles, 29, y, LAND);
    }
    let path = labeled(&tiles);

    for y in 0..MAP_HEIGHT {
        for x in 0..MAP_WIDTH {
            if region(&path, x, y) != RegionId4bitType::_1 {
                continue;
            }
            assert!(is_water(tiles[y * MAP_WIDTH + x]));
            let neighbors = [
                (x.wrapping_sub(1), y),
                (x + 1, y),
                (x, y.wrapping_sub(1)),
                (x, y + 1),
            ];
            for (nx, ny) in neighbors {
                if nx >= MAP_WIDTH || ny >= MAP_HEIGHT {
                    continue;
                }
                if is_water(tiles[ny * MAP_WIDTH + nx]) {
                    assert_eq!(region(&path, nx, ny), RegionId4bitType::_1);
                }
            }
        }
    }
}

/// The region id matrices must match the tile matrix in size.
#[test]
fn region_ids_size_mismatch() {
    let tiles = ocean_map();
    let mut path = vec![Path::default(); 10];
    assert!(populate_region_ids(&tiles, &mut path, MAP_WIDTH, MAP_HEIGHT).is_err());
}

/// On an all-ocean map every quadrant connects to every existing neighbor.
#[test]
fn sea_lanes_open_ocean() {
    let tiles = ocean_map();
    let path = labeled(&tiles);

    let mut connectivity = Connectivity::default();
    populate_sea_lane_connectivity(&tiles, &path, &mut connectivity).unwrap();

    // An interior quadrant sees all eight neighbors.
    let center = quad(&connectivity, 7, 9);
    assert!(center.north && center.neast && center.east && center.seast);
    assert!(center.south && center.swest && center.west && center.nwest);

    // A corner quadrant only sees the three neighbors that exist.
    let corner = quad(&connectivity, 0, 0);
    assert!(corner.east && corner.seast && corner.south);
    assert!(!corner.north && !corner.neast && !corner.swest && !corner.west && !corner.nwest);

    assert_symmetric(&connectivity);

    // The land half is never touched by this pass.
    assert_eq!(connectivity.land_connectivity, Connectivity::default().land_connectivity);
}

/// A map with no region-1 ocean records no connections at all.
#[test]
fn sea_lanes_all_land() {
    let tiles = vec![LAND; MAP_WIDTH * MAP_HEIGHT];
    let path = labeled(&tiles);

    let mut connectivity = Connectivity::default();
    populate_sea_lane_connectivity(&tiles, &path, &mut connectivity).unwrap();
    assert_eq!(connectivity, Connectivity::default());
}

/// A horizontal land wall cuts the vertical connections across it.
#[test]
fn sea_lanes_wall() {

    // A full-width land wall four tiles tall, covering quadrant row qy=5 exactly.
    let mut tiles = ocean_map();
    for y in 20..24 {
        for x in 0..MAP_WIDTH {
            set(&mut tiles, x, y, LAND);
        }
    }
    let path = labeled(&tiles);

    let mut connectivity = Connectivity::default();
    populate_sea_lane_connectivity(&tiles, &path, &mut connectivity).unwrap();

    // Quadrants on the wall row have no anchors at all.
    for qx in 0..15 {
        assert_eq!(quad(&connectivity, qx, 5), SeaLaneConnectivity::default());
    }

    // Above and below the wall the east-west lanes still run.
    assert!(quad(&connectivity, 7, 4).east);
    assert!(quad(&connectivity, 7, 6).east);
    assert!(!quad(&connectivity, 7, 4).south);
    assert!(!quad(&connectivity, 7, 6).north);

    assert_symmetric(&connectivity);
}

/// The path test gives up beyond six steps: two quadrants whose anchors are forced far
/// apart by a detour do not connect even though a (long) path exists.
#[test]
fn sea_lanes_distance_bound() {

    // Wall with a single gap far from the anchors of quadrants (7,4) and (7,5).
    let mut tiles = ocean_map();
    for x in 0..MAP_WIDTH {
        set(&mut tiles, x, 23, LAND);
    }
    set(&mut tiles, 0, 23, OCEAN);
    let path = labeled(&tiles);

    let mut connectivity = Connectivity::default();
    populate_sea_lane_connectivity(&tiles, &path, &mut connectivity).unwrap();

    // The detour through the gap at x=0 is way over six steps for a mid-map quadrant.
    assert!(!quad(&connectivity, 7, 5).south);
    assert!(!quad(&connectivity, 7, 6).north);

    // Near the gap, the crossing is short enough to count.
    assert!(quad(&connectivity, 0, 5).south);

    assert_symmetric(&connectivity);
}

/// Reproduction of the original game's NE/SW suppression bug in its trigger
/// configuration.
#[test]
fn sea_lanes_bug_reproduction() {

    // All ocean, except the four anchor candidates of quadrant (5,9), which makes that
    // quadrant record no connections while the quadrants around it stay connected.
    let mut tiles = ocean_map();
    for (x, y) in [(21, 37), (21, 38), (22, 37), (22, 38)] {
        set(&mut tiles, x, y, LAND);
    }
    let path = labeled(&tiles);

    let mut correct = Connectivity::default();
    populate_sea_lane_connectivity(&tiles, &path, &mut correct).unwrap();
    assert!(quad(&correct, 5, 10).neast);
    assert!(quad(&correct, 6, 9).swest);
    assert_eq!(quad(&correct, 5, 9), SeaLaneConnectivity::default());
    assert_ne!(quad(&correct, 5, 8), SeaLaneConnectivity::default());

    let mut buggy = Connectivity::default();
    populate_sea_lane_connectivity_with_bug(&tiles, &path, &mut buggy).unwrap();

    // The bug clears exactly the NE/SW pair across the dead quadrant.
    assert!(!quad(&buggy, 5, 10).neast);
    assert!(!quad(&buggy, 6, 9).swest);

    // Everything else matches the correct output.
    let mut repaired = buggy.clone();
    repaired.sea_lane_connectivity[5 * 18 + 10].neast = true;
    repaired.sea_lane_connectivity[6 * 18 + 9].swest = true;
    assert_eq!(repaired, correct);
}

/// Non-standard maps are rejected rather than silently mis-indexed.
#[test]
fn sea_lanes_non_standard_size() {
    let tiles = vec![OCEAN; 100];
    let path = vec![Path::default(); 100];
    let mut connectivity = Connectivity::default();
    assert!(populate_sea_lane_connectivity(&tiles, &path, &mut connectivity).is_err());
}
