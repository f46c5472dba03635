//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the map analysis passes the game stores inside its saves: the
//! per-tile region ids of the `PATH` matrix, and the per-quadrant sea-lane connectivity
//! block.
//!
//! Region ids group tiles into connected components. Id 1 is special: the game gives it to
//! every ocean tile that connects, through water, to the left or right edge of the map —
//! even when those two edges are not themselves connected to each other. The sea-lane pass
//! then runs on top of the region ids: it partitions the standard 58x72 map into an 18x15
//! grid of 4x4 quadrants and records, for each quadrant, which of its eight neighbors can
//! be reached by a short water path over region-1 tiles.
//!
//! The original game's sea-lane sweep has a bug that spuriously suppresses some NE/SW
//! connections between diagonally adjacent quadrants.
//! [`populate_sea_lane_connectivity_with_bug`] reproduces it so that regenerated files can
//! be compared byte-exactly against files the game wrote; new files should use the
//! bug-free [`populate_sea_lane_connectivity`].

use itertools::iproduct;

use std::collections::{HashMap, VecDeque};

use crate::error::{ColSavError, Result};
use crate::schema::{Connectivity, Path, RegionId4bitType, SeaLaneConnectivity, Terrain5bitType, Tile};

#[cfg(test)] mod connectivity_test;

/// Tile columns of the standard map.
pub const MAP_WIDTH: usize = 58;

/// Tile rows of the standard map.
pub const MAP_HEIGHT: usize = 72;

/// Quadrant columns of the standard map.
const QUAD_COLS: i32 = 15;

/// Quadrant rows of the standard map.
const QUAD_ROWS: i32 = 18;

/// Longest water path that still counts as a sea-lane connection between two quadrants.
const MAX_LANE_DISTANCE: i32 = 6;

//---------------------------------------------------------------------------//
//                              Enums & Structs
//---------------------------------------------------------------------------//

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Point {
    x: i32,
    y: i32,
}

impl Point {
    fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

//---------------------------------------------------------------------------//
//                              Region labeling
//---------------------------------------------------------------------------//

fn is_water(tile: Tile) -> bool {
    tile.tile == Terrain5bitType::Ttt || tile.tile == Terrain5bitType::Tnt
}

/// This function populates the region ids in the `PATH` matrix given a tile matrix. It
/// uses the same region id convention as the original game. The other field of the matrix
/// (`visitor_nation`) belongs to a separate pass and is left untouched here.
///
/// Ocean connected (4-way) to the left or right map edge gets the reserved id 1. Every
/// other connected component of like surface (land against land, lake against lake) gets
/// an id from the rest of the 4-bit space, assigned in row-major discovery order and
/// wrapping back to 2 when the ids run out.
pub fn populate_region_ids(tiles: &[Tile], path: &mut [Path], width: usize, height: usize) -> Result<()> {
    if tiles.len() != width * height {
        return Err(ColSavError::MismatchedCount { field: "tile", expected: width * height, found: tiles.len() });
    }
    if path.len() != width * height {
        return Err(ColSavError::MismatchedCount { field: "path", expected: width * height, found: path.len() });
    }
    if width == 0 || height == 0 {
        return Ok(());
    }

    // -1 = unassigned.
    let mut region = vec![-1i8; tiles.len()];

    // Pass 1: flood the edge-connected ocean with the reserved id 1, starting from every
    // water tile in the leftmost and rightmost columns.
    let mut frontier = VecDeque::new();
    for y in 0..height {
        for x in [0, width - 1] {
            let offset = y * width + x;
            if is_water(tiles[offset]) && region[offset] != 1 {
                region[offset] = 1;
                frontier.push_back((x, y));
            }
        }
    }
    while let Some((x, y)) = frontier.pop_front() {
        let neighbors = [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];
        for (nx, ny) in neighbors {
            if nx >= width || ny >= height {
                continue;
            }
            let offset = ny * width + nx;
            if region[offset] == -1 && is_water(tiles[offset]) {
                region[offset] = 1;
                frontier.push_back((nx, ny));
            }
        }
    }

    // Pass 2: label the remaining components, row-major, over the rest of the id space.
    let mut next_id = 2u8;
    for start in 0..tiles.len() {
        if region[start] != -1 {
            continue;
        }
        let id = next_id;
        next_id = if next_id == 15 { 2 } else { next_id + 1 };
        let class = is_water(tiles[start]);

        let mut frontier = VecDeque::new();
        region[start] = id as i8;
        frontier.push_back((start % width, start / width));
        while let Some((x, y)) = frontier.pop_front() {
            let neighbors = [
                (x.wrapping_sub(1), y),
                (x + 1, y),
                (x, y.wrapping_sub(1)),
                (x, y + 1),
            ];
            for (nx, ny) in neighbors {
                if nx >= width || ny >= height {
                    continue;
                }
                let offset = ny * width + nx;
                if region[offset] == -1 && is_water(tiles[offset]) == class {
                    region[offset] = id as i8;
                    frontier.push_back((nx, ny));
                }
            }
        }
    }

    for (slot, id) in path.iter_mut().zip(region) {
        slot.region_id = RegionId4bitType::from_raw(id as u8);
    }

    Ok(())
}

//---------------------------------------------------------------------------//
//                           Sea-lane connectivity
//---------------------------------------------------------------------------//

fn quad_exists(q: Point) -> bool {
    q.x >= 0 && q.y >= 0 && q.x < QUAD_COLS && q.y < QUAD_ROWS
}

fn tile_exists(p: Point) -> bool {
    p.x >= 0 && p.y >= 0 && p.x < MAP_WIDTH as i32 && p.y < MAP_HEIGHT as i32
}

/// Quadrant bytes are stored column-major.
fn quad_offset(q: Point) -> usize {
    (q.x * QUAD_ROWS + q.y) as usize
}

fn tile_offset(p: Point) -> usize {
    (p.y * MAP_WIDTH as i32 + p.x) as usize
}

/// An ocean tile (with or without a sea lane on it) belonging to the edge-connected
/// region.
fn is_sea_lane_tile(tiles: &[Tile], path: &[Path], p: Point) -> bool {
    let offset = tile_offset(p);
    is_water(tiles[offset]) && path[offset].region_id == RegionId4bitType::_1
}

/// This function picks the anchor tile of a quadrant: the first of the four center-ish
/// candidates that is region-1 ocean. A quadrant without an anchor records no
/// connections at all.
fn find_sea_lane_anchor(tiles: &[Tile], path: &[Path], q: Point) -> Option<Point> {
    const ANCHOR_DELTAS: [(i32, i32); 4] = [(1, 1), (1, 2), (2, 1), (2, 2)];
    let p = Point { x: q.x * 4, y: q.y * 4 };
    ANCHOR_DELTAS.iter()
        .map(|(dx, dy)| p.offset(*dx, *dy))
        .find(|candidate| tile_exists(*candidate) && is_sea_lane_tile(tiles, path, *candidate))
}

/// This is similar to the A* algorithm, but is not guaranteed to return the shortest
/// path; it will potentially return any valid path whose distance is <= `upper_bound`.
/// That is all the sweep needs.
fn has_path(src: Point, dst: Point, upper_bound: i32, connected: impl Fn(Point, Point) -> bool) -> bool {
    let mut explore: HashMap<Point, i32> = HashMap::new();
    let mut explored: HashMap<Point, i32> = HashMap::new();
    explore.insert(src, 0);

    loop {

        // Take the frontier point closest to the destination by straight-line distance, in
        // the hopes that it is on the fastest route there (it usually is).
        let Some((p, dist)) = explore.iter()
            .min_by(|(a, _), (b, _)| {
                let da = (dst.x - a.x).pow(2) + (dst.y - a.y).pow(2);
                let db = (dst.x - b.x).pow(2) + (dst.y - b.y).pow(2);
                da.cmp(&db)
            })
            .map(|(p, dist)| (*p, *dist))
        else {
            break;
        };
        explore.remove(&p);
        explored.insert(p, dist);

        if p == dst && dist <= upper_bound {
            return true;
        }

        let new_dist = dist + 1;
        if new_dist > upper_bound {
            continue;
        }

        for (dx, dy) in iproduct!(-1i32..=1, -1i32..=1) {
            if dx == 0 && dy == 0 {
                continue;
            }
            let new_p = p.offset(dx, dy);
            if !connected(p, new_p) {
                continue;
            }
            if let Some(best) = explored.get(&new_p) {
                if *best <= new_dist {
                    continue;
                }
                explored.remove(&new_p);
            }
            if let Some(best) = explore.get(&new_p) {
                if *best <= new_dist {
                    continue;
                }
            }
            explore.insert(new_p, new_dist);
        }
    }

    false
}

fn has_sea_lane_connection(tiles: &[Tile], path: &[Path], q1: Point, q2: Point) -> bool {
    let Some(anchor1) = find_sea_lane_anchor(tiles, path, q1) else { return false };
    let Some(anchor2) = find_sea_lane_anchor(tiles, path, q2) else { return false };

    let connected = |_src: Point, dst: Point| {
        tile_exists(dst) && is_sea_lane_tile(tiles, path, dst)
    };
    has_path(anchor1, anchor2, MAX_LANE_DISTANCE, connected)
}

fn check_standard_map(tiles: &[Tile], path: &[Path]) -> Result<()> {
    if tiles.len() != MAP_WIDTH * MAP_HEIGHT {
        return Err(ColSavError::NonStandardMapSize(MAP_WIDTH * MAP_HEIGHT, tiles.len()));
    }
    if path.len() != MAP_WIDTH * MAP_HEIGHT {
        return Err(ColSavError::NonStandardMapSize(MAP_WIDTH * MAP_HEIGHT, path.len()));
    }
    Ok(())
}

/// This function populates the sea-lane half of the connectivity block the way it was
/// likely intended to be populated, without the original game's NE/SW suppression bug.
///
/// It relies on the tile matrix and the region ids of the `PATH` matrix being present and
/// correct, and it only works on the standard 58x72 map, which is the only size the game
/// supports.
pub fn populate_sea_lane_connectivity(tiles: &[Tile], path: &[Path], connectivity: &mut Connectivity) -> Result<()> {
    check_standard_map(tiles, path)?;

    for (qy, qx) in iproduct!(0..QUAD_ROWS, 0..QUAD_COLS) {
        let q = Point { x: qx, y: qy };

        // Because the sweep goes left to right, then top to bottom, and connections are
        // always recorded symmetrically, each quadrant only needs to examine four
        // neighbors; the other four directions were filled in by earlier quadrants.
        let cases: [(i32, i32); 4] = [(-1, 1), (0, 1), (1, 1), (1, 0)];
        for (dx, dy) in cases {
            let neighbor = q.offset(dx, dy);
            if !quad_exists(neighbor) {
                continue;
            }
            if !has_sea_lane_connection(tiles, path, q, neighbor) {
                continue;
            }
            let here = quad_offset(q);
            let there = quad_offset(neighbor);
            let sea = &mut connectivity.sea_lane_connectivity;
            match (dx, dy) {
                (-1, 1) => {
                    sea[here].swest = true;
                    sea[there].neast = true;
                },
                (0, 1) => {
                    sea[here].south = true;
                    sea[there].north = true;
                },
                (1, 1) => {
                    sea[here].seast = true;
                    sea[there].nwest = true;
                },
                (1, 0) => {
                    sea[here].east = true;
                    sea[there].west = true;
                },
                _ => unreachable!(),
            }
        }
    }

    Ok(())
}

/// This function populates the sea-lane connectivity the way the original game actually
/// does, bug included, so that regenerated files can be compared byte-exactly with files
/// the game wrote.
///
/// The bug: when a quadrant's NE neighbor is reachable, the quadrant directly above it is
/// fully disconnected, and the one two above is not, the game re-examines a handful of
/// tiles around the quadrant corner and, depending on what it finds, clears the NE/SW bit
/// pair it had just computed. The tile predicates below reproduce the observed behavior.
pub fn populate_sea_lane_connectivity_with_bug(tiles: &[Tile], path: &[Path], connectivity: &mut Connectivity) -> Result<()> {
    populate_sea_lane_connectivity(tiles, path, connectivity)?;

    let sea_lane = |p: Point| is_sea_lane_tile(tiles, path, p);

    for (qy, qx) in iproduct!((2..QUAD_ROWS).rev(), (0..QUAD_COLS - 1).rev()) {
        let q = Point { x: qx, y: qy };

        //  _  3  _
        //  _  4  2
        //  _  1  _
        let c1 = quad_offset(q);
        let c2 = quad_offset(q.offset(1, -1));
        let c3 = quad_offset(q.offset(0, -2));
        let c4 = quad_offset(q.offset(0, -1));

        let sea = &connectivity.sea_lane_connectivity;
        if !sea[c1].neast {
            continue;
        }
        if sea[c4] != SeaLaneConnectivity::default() {
            continue;
        }
        if sea[c3] == SeaLaneConnectivity::default() {
            continue;
        }

        let p = Point { x: q.x * 4, y: q.y * 4 };

        let sl_a = sea_lane(p.offset(3, 0));
        let sl_b = sea_lane(p.offset(4, -1));
        let sl_h = sea_lane(p.offset(4, 0));
        let nsl_c = !sea_lane(p.offset(4, -4));
        let nsl_d = !sea_lane(p.offset(3, -5));
        let nsl_g = !sea_lane(p.offset(4, -5));

        let clear_bottom = sl_a || sl_b || !sl_h;
        let clear_top = nsl_c || nsl_d || nsl_g;

        if clear_top || clear_bottom {
            let sea = &mut connectivity.sea_lane_connectivity;
            sea[c1].neast = false;
            sea[c2].swest = false;
        }
    }

    Ok(())
}

/// This function populates the connectivity block of a save. Only the sea-lane half is
/// computed; the land half is carried verbatim from whatever the block already holds.
pub fn populate_connectivity(tiles: &[Tile], path: &[Path], connectivity: &mut Connectivity) -> Result<()> {
    populate_sea_lane_connectivity(tiles, path, connectivity)
}
