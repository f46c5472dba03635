//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This is a module to read/write the classic game's `*.MP` map files.
//!
//! A map file is a truncated save: the map dimensions, a 2-byte marker (observed value
//! 0x0004, meaning unknown), and then the tile, mask and path vectors. Neither the game
//! nor its map editor supports dimensions other than 58x72, but other sizes are accepted
//! here just in case.
//!
//! Only the tile vector is reliable. The mask appears unused by map files, and the path
//! matrix is only populated when the user runs the editor's continent search, so neither
//! should be relied upon.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path as FsPath;

use crate::binary::{ReadBytes, WriteBytes};
use crate::cdr::{self, ConvError, Converter, FromCanonical, TableTracker, ToCanonical, Value};
use crate::error::{ColSavError, Result};
use crate::files::{read_vec, Decodeable, Encodeable};
use crate::schema::{FixedBytes, Mask, Path, Tile};


/// Extension used by map files.
pub const EXTENSION: &str = ".MP";

//---------------------------------------------------------------------------//
//                              Enums & Structs
//---------------------------------------------------------------------------//

/// This holds an entire map file decoded in memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapFile {
    pub map_size_x: u16,
    pub map_size_y: u16,
    pub unknown: FixedBytes<2>,
    pub tile: Vec<Tile>,
    pub mask: Vec<Mask>,
    pub path: Vec<Path>,
}

//---------------------------------------------------------------------------//
//                             Implementations
//---------------------------------------------------------------------------//

impl MapFile {

    /// This function reads a map file from disk.
    pub fn read_file(path: &FsPath) -> Result<Self> {
        let mut data = BufReader::new(File::open(path)?);
        Self::decode(&mut data)
    }

    /// This function writes the map file to disk.
    pub fn write_file(&self, path: &FsPath) -> Result<()> {
        let mut buffer = BufWriter::new(File::create(path)?);
        self.encode(&mut buffer)
    }

    /// Map area, in tiles.
    pub fn map_area(&self) -> usize {
        usize::from(self.map_size_x) * usize::from(self.map_size_y)
    }
}

impl Decodeable for MapFile {

    fn decode<R: ReadBytes>(data: &mut R) -> Result<Self> {
        let map_size_x = data.read_u16()?;
        let map_size_y = data.read_u16()?;
        let unknown = FixedBytes::decode(data)?;
        let map_area = usize::from(map_size_x) * usize::from(map_size_y);

        let map = Self {
            map_size_x,
            map_size_y,
            unknown,
            tile: read_vec(data, map_area)?,
            mask: read_vec(data, map_area)?,
            path: read_vec(data, map_area)?,
        };

        // Trigger an error if there's left data on the source.
        let curr_pos = data.stream_position()?;
        let len = data.len()?;
        if curr_pos != len {
            return Err(ColSavError::DecodingMismatchSizeError(len, curr_pos));
        }

        Ok(map)
    }
}

impl Encodeable for MapFile {

    fn encode<W: WriteBytes>(&self, buffer: &mut W) -> Result<()> {
        let map_area = self.map_area();
        if self.tile.len() != map_area {
            return Err(ColSavError::MismatchedCount { field: "tile", expected: map_area, found: self.tile.len() });
        }

        buffer.write_u16(self.map_size_x)?;
        buffer.write_u16(self.map_size_y)?;
        self.unknown.encode(buffer)?;
        self.tile.encode(buffer)?;

        // A map produced from scratch may carry empty mask/path matrices; materialize them
        // as zeroed entries so the file keeps the shape the editor expects.
        write_matrix(buffer, &self.mask, map_area, "mask")?;
        write_matrix(buffer, &self.path, map_area, "path")?;

        Ok(())
    }
}

fn write_matrix<T: Encodeable + Default, W: WriteBytes>(
    buffer: &mut W,
    matrix: &[T],
    map_area: usize,
    field: &'static str,
) -> Result<()> {
    if matrix.is_empty() {
        for _ in 0..map_area {
            T::default().encode(buffer)?;
        }
        Ok(())
    } else if matrix.len() == map_area {
        for element in matrix {
            element.encode(buffer)?;
        }
        Ok(())
    } else {
        Err(ColSavError::MismatchedCount { field, expected: map_area, found: matrix.len() })
    }
}

impl ToCanonical for MapFile {
    fn to_canonical(&self) -> Value {
        let mut table = cdr::Table::new();
        table.insert(cdr::KEY_ORDER, cdr::key_order_list(&["map_size_x", "map_size_y", "unknown", "tile", "mask", "path"]));
        table.insert("map_size_x", self.map_size_x.to_canonical());
        table.insert("map_size_y", self.map_size_y.to_canonical());
        table.insert("unknown", self.unknown.to_canonical());
        table.insert("tile", self.tile.to_canonical());
        table.insert("mask", self.mask.to_canonical());
        table.insert("path", self.path.to_canonical());
        Value::Table(table)
    }
}

impl FromCanonical for MapFile {
    fn from_canonical(conv: &mut Converter, value: &Value) -> Result<Self, ConvError> {
        let table = conv.expect_table(value)?;
        let mut tracker = TableTracker::new(table);

        macro_rules! field {
            ($key:literal, $fty:ty) => {{
                let field_value = tracker.field(conv, $key)?;
                conv.frame($key, |conv| <$fty as FromCanonical>::from_canonical(conv, field_value))?
            }};
        }

        let map = Self {
            map_size_x: field!("map_size_x", u16),
            map_size_y: field!("map_size_y", u16),
            unknown: field!("unknown", FixedBytes<2>),
            tile: field!("tile", Vec<Tile>),
            mask: field!("mask", Vec<Mask>),
            path: field!("path", Vec<Path>),
        };

        tracker.finish(conv)?;
        Ok(map)
    }
}
