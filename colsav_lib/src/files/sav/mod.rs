//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This is a module to read/write the classic game's `*.SAV` save files.
//!
//! A save file is the concatenation, with no framing, of the binary encoding of each field
//! below in declared order. Unlike every other record of the schema, this codec is written
//! by hand: the lengths of the `colony`/`unit`/`dwelling` vectors come from counts in the
//! header, and the four map vectors are `map_size_x * map_size_y` entries each, so the
//! header has to be read (and validated) before the rest of the file can be sized.
//!
//! On encode it is the caller's job to keep the header counts in sync with the vector
//! lengths; the codec refuses to write a file where they disagree, because the original
//! game would crash loading it.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path as FsPath;

use crate::binary::{ReadBytes, WriteBytes};
use crate::cdr::{self, ConvError, Converter, FromCanonical, TableTracker, ToCanonical, Value};
use crate::error::{ColSavError, Result};
use crate::files::{read_vec, Decodeable, Encodeable};
use crate::schema::*;

#[cfg(test)] mod sav_test;

/// Extension used by save files.
pub const EXTENSION: &str = ".SAV";

/// The 9-byte signature every save starts with.
pub const SIGNATURE: &[u8; 9] = b"COLONIZE\0";

//---------------------------------------------------------------------------//
//                              Enums & Structs
//---------------------------------------------------------------------------//

/// This holds an entire save decoded in memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColonySav {
    pub header: Header,
    pub player: [Player; 4],
    pub other: Other,
    pub colony: Vec<Colony>,
    pub unit: Vec<Unit>,
    pub nation: [Nation; 4],
    pub dwelling: Vec<Dwelling>,
    pub tribe: [Tribe; 8],
    pub stuff: Stuff,
    pub tile: Vec<Tile>,
    pub mask: Vec<Mask>,
    pub path: Vec<Path>,
    pub seen: Vec<Seen>,
    pub connectivity: Connectivity,
    pub unknown_map38c2: [FixedBytes<2>; 9],
    pub unknown_map38c3: FixedBytes<16>,
    pub strategy: [u16; 14],
    pub unknown_map38d: FixedBytes<10>,
    pub prime_resource_seed: u8,
    pub unknown39d: FixedBytes<1>,
    pub trade_route: [TradeRoute; 12],
}

const FIELD_KEYS: [&str; 21] = [
    "header", "player", "other", "colony", "unit", "nation", "dwelling", "tribe", "stuff",
    "tile", "mask", "path", "seen", "connectivity", "unknown_map38c2", "unknown_map38c3",
    "strategy", "unknown_map38d", "prime_resource_seed", "unknown39d", "trade_route",
];

//---------------------------------------------------------------------------//
//                             Implementations
//---------------------------------------------------------------------------//

impl ColonySav {

    /// This function reads a save from disk.
    pub fn read_file(path: &FsPath) -> Result<Self> {
        let mut data = BufReader::new(File::open(path)?);
        Self::decode(&mut data)
    }

    /// This function writes the save to disk.
    pub fn write_file(&self, path: &FsPath) -> Result<()> {
        let mut buffer = BufWriter::new(File::create(path)?);
        self.encode(&mut buffer)
    }

    /// Map area, in tiles, per the header. The four map vectors have this many entries.
    pub fn map_area(&self) -> usize {
        usize::from(self.header.map_size_x) * usize::from(self.header.map_size_y)
    }

    fn check_counts(&self) -> Result<()> {
        let checks: [(&'static str, usize, usize); 7] = [
            ("colony", usize::from(self.header.colony_count), self.colony.len()),
            ("unit", usize::from(self.header.unit_count), self.unit.len()),
            ("dwelling", usize::from(self.header.dwelling_count), self.dwelling.len()),
            ("tile", self.map_area(), self.tile.len()),
            ("mask", self.map_area(), self.mask.len()),
            ("path", self.map_area(), self.path.len()),
            ("seen", self.map_area(), self.seen.len()),
        ];
        for (field, expected, found) in checks {
            if expected != found {
                return Err(ColSavError::MismatchedCount { field, expected, found });
            }
        }
        Ok(())
    }
}

impl Decodeable for ColonySav {

    fn decode<R: ReadBytes>(data: &mut R) -> Result<Self> {
        let header = Header::decode(data)?;

        if header.colonize.0 != *SIGNATURE {
            return Err(ColSavError::DecodingNotASaveFile);
        }
        if header.map_size_x < 3 || header.map_size_y < 3 {
            return Err(ColSavError::DecodingInvalidMapSize(header.map_size_x, header.map_size_y));
        }

        let map_area = usize::from(header.map_size_x) * usize::from(header.map_size_y);

        let sav = Self {
            player: <[Player; 4]>::decode(data)?,
            other: Other::decode(data)?,
            colony: read_vec(data, usize::from(header.colony_count))?,
            unit: read_vec(data, usize::from(header.unit_count))?,
            nation: <[Nation; 4]>::decode(data)?,
            dwelling: read_vec(data, usize::from(header.dwelling_count))?,
            tribe: <[Tribe; 8]>::decode(data)?,
            stuff: Stuff::decode(data)?,
            tile: read_vec(data, map_area)?,
            mask: read_vec(data, map_area)?,
            path: read_vec(data, map_area)?,
            seen: read_vec(data, map_area)?,
            connectivity: Connectivity::decode(data)?,
            unknown_map38c2: <[FixedBytes<2>; 9]>::decode(data)?,
            unknown_map38c3: FixedBytes::decode(data)?,
            strategy: <[u16; 14]>::decode(data)?,
            unknown_map38d: FixedBytes::decode(data)?,
            prime_resource_seed: u8::decode(data)?,
            unknown39d: FixedBytes::decode(data)?,
            trade_route: <[TradeRoute; 12]>::decode(data)?,
            header,
        };

        // Trigger an error if there's left data on the source.
        let curr_pos = data.stream_position()?;
        let len = data.len()?;
        if curr_pos != len {
            return Err(ColSavError::DecodingMismatchSizeError(len, curr_pos));
        }

        Ok(sav)
    }
}

impl Encodeable for ColonySav {

    fn encode<W: WriteBytes>(&self, buffer: &mut W) -> Result<()> {
        self.check_counts()?;

        self.header.encode(buffer)?;
        self.player.encode(buffer)?;
        self.other.encode(buffer)?;
        self.colony.encode(buffer)?;
        self.unit.encode(buffer)?;
        self.nation.encode(buffer)?;
        self.dwelling.encode(buffer)?;
        self.tribe.encode(buffer)?;
        self.stuff.encode(buffer)?;
        self.tile.encode(buffer)?;
        self.mask.encode(buffer)?;
        self.path.encode(buffer)?;
        self.seen.encode(buffer)?;
        self.connectivity.encode(buffer)?;
        self.unknown_map38c2.encode(buffer)?;
        self.unknown_map38c3.encode(buffer)?;
        self.strategy.encode(buffer)?;
        self.unknown_map38d.encode(buffer)?;
        self.prime_resource_seed.encode(buffer)?;
        self.unknown39d.encode(buffer)?;
        self.trade_route.encode(buffer)?;

        Ok(())
    }
}

impl ToCanonical for ColonySav {
    fn to_canonical(&self) -> Value {
        let mut table = cdr::Table::new();
        table.insert(cdr::KEY_ORDER, cdr::key_order_list(&FIELD_KEYS));
        table.insert("header", self.header.to_canonical());
        table.insert("player", self.player.to_canonical());
        table.insert("other", self.other.to_canonical());
        table.insert("colony", self.colony.to_canonical());
        table.insert("unit", self.unit.to_canonical());
        table.insert("nation", self.nation.to_canonical());
        table.insert("dwelling", self.dwelling.to_canonical());
        table.insert("tribe", self.tribe.to_canonical());
        table.insert("stuff", self.stuff.to_canonical());
        table.insert("tile", self.tile.to_canonical());
        table.insert("mask", self.mask.to_canonical());
        table.insert("path", self.path.to_canonical());
        table.insert("seen", self.seen.to_canonical());
        table.insert("connectivity", self.connectivity.to_canonical());
        table.insert("unknown_map38c2", self.unknown_map38c2.to_canonical());
        table.insert("unknown_map38c3", self.unknown_map38c3.to_canonical());
        table.insert("strategy", self.strategy.to_canonical());
        table.insert("unknown_map38d", self.unknown_map38d.to_canonical());
        table.insert("prime_resource_seed", self.prime_resource_seed.to_canonical());
        table.insert("unknown39d", self.unknown39d.to_canonical());
        table.insert("trade_route", self.trade_route.to_canonical());
        Value::Table(table)
    }
}

impl FromCanonical for ColonySav {
    fn from_canonical(conv: &mut Converter, value: &Value) -> Result<Self, ConvError> {
        let table = conv.expect_table(value)?;
        let mut tracker = TableTracker::new(table);

        macro_rules! field {
            ($key:literal, $fty:ty) => {{
                let field_value = tracker.field(conv, $key)?;
                conv.frame($key, |conv| <$fty as FromCanonical>::from_canonical(conv, field_value))?
            }};
        }

        let sav = Self {
            header: field!("header", Header),
            player: field!("player", [Player; 4]),
            other: field!("other", Other),
            colony: field!("colony", Vec<Colony>),
            unit: field!("unit", Vec<Unit>),
            nation: field!("nation", [Nation; 4]),
            dwelling: field!("dwelling", Vec<Dwelling>),
            tribe: field!("tribe", [Tribe; 8]),
            stuff: field!("stuff", Stuff),
            tile: field!("tile", Vec<Tile>),
            mask: field!("mask", Vec<Mask>),
            path: field!("path", Vec<Path>),
            seen: field!("seen", Vec<Seen>),
            connectivity: field!("connectivity", Connectivity),
            unknown_map38c2: field!("unknown_map38c2", [FixedBytes<2>; 9]),
            unknown_map38c3: field!("unknown_map38c3", FixedBytes<16>),
            strategy: field!("strategy", [u16; 14]),
            unknown_map38d: field!("unknown_map38d", FixedBytes<10>),
            prime_resource_seed: field!("prime_resource_seed", u8),
            unknown39d: field!("unknown39d", FixedBytes<1>),
            trade_route: field!("trade_route", [TradeRoute; 12]),
        };

        tracker.finish(conv)?;
        Ok(sav)
    }
}
