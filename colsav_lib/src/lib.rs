//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This is the ColSav Lib, a lib to decode/encode the save files of the classic 1994
//! Colonization and translate them to and from the state tree of the modern
//! reimplementation.
//!
//! The lib is organized in layers, leaves first:
//!
//! - [`binary`]: a typed little-endian cursor over bytes.
//! - [`cdr`]: the canonical, JSON-renderable tree used for dumps and analysis.
//! - [`schema`]: the complete legacy save layout — enums, packed bit-records and
//!   aggregate records — with binary, text and canonical codecs generated from one
//!   declaration each.
//! - [`files`]: the `*.SAV` and `*.MP` file types built from the schema.
//! - [`connectivity`]: the map analysis passes (tile region ids and quadrant sea-lane
//!   connectivity) that the game stores inside its saves.
//! - [`state`] and [`bridge`]: the modern state types the translation touches, and the
//!   translators between the two representations.
//!
//! Everything is synchronous and single-threaded; schema values are plain data and own
//! all their contents.

pub mod binary;
pub mod bridge;
pub mod cdr;
pub mod connectivity;
pub mod error;
pub mod files;
pub mod schema;
pub mod state;
