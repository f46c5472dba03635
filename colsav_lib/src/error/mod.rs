//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains all kind of errors used inside this crate.

use thiserror::Error;

use crate::cdr::ConvError;

/// Custom `Result` type, to always return our custom error.
pub type Result<T, E = ColSavError> = core::result::Result<T, E>;

/// Custom error type for the lib.
#[derive(Error, Debug)]
pub enum ColSavError {

    #[error("This file does not start with the \"COLONIZE\" signature of a classic save.")]
    DecodingNotASaveFile,

    #[error("Invalid map size {0}x{1}: a map is at least 3x3, counting its invisible ocean border.")]
    DecodingInvalidMapSize(u16, u16),

    #[error("Error trying to decode the file: it contains {0} bytes, but decoding consumed {1}.")]
    DecodingMismatchSizeError(u64, u64),

    #[error("The {field} count in the header ({expected}) does not match the number of {field} entries present ({found}).")]
    MismatchedCount {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("A bit array needs a multiple of 8 bits to have a binary form, but this one has {0}.")]
    NonByteAlignedBits(usize),

    #[error("The connectivity matrix is only defined for the standard 58x72 map ({0} tiles), but this map has {1}.")]
    NonStandardMapSize(usize, usize),

    #[error(transparent)]
    Canonical(#[from] ConvError),

    /// Semantic impossibility found while translating between the legacy and
    /// the modern save representation. The message is user-presentable.
    #[error("{0}")]
    Translation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
