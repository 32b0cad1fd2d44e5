//! Sheet shape classification
//!
//! Determines which structural variant of a layout family a sheet's pixel
//! dimensions match. Variants are recomputed from dimensions on every
//! conversion and never stored.

use crate::error::{Axis, SheetError};
use crate::formats::TileFormat;
use crate::geometry::tile_count;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural sub-shape of an autotile sheet within one layout family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetVariant {
    /// A single row of edge/corner tiles; carries no block structure, so it
    /// is the same under every layout family
    MinimalStrip,
    /// One or more full autotile blocks packed side by side horizontally
    /// (extra blocks are animation frames)
    StandardBlock,
}

impl fmt::Display for SheetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetVariant::MinimalStrip => f.write_str("minimal strip"),
            SheetVariant::StandardBlock => f.write_str("standard block"),
        }
    }
}

/// Classify a sheet's pixel dimensions against one layout family
///
/// Width and height are validated independently so each axis keeps its own
/// user-facing failure. A height of one tile row is a minimal strip for any
/// column count; the family's block row count is a standard block provided
/// the column count is a whole number of blocks; every other row count is
/// unsupported.
pub fn classify(
    width: u32,
    height: u32,
    tile_size: u32,
    format: TileFormat,
) -> Result<SheetVariant, SheetError> {
    let cols = tile_count(Axis::Width, width, tile_size)?;
    let rows = tile_count(Axis::Height, height, tile_size)?;

    if rows == 1 {
        return Ok(SheetVariant::MinimalStrip);
    }

    if rows == format.block_rows() {
        if cols % format.block_cols() != 0 {
            return Err(SheetError::UnsupportedWidth { width, format });
        }
        return Ok(SheetVariant::StandardBlock);
    }

    Err(SheetError::UnsupportedHeight { height, format })
}
