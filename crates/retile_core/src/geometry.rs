//! Tile geometry primitives
//!
//! Validates pixel dimensions against the fixed logical tile size and
//! converts them to tile counts.

use crate::error::{Axis, SheetError};

/// Pixel edge length of one logical tile
///
/// Both source and destination sheets share this size; cross-tile-size
/// conversion is rejected upstream.
pub const TILE_SIZE: u32 = 32;

/// Whether a pixel dimension is a positive exact multiple of the tile size
pub fn is_tile_multiple(dimension: u32, tile_size: u32) -> bool {
    tile_size > 0 && dimension > 0 && dimension % tile_size == 0
}

/// Number of whole tiles along one axis
///
/// Fails with `InvalidDimension` unless the dimension is a positive
/// multiple of `tile_size`.
pub fn tile_count(axis: Axis, dimension: u32, tile_size: u32) -> Result<u32, SheetError> {
    if !is_tile_multiple(dimension, tile_size) {
        return Err(SheetError::InvalidDimension {
            axis,
            value: dimension,
            tile_size,
        });
    }
    Ok(dimension / tile_size)
}
