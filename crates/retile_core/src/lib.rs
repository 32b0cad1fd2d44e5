//! Core geometry and vocabulary for autotile sheet conversion
//!
//! This crate provides the pure, image-free half of retile:
//! - `TileFormat` - the three supported engine generations
//! - `SheetVariant` and `classify` - shape classification from pixel dimensions
//! - Tile geometry primitives and the shared `SheetError` kinds

mod error;
mod formats;
mod geometry;
mod sheet;

pub use error::{Axis, SheetError};
pub use formats::{ParseFormatError, TileFormat};
pub use geometry::{is_tile_multiple, tile_count, TILE_SIZE};
pub use sheet::{classify, SheetVariant};
