//! Error kinds for sheet classification and remapping

use crate::formats::TileFormat;
use crate::sheet::SheetVariant;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Pixel axis a dimension check applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

/// Errors raised while classifying or remapping a sheet
///
/// `InvalidDimension` covers dimensions that are not positive multiples of
/// the tile size; `UnsupportedWidth` and `UnsupportedHeight` cover valid
/// multiples that match no known variant of the family.
#[derive(Debug, Clone, Error)]
pub enum SheetError {
    #[error("{axis} of {value}px is not a positive multiple of the {tile_size}px tile size")]
    InvalidDimension {
        axis: Axis,
        value: u32,
        tile_size: u32,
    },

    #[error("unsupported sheet width {width}px for {format} sheets")]
    UnsupportedWidth { width: u32, format: TileFormat },

    #[error("unsupported sheet height {height}px for {format} sheets")]
    UnsupportedHeight { height: u32, format: TileFormat },

    #[error("no conversion defined from {from_format} {variant} sheets to {target}")]
    UnsupportedConversion {
        from_format: TileFormat,
        target: TileFormat,
        variant: SheetVariant,
    },
}
