//! Tile layout format vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One engine generation's convention for arranging sub-tiles within an
/// autotile sheet
///
/// The set is closed: adding a generation means adding a variant here and
/// letting the compiler point at every `match` that needs a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TileFormat {
    /// RPG Maker XP: 3x4 tile blocks (96x128 at the 32px tile size)
    #[default]
    Rmxp,
    /// RPG Maker VX / VX Ace: 2x3 tile "A2" blocks (64x96)
    Rmvx,
    /// RPG Maker MV: inherits the VX A2 block arrangement
    Rmmv,
}

impl TileFormat {
    /// Every supported format, in source-detection order
    pub const ALL: [TileFormat; 3] = [TileFormat::Rmxp, TileFormat::Rmvx, TileFormat::Rmmv];

    /// Tile columns in one standard autotile block of this family
    pub fn block_cols(&self) -> u32 {
        match self {
            TileFormat::Rmxp => 3,
            TileFormat::Rmvx | TileFormat::Rmmv => 2,
        }
    }

    /// Tile rows in one standard autotile block of this family
    pub fn block_rows(&self) -> u32 {
        match self {
            TileFormat::Rmxp => 4,
            TileFormat::Rmvx | TileFormat::Rmmv => 3,
        }
    }

    /// The name used on the CLI and in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            TileFormat::Rmxp => "rmxp",
            TileFormat::Rmvx => "rmvx",
            TileFormat::Rmmv => "rmmv",
        }
    }
}

impl fmt::Display for TileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown format name
#[derive(Debug, Clone, Error)]
#[error("unknown tile format '{0}', expected one of: rmxp, rmvx, rmmv")]
pub struct ParseFormatError(String);

impl FromStr for TileFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rmxp" => Ok(TileFormat::Rmxp),
            "rmvx" => Ok(TileFormat::Rmvx),
            "rmmv" => Ok(TileFormat::Rmmv),
            other => Err(ParseFormatError(other.to_string())),
        }
    }
}
