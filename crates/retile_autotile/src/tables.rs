//! Quadrant permutation tables between block layouts
//!
//! One standard XP block is 3x4 tiles = 6x8 quadrants:
//!
//! ```text
//!   island | unused | inner     (quadrant rows 0-1)
//!   TL     | T      | TR        (quadrant rows 2-7:
//!   L      | C      | R          the 3x3 bordered terrain patch)
//!   BL     | B      | BR
//! ```
//!
//! One VX/MV "A2" block is 2x3 tiles = 4x6 quadrants: island and inner
//! corners on top, a 2x2 bordered patch below. The A2 block stores only the
//! defining quadrants; the XP edge middles, patch centre and the unused tile
//! are derived from them, so the two directions are not symmetric:
//!
//! - XP -> A2 selects the 24 defining quadrants.
//! - A2 -> XP re-expands to 48: edge middles alternate the two edge
//!   variants, the 4x4 patch interior tiles the 2x2 fill periodically, and
//!   the unused tile mirrors the island.
//!
//! Entry `i` of a table holds the source `[col, row]` for destination
//! quadrant `i` in row-major order. Applying a table to the block a second
//! table produced returns the original defining quadrants exactly.

use retile_core::TileFormat;

/// Per-block quadrant permutation: source `[col, row]` per destination
/// quadrant, row-major over the destination block
pub type QuadrantMap = &'static [[u8; 2]];

/// XP 6x8 block -> VX/MV 4x6 block (select the defining quadrants)
pub const XP_TO_A2: [[u8; 2]; 24] = [
    // island            inner corners
    [0, 0], [1, 0], [4, 0], [5, 0],
    [0, 1], [1, 1], [4, 1], [5, 1],
    // patch corners, outer quadrant rows
    [0, 2], [1, 2], [4, 2], [5, 2],
    [0, 3], [1, 3], [4, 3], [5, 3],
    [0, 6], [1, 6], [4, 6], [5, 6],
    [0, 7], [1, 7], [4, 7], [5, 7],
];

/// VX/MV 4x6 block -> XP 6x8 block (canonical expansion)
pub const A2_TO_XP: [[u8; 2]; 48] = [
    // island            island again (unused tile)   inner corners
    [0, 0], [1, 0], [0, 0], [1, 0], [2, 0], [3, 0],
    [0, 1], [1, 1], [0, 1], [1, 1], [2, 1], [3, 1],
    // patch: top edge alternates its two variants
    [0, 2], [1, 2], [2, 2], [1, 2], [2, 2], [3, 2],
    // patch interior tiles the 2x2 fill, edges alternate down the sides
    [0, 3], [1, 3], [2, 3], [1, 3], [2, 3], [3, 3],
    [0, 4], [1, 4], [2, 4], [1, 4], [2, 4], [3, 4],
    [0, 3], [1, 3], [2, 3], [1, 3], [2, 3], [3, 3],
    [0, 4], [1, 4], [2, 4], [1, 4], [2, 4], [3, 4],
    // patch: bottom edge
    [0, 5], [1, 5], [2, 5], [1, 5], [2, 5], [3, 5],
];

/// Look up the per-block quadrant map for a (source, target) pair
///
/// Identity pairs are handled before any table lookup and return `None`
/// here, as do the deliberately unregistered rmvx/rmmv cross-conversions:
/// those two generations share the A2 arrangement only at the legacy 32px
/// raster, so relabelling between them is refused rather than pretending
/// the sheets suit the target engine's native assets.
pub fn permutation(source: TileFormat, target: TileFormat) -> Option<QuadrantMap> {
    match (source, target) {
        (TileFormat::Rmxp, TileFormat::Rmvx) | (TileFormat::Rmxp, TileFormat::Rmmv) => {
            Some(&XP_TO_A2)
        }
        (TileFormat::Rmvx, TileFormat::Rmxp) | (TileFormat::Rmmv, TileFormat::Rmxp) => {
            Some(&A2_TO_XP)
        }
        (TileFormat::Rmvx, TileFormat::Rmmv) | (TileFormat::Rmmv, TileFormat::Rmvx) => None,
        (TileFormat::Rmxp, TileFormat::Rmxp)
        | (TileFormat::Rmvx, TileFormat::Rmvx)
        | (TileFormat::Rmmv, TileFormat::Rmmv) => None,
    }
}
