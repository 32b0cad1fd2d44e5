//! Autotile block layout remapping between engine generations
//!
//! RPG Maker autotile semantics are defined on half-tile *quadrants*: every
//! rendered map tile is assembled from four quadrants of the sheet, so the
//! correspondence between the XP 3x4 block and the VX/MV 2x3 "A2" block is a
//! quadrant-to-quadrant mapping rather than a whole-tile permutation. This
//! crate encodes those mappings as fixed tables and applies them to decoded
//! sheets, one block (animation frame) at a time.

mod remap;
mod tables;

pub use remap::remap;
pub use tables::{permutation, QuadrantMap};
