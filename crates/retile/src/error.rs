//! Application-level conversion errors

use retile_core::SheetError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single sheet failed to convert
///
/// Every kind is deterministic for a given input, so there are no retries;
/// the batch driver reports the failure and moves on.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Geometry or layout problem reported by the classifier or remapper
    #[error("{0}")]
    Sheet(#[from] SheetError),

    /// Input file could not be read or decoded
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Output file could not be written
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}
