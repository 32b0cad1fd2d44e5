//! Batch conversion of autotile sheets between engine generations
//!
//! The library half of the `retile` binary:
//! - `convert_sheet` - the per-file pipeline: decode, classify, remap, encode
//! - `run_batch` - directory-level driver that never lets one sheet's
//!   failure stop the run

mod batch;
mod convert;
mod error;

pub use batch::{collect_sheets, run_batch, BatchError, BatchSummary};
pub use convert::{convert_sheet, ConversionOutcome};
pub use error::ConvertError;
