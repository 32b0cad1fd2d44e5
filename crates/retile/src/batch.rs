//! Batch conversion over a directory of sheets
//!
//! One failing sheet never aborts the run: every discovered file is
//! attempted, failures are logged and counted, and only batch setup
//! (unreadable input directory, uncreatable output directory) is fatal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{error, info};
use retile_core::TileFormat;
use thiserror::Error;

use crate::convert::{convert_sheet, ConversionOutcome};

/// Fatal batch-setup failures; per-file failures are never fatal
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read input directory {}: {source}", path.display())]
    InputDir { path: PathBuf, source: io::Error },

    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir { path: PathBuf, source: io::Error },
}

/// Counts of per-file outcomes for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

impl BatchSummary {
    /// Total number of sheets attempted
    pub fn total(&self) -> usize {
        self.converted + self.failed
    }
}

/// List the candidate sheet files in a directory, in no particular order
pub fn collect_sheets(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let entries = fs::read_dir(dir).map_err(|source| BatchError::InputDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut sheets = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BatchError::InputDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        {
            sheets.push(path);
        }
    }
    Ok(sheets)
}

/// Convert every sheet in `input_dir` into `output_dir`
///
/// The output directory is created if missing. Converted sheets keep their
/// input file names; if two inputs somehow share a basename the later write
/// wins.
pub fn run_batch(
    input_dir: &Path,
    output_dir: &Path,
    target: TileFormat,
) -> Result<BatchSummary, BatchError> {
    fs::create_dir_all(output_dir).map_err(|source| BatchError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut summary = BatchSummary::default();
    for sheet in collect_sheets(input_dir)? {
        match convert_sheet(&sheet, output_dir, target) {
            ConversionOutcome::Converted { input, output } => {
                info!("converted {} -> {}", input.display(), output.display());
                summary.converted += 1;
            }
            ConversionOutcome::Failed { input, error } => {
                error!("failed to convert {}: {error}", input.display());
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
