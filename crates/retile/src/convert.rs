//! Per-file conversion pipeline
//!
//! Composes decode, classification, remapping and encode for one sheet and
//! reports a structured outcome. No error escapes this boundary; a sheet
//! either fully converts or yields one classified failure.

use std::path::{Path, PathBuf};

use log::debug;
use retile_autotile::remap;
use retile_core::{classify, SheetError, SheetVariant, TileFormat, TILE_SIZE};

use crate::error::ConvertError;

/// Result of converting one input file
#[derive(Debug)]
pub enum ConversionOutcome {
    /// The converted sheet was written to `output`
    Converted { input: PathBuf, output: PathBuf },
    /// Nothing was written for `input`
    Failed { input: PathBuf, error: ConvertError },
}

impl ConversionOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionOutcome::Converted { .. })
    }

    /// The input file this outcome describes
    pub fn input(&self) -> &Path {
        match self {
            ConversionOutcome::Converted { input, .. } => input,
            ConversionOutcome::Failed { input, .. } => input,
        }
    }
}

/// Convert one autotile sheet into `output_dir` under its own file name
///
/// An existing output file of the same name is overwritten.
pub fn convert_sheet(input: &Path, output_dir: &Path, target: TileFormat) -> ConversionOutcome {
    match try_convert(input, output_dir, target) {
        Ok(output) => ConversionOutcome::Converted {
            input: input.to_path_buf(),
            output,
        },
        Err(error) => ConversionOutcome::Failed {
            input: input.to_path_buf(),
            error,
        },
    }
}

fn try_convert(
    input: &Path,
    output_dir: &Path,
    target: TileFormat,
) -> Result<PathBuf, ConvertError> {
    let sheet = image::open(input)
        .map_err(|source| ConvertError::Decode {
            path: input.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (source, variant) = detect_source(sheet.width(), sheet.height(), target)?;
    debug!(
        "{}: {}x{} is a {} {}",
        input.display(),
        sheet.width(),
        sheet.height(),
        source,
        variant
    );

    let converted = remap(&sheet, source, target, variant, TILE_SIZE)?;

    let output = output_dir.join(input.file_name().unwrap_or(input.as_os_str()));
    converted.save(&output).map_err(|source| ConvertError::Encode {
        path: output.clone(),
        source,
    })?;
    Ok(output)
}

/// Determine which family's geometry the sheet carries
///
/// The requested target family is tried first (the identity and
/// normalization path), then the remaining families in declaration order.
/// When nothing matches, the target family's classification error is
/// reported so diagnostics speak in terms of the format the user asked for.
fn detect_source(
    width: u32,
    height: u32,
    target: TileFormat,
) -> Result<(TileFormat, SheetVariant), SheetError> {
    let target_err = match classify(width, height, TILE_SIZE, target) {
        Ok(variant) => return Ok((target, variant)),
        Err(err) => err,
    };

    for format in TileFormat::ALL {
        if format == target {
            continue;
        }
        if let Ok(variant) = classify(width, height, TILE_SIZE, format) {
            return Ok((format, variant));
        }
    }

    Err(target_err)
}
