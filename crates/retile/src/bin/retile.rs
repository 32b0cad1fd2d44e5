//! Autotile sheet conversion CLI
//!
//! Converts every autotile sheet in a directory to the requested tile
//! layout family:
//!
//! ```text
//! retile --input autotiles/ --output converted/ --format rmvx
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use retile::run_batch;
use retile_core::TileFormat;

#[derive(Parser, Debug)]
#[command(
    name = "retile",
    version,
    about = "Convert autotile sheets between RPG Maker tile layout generations"
)]
struct Args {
    /// Directory containing the source autotile sheets (*.png)
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Directory the converted sheets are written to (created if missing)
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Target tile layout family
    #[arg(long, default_value = "rmxp", value_parser = TileFormat::from_str)]
    format: TileFormat,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let summary = match run_batch(&args.input, &args.output, args.format) {
        Ok(summary) => summary,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if summary.total() == 0 {
        log::error!("no .png sheets found in {}", args.input.display());
        return ExitCode::FAILURE;
    }

    log::info!("{} converted, {} failed", summary.converted, summary.failed);
    ExitCode::SUCCESS
}
