// Copyright 2026 The Periodix Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Periodix
//!
//! Judge one minutia density map.  Prints the input, the decision, and the score, then exits with
//! `1` when the map looks periodic and `0` when it does not.  Yes, backwards.  Scripts branch on
//! the status as a flag.  Anything that goes wrong exits with `2`, and so do `--help` and
//! `--version`, since neither produced a decision.
//!
//! ```text
//! periodix density.csv 512
//! periodix density.png
//! ```

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, info};

use periodix_lib::{self as periodix, density::raster, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "periodix", version)]
#[command(about = "Detect periodic, grid-like minutia placement in a density map.", long_about = None)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Density table (`.csv` with `x,y,count`) or square grayscale density image
    #[arg(index = 1)]
    input: PathBuf,

    /// Grid side length.  Required for tables, ignored for images.
    #[arg(index = 2)]
    grid_size: Option<usize>,

    /// Also write the suppressed spectrum to this PNG
    #[arg(long = "spectrum-png")]
    spectrum_png: Option<PathBuf>,

    /// Log pipeline statistics to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Periodix(#[from] periodix::PeriodixError),
}

/// Status for a completed analysis.  Inverted on purpose: periodic is `1`.
const EXIT_PERIODIC: u8 = 1;
const EXIT_NOT_PERIODIC: u8 = 0;
/// Status when no decision could be made.  Matches clap's usage errors.
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(status) => return ExitCode::from(status),
    };
    init_logging(args.verbose);

    match run(&args) {
        Ok(decision) => ExitCode::from(exit_status(&decision)),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Parse `argv`, printing clap's output on failure.  Every non-analysis outcome, including help
/// and version, maps to `EXIT_FAILURE` so that `0` always means "not periodic".
fn parse_args<I, T>(argv: I) -> Result<Args, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(argv).map_err(|e| {
        let _ = e.print();
        EXIT_FAILURE
    })
}

/// `RUST_LOG` wins when set.  Otherwise warnings, or debug with `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> Result<Decision, CliError> {
    let source = DensitySource::resolve(&args.input, args.grid_size)?;
    let density = source.load()?;
    let analysis = analyze(&density, &AnalysisArgs::default())?;

    if let Some(path) = &args.spectrum_png {
        raster::save_spectrum_png(&analysis.spectrum, path)?;
        info!("wrote spectrum to {}", path.display());
    }

    let label = args.input.display().to_string();
    for line in analysis.decision.report_lines(&label) {
        println!("{line}");
    }
    Ok(analysis.decision)
}

fn exit_status(decision: &Decision) -> u8 {
    if decision.periodic {
        EXIT_PERIODIC
    } else {
        EXIT_NOT_PERIODIC
    }
}
