// Copyright 2026 The Periodix Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core Periodix periodicity detection.
//!
//! Fingerprint sensors and synthetic generators sometimes place minutiae on a lattice rather than
//! where the ridges actually end or split.  Accumulating the placements over many prints yields a
//! density map.  Natural placement produces a smooth, noisy map.  Lattice placement produces a
//! comb of sharp peaks in the frequency domain.  This crate measures that comb.
//!
//! The pipeline is deliberately short:
//!
//! 1. [`density`] turns a coordinate table or a grayscale raster into a square [`grid::Grid`].
//! 2. [`dsp::window`] tapers the edges so the hard border does not paint a cross into the spectrum.
//! 3. [`dsp::dft`] computes the DC-normalized, centered magnitude spectrum.
//! 4. [`dsp::suppress`] zeroes the disk of broad-scale energy around DC.
//! 5. [`dsp::decision`] compares whatever peak survives against a fixed empirical threshold.
//!
//! Every call is independent.  Nothing is cached between invocations except constants.

use std::path::PathBuf;

pub mod density;
pub mod dsp;
pub mod grid;

pub mod prelude {
    pub use crate::density::DensitySource;
    pub use crate::dsp::decision::{Decision, THRESHOLD};
    pub use crate::dsp::{AnalysisArgs, analyze};
    pub use crate::grid::Grid;
    pub use crate::PeriodixError;
}

#[derive(thiserror::Error, Debug)]
pub enum PeriodixError {
    #[error("usage: {0}")]
    Usage(String),

    #[error("input not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported input format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("coordinate ({x}, {y}) lies outside the {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },

    #[error("density map must be square, got {width}x{height}")]
    NotSquare { width: usize, height: usize },

    #[error("invalid density {value} at ({row}, {col})")]
    InvalidValue { row: usize, col: usize, value: f64 },

    #[error("degenerate input: DC term is zero, the density map is empty")]
    Degenerate,

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "raster")]
    #[error("image: {0}")]
    Image(#[from] image::ImageError),
}
