// Copyright 2026 The Periodix Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Digital Signal Processing
//!
//! Periodix needs to tell a lattice apart from noise.  A density map built from natural minutia
//! placement is lumpy at every scale: ridges flow, cores and deltas cluster, and the finger itself
//! is a big bright blob in the middle of the map.  A sensor or generator that snaps minutiae to a
//! lattice adds something none of those produce, a small number of sharp, strong frequencies far
//! from DC.
//!
//! ## The Pipeline
//!
//! - [`window`] tapers the map toward zero at its borders.  Without it, the hard edge is itself a
//!   rectangle function and its sinc side lobes paint a bright cross through the spectrum that
//!   looks exactly like a horizontal and vertical lattice.
//! - [`dft`] computes the magnitude of the 2-D DFT, divides it by DC so that maps with different
//!   minutia totals are comparable, and rolls DC to the center.
//! - [`suppress`] zeroes a disk around DC.  Whatever energy the overall shape of the finger
//!   contributes lives there.
//! - [`decision`] takes the largest surviving magnitude and compares it to an empirical threshold.
//!
//! ## Tuning
//!
//! The threshold was chosen against the raised-sine window and a suppression radius of 16 cells.
//! Changing either one through [`AnalysisArgs`] invalidates the threshold, so the CLI does not
//! offer them.

use log::debug;

use crate::grid::Grid;
use crate::PeriodixError;

pub mod decision;
pub mod dft;
pub mod suppress;
pub mod window;

/// Radius, in grid cells, of the disk around DC that is discarded before thresholding.
pub const DEFAULT_SUPPRESSION_RADIUS: f64 = 16.0;

#[derive(Debug, Clone, Copy)]
pub struct AnalysisArgs {
    /// Edge taper applied before the transform.
    pub window: window::WindowFunction,
    /// Radius of the low-frequency disk to zero.  Must be finite and non-negative.
    pub suppression_radius: f64,
}

impl Default for AnalysisArgs {
    fn default() -> Self {
        AnalysisArgs {
            window: window::WindowFunction::Sine,
            suppression_radius: DEFAULT_SUPPRESSION_RADIUS,
        }
    }
}

impl AnalysisArgs {
    fn check(&self) -> Result<(), PeriodixError> {
        if !self.suppression_radius.is_finite() || self.suppression_radius < 0.0 {
            return Err(PeriodixError::Usage(format!(
                "suppression radius must be finite and non-negative, got {}",
                self.suppression_radius
            )));
        }
        Ok(())
    }
}

/// Result of one pass through the pipeline.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub decision: decision::Decision,
    /// Centered, DC-normalized spectrum after low-frequency suppression.
    pub spectrum: Grid<f64>,
}

/// Run the whole pipeline on one density map.
pub fn analyze(density: &Grid<f64>, args: &AnalysisArgs) -> Result<Analysis, PeriodixError> {
    args.check()?;
    density.check_density()?;
    debug!(
        "density: {n}x{n}, mass {mass:.3}",
        n = density.size(),
        mass = density.sum()
    );

    let windowed = args.window.apply(density)?;
    let spectrum = dft::centered_spectrum(&windowed)?;
    let suppressed = suppress::suppress_low_frequencies(&spectrum, args.suppression_radius);
    let decision = decision::Decision::decide(&suppressed);

    debug!(
        "decision: score {:.6} at {:?}, periodic {}",
        decision.score, decision.peak, decision.periodic
    );

    Ok(Analysis {
        decision,
        spectrum: suppressed,
    })
}
