// Copyright 2026 The Periodix Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Window Functions
//!
//! Separable 2-D tapers.  Each window is a 1-D weight vector; the 2-D weight at `(r, c)` is the
//! product of the row weight and the column weight.

use std::f64::consts::PI as PI64;

use crate::grid::{Grid, MIN_SIZE};
use crate::PeriodixError;

/// ## Window Choice
///
/// A density map is a finite patch of an unbounded plane.  The DFT treats it as one tile of an
/// infinite periodic tiling, so if the left edge does not match the right edge, the seam is a step
/// and a step has energy at every frequency along its axis.  In a fingerprint map the seam is
/// rarely matched: the finger sits in the middle and the borders are whatever the crop left behind.
/// The result is a bright `+` through the spectrum, which is the signature of a horizontal and a
/// vertical lattice.  That is the one thing we cannot afford to see by accident.
///
/// Tapering every edge to zero makes all four seams match trivially.  The price is a wider main lobe
/// around every true peak, which the suppression disk already forgives near DC and which does not
/// move the height of peaks farther out by much.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum WindowFunction {
    /// Half a period of sine across the map, `sin(π·i/(N−1))`.  Zero at both edges and one at the
    /// center.  The decision threshold was tuned against this window.
    #[default]
    Sine,
    /// Also known as the Rectangle.  No taper at all.  Keeps the seam and its cross.  Only useful
    /// for seeing what the taper buys.
    BoxCar,
}

impl WindowFunction {
    /// Build the 1-D weights for a map with side `size`.
    pub fn make_window(&self, size: usize) -> Result<Vec<f64>, PeriodixError> {
        if size < MIN_SIZE {
            return Err(PeriodixError::Usage(format!(
                "window size must be at least {MIN_SIZE}, got {size}"
            )));
        }
        Ok(match self {
            Self::Sine => sample_weights(&sine, size),
            Self::BoxCar => sample_weights(&boxcar, size),
        })
    }

    /// Multiply every cell of `grid` by the separable window weight for its row and column.
    pub fn apply(&self, grid: &Grid<f64>) -> Result<Grid<f64>, PeriodixError> {
        let weights = self.make_window(grid.size())?;
        Ok(Grid::from_fn(grid.size(), |r, c| {
            grid.get(r, c) * weights[r] * weights[c]
        }))
    }
}

fn boxcar(_x: f64) -> f64 {
    1.0
}

fn sine(x: f64) -> f64 {
    (PI64 * x).sin()
}

/// Sample `window_fn` on `[0, 1]` at `size` evenly spaced points, both endpoints included.
pub fn sample_weights(window_fn: &impl Fn(f64) -> f64, size: usize) -> Vec<f64> {
    let last = (size - 1) as f64;
    (0..size).map(|i| window_fn(i as f64 / last)).collect()
}
