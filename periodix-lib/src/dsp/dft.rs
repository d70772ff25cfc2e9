// Copyright 2026 The Periodix Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Discrete Fourier Transform
//!
//! The 2-D magnitude spectrum of a windowed density map, normalized by its DC term and centered.
//!
//! The transform is separable: a forward FFT over every row followed by a forward FFT over every
//! column.  No scaling is applied in either direction.  Because we divide by DC afterwards, any
//! scaling convention would cancel anyway.

use log::debug;
use num_complex::Complex;
use num_traits::Zero;
use rustfft::FftPlanner;

use crate::grid::{self, Grid};
use crate::PeriodixError;

/// DC-normalized magnitude spectrum, DC still at `(0, 0)`.
///
/// Fails with [`PeriodixError::Degenerate`] when DC is zero.  A zero DC on a non-negative map
/// means there was no mass at all, at least none that survived the window.
pub fn magnitude_spectrum(grid: &Grid<f64>) -> Result<Grid<f64>, PeriodixError> {
    let n = grid.size();
    let transformed = fft_2d(grid);

    // After the column pass the buffer is column-major.
    let magnitude = Grid::from_fn(n, |r, c| transformed[c * n + r].norm());
    let dc = magnitude.get(0, 0);
    debug!("spectrum: DC magnitude {dc:.6e}");
    if dc == 0.0 || !dc.is_finite() {
        return Err(PeriodixError::Degenerate);
    }

    Ok(magnitude.map(|m| m / dc))
}

/// Roll rows and columns so that `(0, 0)` moves to `(n / 2, n / 2)`.
pub fn center(spectrum: &Grid<f64>) -> Grid<f64> {
    let n = spectrum.size();
    Grid::from_fn(n, |r, c| {
        spectrum.get(
            grid::centered_source_index(r, n),
            grid::centered_source_index(c, n),
        )
    })
}

/// Magnitude, DC normalization, and centering in one call.
pub fn centered_spectrum(grid: &Grid<f64>) -> Result<Grid<f64>, PeriodixError> {
    Ok(center(&magnitude_spectrum(grid)?))
}

/// Forward 2-D FFT.  Returns the spectrum transposed, in column-major order.
fn fft_2d(grid: &Grid<f64>) -> Vec<Complex<f64>> {
    let n = grid.size();
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);

    let mut buffer: Vec<Complex<f64>> = grid
        .as_slice()
        .iter()
        .map(|&v| Complex::new(v, 0.0))
        .collect();

    // rustfft processes every consecutive chunk of `n` as its own transform.
    fft.process(&mut buffer);
    let mut columns = transpose(&buffer, n);
    fft.process(&mut columns);
    columns
}

fn transpose(buffer: &[Complex<f64>], n: usize) -> Vec<Complex<f64>> {
    let mut out = vec![Complex::zero(); n * n];
    for r in 0..n {
        for c in 0..n {
            out[c * n + r] = buffer[r * n + c];
        }
    }
    out
}
