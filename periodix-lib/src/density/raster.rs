// Copyright 2026 The Periodix Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Grayscale Rasters
//!
//! An image whose luma is the density.  Counts above 255 have already been clipped or rescaled by
//! whoever drew it, so this path is an approximation of the table path, but peaks move with the
//! lattice, not with the gain, and the threshold holds up well enough.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::grid::Grid;
use crate::PeriodixError;

/// Decode any supported image into a density map of 8-bit luma values.
pub fn load_raster(path: &Path) -> Result<Grid<f64>, PeriodixError> {
    let img = image::open(path)?.into_luma8();
    let (width, height) = (img.width() as usize, img.height() as usize);
    if width != height {
        return Err(PeriodixError::NotSquare { width, height });
    }
    let data = img.into_raw().into_iter().map(f64::from).collect();
    Grid::density(width, data)
}

/// Dynamic range, relative to the peak, that survives the log scaling in [`save_spectrum_png`].
const SPECTRUM_RANGE: f64 = 1.0e3;

/// Write a spectrum as an 8-bit grayscale PNG for inspection.  Brightness is `ln(1 + k·v/max)`
/// scaled so that the peak is white.  An all-zero spectrum writes a black image.
pub fn save_spectrum_png(spectrum: &Grid<f64>, path: &Path) -> Result<(), PeriodixError> {
    let n = spectrum.size() as u32;
    let max = spectrum.max_indexed().map(|(_, m)| m).unwrap_or(0.0);
    let full = SPECTRUM_RANGE.ln_1p();

    let out = GrayImage::from_fn(n, n, |x, y| {
        let v = spectrum.get(y as usize, x as usize);
        let level = if max > 0.0 {
            (SPECTRUM_RANGE * v / max).ln_1p() / full
        } else {
            0.0
        };
        Luma([(level * 255.0).round().clamp(0.0, 255.0) as u8])
    });
    out.save(path)?;
    Ok(())
}
