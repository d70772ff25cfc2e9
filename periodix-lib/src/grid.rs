// Copyright 2026 The Periodix Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Grid
//!
//! Every stage of the pipeline consumes and produces an N×N matrix.  Density maps, windowed maps,
//! and spectra all share this one row-major storage type.  The coordinate helpers at the bottom of
//! this module are the only place that knows where the center of a grid is.

use crate::PeriodixError;

/// Smallest side length the window formula is defined for.
pub const MIN_SIZE: usize = 2;
/// Largest side length accepted.  The transform holds `size²` complex doubles at once, so this
/// caps the working set around a gigabyte.
pub const MAX_SIZE: usize = 8192;

/// Square, row-major matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    size: usize,
    data: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                data.push(f(row, col));
            }
        }
        Self { size, data }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.size + col]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.size + col]
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.size;
        &self.data[start..start + self.size]
    }

    /// Row-major view of every cell.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate `((row, col), value)` in row-major order.
    pub fn indexed(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        let size = self.size;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / size, i % size), *v))
    }

    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> Grid<U> {
        Grid {
            size: self.size,
            data: self.data.iter().map(|v| f(*v)).collect(),
        }
    }
}

impl Grid<f64> {
    /// All-zero grid, ready for accumulating counts.
    pub fn zeros(size: usize) -> Result<Self, PeriodixError> {
        check_size(size)?;
        Ok(Self::from_fn(size, |_, _| 0.0))
    }

    /// Wrap row-major `data` as a density map, validating shape and values.
    pub fn density(size: usize, data: Vec<f64>) -> Result<Self, PeriodixError> {
        check_size(size)?;
        if data.len() != size * size {
            // Ragged buffers cannot tell us their real height, so report what was implied.
            return Err(PeriodixError::NotSquare {
                width: size,
                height: data.len() / size,
            });
        }
        let grid = Self { size, data };
        grid.check_density()?;
        Ok(grid)
    }

    /// A density map must be at least 2×2 and hold only finite, non-negative values.
    pub fn check_density(&self) -> Result<(), PeriodixError> {
        check_size(self.size)?;
        match self.indexed().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            Some(((row, col), value)) => Err(PeriodixError::InvalidValue { row, col, value }),
            None => Ok(()),
        }
    }

    /// Total mass.  For count tables this is the number of minutiae placed.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// First maximal cell in row-major order, or `None` for an empty grid.
    pub fn max_indexed(&self) -> Option<((usize, usize), f64)> {
        self.indexed()
            .fold(None, |best, (idx, v)| match best {
                Some((_, b)) if b >= v => best,
                _ => Some((idx, v)),
            })
    }
}

/// Side length must lie in `MIN_SIZE..=MAX_SIZE`.
pub fn check_size(size: usize) -> Result<(), PeriodixError> {
    if size < MIN_SIZE {
        return Err(PeriodixError::Usage(format!(
            "grid size must be at least {MIN_SIZE}, got {size}"
        )));
    }
    if size > MAX_SIZE || size.checked_mul(size).is_none() {
        return Err(PeriodixError::Usage(format!(
            "grid size must be at most {MAX_SIZE}, got {size}"
        )));
    }
    Ok(())
}

/// Index of the zero-frequency cell after centering.  Identical for rows and columns.
pub fn center(size: usize) -> usize {
    size / 2
}

/// Reduce a possibly negative index into `0..size`.
pub fn wrap_index(i: isize, size: usize) -> usize {
    i.rem_euclid(size as isize) as usize
}

/// Centering remap.  The cell at `index` of a centered spectrum is read from
/// `(index - size / 2) mod size` of the uncentered one, which moves DC from 0 to `size / 2`.
pub fn centered_source_index(index: usize, size: usize) -> usize {
    wrap_index(index as isize - center(size) as isize, size)
}

/// Squared Euclidean distance of `(row, col)` from the grid center, in index units.
pub fn distance_sq_from_center(row: usize, col: usize, size: usize) -> f64 {
    let c = center(size) as f64;
    let dr = row as f64 - c;
    let dc = col as f64 - c;
    dr * dr + dc * dc
}
