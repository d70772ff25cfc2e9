// Copyright 2026 The Periodix Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Low-Frequency Suppression
//!
//! The broad shape of a finger, pressure gradients, and the window's own main lobe all pile up
//! near DC.  None of it is periodic, and all of it is bigger than any lattice peak we hope to find,
//! so it is cut out wholesale before the maximum is taken.

use crate::grid::{self, Grid};

/// Zero every cell of a centered spectrum whose distance from `(n / 2, n / 2)` is at most
/// `radius`, in index units.  Cells outside the disk are copied unchanged.
pub fn suppress_low_frequencies(spectrum: &Grid<f64>, radius: f64) -> Grid<f64> {
    let n = spectrum.size();
    let radius_sq = radius * radius;
    Grid::from_fn(n, |r, c| {
        if grid::distance_sq_from_center(r, c, n) <= radius_sq {
            0.0
        } else {
            spectrum.get(r, c)
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_suppress_disk() {
        let n = 64;
        let radius = 16.0;
        let spectrum = Grid::from_fn(n, |r, c| 1.0 + (r * n + c) as f64);
        let suppressed = suppress_low_frequencies(&spectrum, radius);

        for ((r, c), v) in suppressed.indexed() {
            let dr = r as f64 - 32.0;
            let dc = c as f64 - 32.0;
            if (dr * dr + dc * dc).sqrt() <= radius {
                assert_eq!(v, 0.0, "({r}, {c}) inside the disk");
            } else {
                assert_eq!(v, spectrum.get(r, c), "({r}, {c}) outside the disk");
            }
        }
    }

    #[test]
    fn test_suppress_boundary_inclusive() {
        let n = 64;
        let spectrum = Grid::from_fn(n, |_, _| 1.0);
        let suppressed = suppress_low_frequencies(&spectrum, 16.0);
        // Exactly 16 cells away on each axis.
        assert_eq!(suppressed.get(32, 48), 0.0);
        assert_eq!(suppressed.get(16, 32), 0.0);
        assert_eq!(suppressed.get(32, 49), 1.0);

        // 3-4-5 triangle scaled by 4 sits on a radius 20 circle, one more step does not.
        let suppressed = suppress_low_frequencies(&spectrum, 20.0);
        assert_eq!(suppressed.get(32 + 12, 32 + 16), 0.0);
        assert_eq!(suppressed.get(32 - 12, 32 - 16), 0.0);
        assert_eq!(suppressed.get(32 + 12, 32 + 17), 1.0);
    }

    #[test]
    fn test_suppress_radius_zero_only_dc() {
        let spectrum = Grid::from_fn(8, |_, _| 0.5);
        let suppressed = suppress_low_frequencies(&spectrum, 0.0);
        let zeros = suppressed.indexed().filter(|(_, v)| *v == 0.0).count();
        assert_eq!(zeros, 1);
        assert_eq!(suppressed.get(4, 4), 0.0);
    }

    #[test]
    fn test_suppress_radius_covers_grid() {
        let spectrum = Grid::from_fn(8, |_, _| 0.5);
        let suppressed = suppress_low_frequencies(&spectrum, 100.0);
        assert!(suppressed.as_slice().iter().all(|v| *v == 0.0));
    }
}
