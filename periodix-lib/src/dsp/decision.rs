// Copyright 2026 The Periodix Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Decision
//!
//! Whatever survives suppression is compared against one fixed number.

use crate::grid::Grid;

/// Empirical periodicity threshold on the DC-normalized residual peak.  Inclusive.
pub const THRESHOLD: f64 = 0.002;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// `score >= THRESHOLD`
    pub periodic: bool,
    /// Largest residual magnitude, relative to DC.
    pub score: f64,
    /// Where the score was found in the centered spectrum, `(row, col)`.
    pub peak: (usize, usize),
}

impl Decision {
    /// Score a suppressed spectrum.  An all-zero spectrum scores zero at `(0, 0)`.
    pub fn decide(spectrum: &Grid<f64>) -> Self {
        let (peak, score) = spectrum.max_indexed().unwrap_or(((0, 0), 0.0));
        Self {
            periodic: is_periodic(score),
            score,
            peak,
        }
    }

    /// The three report lines: input label, decision, and score to five decimals.
    pub fn report_lines(&self, label: &str) -> [String; 3] {
        [
            label.to_string(),
            self.periodic.to_string(),
            format!("{:.5}", self.score),
        ]
    }
}

pub fn is_periodic(score: f64) -> bool {
    score >= THRESHOLD
}
