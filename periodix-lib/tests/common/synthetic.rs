// Each test target compiles its own copy of `common`, and not all of them use every generator.
#![allow(dead_code)]

use std::f64::consts::TAU;

use periodix_lib::grid::Grid;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Independent uniform counts in `[low, high)`.  Dense accumulations over many prints look like
/// this once the finger shape is flattened out.
pub fn uniform_random_grid(size: usize, low: f64, high: f64, seed: u64) -> Grid<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Grid::from_fn(size, |_, _| rng.random_range(low..high))
}

/// Sum of a horizontal and a vertical sine of the same `period`, lifted to stay non-negative.
pub fn orthogonal_sines(size: usize, period: f64) -> Grid<f64> {
    Grid::from_fn(size, |r, c| {
        10.0 + 5.0 * ((TAU * c as f64 / period).sin() + (TAU * r as f64 / period).sin())
    })
}
