#![cfg(feature = "raster")]

mod common;

use std::fmt::Write as _;
use std::fs;

use common::synthetic::orthogonal_sines;
use image::{GrayImage, Luma};
use periodix_lib::prelude::*;
use tempfile::tempdir;

#[test]
fn table_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("density.csv");
    fs::write(&path, "x,y,count\n0,0,5\n1,1,3\n").unwrap();

    let source = DensitySource::resolve(&path, Some(4)).unwrap();
    assert_eq!(source.path(), path.as_path());
    let grid = source.load().unwrap();

    assert_eq!(grid.size(), 4);
    for ((r, c), v) in grid.indexed() {
        match (r, c) {
            (0, 0) => assert_eq!(v, 5.0),
            (1, 1) => assert_eq!(v, 3.0),
            _ => assert_eq!(v, 0.0, "({r}, {c})"),
        }
    }
}

#[test]
fn table_and_raster_agree() {
    // The same lattice written both ways must reach the same decision.
    let dir = tempdir().unwrap();
    let size = 128;
    let lattice = orthogonal_sines(size, 4.0);

    let mut text = "x,y,count\n".to_string();
    for ((row, col), v) in lattice.indexed() {
        writeln!(text, "{col},{row},{}", v.round()).unwrap();
    }
    let table = dir.path().join("lattice.csv");
    fs::write(&table, text).unwrap();

    let raster = dir.path().join("lattice.png");
    GrayImage::from_fn(size as u32, size as u32, |x, y| {
        Luma([lattice.get(y as usize, x as usize).round() as u8])
    })
    .save(&raster)
    .unwrap();

    let from_table = DensitySource::resolve(&table, Some(size))
        .unwrap()
        .load()
        .unwrap();
    let from_raster = DensitySource::resolve(&raster, None)
        .unwrap()
        .load()
        .unwrap();
    assert_eq!(from_table, from_raster);

    let args = AnalysisArgs::default();
    assert!(analyze(&from_table, &args).unwrap().decision.periodic);
    assert!(analyze(&from_raster, &args).unwrap().decision.periodic);
}

#[test]
fn table_out_of_bounds() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("density.csv");
    fs::write(&path, "x,y,count\n0,0,5\n2,7,3\n").unwrap();

    let source = DensitySource::resolve(&path, Some(4)).unwrap();
    assert!(matches!(
        source.load(),
        Err(PeriodixError::OutOfBounds { x: 2, y: 7, size: 4 })
    ));
}

#[test]
fn raster_must_decode() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("density.png");
    fs::write(&path, "x,y,count\n").unwrap();

    let source = DensitySource::resolve(&path, None).unwrap();
    assert!(matches!(source.load(), Err(PeriodixError::Image(_))));
}
