// Copyright 2026 The Periodix Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Density Maps
//!
//! Two kinds of file describe a minutia density map:
//!
//! - a sparse `x,y,count` table, which is exact but does not know how big its grid is, and
//! - an 8-bit grayscale raster, which knows its size but has already squashed counts into
//!   `0..=255`.
//!
//! Both resolve to a [`DensitySource`] and both load to the same [`Grid`], so nothing downstream
//! cares where the map came from.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::grid::{self, Grid};
use crate::PeriodixError;

#[cfg(feature = "raster")]
pub mod raster;
pub mod table;

/// Extensions decoded as grayscale rasters.
#[cfg(feature = "raster")]
const RASTER_EXTS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff"];
#[cfg(not(feature = "raster"))]
const RASTER_EXTS: &[&str] = &[];

const TABLE_EXT: &str = "csv";

/// Where a density map comes from and how to read it.
#[derive(Debug, Clone, PartialEq)]
pub enum DensitySource {
    /// Sparse coordinate table with an explicit side length.
    Table { path: PathBuf, size: usize },
    /// Self-describing square grayscale image.
    Raster { path: PathBuf },
}

impl DensitySource {
    /// Pick a loader for `path` by extension.  `size` is mandatory for tables and ignored for
    /// rasters.  Missing files are reported before the extension is even looked at.
    pub fn resolve(path: impl Into<PathBuf>, size: Option<usize>) -> Result<Self, PeriodixError> {
        let path = path.into();
        if !path.exists() {
            return Err(PeriodixError::NotFound(path));
        }

        let ext = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if ext == TABLE_EXT {
            let size = size.ok_or_else(|| {
                PeriodixError::Usage(format!(
                    "a grid size is required for density tables: {}",
                    path.display()
                ))
            })?;
            grid::check_size(size)?;
            Ok(Self::Table { path, size })
        } else if RASTER_EXTS.contains(&ext.as_str()) {
            if let Some(size) = size {
                warn!("ignoring grid size {size}, rasters carry their own");
            }
            Ok(Self::Raster { path })
        } else {
            Err(PeriodixError::UnsupportedFormat(path))
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Table { path, .. } | Self::Raster { path } => path,
        }
    }

    /// Read the map from disk.
    pub fn load(&self) -> Result<Grid<f64>, PeriodixError> {
        let grid = match self {
            Self::Table { path, size } => table::load_table(path, *size)?,
            #[cfg(feature = "raster")]
            Self::Raster { path } => raster::load_raster(path)?,
            #[cfg(not(feature = "raster"))]
            Self::Raster { path } => return Err(PeriodixError::UnsupportedFormat(path.clone())),
        };
        debug!(
            "loaded {}: {n}x{n}",
            self.path().display(),
            n = grid.size()
        );
        Ok(grid)
    }
}
