// Copyright 2026 The Periodix Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Coordinate Tables
//!
//! Comma separated, one header row naming `x`, `y`, and `count` in any order, zero-based
//! coordinates.  Cell `(row = y, col = x)` receives the count.  Repeated coordinates accumulate.
//! Spreadsheet exports are tolerated: a leading byte order mark is dropped and fields may be
//! wrapped in double quotes.

use std::path::Path;

use crate::grid::Grid;
use crate::PeriodixError;

/// Read and parse a table file into a `size`×`size` density map.
pub fn load_table(path: &Path, size: usize) -> Result<Grid<f64>, PeriodixError> {
    let text = std::fs::read_to_string(path)?;
    parse_table(&text, size)
}

/// Column positions found in the header.
struct Columns {
    x: usize,
    y: usize,
    count: usize,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self, PeriodixError> {
        let header = header.strip_prefix('\u{feff}').unwrap_or(header);
        let names: Vec<&str> = split_fields(header).collect();
        let find = |name: &str| {
            names
                .iter()
                .position(|n| n.eq_ignore_ascii_case(name))
                .ok_or_else(|| PeriodixError::Parse {
                    line: 1,
                    reason: format!("header is missing the `{name}` column"),
                })
        };
        Ok(Self {
            x: find("x")?,
            y: find("y")?,
            count: find("count")?,
        })
    }

    fn width(&self) -> usize {
        self.x.max(self.y).max(self.count) + 1
    }
}

/// Parse table text into a `size`×`size` density map.
pub fn parse_table(text: &str, size: usize) -> Result<Grid<f64>, PeriodixError> {
    let mut grid = Grid::zeros(size)?;
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let Some((_, header)) = lines.next() else {
        return Err(PeriodixError::Parse {
            line: 1,
            reason: "empty table, expected an `x,y,count` header".to_string(),
        });
    };
    let columns = Columns::from_header(header)?;

    for (line, row) in lines {
        let fields: Vec<&str> = split_fields(row).collect();
        if fields.len() < columns.width() {
            return Err(PeriodixError::Parse {
                line,
                reason: format!(
                    "expected at least {} fields, found {}",
                    columns.width(),
                    fields.len()
                ),
            });
        }

        let x = parse_coordinate(fields[columns.x], "x", line)?;
        let y = parse_coordinate(fields[columns.y], "y", line)?;
        let count = parse_count(fields[columns.count], line)?;

        if x >= size || y >= size {
            return Err(PeriodixError::OutOfBounds { x, y, size });
        }
        *grid.get_mut(y, x) += count;
    }

    Ok(grid)
}

/// Comma separated fields, trimmed and unquoted.  Quoted commas are not supported.
fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(|f| f.trim().trim_matches('"').trim())
}

fn parse_coordinate(field: &str, name: &str, line: usize) -> Result<usize, PeriodixError> {
    field.parse::<usize>().map_err(|e| PeriodixError::Parse {
        line,
        reason: format!("bad {name} coordinate `{field}`: {e}"),
    })
}

fn parse_count(field: &str, line: usize) -> Result<f64, PeriodixError> {
    let count = field.parse::<f64>().map_err(|e| PeriodixError::Parse {
        line,
        reason: format!("bad count `{field}`: {e}"),
    })?;
    if !count.is_finite() || count < 0.0 {
        return Err(PeriodixError::Parse {
            line,
            reason: format!("count must be finite and non-negative, got {count}"),
        });
    }
    Ok(count)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_table_two_cells() {
        let grid = parse_table("x,y,count\n0,0,5\n1,1,3\n", 4).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.get(0, 0), 5.0);
        assert_eq!(grid.get(1, 1), 3.0);
        let nonzero = grid.indexed().filter(|(_, v)| *v != 0.0).count();
        assert_eq!(nonzero, 2);
    }

    #[test]
    fn test_table_orientation_and_accumulate() {
        let text = "count, y ,x\r\n2,0,3\r\n\r\n1.5,0,3\r\n";
        let grid = parse_table(text, 4).unwrap();
        // x is the column, y is the row.
        assert_eq!(grid.get(0, 3), 3.5);
        assert_eq!(grid.get(3, 0), 0.0);
    }

    #[test]
    fn test_table_spreadsheet_export() {
        let text = "\u{feff}x,y,count\n1,2,4\n";
        assert_eq!(parse_table(text, 4).unwrap().get(2, 1), 4.0);

        let text = "\"x\",\"y\",\"count\"\n\"1\", \"2\" ,\"4\"\n";
        assert_eq!(parse_table(text, 4).unwrap().get(2, 1), 4.0);

        let text = "\u{feff}\"Y\",\"X\",\"Count\"\r\n0,3,1\r\n";
        assert_eq!(parse_table(text, 4).unwrap().get(0, 3), 1.0);
    }

    #[test]
    fn test_table_header_only() {
        let grid = parse_table("x,y,count\n", 3).unwrap();
        assert_eq!(grid.sum(), 0.0);
    }

    #[test]
    fn test_table_errors() {
        assert!(matches!(
            parse_table("", 4),
            Err(PeriodixError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_table("x,y,n\n0,0,1\n", 4),
            Err(PeriodixError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_table("x,y,count\n0,0\n", 4),
            Err(PeriodixError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_table("x,y,count\n0,0,1\n-1,0,1\n", 4),
            Err(PeriodixError::Parse { line: 3, .. })
        ));
        assert!(matches!(
            parse_table("x,y,count\n0,0,-2\n", 4),
            Err(PeriodixError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_table("x,y,count\n0,0,nan\n", 4),
            Err(PeriodixError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_table("x,y,count\n4,0,1\n", 4),
            Err(PeriodixError::OutOfBounds { x: 4, y: 0, size: 4 })
        ));
        assert!(matches!(
            parse_table("x,y,count\n", 1),
            Err(PeriodixError::Usage(_))
        ));
    }
}
