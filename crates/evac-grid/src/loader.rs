//! Floor-plan loading from grayscale-intensity CSV.
//!
//! # CSV format
//!
//! Headerless, one line per raster row, one integer intensity (0–255) per
//! pixel.  Dark pixels are walls:
//!
//! ```csv
//! 0,0,255,0,0
//! 0,255,255,255,0
//! 0,255,255,255,0
//! 0,0,0,0,0
//! ```
//!
//! [`binarize`] turns intensities into the obstacle matrix the simulation
//! needs: a pixel is an obstacle when `intensity < threshold`.  Decoding image
//! formats is left to whatever produced the CSV.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::{GridError, GridResult, ObstacleGrid};

/// Binarization threshold used when the caller has no better value.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Read an intensity raster from a CSV file.
pub fn load_intensity_csv(path: &Path) -> GridResult<Vec<Vec<u8>>> {
    let file = std::fs::File::open(path)?;
    load_intensity_reader(file)
}

/// Like [`load_intensity_csv`] but accepts any `Read` source.
///
/// # Errors
///
/// `Parse` if a field is not an integer in 0–255 or if rows differ in length;
/// `Csv` for malformed CSV.
pub fn load_intensity_reader<R: Read>(reader: R) -> GridResult<Vec<Vec<u8>>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<u8>> = Vec::new();
    for (r, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .enumerate()
            .map(|(c, field)| {
                field.parse::<u8>().map_err(|_| {
                    GridError::Parse(format!(
                        "row {r}, column {c}: {field:?} is not an intensity in 0-255"
                    ))
                })
            })
            .collect::<GridResult<Vec<u8>>>()?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(GridError::Parse(format!(
                    "row {r} has {} pixels, expected {}",
                    row.len(),
                    first.len()
                )));
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Obstacle matrix from an intensity raster: `true` wherever
/// `intensity < threshold`.
pub fn binarize(intensities: &[Vec<u8>], threshold: u8) -> Vec<Vec<bool>> {
    intensities
        .iter()
        .map(|row| row.iter().map(|&px| px < threshold).collect())
        .collect()
}

/// Load an intensity CSV and binarize it into an [`ObstacleGrid`].
pub fn load_floor_plan_csv(path: &Path, threshold: u8) -> GridResult<ObstacleGrid> {
    let intensities = load_intensity_csv(path)?;
    let grid = ObstacleGrid::from_matrix(&binarize(&intensities, threshold))?;
    debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        walkable = grid.walkable_count(),
        "floor plan loaded"
    );
    Ok(grid)
}
