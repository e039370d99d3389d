//! Built-in floor plan: two office wings over a corridor, one door in the
//! south wall.
//!
//! Stored the way scanned plans arrive: grayscale intensities, one CSV row per
//! raster row.  Anything darker than the threshold is wall.

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use tracing::info;

use evac_grid::{binarize, load_floor_plan_csv, load_intensity_reader, ObstacleGrid, DEFAULT_THRESHOLD};

/// 24 × 12 intensity raster.
const OFFICE_CSV: &str = "\
12,12,40,96,0,0,96,40,12,12,96,96,96,12,12,12,96,0,0,12,0,40,0,40\n\
96,180,180,180,180,250,231,255,255,250,180,12,231,180,231,180,180,231,180,250,231,255,231,12\n\
40,255,250,231,231,255,255,180,180,255,231,0,180,250,255,231,180,180,255,255,255,180,231,40\n\
12,255,231,255,0,0,255,250,180,231,231,12,255,231,231,231,12,96,180,180,180,255,231,96\n\
12,231,180,231,40,40,255,180,231,255,180,250,255,231,180,231,231,231,180,255,255,255,231,40\n\
96,231,231,250,231,250,231,231,231,231,180,0,255,250,231,250,231,250,231,250,180,255,255,40\n\
40,12,96,12,0,231,12,96,40,12,0,0,250,231,250,231,231,255,231,12,96,40,40,96\n\
40,180,231,180,180,255,180,250,250,255,180,96,250,255,180,231,231,250,255,231,255,250,255,0\n\
12,180,255,255,180,255,250,231,250,255,180,0,255,231,250,40,96,255,231,250,250,255,255,12\n\
12,231,250,255,180,180,255,231,250,231,180,255,180,231,255,255,250,255,255,255,255,180,255,0\n\
96,231,250,231,255,231,180,180,231,231,231,12,231,180,255,250,255,180,255,250,255,231,180,96\n\
0,96,0,40,96,40,96,180,96,0,12,12,40,0,96,12,96,12,0,40,40,40,0,96\n\
";

/// The built-in office plan.
pub fn office() -> Result<ObstacleGrid> {
    let intensities = load_intensity_reader(Cursor::new(OFFICE_CSV))?;
    let grid = ObstacleGrid::from_matrix(&binarize(&intensities, DEFAULT_THRESHOLD))?;
    Ok(grid)
}

/// Load `path` if given, otherwise fall back to the built-in plan.
pub fn load(path: Option<&Path>) -> Result<ObstacleGrid> {
    let grid = match path {
        Some(path) => load_floor_plan_csv(path, DEFAULT_THRESHOLD)?,
        None => office()?,
    };
    info!(
        source = %path.map_or("built-in office".into(), |p| p.display().to_string()),
        width = grid.width(),
        height = grid.height(),
        walkable = grid.walkable_count(),
        "floor plan ready"
    );
    Ok(grid)
}
