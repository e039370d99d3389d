//! `evac-grid` — the spatial layer of the evacuation simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`obstacle`]  | `ObstacleGrid` — immutable walkable/blocked field + bounds |
//! | [`exits`]     | `find_boundary_exits` — walkable border cells in scan order |
//! | [`occupancy`] | `OccupancyGrid` — per-cell agent lists with a capacity cap |
//! | [`loader`]    | Grayscale-intensity CSV → obstacle matrix                  |
//! | [`error`]     | `GridError`, `GridResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                       |
//! |---------|----------------------------------------------|
//! | `serde` | Propagates serde derives to `evac-core`.     |

pub mod error;
pub mod exits;
pub mod loader;
pub mod obstacle;
pub mod occupancy;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use exits::find_boundary_exits;
pub use loader::{binarize, load_floor_plan_csv, load_intensity_csv, load_intensity_reader, DEFAULT_THRESHOLD};
pub use obstacle::ObstacleGrid;
pub use occupancy::OccupancyGrid;
