//! `evac-core` — foundational types for the evacuation simulator.
//!
//! Every other `evac-*` crate depends on this one.  It has no `evac-*`
//! dependencies and only two external ones (`rand`, `thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`cell`]    | `Cell` grid coordinate, Chebyshev rings, distances     |
//! | [`ids`]     | `AgentId`                                              |
//! | [`time`]    | `Tick`                                                 |
//! | [`rng`]     | `SimRng` — the single seeded generator of a run        |
//! | [`config`]  | `SimConfig`, `CELL_CAPACITY`                           |
//! | [`error`]   | `ConfigError`, `ConfigResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::{CELL_CAPACITY, SimConfig};
pub use error::{ConfigError, ConfigResult};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::Tick;
