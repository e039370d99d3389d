//! `evac-sim` — the simulation controller.
//!
//! # Tick loop
//!
//! ```text
//! for each tick:
//!   ① Snapshot  — ids of all live agents, in creation order.
//!   ② Activate  — for each id: BehaviorModel::decide, then apply at once:
//!                   Exit            → off the grid, out of the population,
//!                                     cumulative_exited += 1
//!                   Approach/Wander → record previous position, try the move;
//!                                     a full or blocked cell leaves it put
//!                   Hold            → nothing
//!   ③ Sample    — MetricsCollector appends one MetricsSample.
//! ```
//!
//! Applying each decision before the next agent decides gives earlier agents
//! first pick of scarce cells.  The order never changes during a run, and the
//! single `SimRng` is consumed in that same order, so a seed fully determines
//! the metrics series.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use evac_behavior::EvacuationBehavior;
//! use evac_core::SimConfig;
//! use evac_grid::ObstacleGrid;
//! use evac_sim::SimBuilder;
//!
//! let grid = ObstacleGrid::from_matrix(&matrix)?;
//! let mut sim = SimBuilder::new(SimConfig::with_agents(100), grid, EvacuationBehavior)
//!     .build()?;
//! sim.run(100)?;
//! for row in sim.metrics().model_rows() { /* … */ }
//! ```

pub mod builder;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use layout::{render_layout, CellKind};
pub use metrics::{AgentRecord, AgentRow, MetricsCollector, MetricsSample, ModelRow};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
