//! `evac-agent` — agent state and the live population.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`agent`]      | `Agent`, `AgentState` (`Active` → `Exited`)               |
//! | [`population`] | `Population` — live agents keyed and ordered by `AgentId` |
//!
//! Agents carry no reference to the simulation.  Whatever they need to read
//! (occupancy, exit target) is lent to the behavior model for the duration
//! of one call; see `evac-behavior`.

pub mod agent;
pub mod population;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentState};
pub use population::Population;
