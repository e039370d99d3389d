//! `evac-behavior` — what an agent decides to do with its turn.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`context`]    | `StepContext<'a>` — read-only view lent to one decision      |
//! | [`decision`]   | `Decision` (`Exit`, `Approach`, `Wander`, `Hold`)            |
//! | [`model`]      | `BehaviorModel` trait                                        |
//! | [`evacuation`] | `EvacuationBehavior` — the standard evacuee policy           |
//! | [`stationary`] | `StationaryBehavior` — agents that never act                 |
//!
//! # Decide, then apply
//!
//! A behavior model only reads.  The simulation asks it for a [`Decision`]
//! and applies that decision to the occupancy grid immediately, before the
//! next agent is asked.  Later agents in a tick therefore see the moves of
//! earlier ones, and the model never needs mutable access to shared state.

pub mod context;
pub mod decision;
pub mod evacuation;
pub mod model;
pub mod stationary;


pub use context::StepContext;
pub use decision::Decision;
pub use evacuation::EvacuationBehavior;
pub use model::BehaviorModel;
pub use stationary::StationaryBehavior;
