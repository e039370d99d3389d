//! The `BehaviorModel` trait — the pluggable per-agent policy.

use evac_agent::Agent;
use evac_core::SimRng;

use crate::{Decision, StepContext};

/// Decides what one agent does with its turn.
///
/// Called exactly once per live agent per tick, in activation order.  All
/// randomness must come from `rng`, the simulation's single seeded source,
/// so that a run replays identically from its seed.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysNorth;
///
/// impl BehaviorModel for AlwaysNorth {
///     fn decide(&self, agent: &Agent, ctx: &StepContext<'_>, _rng: &mut SimRng) -> Decision {
///         let Some(here) = agent.position else { return Decision::Hold };
///         let north = here.offset(0, -1);
///         Decision::Wander(ctx.occupancy.can_enter(north).then_some(north))
///     }
/// }
/// ```
pub trait BehaviorModel {
    fn decide(&self, agent: &Agent, ctx: &StepContext<'_>, rng: &mut SimRng) -> Decision;
}
