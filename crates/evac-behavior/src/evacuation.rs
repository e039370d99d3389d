//! The standard evacuee policy.

use evac_agent::Agent;
use evac_core::{Cell, SimRng};

use crate::{BehaviorModel, Decision, StepContext};

/// Vision-gated greedy approach with a random-walk fallback.
///
/// Per activation:
///
/// 1. On the exit cell → [`Decision::Exit`].
/// 2. Exit within `vision` → step to the open adjacent cell with the smallest
///    Euclidean distance to the exit, first in N…NW order on ties.  The step
///    is taken even if it does not bring the agent closer.
/// 3. Otherwise → step to an open adjacent cell chosen uniformly at random.
///
/// With no open adjacent cell the agent stays where it is.
#[derive(Copy, Clone, Debug, Default)]
pub struct EvacuationBehavior;

impl BehaviorModel for EvacuationBehavior {
    fn decide(&self, agent: &Agent, ctx: &StepContext<'_>, rng: &mut SimRng) -> Decision {
        let Some(here) = agent.position else {
            return Decision::Hold;
        };
        if here == ctx.exit {
            return Decision::Exit;
        }

        let steps = ctx.open_steps(here);
        if ctx.exit_visible(here, agent.vision) {
            Decision::Approach(closest_to(&steps, ctx.exit))
        } else {
            Decision::Wander(rng.choose(&steps).copied())
        }
    }
}

/// First candidate with the strictly smallest distance to `target`.
fn closest_to(candidates: &[Cell], target: Cell) -> Option<Cell> {
    let mut best: Option<(Cell, f64)> = None;
    for &cell in candidates {
        let d = cell.euclidean(target);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((cell, d));
        }
    }
    best.map(|(cell, _)| cell)
}
