//! A behavior model whose agents never act.

use evac_agent::Agent;
use evac_core::SimRng;

use crate::{BehaviorModel, Decision, StepContext};

/// Always returns [`Decision::Hold`], even on the exit cell.
///
/// Useful in tests, and for populations that only occupy space.
#[derive(Copy, Clone, Debug, Default)]
pub struct StationaryBehavior;

impl BehaviorModel for StationaryBehavior {
    fn decide(&self, _agent: &Agent, _ctx: &StepContext<'_>, _rng: &mut SimRng) -> Decision {
        Decision::Hold
    }
}
