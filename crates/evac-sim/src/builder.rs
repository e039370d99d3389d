//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use evac_agent::Population;
use evac_behavior::BehaviorModel;
use evac_core::{Cell, SimConfig, SimRng, Tick};
use evac_grid::{find_boundary_exits, ObstacleGrid, OccupancyGrid};

use crate::{MetricsCollector, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — agent count, vision, seed, placement budget
/// - [`ObstacleGrid`] — the floor plan
/// - `B: BehaviorModel` — usually [`evac_behavior::EvacuationBehavior`]
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                      |
/// |--------------------------|----------------------------------------------|
/// | `.exit_target(c)`        | First cell from `find_boundary_exits`        |
/// | `.initial_positions(v)`  | Random walkable, non-full cells from the RNG |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, grid, EvacuationBehavior)
///     .exit_target(Cell::new(0, 12))
///     .build()?;
/// sim.run(100)?;
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:    SimConfig,
    obstacles: ObstacleGrid,
    behavior:  B,
    exit:      Option<Cell>,
    positions: Option<Vec<Cell>>,
}

impl<B: BehaviorModel> SimBuilder<B> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, obstacles: ObstacleGrid, behavior: B) -> Self {
        Self {
            config,
            obstacles,
            behavior,
            exit:      None,
            positions: None,
        }
    }

    /// Designate the exit target.  Must be one of the cells reported by
    /// [`find_boundary_exits`].
    pub fn exit_target(mut self, exit: Cell) -> Self {
        self.exit = Some(exit);
        self
    }

    /// Supply the starting cell of each agent (must be length `num_agents`).
    ///
    /// Agent `i` starts on `positions[i]`.  If not called, agents are placed
    /// at random.
    pub fn initial_positions(mut self, positions: Vec<Cell>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, designate the exit, seed the population and return a
    /// ready-to-run [`Sim`].
    ///
    /// # Errors
    ///
    /// Every configuration problem is reported here, before any tick runs:
    /// invalid [`SimConfig`], no walkable border cell, an exit target off the
    /// border, a position list of the wrong length, or agents that cannot be
    /// placed.
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config.validate()?;

        // ── Designate the exit ────────────────────────────────────────────
        let exit_candidates = find_boundary_exits(&self.obstacles);
        let exit = match self.exit {
            Some(cell) if exit_candidates.contains(&cell) => cell,
            Some(cell) => return Err(SimError::ExitNotOnBoundary(cell)),
            None => *exit_candidates.first().ok_or(SimError::NoExit)?,
        };

        // ── Seed the population ───────────────────────────────────────────
        let mut rng = SimRng::new(self.config.seed);
        let mut occupancy = OccupancyGrid::new(self.obstacles);
        let mut population = Population::new();

        match self.positions {
            Some(positions) => {
                if positions.len() != self.config.num_agents {
                    return Err(SimError::AgentCountMismatch {
                        expected: self.config.num_agents,
                        got:      positions.len(),
                        what:     "initial positions",
                    });
                }
                place_at(&self.config, &positions, &mut occupancy, &mut population)?;
            }
            None => place_randomly(&self.config, &mut rng, &mut occupancy, &mut population)?,
        }

        info!(
            agents = population.len(),
            width = occupancy.obstacles().width(),
            height = occupancy.obstacles().height(),
            %exit,
            exit_candidates = exit_candidates.len(),
            seed = self.config.seed,
            "simulation built"
        );

        Ok(Sim {
            config: self.config,
            clock: Tick::ZERO,
            occupancy,
            exit,
            exit_candidates,
            population,
            cumulative_exited: 0,
            collector: MetricsCollector::new(),
            behavior: self.behavior,
            rng,
        })
    }
}

// ── Placement ─────────────────────────────────────────────────────────────────

/// Spawn one agent per entry of `positions`, in order.
fn place_at(
    config:     &SimConfig,
    positions:  &[Cell],
    occupancy:  &mut OccupancyGrid,
    population: &mut Population,
) -> SimResult<()> {
    for (placed, &cell) in positions.iter().enumerate() {
        let id = population.spawn(config.agent_vision);
        occupancy.place(id, cell).map_err(|e| SimError::Placement {
            placed,
            requested: positions.len(),
            reason:    e.to_string(),
        })?;
        if let Some(agent) = population.get_mut(id) {
            agent.position = Some(cell);
        }
    }
    Ok(())
}

/// Spawn `num_agents` agents on uniformly drawn walkable, non-full cells.
///
/// Each agent gets at most `placement_attempts` draws.  A grid with fewer
/// free slots than agents is rejected before drawing at all.
fn place_randomly(
    config:     &SimConfig,
    rng:        &mut SimRng,
    occupancy:  &mut OccupancyGrid,
    population: &mut Population,
) -> SimResult<()> {
    let requested = config.num_agents;
    let slots = occupancy.obstacles().walkable_count() * occupancy.capacity();
    if slots < requested {
        return Err(SimError::Placement {
            placed: 0,
            requested,
            reason: format!("the grid has room for only {slots} agents"),
        });
    }

    let width = occupancy.obstacles().width() as i32;
    let height = occupancy.obstacles().height() as i32;

    for placed in 0..requested {
        let id = population.spawn(config.agent_vision);

        let mut spot = None;
        for _ in 0..config.placement_attempts {
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);
            let cell = Cell::new(x, y);
            if occupancy.can_enter(cell) {
                spot = Some(cell);
                break;
            }
        }

        let Some(cell) = spot else {
            return Err(SimError::Placement {
                placed,
                requested,
                reason: format!(
                    "no free cell found in {} attempts",
                    config.placement_attempts
                ),
            });
        };
        occupancy.place(id, cell)?;
        if let Some(agent) = population.get_mut(id) {
            agent.position = Some(cell);
        }
    }
    Ok(())
}
