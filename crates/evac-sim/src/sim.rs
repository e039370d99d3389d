//! The `Sim` struct and its tick loop.

use tracing::{debug, info, trace};

use evac_agent::Population;
use evac_behavior::{BehaviorModel, Decision, StepContext};
use evac_core::{AgentId, Cell, SimConfig, SimRng, Tick};
use evac_grid::OccupancyGrid;

use crate::{CellKind, MetricsCollector, MetricsSample, NoopObserver, SimObserver, SimResult};

/// The simulation controller.
///
/// Exclusively owns the occupancy grid, the live population, the exit
/// counter, the metrics collector and the run's RNG.  Agents reach shared
/// state only through the [`StepContext`] lent to the behavior model.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    pub(crate) config:            SimConfig,
    /// The tick the next call to `tick` will execute.
    pub(crate) clock:             Tick,
    pub(crate) occupancy:         OccupancyGrid,
    pub(crate) exit:              Cell,
    pub(crate) exit_candidates:   Vec<Cell>,
    pub(crate) population:        Population,
    pub(crate) cumulative_exited: u64,
    pub(crate) collector:         MetricsCollector,
    pub(crate) behavior:          B,
    pub(crate) rng:               SimRng,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the simulation by exactly `n_ticks`.
    ///
    /// Never stops early: ticks after the last agent has left still produce
    /// (all-zero) samples.
    pub fn run(&mut self, n_ticks: u64) -> SimResult<()> {
        self.run_with(n_ticks, &mut NoopObserver)
    }

    /// Like [`run`](Self::run), calling `observer` hooks around every tick.
    pub fn run_with<O: SimObserver>(&mut self, n_ticks: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n_ticks {
            self.tick_with(observer)?;
        }
        observer.on_run_end(self.clock);
        info!(
            ticks = n_ticks,
            next_tick = %self.clock,
            active = self.population.len(),
            cumulative_exited = self.cumulative_exited,
            "run finished"
        );
        Ok(())
    }

    /// Execute one tick and return the sample it produced.
    pub fn tick(&mut self) -> SimResult<&MetricsSample> {
        self.tick_with(&mut NoopObserver)
    }

    /// Execute one tick, calling `observer` hooks around it.
    pub fn tick_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<&MetricsSample> {
        let now = self.clock;
        observer.on_tick_start(now);

        self.process_tick(now)?;

        let sample = self.collector.sample(
            now,
            &self.population,
            &self.occupancy,
            self.cumulative_exited,
        );
        let sample = self.collector.record(sample);
        debug!(
            tick = %now,
            active = sample.active_agents,
            exited = sample.exited_this_tick,
            cumulative_exited = sample.cumulative_exited,
            "tick complete"
        );

        self.clock = now.next();
        observer.on_tick_end(now, sample);
        Ok(sample)
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The tick the next call to [`tick`](Self::tick) will execute; equal to
    /// the number of ticks run so far.
    pub fn current_tick(&self) -> Tick {
        self.clock
    }

    pub fn occupancy(&self) -> &OccupancyGrid {
        &self.occupancy
    }

    /// The designated exit target.
    pub fn exit(&self) -> Cell {
        self.exit
    }

    /// Every walkable border cell, in boundary-scan order.
    pub fn exit_candidates(&self) -> &[Cell] {
        &self.exit_candidates
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn cumulative_exited(&self) -> u64 {
        self.cumulative_exited
    }

    pub fn metrics(&self) -> &MetricsCollector {
        &self.collector
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// `[row][col]` picture of the grid.  Obstacles first, then occupied
    /// cells, then the exit on top.
    pub fn layout(&self) -> Vec<Vec<CellKind>> {
        let obstacles = self.occupancy.obstacles();
        let mut layout = vec![vec![CellKind::Empty; obstacles.width()]; obstacles.height()];
        for (y, row) in layout.iter_mut().enumerate() {
            for (x, kind) in row.iter_mut().enumerate() {
                if obstacles.is_obstacle(Cell::new(x as i32, y as i32)) {
                    *kind = CellKind::Obstacle;
                }
            }
        }
        for cell in self.occupancy.density().into_keys() {
            layout[cell.y as usize][cell.x as usize] = CellKind::Agent;
        }
        layout[self.exit.y as usize][self.exit.x as usize] = CellKind::Exit;
        layout
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> SimResult<()> {
        // Agents are never created mid-run, so the snapshot only guards
        // against iterating a population that shrinks as agents exit.
        let activation: Vec<AgentId> = self.population.ids().collect();

        for agent in activation {
            let decision = {
                let Some(state) = self.population.get(agent) else {
                    continue;
                };
                let ctx = StepContext::new(now, &self.occupancy, self.exit);
                self.behavior.decide(state, &ctx, &mut self.rng)
            };
            self.apply(agent, decision)?;
        }
        Ok(())
    }

    /// Apply one agent's decision before the next agent decides.
    fn apply(&mut self, agent: AgentId, decision: Decision) -> SimResult<()> {
        match decision {
            Decision::Hold => {}

            Decision::Exit => {
                let cell = self.occupancy.remove(agent)?;
                if let Some(mut gone) = self.population.remove(agent) {
                    gone.mark_exited();
                }
                self.cumulative_exited += 1;
                trace!(%agent, %cell, "agent exited");
            }

            Decision::Approach(target) | Decision::Wander(target) => {
                let Some(state) = self.population.get_mut(agent) else {
                    return Ok(());
                };
                state.previous_position = state.position;
                let Some(dest) = target else {
                    return Ok(());
                };
                match self.occupancy.move_agent(agent, dest) {
                    Ok(()) => state.position = Some(dest),
                    // Rejected: stay put and decide afresh next tick.
                    Err(e) if e.is_rejection() => trace!(%agent, %dest, reason = %e, "move rejected"),
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Ok(())
    }
}
