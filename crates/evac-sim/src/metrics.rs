//! Per-tick metrics collection.
//!
//! One [`MetricsSample`] is taken after every tick and appended to an
//! append-only series; `samples()[t]` was produced by `Tick(t)`.  The series
//! can be read whole or flattened into the two row shapes an exporter needs:
//! one [`ModelRow`] per tick and one [`AgentRow`] per `(tick, agent)` pair
//! for every agent still inside at sampling time.

use std::collections::BTreeMap;

use evac_agent::Population;
use evac_core::{AgentId, Cell, Tick};
use evac_grid::OccupancyGrid;

/// Per-agent part of a sample.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentRecord {
    pub agent:      AgentId,
    pub cell:       Option<Cell>,
    pub found_exit: bool,
}

/// Snapshot of model state at the end of one tick.  Never edited once taken.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsSample {
    pub tick:              Tick,
    /// Size of the live population.
    pub active_agents:     usize,
    /// Agents that left during this tick.
    pub exited_this_tick:  u64,
    pub cumulative_exited: u64,
    /// Occupant count per occupied cell.
    pub agents_per_cell:   BTreeMap<Cell, usize>,
    /// One record per live agent, in activation order.
    pub agents:            Vec<AgentRecord>,
}

/// Model-level row: the four model reporters for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelRow<'a> {
    pub tick:              Tick,
    pub active_agents:     usize,
    pub exited_agents:     u64,
    pub cumulative_exited: u64,
    pub agents_per_cell:   &'a BTreeMap<Cell, usize>,
}

/// Agent-level row: one agent at one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentRow {
    pub tick:       Tick,
    pub agent:      AgentId,
    pub cell:       Option<Cell>,
    pub found_exit: bool,
}

/// Accumulates one [`MetricsSample`] per tick.
#[derive(Clone, Debug, Default)]
pub struct MetricsCollector {
    samples: Vec<MetricsSample>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the model state into a sample without recording it.
    ///
    /// `exited_this_tick` is the growth of `cumulative_exited` since the last
    /// recorded sample.
    pub fn sample(
        &self,
        tick:              Tick,
        population:        &Population,
        occupancy:         &OccupancyGrid,
        cumulative_exited: u64,
    ) -> MetricsSample {
        let previous = self.samples.last().map_or(0, |s| s.cumulative_exited);
        MetricsSample {
            tick,
            active_agents: population.len(),
            exited_this_tick: cumulative_exited.saturating_sub(previous),
            cumulative_exited,
            agents_per_cell: occupancy.density(),
            agents: population
                .iter()
                .map(|a| AgentRecord {
                    agent:      a.id,
                    cell:       a.position,
                    found_exit: a.has_exited(),
                })
                .collect(),
        }
    }

    /// Append `sample` to the series and return it.
    pub fn record(&mut self, sample: MetricsSample) -> &MetricsSample {
        debug_assert!(
            self.samples.last().is_none_or(|last| last.tick < sample.tick),
            "samples must be recorded in tick order"
        );
        self.samples.push(sample);
        &self.samples[self.samples.len() - 1]
    }

    /// The whole series, oldest first.
    #[inline]
    pub fn samples(&self) -> &[MetricsSample] {
        &self.samples
    }

    #[inline]
    pub fn latest(&self) -> Option<&MetricsSample> {
        self.samples.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// One row per tick.
    pub fn model_rows(&self) -> impl Iterator<Item = ModelRow<'_>> + '_ {
        self.samples.iter().map(|s| ModelRow {
            tick:              s.tick,
            active_agents:     s.active_agents,
            exited_agents:     s.exited_this_tick,
            cumulative_exited: s.cumulative_exited,
            agents_per_cell:   &s.agents_per_cell,
        })
    }

    /// One row per `(tick, agent)` pair, tick-major.
    pub fn agent_rows(&self) -> impl Iterator<Item = AgentRow> + '_ {
        self.samples.iter().flat_map(|s| {
            s.agents.iter().map(move |a| AgentRow {
                tick:       s.tick,
                agent:      a.agent,
                cell:       a.cell,
                found_exit: a.found_exit,
            })
        })
    }
}
