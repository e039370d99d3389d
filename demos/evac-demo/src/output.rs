//! CSV export of the two metrics series.
//!
//! Creates two files in the output directory:
//! - `model_series.csv` — one row per tick
//! - `agent_series.csv` — one row per `(tick, agent)` while the agent is inside

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::info;

use evac_core::{Cell, Tick};
use evac_sim::{AgentRow, MetricsCollector, MetricsSample, ModelRow, SimObserver};

pub const MODEL_FILE: &str = "model_series.csv";
pub const AGENT_FILE: &str = "agent_series.csv";

/// Writes the model and agent series to two CSV files.
pub struct SeriesWriter {
    model:  Writer<File>,
    agents: Writer<File>,
}

impl SeriesWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> csv::Result<Self> {
        let mut model = Writer::from_path(dir.join(MODEL_FILE))?;
        model.write_record(["tick", "active_agents", "exited_agents", "cumulative_exited", "agents_per_cell"])?;

        let mut agents = Writer::from_path(dir.join(AGENT_FILE))?;
        agents.write_record(["tick", "agent_id", "x", "y", "found_exit"])?;

        Ok(Self { model, agents })
    }

    pub fn write_model_row(&mut self, row: &ModelRow<'_>) -> csv::Result<()> {
        self.model.write_record(&[
            row.tick.0.to_string(),
            row.active_agents.to_string(),
            row.exited_agents.to_string(),
            row.cumulative_exited.to_string(),
            format_density(row.agents_per_cell),
        ])
    }

    pub fn write_agent_row(&mut self, row: &AgentRow) -> csv::Result<()> {
        let (x, y) = row
            .cell
            .map_or((String::new(), String::new()), |c| (c.x.to_string(), c.y.to_string()));
        self.agents.write_record(&[
            row.tick.0.to_string(),
            row.agent.0.to_string(),
            x,
            y,
            (row.found_exit as u8).to_string(),
        ])
    }

    /// Write the whole series held by `metrics`.  Returns the number of model
    /// and agent rows written.
    pub fn write_series(&mut self, metrics: &MetricsCollector) -> csv::Result<(usize, usize)> {
        let mut model_rows = 0;
        for row in metrics.model_rows() {
            self.write_model_row(&row)?;
            model_rows += 1;
        }
        let mut agent_rows = 0;
        for row in metrics.agent_rows() {
            self.write_agent_row(&row)?;
            agent_rows += 1;
        }
        Ok((model_rows, agent_rows))
    }

    pub fn finish(mut self) -> csv::Result<()> {
        self.model.flush()?;
        self.agents.flush()?;
        Ok(())
    }
}

/// `x:y=n` entries joined by `;`, in cell order.
pub fn format_density(cells: &BTreeMap<Cell, usize>) -> String {
    cells
        .iter()
        .map(|(c, n)| format!("{}:{}={n}", c.x, c.y))
        .collect::<Vec<_>>()
        .join(";")
}

// ── Progress ──────────────────────────────────────────────────────────────────

/// Logs a one-line summary every `every` ticks and remembers when the
/// building emptied.
pub struct ProgressObserver {
    every:       u64,
    ticks:       u64,
    cleared_at:  Option<Tick>,
}

impl ProgressObserver {
    pub fn new(every: u64) -> Self {
        Self {
            every:      every.max(1),
            ticks:      0,
            cleared_at: None,
        }
    }

    /// Ticks observed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// First tick after which nobody was left inside.
    pub fn cleared_at(&self) -> Option<Tick> {
        self.cleared_at
    }
}

impl SimObserver for ProgressObserver {
    fn on_tick_end(&mut self, tick: Tick, sample: &MetricsSample) {
        self.ticks += 1;
        if sample.active_agents == 0 && self.cleared_at.is_none() {
            self.cleared_at = Some(tick);
            info!(%tick, evacuated = sample.cumulative_exited, "building clear");
        }
        if (tick.0 + 1) % self.every == 0 {
            info!(
                %tick,
                inside = sample.active_agents,
                exited = sample.exited_this_tick,
                total_exited = sample.cumulative_exited,
                "progress"
            );
        }
    }
}
