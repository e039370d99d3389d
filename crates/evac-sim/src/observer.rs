//! Simulation observer trait for progress reporting and export.

use evac_core::Tick;

use crate::MetricsSample;

/// Callbacks invoked by [`Sim::run_with`][crate::Sim::run_with] around each
/// tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The simulation records every sample in
/// its own collector regardless of the observer.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_tick_end(&mut self, tick: Tick, sample: &MetricsSample) {
///         println!("{tick}: {} still inside", sample.active_agents);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent acts.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's sample has been recorded.
    fn on_tick_end(&mut self, _tick: Tick, _sample: &MetricsSample) {}

    /// Called once when a `run_with` call completes.  `next_tick` is the tick
    /// the next call would start at.
    fn on_run_end(&mut self, _next_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
