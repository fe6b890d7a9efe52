//! Observer trait for progress reporting and data collection.

use epr_core::Tick;
use epr_mobility::Agent;

/// Callbacks invoked by [`Population::run`][crate::Population::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, moved: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {moved} agents moved");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent advances.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `moved` is the number of agents that made an EPR move this tick
    /// (the rest stayed put waiting for their next jump).
    fn on_tick_end(&mut self, _tick: Tick, _moved: usize) {}

    /// Called every `config.output_interval_ticks` ticks with read-only
    /// access to every agent, so output writers can record trajectories or
    /// visit tables without the population knowing any output format.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[Agent<'_>]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
