//! The `Population` struct and its tick loop.

use epr_core::{AgentId, Tick};
use epr_lattice::{HexLattice, VisitGrid};
use epr_mobility::Agent;
use tracing::info;

use crate::{PopulationBuilder, SimConfig, SimError, SimObserver, SimResult};

/// A set of EPR agents sharing one lattice and one clock.
///
/// Every tick advances each agent exactly once.  Agents never interact, so
/// the order in which they advance does not matter: with the `parallel`
/// feature they run on Rayon's thread pool and produce the same trajectories
/// as the sequential loop.
///
/// Create via [`Population::builder`].
pub struct Population<'a> {
    pub(crate) config:  SimConfig,
    pub(crate) lattice: &'a HexLattice,
    pub(crate) agents:  Vec<Agent<'a>>,
    pub(crate) clock:   Tick,
    /// Tick at which an agent failed.  Agents may be part-way through that
    /// tick, so no further ticks are run.
    pub(crate) halted:  Option<Tick>,

    /// Dedicated pool when `config.num_threads` is set; otherwise Rayon's
    /// global pool is used.
    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<'a> Population<'a> {
    pub fn builder(lattice: &'a HexLattice, config: SimConfig) -> PopulationBuilder<'a> {
        PopulationBuilder::new(lattice, config)
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    ///
    /// After an `Err` the population is halted: every later call fails with
    /// [`SimError::Halted`], and a new population must be built.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_tick();
        info!(
            agents = self.agents.len(),
            from = %self.clock,
            to = %end,
            "population run started"
        );
        while self.clock < end {
            self.observed_tick(observer)?;
        }
        observer.on_sim_end(self.clock);
        info!(tick = %self.clock, visits = self.visit_grid().total(), "population run finished");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.  Halts on error like
    /// [`run`](Self::run).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_tick(observer)?;
        }
        Ok(())
    }

    /// Advance every agent by one tick without observer callbacks.
    ///
    /// Returns the number of agents that made an EPR move.  On error the
    /// population clock does not advance, agents that already stepped this
    /// tick keep their new state, and the population is halted.
    pub fn advance_tick(&mut self) -> SimResult<usize> {
        if let Some(tick) = self.halted {
            return Err(SimError::Halted { tick });
        }
        match self.step_agents() {
            Ok(moved) => {
                self.clock = self.clock + 1;
                Ok(moved)
            }
            Err(e) => {
                self.halted = Some(self.clock);
                Err(e)
            }
        }
    }

    /// Tick at which an agent failed, if any.
    #[inline]
    pub fn halted_at(&self) -> Option<Tick> {
        self.halted
    }

    // ── Read-only views ───────────────────────────────────────────────────

    #[inline]
    pub fn clock(&self) -> Tick {
        self.clock
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn lattice(&self) -> &'a HexLattice {
        self.lattice
    }

    #[inline]
    pub fn agents(&self) -> &[Agent<'a>] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent<'a>> {
        self.agents.get(id.index())
    }

    /// Per-cell visit totals over every agent's trajectory so far.
    pub fn visit_grid(&self) -> VisitGrid {
        self.lattice.count_visits(self.agents.iter().map(|a| a.trajectory()))
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock;
        observer.on_tick_start(now);
        let moved = self.advance_tick()?;
        observer.on_tick_end(now, moved);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents);
        }
        Ok(())
    }

    #[cfg(not(feature = "parallel"))]
    fn step_agents(&mut self) -> SimResult<usize> {
        self.agents
            .iter_mut()
            .enumerate()
            .try_fold(0, |moved, (i, agent)| Ok(moved + step_agent(i, agent)?))
    }

    #[cfg(feature = "parallel")]
    fn step_agents(&mut self) -> SimResult<usize> {
        // Explicit field borrows so the pool and the agents are disjoint.
        let agents = &mut self.agents;
        match &self.pool {
            Some(pool) => pool.install(|| step_all_parallel(agents)),
            None => step_all_parallel(agents),
        }
    }
}

#[cfg(feature = "parallel")]
fn step_all_parallel(agents: &mut [Agent<'_>]) -> SimResult<usize> {
    use rayon::prelude::*;

    agents
        .par_iter_mut()
        .enumerate()
        .map(|(i, agent)| step_agent(i, agent))
        .try_reduce(|| 0, |a, b| Ok(a + b))
}

/// Advance one agent; 1 if it made an EPR move, 0 if it stayed.
fn step_agent(i: usize, agent: &mut Agent<'_>) -> SimResult<usize> {
    let moving = agent.clock() >= agent.next_jump();
    agent.advance_tick().map_err(|source| SimError::Agent {
        // Agent count is validated to fit in a u32 at build time.
        agent: AgentId(i as u32),
        source,
    })?;
    Ok(usize::from(moving))
}
