//! A single EPR agent and its tick-by-tick state machine.

use epr_core::{AgentRng, EprError, EprResult, Tick};
use epr_lattice::{HexLattice, Space};
use epr_levy::{LevyParams, StepDistribution};
use rand::distributions::{Distribution, WeightedIndex};
use tracing::{debug, trace, warn};

use crate::{exploration_probability, return_weights, Decision, EprParams};

/// Step-length draws an explore move makes before giving up with
/// [`EprError::GeometryExhausted`].
pub const MAX_EXPLORE_ATTEMPTS: u32 = 1_000;

#[cfg(feature = "fx-hash")]
type SiteIndex<K> = rustc_hash::FxHashMap<K, usize>;
#[cfg(not(feature = "fx-hash"))]
type SiteIndex<K> = std::collections::HashMap<K, usize>;

/// One EPR agent moving through a shared space `S`.
///
/// The visit table keeps distinct cells in first-visit order (`sites`, with
/// `counts` alongside) plus a hash index from cell to position.  The order
/// is what preferential return draws over, so it is part of run
/// reproducibility.
///
/// # Invariants
///
/// - `trajectory.len() == clock + 1`
/// - `counts.iter().sum() == trajectory.len()`
/// - `sites[index[c]] == c` for every visited cell `c`
///
/// # Example
///
/// ```
/// use epr_core::AgentRng;
/// use epr_lattice::{Coordinate, HexLattice};
/// use epr_levy::LevyParams;
/// use epr_mobility::{Agent, EprParams};
///
/// let lattice = HexLattice::new(100).unwrap();
/// let mut agent = Agent::new(
///     &lattice,
///     Coordinate::from_offset(50, 50),
///     EprParams::default(),
///     LevyParams::STEP_LENGTH,
///     LevyParams::WAITING_TIME,
///     AgentRng::from_seed(7),
/// )
/// .unwrap();
/// agent.run(20).unwrap();
/// assert_eq!(agent.trajectory().len(), 21);
/// ```
#[derive(Clone, Debug)]
pub struct Agent<'a, S: Space = HexLattice> {
    space:      &'a S,
    params:     EprParams,
    step:       StepDistribution,
    wait:       StepDistribution,
    rng:        AgentRng,
    sites:      Vec<S::Coord>,
    counts:     Vec<u32>,
    index:      SiteIndex<S::Coord>,
    trajectory: Vec<S::Coord>,
    current:    S::Coord,
    clock:      Tick,
    next_jump:  Tick,
}

impl<'a, S: Space> Agent<'a, S> {
    /// Place a new agent at `seed` with one recorded visit.
    ///
    /// Fails with `InvalidCoordinate` if `seed` is not a cell of `space`, and
    /// with `InvalidArgument` if `params`, `step` or `wait` are out of
    /// domain.
    pub fn new(
        space:  &'a S,
        seed:   S::Coord,
        params: EprParams,
        step:   LevyParams,
        wait:   LevyParams,
        rng:    AgentRng,
    ) -> EprResult<Self> {
        params.validate()?;
        if !space.contains(&seed) {
            return Err(EprError::InvalidCoordinate(format!(
                "seed {seed} is not a cell of the space"
            )));
        }
        let step = StepDistribution::new(step)?;
        let wait = StepDistribution::new(wait)?;

        let mut index = SiteIndex::default();
        index.insert(seed, 0);
        Ok(Self {
            space,
            params,
            step,
            wait,
            rng,
            sites: vec![seed],
            counts: vec![1],
            index,
            trajectory: vec![seed],
            current: seed,
            clock: Tick::ZERO,
            next_jump: Tick::ZERO,
        })
    }

    // ── Read-only views ───────────────────────────────────────────────────

    #[inline]
    pub fn space(&self) -> &'a S {
        self.space
    }

    #[inline]
    pub fn params(&self) -> EprParams {
        self.params
    }

    /// Ticks advanced so far.
    #[inline]
    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// First tick at which the agent will move again.
    #[inline]
    pub fn next_jump(&self) -> Tick {
        self.next_jump
    }

    /// The cell the agent currently occupies.
    #[inline]
    pub fn location(&self) -> S::Coord {
        self.current
    }

    /// Every cell occupied, one entry per tick, starting with the seed.
    #[inline]
    pub fn trajectory(&self) -> &[S::Coord] {
        &self.trajectory
    }

    /// `(cell, visits)` for every distinct visited cell, in first-visit order.
    pub fn visit_counts(&self) -> impl Iterator<Item = (S::Coord, u32)> + '_ {
        self.sites.iter().copied().zip(self.counts.iter().copied())
    }

    /// Times `coord` appears in the trajectory; 0 if never visited.
    pub fn visit_count(&self, coord: &S::Coord) -> u32 {
        self.index.get(coord).map_or(0, |&i| self.counts[i])
    }

    /// Number of distinct cells visited, `N` in the EPR rule.
    #[inline]
    pub fn distinct_sites(&self) -> usize {
        self.sites.len()
    }

    /// The agent's current exploration probability.
    pub fn exploration_probability(&self) -> f64 {
        exploration_probability(self.params.rho, self.params.gamma, self.sites.len())
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the agent by one tick.
    ///
    /// Before `next_jump` the agent stays put; from `next_jump` on it makes
    /// one EPR move and schedules the next one.  On error the clock is not
    /// advanced and the trajectory is unchanged.
    pub fn advance_tick(&mut self) -> EprResult<()> {
        if self.clock < self.next_jump {
            trace!(tick = %self.clock, at = %self.current, "stay");
            let here = self.current;
            self.record(here);
        } else {
            self.decide_and_move()?;
            let w = self.wait.sample(self.rng.inner());
            self.next_jump = self.clock.after(w);
        }
        self.clock = self.clock + 1;
        Ok(())
    }

    /// Advance `n` ticks, stopping at the first error.
    pub fn run(&mut self, n: u64) -> EprResult<()> {
        for _ in 0..n {
            self.advance_tick()?;
        }
        Ok(())
    }

    /// Make one EPR move now, ignoring the clock.  Callers advance the clock.
    ///
    /// Draws `u ~ U[0, 1)` and explores if `u < rho · N^(−gamma)`, otherwise
    /// returns.  Records exactly one trajectory entry on success.
    pub(crate) fn decide_and_move(&mut self) -> EprResult<Decision> {
        let p = self.exploration_probability();
        let u: f64 = self.rng.random();
        let decision = if u < p { Decision::Explore } else { Decision::Return };
        trace!(tick = %self.clock, p_explore = p, %decision, "decide");
        match decision {
            Decision::Explore => self.explore()?,
            Decision::Return => self.preferential_return()?,
        };
        Ok(decision)
    }

    /// Jump to a uniformly chosen cell at a freshly drawn distance.
    ///
    /// The step length is truncated toward zero, so a draw below 1 yields
    /// distance 0 and the agent lands on its own cell.  Draws with no cell
    /// at that distance are discarded; after [`MAX_EXPLORE_ATTEMPTS`] of
    /// them the move fails with `GeometryExhausted`.
    pub(crate) fn explore(&mut self) -> EprResult<S::Coord> {
        let here = self.current;
        for attempt in 1..=MAX_EXPLORE_ATTEMPTS {
            let length = self.step.sample(self.rng.inner());
            // Saturating float-to-int cast: truncates, and huge draws clamp.
            let distance = length as u32;
            let candidates = self.space.cells_at_distance(&here, distance);
            if let Some(&dest) = self.rng.choose(&candidates) {
                self.visit(here, dest);
                return Ok(dest);
            }
            debug!(at = %here, distance, attempt, "no cell at drawn distance, resampling");
        }
        warn!(at = %here, attempts = MAX_EXPLORE_ATTEMPTS, "explore gave up");
        Err(EprError::GeometryExhausted {
            attempts: MAX_EXPLORE_ATTEMPTS,
            at: here.to_string(),
        })
    }

    /// Return to a visited cell with probability proportional to
    /// `1 / rank` of its visit count.  May pick the current cell.
    pub(crate) fn preferential_return(&mut self) -> EprResult<S::Coord> {
        let dest = self.return_target()?;
        let here = self.current;
        self.visit(here, dest);
        Ok(dest)
    }

    /// Draw a return destination without moving.
    pub(crate) fn return_target(&mut self) -> EprResult<S::Coord> {
        let weights = return_weights(&self.counts);
        let table = WeightedIndex::<f64>::new(&weights)
            .map_err(|e| EprError::InvalidArgument(format!("return weights: {e}")))?;
        Ok(self.sites[table.sample(self.rng.inner())])
    }

    /// Replace the history with `table`, each cell visited `n` times in a
    /// row, in the given order.  The clock is set to match.
    #[cfg(test)]
    pub(crate) fn load_visits(&mut self, table: &[(S::Coord, u32)]) {
        self.sites.clear();
        self.counts.clear();
        self.index.clear();
        self.trajectory.clear();
        for &(cell, n) in table {
            for _ in 0..n {
                self.record(cell);
            }
        }
        self.clock = Tick(self.trajectory.len() as u64 - 1);
        self.next_jump = self.clock;
    }

    /// Record a move from `origin` to `destination`.
    fn visit(&mut self, origin: S::Coord, destination: S::Coord) {
        trace!(tick = %self.clock, from = %origin, to = %destination, "move");
        self.record(destination);
    }

    fn record(&mut self, cell: S::Coord) {
        match self.index.get(&cell) {
            Some(&i) => self.counts[i] += 1,
            None => {
                self.index.insert(cell, self.sites.len());
                self.sites.push(cell);
                self.counts.push(1);
            }
        }
        self.trajectory.push(cell);
        self.current = cell;
    }
}
