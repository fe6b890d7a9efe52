//! Fluent builder for constructing a [`Population`].

use epr_core::{AgentId, AgentRng, SimRng, Tick};
use epr_lattice::{Coordinate, HexLattice};
use epr_mobility::Agent;
use tracing::debug;

use crate::{Population, SimConfig, SimError, SimResult};

/// Fluent builder for [`Population`].
///
/// # Required inputs
///
/// - `&HexLattice` — shared read-only by every agent
/// - [`SimConfig`] — agent count, ticks, seed, model parameters
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                                           |
/// |--------------|---------------------------------------------------|
/// | `.seeds(v)`  | Uniformly random valid cells drawn from `seed`    |
///
/// # Example
///
/// ```
/// use epr_sim::{NoopObserver, Population, SimConfig};
///
/// let config = SimConfig { agent_count: 10, total_ticks: 30, ..SimConfig::default() };
/// let lattice = config.make_lattice().unwrap();
/// let mut population = Population::builder(&lattice, config).build().unwrap();
/// population.run(&mut NoopObserver).unwrap();
/// assert_eq!(population.visit_grid().total(), 10 * 31);
/// ```
pub struct PopulationBuilder<'a> {
    lattice: &'a HexLattice,
    config:  SimConfig,
    seeds:   Option<Vec<Coordinate>>,
}

impl<'a> PopulationBuilder<'a> {
    pub fn new(lattice: &'a HexLattice, config: SimConfig) -> Self {
        Self { lattice, config, seeds: None }
    }

    /// Place agent `i` at `seeds[i]` instead of a random cell.
    ///
    /// Must be length `agent_count`; every cell must be valid on the lattice.
    pub fn seeds(mut self, seeds: Vec<Coordinate>) -> Self {
        self.seeds = Some(seeds);
        self
    }

    /// Validate inputs, seed the agents and return a ready-to-run
    /// [`Population`] at tick 0.
    pub fn build(self) -> SimResult<Population<'a>> {
        let config = self.config;
        config.validate()?;
        if config.lattice_width != self.lattice.width() {
            return Err(SimError::Config(format!(
                "config lattice_width {} does not match lattice width {}",
                config.lattice_width,
                self.lattice.width()
            )));
        }

        let seeds = match self.seeds {
            Some(s) => {
                if s.len() != config.agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: config.agent_count,
                        got:      s.len(),
                        what:     "seeds",
                    });
                }
                s
            }
            None => uniform_seeds(self.lattice, config.agent_count, config.seed),
        };

        let mut agents = Vec::with_capacity(seeds.len());
        for (i, &cell) in seeds.iter().enumerate() {
            let id = AgentId::try_from(i)
                .map_err(|e| SimError::Config(format!("agent index {i}: {e}")))?;
            let agent = Agent::new(
                self.lattice,
                cell,
                config.epr,
                config.step,
                config.wait,
                AgentRng::new(config.seed, id),
            )
            .map_err(|source| SimError::Agent { agent: id, source })?;
            agents.push(agent);
        }
        debug!(
            agents = agents.len(),
            width = self.lattice.width(),
            seed = config.seed,
            "seeded population"
        );

        #[cfg(feature = "parallel")]
        let pool = match config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(format!("thread pool: {e}")))?,
            ),
            None => None,
        };

        Ok(Population {
            config,
            lattice: self.lattice,
            agents,
            clock: Tick::ZERO,
            halted: None,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}

/// `count` cells drawn independently and uniformly from the valid cells.
fn uniform_seeds(lattice: &HexLattice, count: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SimRng::new(seed);
    let max = lattice.max_index();
    (0..count)
        .map(|_| {
            let r = rng.gen_range(0..=max);
            let c = rng.gen_range(0..=max);
            Coordinate::from_offset(r, c)
        })
        .collect()
}
