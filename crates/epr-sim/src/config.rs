//! Run configuration.

use epr_core::Tick;
use epr_lattice::HexLattice;
use epr_levy::LevyParams;
use epr_mobility::EprParams;

use crate::{SimError, SimResult};

/// Top-level population configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate and passed
/// to [`Population::builder`][crate::Population::builder].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Lattice width `W` (even).  Valid cells are `0 <= r, c <= W - 2`.
    pub lattice_width: u32,

    /// Number of agents seeded onto the lattice.
    pub agent_count: usize,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// EPR decision parameters shared by every agent.
    pub epr: EprParams,

    /// Step-length distribution.
    pub step: LevyParams,

    /// Inter-jump waiting-time distribution, in ticks.
    pub wait: LevyParams,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    /// Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,

    /// Call `on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct the lattice this configuration describes.
    pub fn make_lattice(&self) -> SimResult<HexLattice> {
        Ok(HexLattice::new(self.lattice_width)?)
    }

    /// Check every field without building anything.
    pub fn validate(&self) -> SimResult<()> {
        let w = self.lattice_width;
        if w == 0 || w % 2 != 0 || w > HexLattice::MAX_WIDTH {
            return Err(SimError::Config(format!(
                "lattice_width must be a positive even number up to {}, got {w}",
                HexLattice::MAX_WIDTH
            )));
        }
        if u32::try_from(self.agent_count).is_err() {
            return Err(SimError::Config(format!(
                "agent_count {} exceeds the agent id range",
                self.agent_count
            )));
        }
        if self.num_threads == Some(0) {
            return Err(SimError::Config("num_threads must be at least 1".into()));
        }
        self.epr
            .validate()
            .map_err(|e| SimError::Config(format!("epr: {e}")))?;
        self.step
            .validate()
            .map_err(|e| SimError::Config(format!("step: {e}")))?;
        self.wait
            .validate()
            .map_err(|e| SimError::Config(format!("wait: {e}")))?;
        Ok(())
    }
}

impl Default for SimConfig {
    /// 25 agents on a 100-wide lattice for 250 ticks, with the reference
    /// EPR and distribution parameters.
    fn default() -> Self {
        Self {
            lattice_width:         100,
            agent_count:           25,
            total_ticks:           250,
            seed:                  42,
            epr:                   EprParams::REFERENCE,
            step:                  LevyParams::STEP_LENGTH,
            wait:                  LevyParams::WAITING_TIME,
            num_threads:           None,
            output_interval_ticks: 0,
        }
    }
}
