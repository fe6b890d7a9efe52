//! `epr-sim` — population driver for EPR agents on a hexagonal lattice.
//!
//! # Tick loop
//!
//! ```text
//! for tick in clock..config.total_ticks:
//!   ① on_tick_start(tick)
//!   ② Advance  — every agent advances one tick: agents whose clock reached
//!                their next jump make an EPR move, the rest stay put
//!                (parallel with the `parallel` feature).
//!   ③ on_tick_end(tick, moved)
//!   ④ on_snapshot(tick, agents) every `output_interval_ticks` ticks
//! ```
//!
//! After the run, [`Population::visit_grid`] counts every trajectory entry
//! of every agent per lattice cell.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Advances agents on Rayon's thread pool.                |
//! | `fx-hash`  | FxHash for the per-agent visit index.                  |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `SimConfig`.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epr_sim::{NoopObserver, Population, SimConfig};
//!
//! let config = SimConfig { agent_count: 1_000, ..SimConfig::default() };
//! let lattice = config.make_lattice()?;
//! let mut population = Population::builder(&lattice, config).build()?;
//! population.run(&mut NoopObserver)?;
//! let grid = population.visit_grid();
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod population;


pub use builder::PopulationBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use population::Population;
