//! `epr-mobility` — Exploration and Preferential Return (EPR) agents.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`params`]   | `EprParams` — exploration strength `rho` and decay `gamma`      |
//! | [`decision`] | `Decision`, `exploration_probability`, `return_weights`         |
//! | [`agent`]    | `Agent<S>` — visit table, trajectory, clock, tick advancement   |
//!
//! # Movement model (tick clock with heavy-tailed waits)
//!
//! Every agent lives on a shared, read-only [`Space`][epr_lattice::Space]
//! and owns its random stream.  On each tick:
//!
//! 1. If the clock has not yet reached `next_jump`, the agent stays and its
//!    current cell is appended to the trajectory again.
//! 2. Otherwise it makes one EPR decision.  With probability
//!    `p = rho · N^(−gamma)`, where `N` is the number of distinct cells
//!    visited so far, it **explores**: draws a step length, truncates it to
//!    an integer distance and jumps to a uniformly chosen cell at exactly
//!    that distance.  Otherwise it **returns** to a visited cell, chosen with
//!    weight `1 / rank` by visit frequency.
//! 3. After a move it draws a waiting time `w` and sets
//!    `next_jump = clock + ⌈w⌉`.
//!
//! The clock advances by one tick either way, so after `n` ticks the
//! trajectory holds `n + 1` cells.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                      |
//! |-----------|-------------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the per-agent visit index.    |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `EprParams`.           |

pub mod agent;
pub mod decision;
pub mod params;


pub use agent::{Agent, MAX_EXPLORE_ATTEMPTS};
pub use decision::{exploration_probability, return_weights, Decision};
pub use params::EprParams;
