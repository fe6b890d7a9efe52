//! `epr-lattice` — hexagonal geometry for the EPR mobility engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`coord`]   | `Offset`, `Cube`, `Coordinate` and the odd-r conversions      |
//! | [`space`]   | `Space` trait — the geometry agents are generic over          |
//! | [`lattice`] | `HexLattice` — bounds validation and exact-distance rings     |
//! | [`visits`]  | `VisitGrid` — per-cell visit totals across trajectories       |
//!
//! # Geometry
//!
//! Cells are addressed by odd-row offset coordinates `(r, c)`: odd rows are
//! shifted half a cell to the right.  All distance arithmetic happens in cube
//! coordinates `(q, r, s)` with `q + r + s = 0`, where the hexagonal distance
//! is `(|Δq| + |Δr| + |Δs|) / 2`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod coord;
pub mod lattice;
pub mod space;
pub mod visits;

#[cfg(test)]
mod tests;

pub use coord::{Coordinate, Cube, Offset};
pub use lattice::HexLattice;
pub use space::Space;
pub use visits::VisitGrid;
