//! The geometry abstraction agents move through.
//!
//! # Pluggability
//!
//! The EPR agent only ever asks two questions of its space: how far apart
//! two cells are, and which cells lie at an exact distance from a centre.
//! Any discrete topology that can answer both (hexagonal lattices, Voronoi
//! tessellations, graphs) can drive an agent by implementing [`Space`].
//! [`HexLattice`][crate::HexLattice] is the provided implementation.
//!
//! # Thread safety
//!
//! Implementations must be `Send + Sync`: one space is shared by immutable
//! reference between all agents of a population, which may be advanced on
//! several worker threads.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A discrete space with integer distances and exact-distance queries.
pub trait Space: Send + Sync {
    /// Cell identifier.  Agents key their visit-frequency table with it and
    /// use its `Display` form in logs and errors.
    type Coord: Copy + Eq + Hash + Debug + Display + Send + Sync;

    /// `true` if `coord` addresses a cell of this space.
    fn contains(&self, coord: &Self::Coord) -> bool;

    /// Distance between two cells, in cell steps.
    ///
    /// For callers measuring displacement along a trajectory.  Stepping only
    /// needs [`cells_at_distance`](Self::cells_at_distance).
    fn distance(&self, a: &Self::Coord, b: &Self::Coord) -> u32;

    /// Every cell of the space at exactly `distance` from `center`.
    ///
    /// Must be a pure function of its arguments and return cells in a
    /// deterministic order without duplicates; agents draw from the result
    /// by index, so the order is part of run reproducibility.  An empty
    /// result means no cell is reachable at that distance.
    fn cells_at_distance(&self, center: &Self::Coord, distance: u32) -> Vec<Self::Coord>;
}
