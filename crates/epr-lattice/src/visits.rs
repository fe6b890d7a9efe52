//! Per-cell visit totals, the aggregate the epidemic overlay consumes.

use crate::coord::Coordinate;

/// Dense `width × width` visit counts, row-major by offset `(r, c)`.
///
/// Produced by [`HexLattice::count_visits`][crate::HexLattice::count_visits].
/// The grid covers the full conceptual lattice, including the reserved last
/// row and column (which stay zero for trajectories generated on the lattice).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitGrid {
    width: u32,
    counts: Vec<u64>,
}

impl VisitGrid {
    /// An all-zero grid.
    pub fn new(width: u32) -> Self {
        let side = width as usize;
        Self { width, counts: vec![0; side * side] }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    fn index(&self, coord: &Coordinate) -> Option<usize> {
        let w = self.width as i64;
        let (r, c) = (coord.row() as i64, coord.col() as i64);
        if (0..w).contains(&r) && (0..w).contains(&c) {
            Some((r * w + c) as usize)
        } else {
            None
        }
    }

    /// Add one visit to `coord`.  Returns `false` (and records nothing) when
    /// the coordinate lies outside the grid.
    pub fn record(&mut self, coord: &Coordinate) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.counts[i] += 1;
                true
            }
            None => false,
        }
    }

    /// Visits recorded for `coord`; zero outside the grid.
    pub fn get(&self, coord: &Coordinate) -> u64 {
        self.index(coord).map_or(0, |i| self.counts[i])
    }

    /// Sum over all cells.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// One row of counts (columns `0..width`).
    ///
    /// # Panics
    /// Panics if `r >= width`.
    pub fn row(&self, r: u32) -> &[u64] {
        let w = self.width as usize;
        let start = r as usize * w;
        &self.counts[start..start + w]
    }

    /// The raw row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }
}
