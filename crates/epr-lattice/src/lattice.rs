//! Finite odd-row offset hexagonal lattice.

use epr_core::{EprError, EprResult};

use crate::coord::{Coordinate, Cube};
use crate::space::Space;
use crate::visits::VisitGrid;

/// A `width × width` hexagonal grid addressed by odd-r offset coordinates.
///
/// # Valid cells
///
/// A coordinate is valid iff `0 <= r <= width − 2` and `0 <= c <= width − 2`.
/// The last row and column of the conceptual `width × width` grid are
/// reserved and never produced by [`ring_query`](Self::ring_query), so a
/// lattice of width `W` has `(W − 1)²` usable cells.  Visit totals are still
/// reported on the full `W × W` grid (see [`VisitGrid`]).
///
/// The lattice never changes after construction; share it by reference.
///
/// # Example
///
/// ```
/// use epr_lattice::{Coordinate, HexLattice};
///
/// let lattice = HexLattice::new(10).unwrap();
/// let centre = Coordinate::from_offset(5, 5);
/// assert_eq!(lattice.ring_query(&centre, 0).unwrap(), vec![centre]);
/// assert_eq!(lattice.ring_query(&centre, 1).unwrap().len(), 6);
/// assert!(lattice.ring_query(&centre, -1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexLattice {
    width: u32,
}

impl HexLattice {
    /// Largest accepted width: offsets are `i32`, so every index must fit.
    pub const MAX_WIDTH: u32 = 1 << 30;

    /// Create a lattice.  Fails with `InvalidArgument` if `width` is zero,
    /// odd, or larger than [`MAX_WIDTH`](Self::MAX_WIDTH).
    pub fn new(width: u32) -> EprResult<Self> {
        if width == 0 || width % 2 != 0 {
            return Err(EprError::InvalidArgument(format!(
                "lattice width must be a positive even integer, got {width}"
            )));
        }
        if width > Self::MAX_WIDTH {
            return Err(EprError::InvalidArgument(format!(
                "lattice width {width} exceeds maximum {}",
                Self::MAX_WIDTH
            )));
        }
        Ok(Self { width })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Largest valid row and column index (`width − 2`).
    #[inline]
    pub fn max_index(&self) -> i32 {
        self.width as i32 - 2
    }

    /// Number of valid cells, `(width − 1)²`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        let side = self.width as usize - 1;
        side * side
    }

    /// `true` iff both offset components lie in `[0, width − 2]`.
    #[inline]
    pub fn is_valid(&self, coord: &Coordinate) -> bool {
        let max = self.max_index();
        (0..=max).contains(&coord.row()) && (0..=max).contains(&coord.col())
    }

    /// All valid cells in row-major `(r, c)` order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let max = self.max_index();
        (0..=max).flat_map(move |r| (0..=max).map(move |c| Coordinate::from_offset(r, c)))
    }

    /// Every valid cell at exact hexagonal distance `distance` from `center`.
    ///
    /// `distance == 0` yields `[center]` when `center` is valid.  For
    /// `distance > 0` the unclipped ring has `6 · distance` cells; cells off
    /// the lattice are dropped.  Results are ordered by row, then column.
    ///
    /// Fails with `InvalidArgument` for a negative distance.
    pub fn ring_query(&self, center: &Coordinate, distance: i64) -> EprResult<Vec<Coordinate>> {
        if distance < 0 {
            return Err(EprError::InvalidArgument(format!(
                "ring distance must be non-negative, got {distance}"
            )));
        }
        // Anything beyond u32 is far outside any lattice we accept.
        let d = u32::try_from(distance).unwrap_or(u32::MAX);
        Ok(self.ring(center, d))
    }

    /// Ring enumeration over cube offsets `(dq, dr)` with
    /// `|dq| + |dr| + |dq + dr| == 2d`, restricted to rows and columns that
    /// can hold valid cells.
    ///
    /// For a fixed `dr` the hex disk of radius `d` spans
    /// `dq ∈ [max(−d, −d − dr), min(d, d − dr)]`.  The two rows at
    /// `|dr| == d` lie entirely on the ring; every other row contributes only
    /// its two end cells.
    fn ring(&self, center: &Coordinate, d: u32) -> Vec<Coordinate> {
        let max = self.max_index() as i64;
        let d = d as i64;
        let q0 = center.cube().q() as i64;
        let r0 = center.row() as i64;

        let row_lo = (r0 - d).max(0);
        let row_hi = (r0 + d).min(max);
        let mut out = Vec::new();
        if row_lo > row_hi {
            return out;
        }

        for r in row_lo..=row_hi {
            let dr = r - r0;
            let lo = (-d).max(-d - dr);
            let hi = d.min(d - dr);
            // Column c = q + shift on this row, so valid q is [−shift, max − shift].
            let shift = (r - (r & 1)) / 2;
            let q_min = -shift - q0;
            let q_max = max - shift - q0;

            if dr.abs() == d {
                for dq in lo.max(q_min)..=hi.min(q_max) {
                    out.push(cell(q0 + dq, r));
                }
            } else {
                for dq in [lo, hi] {
                    if (q_min..=q_max).contains(&dq) {
                        out.push(cell(q0 + dq, r));
                    }
                }
            }
        }
        out
    }

    /// Aggregate visit totals over many trajectories.
    ///
    /// Every trajectory entry adds one visit to its cell, so a tick spent
    /// staying in place counts as a visit.  Entries outside the `W × W`
    /// grid are ignored.
    pub fn count_visits<'t, I>(&self, trajectories: I) -> VisitGrid
    where
        I: IntoIterator<Item = &'t [Coordinate]>,
    {
        let mut grid = VisitGrid::new(self.width);
        for trajectory in trajectories {
            for coord in trajectory {
                grid.record(coord);
            }
        }
        grid
    }
}

/// Build a coordinate from an axial pair already known to fit in `i32`.
#[inline]
fn cell(q: i64, r: i64) -> Coordinate {
    Coordinate::from(Cube::axial(q as i32, r as i32))
}

impl Space for HexLattice {
    type Coord = Coordinate;

    #[inline]
    fn contains(&self, coord: &Coordinate) -> bool {
        self.is_valid(coord)
    }

    #[inline]
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> u32 {
        a.distance(b)
    }

    fn cells_at_distance(&self, center: &Coordinate, distance: u32) -> Vec<Coordinate> {
        self.ring(center, distance)
    }
}
