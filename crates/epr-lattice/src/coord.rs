//! Hexagonal cell coordinates in offset and cube form.
//!
//! A [`Coordinate`] always carries both encodings so callers never pay for a
//! conversion twice.  The mapping is the "odd-r" layout:
//!
//! ```text
//! offset → cube:  q = c − (r − (r & 1)) / 2,   s = −q − r
//! cube → offset:  c = q + (r − (r & 1)) / 2
//! ```
//!
//! `r − (r & 1)` is always even (also for negative rows, where `&` acts on the
//! two's-complement bits), so the division is exact and the conversion is a
//! bijection on all of `i32 × i32` that stays within range.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use epr_core::{EprError, EprResult};

/// `√3`, the horizontal spacing of pointy-top hexagons with outer radius 1.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

// ── Offset ────────────────────────────────────────────────────────────────────

/// Row/column address of a cell; odd rows are shifted right by half a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub r: i32,
    pub c: i32,
}

impl Offset {
    #[inline]
    pub fn new(r: i32, c: i32) -> Self {
        Self { r, c }
    }

    /// Convert to cube coordinates.
    #[inline]
    pub fn to_cube(self) -> Cube {
        let q = self.c - (self.r - (self.r & 1)) / 2;
        Cube { q, r: self.r, s: -q - self.r }
    }
}

// ── Cube ──────────────────────────────────────────────────────────────────────

/// Three-axis hexagonal coordinate with `q + r + s == 0`.
///
/// Fields are private so the invariant holds for every value in circulation;
/// build one with [`Cube::new`] (checked) or [`Cube::axial`] (derives `s`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cube {
    q: i32,
    r: i32,
    s: i32,
}

impl Cube {
    /// Checked constructor.  Fails with `InvalidCoordinate` unless
    /// `q + r + s == 0`.
    pub fn new(q: i32, r: i32, s: i32) -> EprResult<Self> {
        if q as i64 + r as i64 + s as i64 != 0 {
            return Err(EprError::InvalidCoordinate(format!(
                "cube ({q}, {r}, {s}) does not satisfy q + r + s = 0"
            )));
        }
        Ok(Self { q, r, s })
    }

    /// Build from the two independent axes; `s` is derived.
    #[inline]
    pub fn axial(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    #[inline]
    pub fn q(self) -> i32 {
        self.q
    }

    #[inline]
    pub fn r(self) -> i32 {
        self.r
    }

    #[inline]
    pub fn s(self) -> i32 {
        self.s
    }

    /// Convert to odd-r offset coordinates.
    #[inline]
    pub fn to_offset(self) -> Offset {
        Offset { r: self.r, c: self.q + (self.r - (self.r & 1)) / 2 }
    }

    /// Hexagonal distance: `(|Δq| + |Δr| + |Δs|) / 2`.
    #[inline]
    pub fn distance(self, other: Cube) -> u32 {
        let dq = (self.q as i64 - other.q as i64).unsigned_abs();
        let dr = (self.r as i64 - other.r as i64).unsigned_abs();
        let ds = (self.s as i64 - other.s as i64).unsigned_abs();
        ((dq + dr + ds) / 2) as u32
    }
}

impl std::ops::Add for Cube {
    type Output = Cube;
    #[inline]
    fn add(self, rhs: Cube) -> Cube {
        Cube { q: self.q + rhs.q, r: self.r + rhs.r, s: self.s + rhs.s }
    }
}

// ── Coordinate ────────────────────────────────────────────────────────────────

/// One lattice cell, holding both its offset and cube encodings.
///
/// Equality, hashing and ordering look only at the offset pair, so a
/// `Coordinate` can key a visit-frequency map.  Ordering is row-major
/// `(r, c)`, matching the lattice's canonical cell order.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    offset: Offset,
    cube: Cube,
}

impl Coordinate {
    #[inline]
    pub fn from_offset(r: i32, c: i32) -> Self {
        let offset = Offset::new(r, c);
        Self { offset, cube: offset.to_cube() }
    }

    /// Fails with `InvalidCoordinate` when `q + r + s != 0`.
    pub fn from_cube(q: i32, r: i32, s: i32) -> EprResult<Self> {
        Ok(Self::from(Cube::new(q, r, s)?))
    }

    #[inline]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    #[inline]
    pub fn cube(&self) -> Cube {
        self.cube
    }

    /// Row (shared by both encodings).
    #[inline]
    pub fn row(&self) -> i32 {
        self.offset.r
    }

    /// Offset column.
    #[inline]
    pub fn col(&self) -> i32 {
        self.offset.c
    }

    /// Hexagonal distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Coordinate) -> u32 {
        self.cube.distance(other.cube)
    }

    /// Cell centre on the plane for pointy-top hexagons of outer radius 1.
    ///
    /// Only for plotting / embedding.  Distance logic never uses it.
    pub fn cartesian(&self) -> (f64, f64) {
        let shift = (self.offset.r & 1) as f64 / 2.0;
        let x = (shift + self.offset.c as f64) * SQRT_3;
        let y = self.offset.r as f64 * 1.5;
        (x, y)
    }
}

impl From<Offset> for Coordinate {
    #[inline]
    fn from(offset: Offset) -> Self {
        Self { offset, cube: offset.to_cube() }
    }
}

impl From<Cube> for Coordinate {
    #[inline]
    fn from(cube: Cube) -> Self {
        Self { offset: cube.to_offset(), cube }
    }
}

impl PartialEq for Coordinate {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.offset.hash(state);
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.offset.r, self.offset.c)
    }
}
