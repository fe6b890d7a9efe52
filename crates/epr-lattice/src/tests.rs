//! Unit tests for epr-lattice.
//!
//! Ring queries are checked against a brute-force scan of every valid cell,
//! which is slow but obviously correct.

#[cfg(test)]
mod helpers {
    use crate::{Coordinate, HexLattice};

    pub fn c(r: i32, col: i32) -> Coordinate {
        Coordinate::from_offset(r, col)
    }

    /// All valid cells at exactly `d` from `center`, row-major.
    pub fn brute_ring(lattice: &HexLattice, center: &Coordinate, d: u32) -> Vec<Coordinate> {
        lattice.cells().filter(|x| x.distance(center) == d).collect()
    }
}

// ── Coordinates ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod coord {
    use std::collections::HashSet;

    use epr_core::EprError;

    use super::helpers::c;
    use crate::{Coordinate, Cube, Offset};

    #[test]
    fn known_conversions() {
        // Even rows: no shift.
        assert_eq!(Offset::new(0, 0).to_cube(), Cube::axial(0, 0));
        assert_eq!(Offset::new(2, 2).to_cube(), Cube::axial(1, 2));
        // Odd rows: (r − 1) / 2 shift.
        assert_eq!(Offset::new(1, 0).to_cube(), Cube::axial(0, 1));
        assert_eq!(Offset::new(3, 2).to_cube(), Cube::axial(1, 3));
        assert_eq!(Offset::new(5, 5).to_cube(), Cube::axial(3, 5));
        // Negative odd row uses the two's-complement low bit.
        assert_eq!(Offset::new(-1, 0).to_cube(), Cube::axial(1, -1));
    }

    #[test]
    fn both_encodings_populated() {
        let a = Coordinate::from_offset(3, 2);
        assert_eq!(a.cube(), Cube::axial(1, 3));
        let b = Coordinate::from_cube(1, 3, -4).unwrap();
        assert_eq!(b.offset(), Offset::new(3, 2));
        assert_eq!(a, b);
    }

    #[test]
    fn cube_invariant_enforced() {
        let err = Coordinate::from_cube(1, 1, 1).unwrap_err();
        assert!(matches!(err, EprError::InvalidCoordinate(_)));
        assert!(Cube::new(2, -5, 3).is_ok());
    }

    #[test]
    fn cube_components_sum_to_zero() {
        for r in -5..5 {
            for col in -5..5 {
                let k = c(r, col).cube();
                assert_eq!(k.q() + k.r() + k.s(), 0);
            }
        }
    }

    #[test]
    fn equality_and_hash_by_offset() {
        let mut set = HashSet::new();
        set.insert(c(4, 4));
        set.insert(Coordinate::from(Cube::axial(2, 4)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![c(1, 0), c(0, 5), c(0, 1)];
        v.sort();
        assert_eq!(v, vec![c(0, 1), c(0, 5), c(1, 0)]);
    }

    #[test]
    fn distance_examples() {
        assert_eq!(c(5, 5).distance(&c(5, 5)), 0);
        assert_eq!(c(5, 5).distance(&c(5, 6)), 1);
        assert_eq!(c(5, 5).distance(&c(4, 6)), 1);
        assert_eq!(c(5, 5).distance(&c(4, 4)), 2);
        assert_eq!(c(0, 0).distance(&c(0, 7)), 7);
        assert_eq!(c(0, 0).distance(&c(6, 0)), 6);
    }

    #[test]
    fn cartesian_projection() {
        let (x, y) = c(0, 0).cartesian();
        assert_eq!((x, y), (0.0, 0.0));
        let (x, y) = c(1, 0).cartesian();
        assert!((x - 3f64.sqrt() / 2.0).abs() < 1e-12);
        assert!((y - 1.5).abs() < 1e-12);
        let (x, _) = c(2, 3).cartesian();
        assert!((x - 3.0 * 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(c(3, 7).to_string(), "(3, 7)");
    }
}

// ── Lattice construction & bounds ─────────────────────────────────────────────

#[cfg(test)]
mod lattice {
    use epr_core::EprError;

    use super::helpers::c;
    use crate::HexLattice;

    #[test]
    fn rejects_zero_and_odd_width() {
        assert!(matches!(HexLattice::new(0), Err(EprError::InvalidArgument(_))));
        assert!(matches!(HexLattice::new(7), Err(EprError::InvalidArgument(_))));
        assert!(HexLattice::new(HexLattice::MAX_WIDTH + 2).is_err());
        assert!(HexLattice::new(10).is_ok());
    }

    #[test]
    fn last_row_and_column_reserved() {
        let l = HexLattice::new(10).unwrap();
        assert!(l.is_valid(&c(0, 0)));
        assert!(l.is_valid(&c(8, 8)));
        assert!(!l.is_valid(&c(9, 0)));
        assert!(!l.is_valid(&c(0, 9)));
        assert!(!l.is_valid(&c(-1, 3)));
        assert!(!l.is_valid(&c(3, -1)));
    }

    #[test]
    fn cells_enumerates_every_valid_cell_once() {
        let l = HexLattice::new(6).unwrap();
        let cells: Vec<_> = l.cells().collect();
        assert_eq!(cells.len(), l.cell_count());
        assert_eq!(cells.len(), 25);
        assert!(cells.iter().all(|x| l.is_valid(x)));
        assert!(cells.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn width_two_has_a_single_cell() {
        let l = HexLattice::new(2).unwrap();
        assert_eq!(l.cell_count(), 1);
        assert_eq!(l.ring_query(&c(0, 0), 0).unwrap(), vec![c(0, 0)]);
        assert!(l.ring_query(&c(0, 0), 1).unwrap().is_empty());
    }
}

// ── Ring queries ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod ring {
    use std::collections::HashSet;

    use epr_core::EprError;

    use super::helpers::{brute_ring, c};
    use crate::{HexLattice, Space};

    #[test]
    fn distance_zero_is_center() {
        let l = HexLattice::new(10).unwrap();
        for center in l.cells() {
            assert_eq!(l.ring_query(&center, 0).unwrap(), vec![center]);
        }
    }

    #[test]
    fn distance_zero_off_lattice_is_empty() {
        let l = HexLattice::new(10).unwrap();
        assert!(l.ring_query(&c(9, 9), 0).unwrap().is_empty());
    }

    #[test]
    fn negative_distance_rejected() {
        let l = HexLattice::new(10).unwrap();
        let err = l.ring_query(&c(5, 5), -1).unwrap_err();
        assert!(matches!(err, EprError::InvalidArgument(_)));
    }

    #[test]
    fn first_ring_of_odd_row() {
        let l = HexLattice::new(10).unwrap();
        let ring = l.ring_query(&c(5, 5), 1).unwrap();
        assert_eq!(
            ring,
            vec![c(4, 5), c(4, 6), c(5, 4), c(5, 6), c(6, 5), c(6, 6)]
        );
    }

    #[test]
    fn first_ring_of_even_row() {
        let l = HexLattice::new(10).unwrap();
        let ring = l.ring_query(&c(4, 4), 1).unwrap();
        assert_eq!(
            ring,
            vec![c(3, 3), c(3, 4), c(4, 3), c(4, 5), c(5, 3), c(5, 4)]
        );
    }

    #[test]
    fn interior_rings_have_six_d_cells() {
        let l = HexLattice::new(40).unwrap();
        let center = c(19, 19);
        for d in 1..=15 {
            let ring = l.ring_query(&center, d).unwrap();
            assert_eq!(ring.len(), 6 * d as usize, "d={d}");
            assert!(ring.iter().all(|x| x.distance(&center) == d as u32));
        }
    }

    #[test]
    fn corner_ring_is_clipped() {
        let l = HexLattice::new(10).unwrap();
        assert_eq!(l.ring_query(&c(0, 0), 1).unwrap(), vec![c(0, 1), c(1, 0)]);
    }

    #[test]
    fn matches_brute_force_everywhere() {
        let l = HexLattice::new(12).unwrap();
        for center in l.cells() {
            for d in 0..=14u32 {
                let fast = l.ring_query(&center, d as i64).unwrap();
                assert_eq!(fast, brute_ring(&l, &center, d), "center={center} d={d}");
            }
        }
    }

    #[test]
    fn off_lattice_center_still_finds_cells() {
        let l = HexLattice::new(10).unwrap();
        let outside = c(-3, 4);
        for d in 0..=12u32 {
            let ring = l.ring_query(&outside, d as i64).unwrap();
            assert_eq!(ring, brute_ring(&l, &outside, d));
        }
    }

    #[test]
    fn huge_distance_is_empty_not_a_hang() {
        let l = HexLattice::new(10).unwrap();
        assert!(l.ring_query(&c(4, 4), i64::MAX).unwrap().is_empty());
        assert!(l.cells_at_distance(&c(4, 4), u32::MAX).is_empty());
    }

    #[test]
    fn rings_partition_the_disk() {
        let l = HexLattice::new(16).unwrap();
        let center = c(3, 11);
        let max_d = 9u32;
        let mut seen = HashSet::new();
        for d in 0..=max_d {
            for cell in l.cells_at_distance(&center, d) {
                assert!(seen.insert(cell), "{cell} appeared in two rings");
            }
        }
        let disk: HashSet<_> = l.cells().filter(|x| x.distance(&center) <= max_d).collect();
        assert_eq!(seen, disk);
    }

    #[test]
    fn space_trait_delegates() {
        let l = HexLattice::new(10).unwrap();
        assert!(Space::contains(&l, &c(2, 2)));
        assert!(!Space::contains(&l, &c(9, 2)));
        assert_eq!(Space::distance(&l, &c(5, 5), &c(4, 4)), 2);
        assert_eq!(l.cells_at_distance(&c(5, 5), 2), l.ring_query(&c(5, 5), 2).unwrap());
    }
}

// ── Visit aggregation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod visits {
    use super::helpers::c;
    use crate::{HexLattice, VisitGrid};

    #[test]
    fn counts_every_trajectory_entry() {
        let l = HexLattice::new(6).unwrap();
        let a = vec![c(1, 1), c(1, 1), c(2, 3)];
        let b = vec![c(2, 3), c(0, 0)];
        let grid = l.count_visits([a.as_slice(), b.as_slice()]);
        assert_eq!(grid.get(&c(1, 1)), 2);
        assert_eq!(grid.get(&c(2, 3)), 2);
        assert_eq!(grid.get(&c(0, 0)), 1);
        assert_eq!(grid.get(&c(4, 4)), 0);
        assert_eq!(grid.total(), 5);
        assert_eq!(grid.row(1), &[0, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn out_of_grid_entries_are_ignored() {
        let mut grid = VisitGrid::new(4);
        assert!(grid.record(&c(3, 3)));
        assert!(!grid.record(&c(4, 0)));
        assert!(!grid.record(&c(-1, 0)));
        assert_eq!(grid.total(), 1);
        assert_eq!(grid.get(&c(-1, 0)), 0);
        assert_eq!(grid.as_slice().len(), 16);
    }
}

// ── Property tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::helpers::{brute_ring, c};
    use crate::{Coordinate, HexLattice};

    proptest! {
        #[test]
        fn offset_cube_roundtrip(r in -1_000_000i32..1_000_000, col in -1_000_000i32..1_000_000) {
            let a = c(r, col);
            let back = Coordinate::from(a.cube());
            prop_assert_eq!(back.offset(), a.offset());
        }

        #[test]
        fn lattice_cells_roundtrip(half in 1u32..20, r in 0i32..40, col in 0i32..40) {
            let l = HexLattice::new(half * 2).unwrap();
            let max = l.max_index();
            let a = c(r % (max + 1), col % (max + 1));
            prop_assert!(l.is_valid(&a));
            let k = a.cube();
            let b = Coordinate::from_cube(k.q(), k.r(), k.s()).unwrap();
            prop_assert_eq!(b.offset(), a.offset());
        }

        #[test]
        fn distance_is_metric(
            ar in -20i32..20, ac in -20i32..20,
            br in -20i32..20, bc in -20i32..20,
            xr in -20i32..20, xc in -20i32..20,
        ) {
            let (a, b, x) = (c(ar, ac), c(br, bc), c(xr, xc));
            prop_assert_eq!(a.distance(&a), 0);
            prop_assert_eq!(a.distance(&b), b.distance(&a));
            prop_assert!(a.distance(&x) <= a.distance(&b) + b.distance(&x));
        }

        #[test]
        fn ring_equals_brute_force(r in 0i32..14, col in 0i32..14, d in 0u32..20) {
            let l = HexLattice::new(16).unwrap();
            let center = c(r, col);
            let ring = l.ring_query(&center, d as i64).unwrap();
            prop_assert_eq!(ring, brute_ring(&l, &center, d));
        }
    }
}
