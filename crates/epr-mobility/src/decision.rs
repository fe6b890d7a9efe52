//! The EPR decision rule, as pure functions of an agent's visit table.

use std::fmt;

/// What an agent did on a tick where its clock reached `next_jump`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Jumped to a cell at a freshly drawn distance.
    Explore,
    /// Went back to a previously visited cell.
    Return,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Explore => f.write_str("explore"),
            Decision::Return => f.write_str("return"),
        }
    }
}

/// `rho · n^(−gamma)`: the probability that an agent which has visited `n`
/// distinct cells explores rather than returns.
///
/// Strictly decreasing in `n` for `gamma > 0`.  Agents always have `n >= 1`,
/// so with valid parameters the result lies in `(0, rho]`.
#[inline]
pub fn exploration_probability(rho: f64, gamma: f64, n: usize) -> f64 {
    rho * (n as f64).powf(-gamma)
}

/// Normalised preferential-return weights, one per entry of `counts`.
///
/// Cells are ranked by descending visit count with competition ranking: a
/// cell's rank is one plus the number of cells visited strictly more often,
/// so ties share the better rank (`5, 3, 3, 1` ranks as `1, 2, 2, 4`).  Each
/// cell is weighted `1 / rank` and the weights are scaled to sum to one.
/// Output order matches input order.  An empty input gives an empty output.
///
/// Runs in `O(n log n)`.
pub fn return_weights(counts: &[u32]) -> Vec<f64> {
    let mut descending = counts.to_vec();
    descending.sort_unstable_by(|a, b| b.cmp(a));

    let raw: Vec<f64> = counts
        .iter()
        .map(|&c| {
            let above = descending.partition_point(|&x| x > c);
            1.0 / (above + 1) as f64
        })
        .collect();
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / total).collect()
}
