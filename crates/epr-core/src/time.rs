//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  Every agent advances
//! its own clock by exactly one tick per `advance_tick` call, and each tick
//! contributes one trajectory entry.
//!
//! Waiting times are drawn from a continuous distribution but compared
//! against an integer clock, so `clock >= t + w` holds exactly when
//! `clock >= t + ceil(w)`.  [`Tick::after`] performs that conversion, which
//! keeps all schedule arithmetic in integers.

use std::fmt;

/// An absolute simulation tick counter.
///
/// Stored as `u64`; a run would need more than 10^19 ticks to overflow.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The first tick at or after `self + wait`.
    ///
    /// Negative and NaN waits count as zero; waits beyond `u64::MAX` ticks
    /// saturate.
    #[inline]
    pub fn after(self, wait: f64) -> Tick {
        let whole = if wait.is_nan() || wait <= 0.0 {
            0
        } else {
            // Float-to-int `as` saturates, so +inf maps to u64::MAX.
            wait.ceil() as u64
        };
        Tick(self.0.saturating_add(whole))
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
