//! `StepDistribution` — density, closed-form CDF and inversion sampling.

use epr_core::{EprError, EprResult};
use rand::Rng;

use crate::special::ln_upper_gamma;

/// Upper bound on bracket doublings while searching for the quantile.
const MAX_BRACKET_DOUBLINGS: u32 = 128;
/// Upper bound on safeguarded Newton iterations per quantile.
const MAX_NEWTON_ITER: u32 = 200;
/// Relative tolerance on the returned quantile.
const QUANTILE_TOL: f64 = 1e-12;

// ── LevyParams ────────────────────────────────────────────────────────────────

/// Shape parameters of the truncated heavy-tailed distribution.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevyParams {
    /// Power-law tail exponent, `0 < beta < 1`.
    pub beta: f64,
    /// Exponential cutoff scale, `k > 0`.
    pub k: f64,
    /// Offset softening the power law near zero, `x0 >= 0`.
    pub x0: f64,
}

impl LevyParams {
    pub const fn new(beta: f64, k: f64, x0: f64) -> Self {
        Self { beta, k, x0 }
    }

    /// Reference step-length parameters: `beta = 0.75, k = 80, x0 = 1.5`.
    pub const STEP_LENGTH: LevyParams = LevyParams::new(0.75, 80.0, 1.5);

    /// Reference waiting-time parameters: `beta = 0.9, k = 25, x0 = 1`.
    pub const WAITING_TIME: LevyParams = LevyParams::new(0.9, 25.0, 1.0);

    /// Check the parameter domain.  Fails with `InvalidArgument`.
    pub fn validate(&self) -> EprResult<()> {
        let Self { beta, k, x0 } = *self;
        if !(beta > 0.0 && beta < 1.0) {
            return Err(EprError::InvalidArgument(format!(
                "levy beta must lie in (0, 1), got {beta}"
            )));
        }
        if !(k > 0.0 && k.is_finite()) {
            return Err(EprError::InvalidArgument(format!(
                "levy k must be a positive finite number, got {k}"
            )));
        }
        if !(x0 >= 0.0 && x0.is_finite()) {
            return Err(EprError::InvalidArgument(format!(
                "levy x0 must be a non-negative finite number, got {x0}"
            )));
        }
        Ok(())
    }
}

impl Default for LevyParams {
    fn default() -> Self {
        Self::STEP_LENGTH
    }
}

// ── StepDistribution ──────────────────────────────────────────────────────────

/// Truncated power law on `[0, ∞)`:
/// `pdf(x) = (x0 + x)^(−β) · exp(−x/k) / A`.
///
/// Immutable after construction.  Sampling borrows the caller's RNG, so one
/// distribution value can serve any number of independent streams.
///
/// # Example
///
/// ```
/// use epr_levy::{LevyParams, StepDistribution};
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let dist = StepDistribution::new(LevyParams::STEP_LENGTH).unwrap();
/// let mut rng = SmallRng::seed_from_u64(1);
/// let x = dist.sample(&mut rng);
/// assert!(x >= 0.0);
/// assert!(dist.density(-1.0).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StepDistribution {
    params: LevyParams,
    /// `1 − β`, the shape of the underlying Gamma density.
    shape: f64,
    /// `ln A`.
    ln_norm: f64,
    /// `ln Γ(1 − β, x0/k)`, the survival denominator.
    ln_tail0: f64,
}

impl StepDistribution {
    /// Validate `params` and precompute the normalisation constant.
    pub fn new(params: LevyParams) -> EprResult<Self> {
        params.validate()?;
        let LevyParams { beta, k, x0 } = params;
        let shape = 1.0 - beta;
        let ln_tail0 = ln_upper_gamma(shape, x0 / k);
        let ln_norm = x0 / k + shape * k.ln() + ln_tail0;
        if !ln_norm.is_finite() {
            return Err(EprError::InvalidArgument(format!(
                "levy parameters {params:?} give a non-normalisable density"
            )));
        }
        Ok(Self { params, shape, ln_norm, ln_tail0 })
    }

    #[inline]
    pub fn params(&self) -> LevyParams {
        self.params
    }

    /// The normalisation constant
    /// `A = exp(x0/k) · k^(1−β) · Γ(1−β, x0/k)`.
    pub fn normalisation(&self) -> f64 {
        self.ln_norm.exp()
    }

    fn ln_density(&self, x: f64) -> f64 {
        let LevyParams { beta, k, x0 } = self.params;
        -beta * (x0 + x).ln() - x / k - self.ln_norm
    }

    /// Evaluate the density.  Fails with `InvalidArgument` for `x < 0` or NaN.
    ///
    /// With `x0 == 0` the density is infinite at `x == 0`.
    pub fn density(&self, x: f64) -> EprResult<f64> {
        if x.is_nan() || x < 0.0 {
            return Err(EprError::InvalidArgument(format!(
                "density is defined for x >= 0, got {x}"
            )));
        }
        Ok(self.ln_density(x).exp())
    }

    /// `ln P(X > x)`.
    fn ln_survival(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let LevyParams { k, x0, .. } = self.params;
        (ln_upper_gamma(self.shape, (x0 + x) / k) - self.ln_tail0).min(0.0)
    }

    /// `P(X > x)`; 1 for `x <= 0`.
    pub fn survival(&self, x: f64) -> f64 {
        self.ln_survival(x).exp()
    }

    /// `P(X <= x)`; 0 for `x <= 0`.
    pub fn cdf(&self, x: f64) -> f64 {
        -self.ln_survival(x).exp_m1()
    }

    /// `E[X] = k · Γ(2−β, x0/k) / Γ(1−β, x0/k) − x0`.
    pub fn mean(&self) -> f64 {
        let LevyParams { k, x0, .. } = self.params;
        let ratio = (ln_upper_gamma(self.shape + 1.0, x0 / k) - self.ln_tail0).exp();
        k * ratio - x0
    }

    /// The `p`-quantile, `p ∈ [0, 1)`.  Fails with `InvalidArgument` outside
    /// that range.
    pub fn quantile(&self, p: f64) -> EprResult<f64> {
        if !(0.0..1.0).contains(&p) {
            return Err(EprError::InvalidArgument(format!(
                "quantile probability must lie in [0, 1), got {p}"
            )));
        }
        Ok(self.invert_survival((-p).ln_1p()))
    }

    /// Draw one value by inverting the CDF at a uniform `[0, 1)` variate.
    ///
    /// Consumes exactly one `f64` from `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.r#gen();
        self.invert_survival((-u).ln_1p())
    }

    /// Solve `ln S(x) = ln_target` for `x`.
    ///
    /// `g(x) = ln S(x) − ln_target` is strictly decreasing with
    /// `g(0) = −ln_target >= 0` and `g'(x) = −pdf(x) / S(x)`.  The root is
    /// bracketed by doubling, then refined with Newton steps that fall back
    /// to bisection whenever a step leaves the bracket.  Both loops are
    /// bounded.
    fn invert_survival(&self, ln_target: f64) -> f64 {
        if ln_target >= 0.0 {
            return 0.0;
        }
        let LevyParams { k, x0, .. } = self.params;

        let mut lo = 0.0_f64;
        let mut hi = k.max(x0).max(1.0);
        for _ in 0..MAX_BRACKET_DOUBLINGS {
            if self.ln_survival(hi) <= ln_target {
                break;
            }
            lo = hi;
            hi *= 2.0;
        }

        let mut x = 0.5 * (lo + hi);
        for _ in 0..MAX_NEWTON_ITER {
            let ln_s = self.ln_survival(x);
            let g = ln_s - ln_target;
            if g == 0.0 {
                return x;
            }
            if g > 0.0 {
                lo = x;
            } else {
                hi = x;
            }

            let slope = -(self.ln_density(x) - ln_s).exp();
            let mut next = x - g / slope;
            if !next.is_finite() || next <= lo || next >= hi {
                next = 0.5 * (lo + hi);
            }
            if (next - x).abs() <= QUANTILE_TOL * (1.0 + x) || hi - lo <= QUANTILE_TOL * (1.0 + x) {
                return next;
            }
            x = next;
        }
        x
    }
}
