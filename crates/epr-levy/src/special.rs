//! Gamma-family special functions.
//!
//! Only what the distribution needs: `ln Γ(x)` for `x > 0` and
//! `ln Γ(a, x)` (unregularised upper incomplete gamma) for `a > 0, x ≥ 0`.
//! The incomplete gamma uses the power series of the lower function below
//! `x = a + 1` and a modified-Lentz continued fraction above it.

use std::f64::consts::PI;

/// Lanczos approximation, g = 7, n = 9.  Relative error ~1e-15.
const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEF: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

const EPS: f64 = 1e-16;
const TINY: f64 = 1e-300;
const MAX_ITER: usize = 10_000;

/// `ln Γ(x)` for `x > 0`.
pub fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection: Γ(x)Γ(1−x) = π / sin(πx).
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }
    let x = x - 1.0;
    let mut acc = LANCZOS_COEF[0];
    for (i, c) in LANCZOS_COEF.iter().enumerate().skip(1) {
        acc += c / (x + i as f64);
    }
    let t = x + LANCZOS_G + 0.5;
    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + acc.ln()
}

/// `ln Γ(a, x)`, the log of the unregularised upper incomplete gamma
/// function `∫_x^∞ t^(a−1) e^(−t) dt`, for `a > 0` and `x ≥ 0`.
///
/// Returns `−∞` when the value underflows completely.
pub fn ln_upper_gamma(a: f64, x: f64) -> f64 {
    debug_assert!(a > 0.0 && x >= 0.0, "ln_upper_gamma({a}, {x}) outside domain");
    if x == 0.0 {
        return ln_gamma(a);
    }
    if x < a + 1.0 {
        let lg = ln_gamma(a);
        let lower = lower_regularised_series(a, x, lg);
        lg + (-lower).ln_1p()
    } else {
        -x + a * x.ln() + upper_continued_fraction(a, x).ln()
    }
}

/// Regularised lower incomplete gamma `P(a, x)` by its power series.
/// Converges quickly for `x < a + 1`.
fn lower_regularised_series(a: f64, x: f64, ln_gamma_a: f64) -> f64 {
    let mut ap = a;
    let mut term = 1.0 / a;
    let mut sum = term;
    for _ in 0..MAX_ITER {
        ap += 1.0;
        term *= x / ap;
        sum += term;
        if term.abs() < sum.abs() * EPS {
            break;
        }
    }
    sum * (-x + a * x.ln() - ln_gamma_a).exp()
}

/// Continued fraction `h` with `Γ(a, x) = e^(−x) · x^a · h`, evaluated by the
/// modified Lentz method.  Converges quickly for `x ≥ a + 1`.
fn upper_continued_fraction(a: f64, x: f64) -> f64 {
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / TINY;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..MAX_ITER {
        let an = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < TINY {
            d = TINY;
        }
        c = b + an / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < EPS {
            break;
        }
    }
    h
}
