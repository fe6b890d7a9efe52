//! Adaptive Simpson quadrature on a finite interval.
//!
//! Used to cross-check the closed-form normalisation and CDF of
//! [`StepDistribution`][crate::StepDistribution] against direct integration
//! of its density.

/// Integrate `f` over `[a, b]` to absolute tolerance `tol`.
///
/// Recursion stops at `max_depth` halvings even if the tolerance is not met,
/// so the call always terminates.  `f` must be finite on `[a, b]`.
pub fn adaptive_simpson<F>(f: F, a: f64, b: f64, tol: f64, max_depth: u32) -> f64
where
    F: Fn(f64) -> f64,
{
    if a == b {
        return 0.0;
    }
    let fa = f(a);
    let fb = f(b);
    let m = 0.5 * (a + b);
    let fm = f(m);
    let whole = simpson(a, b, fa, fm, fb);
    refine(&f, a, b, fa, fm, fb, whole, tol, max_depth)
}

#[inline]
fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

#[allow(clippy::too_many_arguments)]
fn refine<F>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tol: f64,
    depth: u32,
) -> f64
where
    F: Fn(f64) -> f64,
{
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = f(lm);
    let frm = f(rm);
    let left = simpson(a, m, fa, flm, fm);
    let right = simpson(m, b, fm, frm, fb);
    let delta = left + right - whole;
    if depth == 0 || delta.abs() <= 15.0 * tol {
        // Richardson extrapolation.
        return left + right + delta / 15.0;
    }
    refine(f, a, m, fa, flm, fm, left, 0.5 * tol, depth - 1)
        + refine(f, m, b, fm, frm, fb, right, 0.5 * tol, depth - 1)
}
