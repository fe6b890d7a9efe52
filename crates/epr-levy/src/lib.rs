//! `epr-levy` — the truncated heavy-tailed distribution behind EPR step
//! lengths and inter-jump waiting times.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                |
//! |------------------|---------------------------------------------------------|
//! | [`special`]      | `ln_gamma`, log upper incomplete gamma                  |
//! | [`quad`]         | Adaptive Simpson quadrature                             |
//! | [`distribution`] | `LevyParams`, `StepDistribution`                        |
//!
//! # The density
//!
//! ```text
//! pdf(x) = (x0 + x)^(−β) · exp(−x / k) / A,          x ≥ 0
//! A      = exp(x0 / k) · k^(1−β) · Γ(1−β, x0 / k)
//! ```
//!
//! Substituting `y = (x0 + x) / k` turns the density into a Gamma(1−β)
//! density restricted to `y ≥ x0 / k`, so the survival function has the
//! closed form `S(x) = Γ(1−β, (x0 + x)/k) / Γ(1−β, x0/k)`.  Sampling inverts
//! it numerically.  Everything is evaluated in log space so that large
//! `x0 / k` ratios do not underflow.

pub mod distribution;
pub mod quad;
pub mod special;


pub use distribution::{LevyParams, StepDistribution};
