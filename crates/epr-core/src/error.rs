//! Engine error type.
//!
//! Every `epr-*` crate reports failures through [`EprError`].  The driver
//! crate wraps it in its own enum via `From` so call sites can keep using `?`.

use thiserror::Error;

/// The three failure kinds of the mobility engine.
///
/// All of them abort the offending call and propagate to the caller; none is
/// retried internally beyond the bounded resampling inside Explore.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EprError {
    /// Malformed construction or query parameters: negative ring distance,
    /// zero or odd lattice width, out-of-domain distribution or EPR
    /// parameters, negative density argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A coordinate violates an invariant: seed off the lattice, or cube
    /// components that do not sum to zero.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Explore resampled its step length `attempts` times without finding a
    /// reachable cell from `at` (the agent's location, formatted).  The space
    /// is too small for the step-length distribution's typical scale.
    #[error("no reachable cell from {at} after {attempts} step-length draws")]
    GeometryExhausted { attempts: u32, at: String },
}

/// Shorthand result type for all `epr-*` crates.
pub type EprResult<T> = Result<T, EprError>;
