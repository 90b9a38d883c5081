//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when a potential array is too short to supply the samples needed
/// for a given step index.
#[derive(Debug, Error)]
#[error("potential array is too short for the requested step; got {0}, need at least {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check_step<S>(nu: &nd::ArrayBase<S, nd::Ix1>, n: usize)
        -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        let len = nu.len();
        (len >= n + 1).then_some(()).ok_or(Self(len, n + 1))
    }
}

/// Returned when a potential sample exceeds the unitless trial energy,
/// placing the recursion in a classically forbidden region inconsistent with
/// a bound state at that energy.
#[derive(Debug, Error)]
#[error("classically forbidden region: epsilon - nu < 0; got epsilon = {0}, nu = {1}")]
pub struct DomainError(pub f64, pub f64);

impl DomainError {
    pub(crate) fn check<S>(epsilon: f64, nu: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        match nu.iter().copied().find(|nuk| epsilon - *nuk < 0.0) {
            Some(nuk) => Err(Self(epsilon, nuk)),
            None => Ok(()),
        }
    }
}

/// Returned from [`Particle`][crate::well::Particle] constructors and stepping
/// methods.
#[derive(Debug, Error)]
pub enum WellError {
    /// Returned when fewer than 3 integration points are requested.
    #[error("step counts must be at least 3; got {0}")]
    BadSteps(usize),

    /// Returned when a non-positive well depth is encountered.
    #[error("well depth must be greater than 0; got {0}")]
    BadDepth(f64),

    /// Returned when a non-positive coupling constant gamma² is encountered,
    /// either supplied directly or derived from mass and length scales.
    #[error("gamma squared must be greater than 0; got {0}")]
    BadGamma(f64),

    /// Returned when a step index is less than 2 or ahead of the samples
    /// accumulated so far.
    #[error("step index must be at least 2 and at most the current sample count; got {0}")]
    BadStep(usize),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`DomainError`]
    #[error("domain error: {0}")]
    Forbidden(#[from] DomainError),
}

impl WellError {
    pub(crate) fn check_steps(steps: usize) -> Result<(), Self> {
        (steps >= 3).then_some(()).ok_or(Self::BadSteps(steps))
    }

    pub(crate) fn check_depth(well_depth: f64) -> Result<(), Self> {
        (well_depth > 0.0).then_some(()).ok_or(Self::BadDepth(well_depth))
    }

    pub(crate) fn check_gamma(gamma_sq: f64) -> Result<(), Self> {
        (gamma_sq > 0.0).then_some(()).ok_or(Self::BadGamma(gamma_sq))
    }

    pub(crate) fn check_step_index(n: usize, have: usize) -> Result<(), Self> {
        (2..=have).contains(&n).then_some(()).ok_or(Self::BadStep(n))
    }
}
