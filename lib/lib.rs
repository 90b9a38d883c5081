//! Provides a stepwise integrator for bound-state wavefunctions of a
//! one-dimensional quantum particle in a potential well via Numerov's scheme,
//! formulated in unitless variables, along with the closed-form energy
//! spectrum of the infinite square well for reference.
//!
//! The integrator advances a wavefunction one sample at a time from a trial
//! energy and an aligned array of unitless potential values; it performs no
//! eigenvalue search, matching, or normalization of its own.
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod well;
pub mod levels;

pub mod docs;

/// Wavefunction seed values ψ[0], ψ[1] used at construction.
pub const PSI_SEED: [f64; 2] = [0.0, 1e-5];

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
