//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Unitless variables](#unitless-variables)
//! - [Numerov's scheme](#numerovs-scheme)
//!
//! # Background
//! Bound states of a particle of mass *m* in a one-dimensional potential well
//! *V*(*x*) of depth *V*₀ and length *L* satisfy the time-independent
//! Schrödinger equation
//! ```text
//! ∂²ψ
//! --- = -k²(x) ψ(x)
//! ∂x²
//! ```
//! with local wavenumber
//! ```text
//!         2 m
//! k²(x) = --- (E - V(x))
//!          ħ²
//! ```
//! for a trial energy *E*. This crate only propagates ψ sample-by-sample for
//! a fixed trial energy; judging whether *E* is an eigenvalue (by matching
//! boundary conditions, searching over energies, or normalizing) is left to
//! the caller.
//!
//! # Unitless variables
//! With the substitutions
//! ```text
//! s = x / L,    ε = E / V₀,    ν(s) = V(L s) / V₀
//! ```
//! the equation collapses to
//! ```text
//! ∂²ψ
//! --- = -γ² (ε - ν(s)) ψ(s)
//! ∂s²
//! ```
//! where all of the physical scales are gathered into the single coupling
//! constant
//! ```text
//!      2 m L² V₀
//! γ² = ---------
//!          ħ²
//! ```
//! A bound state requires ε − ν ≥ 0 over the integration range; samples
//! violating this lie in a classically forbidden region and abort the step.
//! [`Particle::new`][crate::well::Particle::new] derives γ² from physical
//! parameters through [`Units`][crate::units::Units];
//! [`Particle::with_gamma_sq`][crate::well::Particle::with_gamma_sq] accepts
//! it directly for already-unitless work.
//!
//! # Numerov's scheme
//! Discretizing with *N* points,
//! ```text
//! s[i] = i l,    l = 1 / (N - 1),    i ∊ {0, ..., N - 1}
//! ```
//! Numerov's method advances ψ through the three-point recursion
//! ```text
//!      l²                          5 l²                  l²
//! (1 + -- k²[n]) ψ[n] = 2 (1 - ------- k²[n-1]) ψ[n-1] - (1 + -- k²[n-2]) ψ[n-2]
//!      12                         12                           12
//! ```
//! with k²[i] = γ² (ε − ν[i]), carrying a local error term of *O*(*l*⁶). The
//! recursion needs two seed samples; ψ[0] = 0 fixes the hard-wall boundary
//! and ψ[1] is an arbitrary small value (1e-5) whose scale only affects the
//! overall amplitude of the unnormalized result.
