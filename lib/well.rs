//! Stepwise Numerov integration of bound-state wavefunctions for a particle
//! in a one-dimensional potential well.
//!
//! All quantities here are unitless: energies are measured in units of the
//! well depth, coordinates in units of the well length, and the coupling to
//! the well enters through a single constant γ² (see
//! [`docs`][crate::docs]). [`Particle`] holds the trial parameters and the
//! accumulated wavefunction samples; [`Particle::next_psi`] advances the
//! sequence by one sample per call.

use ndarray as nd;
use crate::{
    Arr1,
    PSI_SEED,
    error::{ DomainError, LengthError, WellError },
    units::Units,
};

pub type WellResult<T> = Result<T, WellError>;

/// A particle at a fixed trial energy, carrying its accumulated wavefunction.
///
/// The wavefunction is append-only: it is seeded with two samples at
/// construction and grows by exactly one sample per successful call to
/// [`next_psi`][Self::next_psi]. No eigenvalue search is performed; whether
/// the trial energy is an eigenvalue is for the caller to judge from the
/// integrated samples.
#[derive(Clone, Debug)]
pub struct Particle {
    // trial parameters, fixed at construction
    trial_energy: f64,
    well_depth: f64,
    steps: usize,
    start_position: f64,
    // unit scales; absent for the purely unitless constructor
    scales: Option<Units>,
    // unitless energy ε = E/V₀
    epsilon: f64,
    // unitless step length l = 1/(N - 1)
    l: f64,
    // unitless coupling γ² = 2mL²V₀/ħ²
    gamma_sq: f64,
    // wavefunction samples
    psi: Vec<f64>,
}

impl Particle {
    /// Create a new `Particle` from physical (MKS) trial parameters.
    ///
    /// γ² is derived from the mass, well length, and well depth through
    /// [`Units::from_mks`].
    pub fn new(
        trial_energy: f64,
        well_depth: f64,
        length: f64,
        steps: usize,
        start_position: f64,
        mass: f64,
    ) -> WellResult<Self> {
        WellError::check_steps(steps)?;
        WellError::check_depth(well_depth)?;
        let scales = Units::from_mks(mass, length);
        let gamma_sq = scales.gamma_sq(well_depth);
        WellError::check_gamma(gamma_sq)?;
        Ok(Self {
            trial_energy,
            well_depth,
            steps,
            start_position,
            scales: Some(scales),
            epsilon: trial_energy / well_depth,
            l: ((steps - 1) as f64).recip(),
            gamma_sq,
            psi: PSI_SEED.to_vec(),
        })
    }

    /// Create a new `Particle` from already-unitless trial parameters with a
    /// directly supplied coupling constant γ².
    pub fn with_gamma_sq(
        trial_energy: f64,
        well_depth: f64,
        steps: usize,
        gamma_sq: f64,
    ) -> WellResult<Self> {
        WellError::check_steps(steps)?;
        WellError::check_depth(well_depth)?;
        WellError::check_gamma(gamma_sq)?;
        Ok(Self {
            trial_energy,
            well_depth,
            steps,
            start_position: 0.0,
            scales: None,
            epsilon: trial_energy / well_depth,
            l: ((steps - 1) as f64).recip(),
            gamma_sq,
            psi: PSI_SEED.to_vec(),
        })
    }

    /// Get the trial energy.
    pub fn get_trial_energy(&self) -> f64 { self.trial_energy }

    /// Get the well depth.
    pub fn get_well_depth(&self) -> f64 { self.well_depth }

    /// Get the number of integration points.
    pub fn get_steps(&self) -> usize { self.steps }

    /// Get the starting coordinate.
    pub fn get_start_position(&self) -> f64 { self.start_position }

    /// Get the unit scales, if the particle was constructed from physical
    /// parameters.
    pub fn get_scales(&self) -> Option<Units> { self.scales }

    /// Get the unitless trial energy ε.
    pub fn get_epsilon(&self) -> f64 { self.epsilon }

    /// Get the unitless step length l.
    pub fn get_l(&self) -> f64 { self.l }

    /// Get the unitless coupling constant γ².
    pub fn get_gamma_sq(&self) -> f64 { self.gamma_sq }

    /// Get the wavefunction samples accumulated so far.
    pub fn get_psi(&self) -> &[f64] { &self.psi }

    /// Get the number of wavefunction samples accumulated so far.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.psi.len() }

    /// Perform a single step of the Numerov scheme, computing the
    /// wavefunction sample at index `n` from the samples at `n - 1` and
    /// `n - 2` and the unitless potential array `nu`.
    ///
    /// `nu` must hold at least `n + 1` samples, and every sample must satisfy
    /// the bound-state condition ε - ν ≥ 0; the whole array is checked before
    /// any arithmetic and a [`DomainError`] aborts the step otherwise. The
    /// new sample is appended to the wavefunction and returned.
    pub fn next_psi<S>(&mut self, nu: &Arr1<S>, n: usize) -> WellResult<f64>
    where S: nd::Data<Elem = f64>
    {
        WellError::check_step_index(n, self.psi.len())?;
        LengthError::check_step(nu, n)?;
        DomainError::check(self.epsilon, nu)?;
        let l_sq = self.l.powi(2);
        let k_sq = |i: usize| self.gamma_sq * (self.epsilon - nu[i]);
        let a = 2.0 * (1.0 - 5.0 / 12.0 * l_sq * k_sq(n - 1)) * self.psi[n - 1];
        let b = (1.0 + l_sq / 12.0 * k_sq(n - 2)) * self.psi[n - 2];
        let c = 1.0 + l_sq / 12.0 * k_sq(n);
        let psi_n = (a - b) / c;
        self.psi.push(psi_n);
        Ok(psi_n)
    }

    /// Step the recursion through the remainder of the potential array,
    /// returning all samples accumulated so far.
    ///
    /// This is a single fixed-energy sweep; it performs no search over trial
    /// energies.
    pub fn propagate<S>(&mut self, nu: &Arr1<S>) -> WellResult<&[f64]>
    where S: nd::Data<Elem = f64>
    {
        for n in self.psi.len()..nu.len() {
            self.next_psi(nu, n)?;
        }
        Ok(&self.psi)
    }
}

/// Simple record pairing a unitless coordinate grid over [0, 1] with an
/// aligned array of unitless potential samples.
///
/// Arrays borrowed from this type are guaranteed to have the same length and
/// to be sampled over even intervals.
#[derive(Clone, Debug)]
pub struct NuGrid {
    // coordinate array
    s: nd::Array1<f64>,
    // coordinate array grid spacing
    l: f64,
    // unitless potential array
    nu: nd::Array1<f64>,
    // array sizes
    n: usize,
}

impl NuGrid {
    /// Create a new `NuGrid` with `steps` evenly spaced points spanning
    /// [0, 1], sampling the potential from a function of the coordinate.
    pub fn new_linspace<F>(steps: usize, nu: F) -> WellResult<Self>
    where F: FnMut(f64) -> f64
    {
        WellError::check_steps(steps)?;
        let s: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, steps);
        let l = ((steps - 1) as f64).recip();
        let nu: nd::Array1<f64> = s.mapv(nu);
        Ok(Self { s, l, nu, n: steps })
    }

    /// Create a new `NuGrid` from a bare potential array, assumed sampled
    /// over even intervals spanning [0, 1].
    pub fn from_nu(nu: nd::Array1<f64>) -> WellResult<Self> {
        let n = nu.len();
        WellError::check_steps(n)?;
        let s: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, n);
        let l = ((n - 1) as f64).recip();
        Ok(Self { s, l, nu, n })
    }

    /// Get a reference to the coordinate array.
    pub fn get_s(&self) -> &nd::Array1<f64> { &self.s }

    /// Get a reference to the potential array.
    pub fn get_nu(&self) -> &nd::Array1<f64> { &self.nu }

    /// Get the coordinate array grid spacing.
    pub fn get_l(&self) -> f64 { self.l }

    /// Get the length of the coordinate and potential arrays.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }
}

#[cfg(test)]
mod tests {
    use approx::{ assert_abs_diff_eq, assert_relative_eq };
    use ndarray as nd;
    use crate::{ PSI_SEED, error::WellError, units };
    use super::*;

    fn unitless(trial_energy: f64, steps: usize) -> Particle {
        Particle::with_gamma_sq(trial_energy, 1.0, steps, 200.0).unwrap()
    }

    #[test]
    fn seeds() {
        let p = unitless(0.5, 10);
        assert_eq!(p.get_psi(), &PSI_SEED[..]);
        assert_eq!(p.len(), 2);
        assert_abs_diff_eq!(p.get_epsilon(), 0.5);
        assert_abs_diff_eq!(p.get_l(), 1.0 / 9.0);
    }

    #[test]
    fn free_propagation_when_nu_equals_epsilon() {
        // ε - ν = 0 everywhere, so k² = 0 and the recursion degenerates to
        // ψ[n] = 2ψ[n-1] - ψ[n-2]
        let mut p = unitless(0.5, 5);
        let nu: nd::Array1<f64> = nd::Array1::from_elem(5, 0.5);
        let psi2 = p.next_psi(&nu, 2).unwrap();
        assert_abs_diff_eq!(psi2, 2e-5, epsilon = 1e-18);
        let psi3 = p.next_psi(&nu, 3).unwrap();
        assert_abs_diff_eq!(psi3, 3e-5, epsilon = 1e-18);
    }

    #[test]
    fn constant_nu_gives_constant_coefficients() {
        // for ν ≡ 0, k² = γ²ε at every index; check one step against the
        // coefficients evaluated by hand
        let mut p = unitless(0.5, 11);
        let nu: nd::Array1<f64> = nd::Array1::zeros(11);
        let k_sq = 200.0 * 0.5;
        let l_sq = (1.0_f64 / 10.0).powi(2);
        let expected = (
            2.0 * (1.0 - 5.0 / 12.0 * l_sq * k_sq) * 1e-5
            - (1.0 + l_sq / 12.0 * k_sq) * 0.0
        ) / (1.0 + l_sq / 12.0 * k_sq);
        let psi2 = p.next_psi(&nu, 2).unwrap();
        assert_relative_eq!(psi2, expected, max_relative = 1e-15);
    }

    #[test]
    fn forbidden_region_is_a_domain_error() {
        let mut p = unitless(0.5, 5);
        let nu: nd::Array1<f64> = nd::array![0.0, 0.0, 0.6, 0.0, 0.0];
        let res = p.next_psi(&nu, 2);
        assert!(matches!(res, Err(WellError::Forbidden(_))));
        // the failed step must not have appended anything
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn short_potential_array_is_a_length_error() {
        let mut p = unitless(0.5, 5);
        let nu3: nd::Array1<f64> = nd::Array1::zeros(3);
        p.next_psi(&nu3, 2).unwrap();
        // n = 3 needs 4 samples
        let res = p.next_psi(&nu3, 3);
        assert!(matches!(res, Err(WellError::Length(_))));
    }

    #[test]
    fn bad_step_indices_are_rejected() {
        let mut p = unitless(0.5, 5);
        let nu: nd::Array1<f64> = nd::Array1::zeros(5);
        assert!(matches!(p.next_psi(&nu, 0), Err(WellError::BadStep(0))));
        assert!(matches!(p.next_psi(&nu, 1), Err(WellError::BadStep(1))));
        // only ψ[0] and ψ[1] exist, so index 3 is ahead of the sequence
        assert!(matches!(p.next_psi(&nu, 3), Err(WellError::BadStep(3))));
    }

    #[test]
    fn wavefunction_is_append_only() {
        let mut p = unitless(0.5, 8);
        let nu: nd::Array1<f64> = nd::Array1::zeros(8);
        for n in 2..6 {
            let before = p.get_psi().to_vec();
            let psi_n = p.next_psi(&nu, n).unwrap();
            assert_eq!(p.len(), before.len() + 1);
            assert_eq!(&p.get_psi()[..before.len()], before.as_slice());
            assert_eq!(p.get_psi()[n], psi_n);
        }
    }

    #[test]
    fn propagate_matches_stepwise() {
        let grid = NuGrid::new_linspace(50, |s| 0.5 * (s - 0.5).powi(2))
            .unwrap();
        let mut swept = unitless(0.9, 50);
        let mut stepped = unitless(0.9, 50);
        swept.propagate(grid.get_nu()).unwrap();
        for n in 2..50 {
            stepped.next_psi(grid.get_nu(), n).unwrap();
        }
        assert_eq!(swept.len(), 50);
        assert_eq!(swept.get_psi(), stepped.get_psi());
    }

    #[test]
    fn physical_and_unitless_constructors_agree() {
        let mass = units::me;
        let length: f64 = 1e-9;
        let depth = 5.0 * units::e;
        let trial = 1.0 * units::e;
        let gamma_sq
            = 2.0 * mass * length.powi(2) * depth / units::hbar.powi(2);
        let mut physical
            = Particle::new(trial, depth, length, 40, 0.0, mass).unwrap();
        let mut reduced
            = Particle::with_gamma_sq(trial / depth, 1.0, 40, gamma_sq)
            .unwrap();
        assert_relative_eq!(
            physical.get_gamma_sq(),
            reduced.get_gamma_sq(),
            max_relative = 1e-12,
        );
        assert_relative_eq!(
            physical.get_epsilon(),
            reduced.get_epsilon(),
            max_relative = 1e-12,
        );
        let nu: nd::Array1<f64> = nd::Array1::zeros(40);
        let a = physical.propagate(&nu).unwrap().to_vec();
        let b = reduced.propagate(&nu).unwrap().to_vec();
        a.into_iter().zip(b)
            .for_each(|(pa, pb)| {
                assert_relative_eq!(pa, pb, max_relative = 1e-9);
            });
    }

    #[test]
    fn bad_construction_parameters() {
        assert!(matches!(
            Particle::with_gamma_sq(0.5, 1.0, 2, 200.0),
            Err(WellError::BadSteps(2)),
        ));
        assert!(matches!(
            Particle::with_gamma_sq(0.5, 0.0, 10, 200.0),
            Err(WellError::BadDepth(_)),
        ));
        assert!(matches!(
            Particle::with_gamma_sq(0.5, 1.0, 10, -1.0),
            Err(WellError::BadGamma(_)),
        ));
        assert!(matches!(
            NuGrid::new_linspace(1, |_| 0.0),
            Err(WellError::BadSteps(1)),
        ));
    }
}
