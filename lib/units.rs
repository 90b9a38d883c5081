#![allow(non_upper_case_globals)]

//! Convenience functions and constructs to handle minutiae associated with
//! conversion to and from naturalized units.
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// proton mass (kg)
pub const mp: f64 = 1.67262192369e-27;
//              +/- 0.00000000051e-27

/// unified atomic mass unit (kg)
pub const mu: f64 = 1.66053906660e-27;
//              +/- 0.00000000050e-27

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Hartree energy (J)
pub const Eh: f64 = 4.3597447222071e-18;
//              +/- 0.0000000000085e-18

/// A pair of natural unit scaling factors for a particle confined to a finite
/// region, relative to some base unit system.
///
/// Constructor methods produce scaling constants whose numerical values are
/// represented in the base unit system. The energy scale is `ħ²/2ma²`, so a
/// well of depth `V₀` has unitless coupling `γ² = V₀/e = 2ma²V₀/ħ²`.
///
/// See [`docs`][crate::docs] for more information.
#[derive(Copy, Clone, Debug)]
pub struct Units {
    /// Particle mass.
    pub m: f64,
    /// Base length scale.
    pub a: f64,
    /// Associated energy scale.
    pub e: f64,
}

impl Units {
    /// Construct from a mass and length scale given in meters/kilograms/seconds
    /// (MKS) units.
    pub fn from_mks(mass: f64, a: f64) -> Self {
        let e_unit = hbar.powi(2) / 2.0 / mass / a.powi(2);
        Self { m: mass, a, e: e_unit }
    }

    /// Compute the unitless coupling constant γ² for a well of depth
    /// `well_depth` spanning the base length scale.
    pub fn gamma_sq(&self, well_depth: f64) -> f64 {
        well_depth / self.e
    }

    /// Convert a quantity with dimensions of length in the base unit system to
    /// natural units.
    pub fn to_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a.recip()
    }

    /// Convert a dimensionless quantity to one with length units in the base
    /// unit system.
    pub fn from_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a
    }

    /// Convert a quantity with dimensions of energy in the base unit system to
    /// natural units.
    pub fn to_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e.recip()
    }

    /// Convert a dimensionless quantity to one with energy units in the base
    /// unit system.
    pub fn from_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use super::*;

    #[test]
    fn gamma_sq_matches_definition() {
        let mass = me;
        let length = 1e-9;
        let depth = 10.0 * e; // 10 eV
        let uu = Units::from_mks(mass, length);
        let expected = 2.0 * mass * length.powi(2) * depth / hbar.powi(2);
        assert_relative_eq!(uu.gamma_sq(depth), expected, max_relative = 1e-12);
    }

    #[test]
    fn energy_conversions_invert() {
        let uu = Units::from_mks(me, 1e-9);
        let en: f64 = 3.5 * e;
        let nat: f64 = uu.to_nat_energy(en);
        let back: f64 = uu.from_nat_energy(nat);
        assert_relative_eq!(back, en, max_relative = 1e-12);
    }
}
