//! Closed-form reference energies for the infinite-square-well limit.

use std::f64::consts::PI;

/// Unitless coupling constant γ² shared by the reference spectrum and the
/// driver examples.
pub const GAMMA_SQ: f64 = 200.0;

/// Produce the energy eigenvalue for principal quantum number `n` in the
/// infinite-square-well limit.
///
/// Energies are unitless, measured in units of the well depth relative to the
/// top of the well, so bound-state values lie in [-1, 0].
pub fn analytical_e(n: u32) -> f64 {
    (n as f64).powi(2) * PI.powi(2) / GAMMA_SQ - 1.0
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn ground_state() {
        assert_abs_diff_eq!(analytical_e(1), -0.9506, epsilon = 1e-4);
        assert_abs_diff_eq!(
            analytical_e(1),
            PI.powi(2) / 200.0 - 1.0,
            epsilon = 1e-15,
        );
    }

    #[test]
    fn spacing_is_quadratic() {
        for n in 1..=5 {
            let expected = (n as f64).powi(2) * (analytical_e(1) + 1.0) - 1.0;
            assert_abs_diff_eq!(analytical_e(n), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        for n in 1..=8 {
            assert_eq!(
                analytical_e(n).to_bits(),
                analytical_e(n).to_bits(),
            );
        }
    }
}
