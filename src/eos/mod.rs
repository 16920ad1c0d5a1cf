//! EOS-80 core: the UNESCO 1983 polynomial equations of state for seawater.
//!
//! This module tree implements the full property set of Fofonoff & Millard,
//! "Algorithms for computation of fundamental properties of seawater",
//! UNESCO Tech. Pap. in Mar. Sci. No. 44 (1983):
//!
//! - Temperature scale conversions (ITS-90 / IPTS-68 / IPTS-48)
//! - Pure-water (SMOW) and seawater density, secant bulk modulus
//! - Sigma-t, sigma-theta, specific volume anomaly
//! - Adiabatic lapse rate and potential temperature (single-step RK4)
//! - Sound velocity (eqn 33–37)
//! - Depth from pressure, parameterized by latitude
//! - Practical salinity from conductivity (PSS-78)
//!
//! Units conventions:
//! - Salinity in PSU (PSS-78), temperature in °C, pressure in decibars
//! - Pressure is converted to bars (`P/10`) inside the polynomials that
//!   need it; callers always pass decibars
//! - Conductivity in S/m; converted to mmhos/cm internally
//!
//! Design notes:
//! - Every function is a pure scalar transformation; batch application over
//!   profiles belongs to the caller
//! - Coefficient sets are named `const` arrays per function, evaluated in
//!   Horner form, so a future TEOS-10 substitution touches data, not control
//!   flow
//! - A negative salinity reaching a `sqrt(S)` term is reported as a typed
//!   error rather than propagated as NaN

pub mod density;
pub mod depth;
pub mod potential;
pub mod salinity;
pub mod sound;
pub mod temperature;

/// Evaluate a polynomial with coefficients in ascending order of power.
pub(crate) fn horner(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Round a floating-point value to a specified number of decimal digits.
pub fn round_to(x: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    (x * p).round() / p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_matches_expanded_form() {
        // 2 + 3x + 4x^2 at x = 5
        assert_eq!(horner(5.0, &[2.0, 3.0, 4.0]), 2.0 + 15.0 + 100.0);
        assert_eq!(horner(7.3, &[]), 0.0);
    }

    #[test]
    fn round_to_decimal_places() {
        assert_eq!(round_to(1.2345678, 3), 1.235);
        assert_eq!(round_to(-1.2345678, 1), -1.2);
    }
}
