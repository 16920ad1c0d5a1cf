use crate::eos::horner;

// Adiabatic lapse rate, UNESCO (1983) page 44. Polynomials in T, (S-35),
// P and P², coefficients in ascending powers of T.
const ADTG_A: [f64; 4] = [3.5803e-5, 8.5258e-6, -6.836e-8, 6.6228e-10];
const ADTG_B: [f64; 2] = [1.8932e-6, -4.2393e-8];
const ADTG_C: [f64; 4] = [1.8741e-8, -6.7795e-10, 8.733e-12, -5.4481e-14];
const ADTG_D: [f64; 2] = [-1.1351e-10, 2.7759e-12];
const ADTG_E: [f64; 3] = [-4.6206e-13, 1.8676e-14, -2.1687e-16];

/// Adiabatic temperature gradient dT/dP in °C/dbar, UNESCO 1983.
///
/// `s` in PSU, `t` in °C (ITS-90), `p` in dbar. Defined for all finite
/// inputs; this is the right-hand side of the potential-temperature ODE.
pub fn adiabatic_gradient(s: f64, t: f64, p: f64) -> f64 {
    horner(t, &ADTG_A)
        + horner(t, &ADTG_B) * (s - 35.0)
        + (horner(t, &ADTG_C) + horner(t, &ADTG_D) * (s - 35.0)) * p
        + horner(t, &ADTG_E) * p * p
}

/// Potential temperature (°C): the temperature a parcel at `(s, t, p)` would
/// have if moved adiabatically to the reference pressure `pr`.
///
/// Integrates dθ/dP = [`adiabatic_gradient`] from `p` to `pr` with a single
/// fixed step of the Runge-Kutta scheme from UNESCO 1983 (Fofonoff 1977).
/// `pr == p` collapses every stage, so the in-situ temperature is returned
/// exactly.
pub fn potential_temperature(s: f64, t: f64, p: f64, pr: f64) -> f64 {
    let sqrt2 = 2f64.sqrt();
    let del_p = pr - p;

    // Stage 1
    let mut del_th = del_p * adiabatic_gradient(s, t, p);
    let mut th = t + 0.5 * del_th;
    let mut q = del_th;

    // Stage 2
    del_th = del_p * adiabatic_gradient(s, th, p + 0.5 * del_p);
    th += (1.0 - 1.0 / sqrt2) * (del_th - q);
    q = (2.0 - sqrt2) * del_th + (-2.0 + 3.0 / sqrt2) * q;

    // Stage 3
    del_th = del_p * adiabatic_gradient(s, th, p + 0.5 * del_p);
    th += (1.0 + 1.0 / sqrt2) * (del_th - q);
    q = (2.0 + sqrt2) * del_th + (-2.0 - 3.0 / sqrt2) * q;

    // Stage 4
    del_th = del_p * adiabatic_gradient(s, th, p + del_p);
    th + (del_th - 2.0 * q) / 6.0
}
