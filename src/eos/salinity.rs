use crate::eos::horner;

/// Conversion from S/m to mmho/cm relative to the standard KCl conductivity
/// of 42.914 mmho/cm (Culkin & Smith 1980).
const C_STANDARD_MMHO_CM: f64 = 42.914;

// PSS-78 conductivity-ratio inversion, UNESCO (1983) pp.6-9.
// Pressure-dependence of the ratio (eqn 3):
const RT_E: [f64; 4] = [0.0, 2.070e-5, -6.370e-10, 3.989e-15];
const RT_B: [f64; 2] = [3.426e-2, 4.464e-4];
const RT_C: [f64; 2] = [4.215e-1, -3.107e-3];
// rt(T), eqn 4:
const RT_T: [f64; 5] = [6.766097e-1, 2.00564e-2, 1.104259e-4, -6.9698e-7, 1.0031e-9];
// Practical salinity power series in sqrt(Rt), eqns 1-2:
const SAL_A: [f64; 6] = [0.0080, -0.1692, 25.3851, 14.0941, -7.0261, 2.7081];
const SAL_B: [f64; 6] = [0.0005, -0.0056, -0.0066, -0.0375, 0.0636, -0.0144];

/// Practical salinity (PSU, PSS-78) from in-situ conductivity.
///
/// `c` is conductivity in S/m, `t` temperature in °C (IPTS-68, the scale the
/// PSS-78 coefficients were fitted on), `p` pressure in dbar. Non-positive
/// conductivity is the defined fresh-water case and returns exactly 0, not
/// an error.
///
/// This is an empirical inversion; the coefficient sets must match the
/// published tables bit-for-bit or results drift measurably.
pub fn salinity_from_conductivity(c: f64, t: f64, p: f64) -> f64 {
    if c <= 0.0 {
        return 0.0;
    }
    let c = c * 10.0 / C_STANDARD_MMHO_CM; // S/m to ratio against standard seawater

    // Ratio of in-situ conductivity to the conductivity of standard
    // seawater at the same temperature, corrected for pressure (eqn 3).
    let rp = 1.0
        + horner(p, &RT_E)
            / (1.0 + RT_B[0] * t + RT_B[1] * t * t + RT_C[0] * c + RT_C[1] * c * t);
    let rt = c / (rp * horner(t, &RT_T));

    let sqrt_rt = rt.sqrt();
    let mut sum_a = 0.0;
    let mut sum_b = 0.0;
    let mut pow = 1.0; // sqrt(rt)^i
    for i in 0..6 {
        sum_a += SAL_A[i] * pow;
        sum_b += SAL_B[i] * pow;
        pow *= sqrt_rt;
    }

    let dt = t - 15.0;
    sum_a + sum_b * dt / (1.0 + 0.0162 * dt)
}
