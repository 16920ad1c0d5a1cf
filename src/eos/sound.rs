use crate::eos::horner;
use crate::error::AppError;

// Sound speed, UNESCO (1983) eqns 33-37 pp.46-47. Each term is a bivariate
// polynomial: rows are ascending powers of pressure (bars), row entries
// ascending powers of temperature.
const SVEL_CW: [&[f64]; 4] = [
    &[1402.388, 5.03711, -5.80852e-2, 3.3420e-4, -1.47800e-6, 3.1464e-9],
    &[0.153563, 6.8982e-4, -8.1788e-6, 1.3621e-7, -6.1185e-10],
    &[3.1260e-5, -1.7107e-6, 2.5974e-8, -2.5335e-10, 1.0405e-12],
    &[-9.7729e-9, 3.8504e-10, -2.3643e-12],
];
const SVEL_A: [&[f64]; 4] = [
    &[1.389, -1.262e-2, 7.164e-5, 2.006e-6, -3.21e-8],
    &[9.4742e-5, -1.2580e-5, -6.4885e-8, 1.0507e-8, -2.0122e-10],
    &[-3.9064e-7, 9.1041e-9, -1.6002e-10, 7.988e-12],
    &[1.100e-10, 6.649e-12, -3.389e-13],
];
const SVEL_B: [&[f64]; 2] = [&[-1.922e-2, -4.42e-5], &[7.3637e-5, 1.7945e-7]];
const SVEL_D: [&[f64]; 2] = [&[1.727e-3], &[-7.9836e-6]];

/// Horner in pressure over rows that are themselves Horner in temperature.
fn bivariate(t: f64, p: f64, rows: &[&[f64]]) -> f64 {
    rows.iter().rev().fold(0.0, |acc, row| acc * p + horner(t, row))
}

/// Speed of sound in seawater (m/s), UNESCO 1983 eqn 33.
///
/// `s` in PSU, `t` in °C (ITS-90), `p` in dbar (converted to bars
/// internally). The `S^1.5` term makes negative salinity a domain error.
pub fn sound_velocity(s: f64, t: f64, p: f64) -> Result<f64, AppError> {
    if s < 0.0 {
        return Err(AppError::NegativeSalinity { salinity: s });
    }
    let p = p / 10.0; // dbar to bars

    let cw = bivariate(t, p, &SVEL_CW);
    let a = bivariate(t, p, &SVEL_A);
    let b = bivariate(t, p, &SVEL_B);
    let d = bivariate(t, p, &SVEL_D);

    Ok(cw + a * s + b * s * s.sqrt() + d * s * s)
}
