use crate::eos::horner;
use crate::eos::potential::potential_temperature;
use crate::error::AppError;

/// SMOW density polynomial in T, UNESCO (1983) eqn 31 p.39, after
/// Millero & Poisson (1981). Coefficients in ascending powers of T.
const SMOW_A: [f64; 6] = [
    999.842594,
    6.793952e-2,
    -9.095290e-3,
    1.001685e-4,
    -1.120083e-6,
    6.536332e-9,
];

/// One-atmosphere seawater terms, UNESCO eqn 13 p.17: the S, S^1.5 and S^2
/// coefficients on top of SMOW.
const DENS0_B: [f64; 5] = [8.24493e-1, -4.0899e-3, 7.6438e-5, -8.2467e-7, 5.3875e-9];
const DENS0_C: [f64; 3] = [-5.72466e-3, 1.0227e-4, -1.6546e-6];
const DENS0_D0: f64 = 4.8314e-4;

// Secant bulk modulus, UNESCO eqns 15-19 pp.18-19.
// Pure-water terms at atmospheric pressure (eqn 19):
const SECK_AW: [f64; 4] = [3.239908, 1.43713e-3, 1.16092e-4, -5.77905e-7];
const SECK_BW: [f64; 3] = [8.50935e-5, -6.12293e-6, 5.2787e-8];
const SECK_KW: [f64; 5] = [19652.21, 148.4206, -2.327105, 1.360477e-2, -5.155288e-5];
// Seawater terms at atmospheric pressure (eqns 16 and 18):
const SECK_I: [f64; 3] = [2.2838e-3, -1.0981e-5, -1.6078e-6];
const SECK_J0: f64 = 1.91075e-4;
const SECK_M: [f64; 3] = [-9.9348e-7, 2.0816e-8, 9.1697e-10];
const SECK_F: [f64; 4] = [54.6746, -0.603459, 1.09987e-2, -6.1670e-5];
const SECK_G: [f64; 3] = [7.944e-2, 1.6483e-2, -5.3009e-4];

fn require_non_negative_salinity(s: f64) -> Result<(), AppError> {
    if s < 0.0 {
        return Err(AppError::NegativeSalinity { salinity: s });
    }
    Ok(())
}

/// Density of Standard Mean Ocean Water (pure water) in kg/m³.
///
/// `t` is temperature in °C (ITS-90). Defined for all finite `t`.
pub fn smow(t: f64) -> f64 {
    horner(t, &SMOW_A)
}

/// Density of seawater at atmospheric pressure (kg/m³), UNESCO 1983
/// one-atmosphere equation of state.
///
/// `s` is salinity in PSU (PSS-78), `t` temperature in °C (ITS-90).
/// Negative salinity is rejected before it can reach the `sqrt(S)` term.
pub fn atmospheric_density(s: f64, t: f64) -> Result<f64, AppError> {
    require_non_negative_salinity(s)?;
    Ok(smow(t)
        + horner(t, &DENS0_B) * s
        + horner(t, &DENS0_C) * s * s.sqrt()
        + DENS0_D0 * s * s)
}

/// Secant bulk modulus K(S,T,P) of seawater in bars, UNESCO eqn 15.
///
/// `p` is in-situ pressure in decibars; it is converted to bars internally.
pub fn secant_bulk_modulus(s: f64, t: f64, p: f64) -> Result<f64, AppError> {
    require_non_negative_salinity(s)?;
    let p = p / 10.0; // dbar to bars

    let aw = horner(t, &SECK_AW);
    let bw = horner(t, &SECK_BW);
    let kw = horner(t, &SECK_KW);

    let sr = s.sqrt();
    let a = aw + (horner(t, &SECK_I) + SECK_J0 * sr) * s;
    let b = bw + horner(t, &SECK_M) * s;
    let k0 = kw + (horner(t, &SECK_F) + horner(t, &SECK_G) * sr) * s;

    Ok(k0 + (a + b * p) * p)
}

/// In-situ density of seawater (kg/m³), UNESCO 1983 (EOS-80).
///
/// Combines the one-atmosphere density with the high-pressure secant bulk
/// modulus correction. The compressibility denominator never vanishes in the
/// physical envelope, but far outside it the division is guarded and
/// reported as [`AppError::DensityUndefined`] instead of a non-finite value.
pub fn density(s: f64, t: f64, p: f64) -> Result<f64, AppError> {
    let dens_p0 = atmospheric_density(s, t)?;
    let k = secant_bulk_modulus(s, t, p)?;
    let dens = dens_p0 / (1.0 - (p / 10.0) / k);
    if !dens.is_finite() {
        return Err(AppError::DensityUndefined {
            salinity: s,
            temperature: t,
            pressure_dbar: p,
        });
    }
    Ok(dens)
}

/// Sigma-t: density anomaly at atmospheric pressure, `density(s,t,0) - 1000`.
pub fn sigma_t(s: f64, t: f64) -> Result<f64, AppError> {
    Ok(density(s, t, 0.0)? - 1000.0)
}

/// Sigma-theta: density anomaly at atmospheric pressure after reducing the
/// in-situ temperature adiabatically to the surface.
pub fn sigma_theta(s: f64, t: f64, p: f64) -> Result<f64, AppError> {
    Ok(density(s, potential_temperature(s, t, p, 0.0), 0.0)? - 1000.0)
}

/// Specific volume anomaly (m³/kg) relative to S=35, T=0 at the same pressure.
pub fn specific_volume_anomaly(s: f64, t: f64, p: f64) -> Result<f64, AppError> {
    Ok(1.0 / density(s, t, p)? - 1.0 / density(35.0, 0.0, p)?)
}
