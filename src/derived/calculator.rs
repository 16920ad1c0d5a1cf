use serde::Serialize;

use crate::eos::density::{density, sigma_t, sigma_theta, specific_volume_anomaly};
use crate::eos::depth::depth;
use crate::eos::potential::potential_temperature;
use crate::eos::salinity::salinity_from_conductivity;
use crate::eos::sound::sound_velocity;
use crate::eos::temperature::{t68_from_t90, t90_from};
use crate::error::AppError;
use crate::models::{Assumptions, Inputs};

/// The full derived property set for one CTD observation.
///
/// Fields:
/// - `salinity_psu`: practical salinity (PSS-78), measured or derived
/// - `density_kg_m3`: in-situ density at the sample pressure
/// - `sigma_t` / `sigma_theta`: density anomalies at atmospheric pressure
/// - `potential_temp_c`: temperature reduced to the reference pressure (ITS-90)
/// - `sound_velocity_m_s`: speed of sound at the sample conditions
/// - `depth_m`: depth below the surface at the station latitude
/// - `specific_volume_anomaly`: m³/kg relative to S=35, T=0 at this pressure
#[derive(Serialize, Debug, Clone)]
pub struct CtdSummary {
    pub salinity_psu: f64,
    pub density_kg_m3: f64,
    pub sigma_t: f64,
    pub sigma_theta: f64,
    pub potential_temp_c: f64,
    pub sound_velocity_m_s: f64,
    pub depth_m: f64,
    pub specific_volume_anomaly: f64,
}

/// Resolve the sample salinity: an explicit value wins, otherwise invert the
/// conductivity reading. The PSS-78 inversion wants IPTS-68 temperature, so
/// the ITS-90 value is converted on the way in.
fn resolve_salinity(inp: &Inputs, t90: f64) -> Result<f64, AppError> {
    if let Some(s) = inp.salinity {
        return Ok(s);
    }
    match inp.conductivity {
        Some(c) => Ok(salinity_from_conductivity(
            c,
            t68_from_t90(t90),
            inp.pressure_dbar,
        )),
        None => Err(AppError::MissingSalinityInput),
    }
}

/// Compute every derived quantity for one observation.
///
/// The temperature is normalized to ITS-90 once, up front, so the EOS-80
/// core never has to know which scale the instrument reported on. Errors
/// from the core (negative salinity, degenerate density) propagate as-is.
pub fn compute_summary(inp: &Inputs, ass: &Assumptions) -> Result<CtdSummary, AppError> {
    let t90 = t90_from(inp.temperature, inp.scale);
    let s = resolve_salinity(inp, t90)?;
    let p = inp.pressure_dbar;

    Ok(CtdSummary {
        salinity_psu: s,
        density_kg_m3: density(s, t90, p)?,
        sigma_t: sigma_t(s, t90)?,
        sigma_theta: sigma_theta(s, t90, p)?,
        potential_temp_c: potential_temperature(s, t90, p, ass.reference_pressure_dbar),
        sound_velocity_m_s: sound_velocity(s, t90, p)?,
        depth_m: depth(p, ass.latitude),
        specific_volume_anomaly: specific_volume_anomaly(s, t90, p)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eos::round_to;
    use crate::eos::temperature::TemperatureScale;

    fn station(salinity: f64, temperature: f64, pressure_dbar: f64) -> Inputs {
        Inputs {
            salinity: Some(salinity),
            conductivity: None,
            temperature,
            scale: TemperatureScale::Its90,
            pressure_dbar,
        }
    }

    #[test]
    fn deep_station_summary_matches_unesco_tables() {
        let ass = Assumptions {
            latitude: 4.0,
            reference_pressure_dbar: 0.0,
        };
        let out = compute_summary(&station(34.67, 2.48, 10035.0), &ass).unwrap();
        assert_eq!(round_to(out.density_kg_m3, 3), 1070.136);
        assert_eq!(round_to(out.sigma_t, 3), 27.668);
        assert_eq!(round_to(out.sigma_theta, 3), 27.764);
        assert_eq!(round_to(out.potential_temp_c, 3), 1.242);
        assert_eq!(round_to(out.sound_velocity_m_s, 3), 1633.179);
        assert_eq!(round_to(out.depth_m, 3), 9758.558);
    }

    #[test]
    fn conductivity_input_is_inverted_to_salinity() {
        let inp = Inputs {
            salinity: None,
            conductivity: Some(5.538891),
            temperature: 26.9900,
            scale: TemperatureScale::Its90,
            pressure_dbar: 27.0,
        };
        let out = compute_summary(&inp, &Assumptions::default()).unwrap();
        assert_eq!(round_to(out.salinity_psu, 4), 35.1554);
    }

    #[test]
    fn explicit_salinity_wins_over_conductivity() {
        let inp = Inputs {
            salinity: Some(35.0),
            conductivity: Some(5.538891),
            temperature: 26.9900,
            scale: TemperatureScale::Its90,
            pressure_dbar: 27.0,
        };
        let out = compute_summary(&inp, &Assumptions::default()).unwrap();
        assert_eq!(out.salinity_psu, 35.0);
    }

    #[test]
    fn missing_salinity_and_conductivity_is_an_error() {
        let inp = Inputs {
            salinity: None,
            conductivity: None,
            temperature: 10.0,
            scale: TemperatureScale::Its90,
            pressure_dbar: 0.0,
        };
        assert!(matches!(
            compute_summary(&inp, &Assumptions::default()),
            Err(AppError::MissingSalinityInput)
        ));
    }
}
