use serde::{Deserialize, Serialize};

use crate::eos::temperature::TemperatureScale;

/// One CTD observation: what the instrument actually measured.
///
/// Either `salinity` (PSU, PSS-78) or `conductivity` (S/m) must be present;
/// when both are given the explicit salinity wins. `temperature` is on the
/// scale named by `scale` (default ITS-90).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Inputs {
    pub salinity: Option<f64>,
    pub conductivity: Option<f64>,
    pub temperature: f64,
    #[serde(default)]
    pub scale: TemperatureScale,
    pub pressure_dbar: f64,
}

/// Station context the derived quantities depend on.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Assumptions {
    /// Decimal degrees north; only the magnitude enters the gravity term.
    pub latitude: f64,
    /// Target pressure for the potential-temperature reduction, usually 0.
    pub reference_pressure_dbar: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            reference_pressure_dbar: 0.0,
        }
    }
}
