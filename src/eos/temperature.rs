use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Linear factor between ITS-90 and IPTS-68, Saunders (1991). Accurate to
/// within 0.5 °C over the oceanographic temperature range.
const T68_PER_T90: f64 = 1.00024;

/// Quadratic correction coefficient taking IPTS-48 to IPTS-68.
const T48_CORRECTION: f64 = 4.4e-6;

/// International temperature scale a measurement was reported on.
///
/// IPTS-48 applies to data collected before 1968, IPTS-68 between 1968 and
/// 1989, ITS-90 since. The closed enum makes an unrecognized scale a parse
/// error at construction time instead of a silently wrong conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureScale {
    #[default]
    #[serde(rename = "T90")]
    Its90,
    #[serde(rename = "T68")]
    Ipts68,
    #[serde(rename = "T48")]
    Ipts48,
}

impl FromStr for TemperatureScale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "T90" => Ok(Self::Its90),
            "T68" => Ok(Self::Ipts68),
            "T48" => Ok(Self::Ipts48),
            other => Err(AppError::UnknownTemperatureScale {
                label: other.to_string(),
            }),
        }
    }
}

/// Convert an ITS-90 temperature (°C) to IPTS-68.
pub fn t68_from_t90(t90: f64) -> f64 {
    t90 * T68_PER_T90
}

/// Convert a temperature (°C) on the given scale to ITS-90.
///
/// Identity for ITS-90 input; the IPTS-48 path applies the quadratic
/// 48→68 correction before the linear 68→90 factor.
pub fn t90_from(t: f64, scale: TemperatureScale) -> f64 {
    match scale {
        TemperatureScale::Its90 => t,
        TemperatureScale::Ipts68 => t / T68_PER_T90,
        TemperatureScale::Ipts48 => (t - T48_CORRECTION * t * (100.0 - t)) / T68_PER_T90,
    }
}
