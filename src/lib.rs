pub mod adapters;
pub mod derived;
pub mod eos;
pub mod error;
pub mod models;

pub use crate::derived::calculator::{CtdSummary, compute_summary};
pub use crate::eos::density::{
    atmospheric_density, density, secant_bulk_modulus, sigma_t, sigma_theta, smow,
    specific_volume_anomaly,
};
pub use crate::eos::depth::depth;
pub use crate::eos::potential::{adiabatic_gradient, potential_temperature};
pub use crate::eos::round_to;
pub use crate::eos::salinity::salinity_from_conductivity;
pub use crate::eos::sound::sound_velocity;
pub use crate::eos::temperature::{TemperatureScale, t68_from_t90, t90_from};
pub use crate::error::AppError;
pub use crate::models::{Assumptions, Inputs};
