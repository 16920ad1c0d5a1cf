//! Definitional identities of the EOS-80 function set, checked over a grid
//! of physically plausible inputs rather than single fixtures.

use seawater_rs::{
    AppError, TemperatureScale, atmospheric_density, density, potential_temperature,
    salinity_from_conductivity, sigma_t, t68_from_t90, t90_from,
};

const SALINITIES: [f64; 4] = [0.0, 20.0, 35.0, 42.0];
const TEMPERATURES: [f64; 4] = [-2.0, 5.0, 20.0, 40.0];
const PRESSURES: [f64; 4] = [0.0, 500.0, 4000.0, 10000.0];

#[test]
fn temperature_scale_round_trip() {
    for t in [-2.0, 0.0, 12.3456, 29.992802, 40.0] {
        let back = t90_from(t68_from_t90(t), TemperatureScale::Ipts68);
        assert!((back - t).abs() < 1e-12, "round trip drift at {t}");
    }
}

#[test]
fn its90_conversion_is_identity() {
    assert_eq!(t90_from(17.25, TemperatureScale::Its90), 17.25);
}

#[test]
fn zero_pressure_density_is_atmospheric_density() {
    for s in SALINITIES {
        for t in TEMPERATURES {
            assert_eq!(
                density(s, t, 0.0).unwrap(),
                atmospheric_density(s, t).unwrap()
            );
        }
    }
}

#[test]
fn sigma_t_is_surface_density_anomaly() {
    for s in SALINITIES {
        for t in TEMPERATURES {
            assert_eq!(sigma_t(s, t).unwrap(), density(s, t, 0.0).unwrap() - 1000.0);
        }
    }
}

#[test]
fn potential_temperature_is_identity_at_the_reference_pressure() {
    for s in SALINITIES {
        for t in TEMPERATURES {
            for p in PRESSURES {
                assert_eq!(potential_temperature(s, t, p, p), t);
            }
        }
    }
}

#[test]
fn potential_temperature_round_trip_recovers_in_situ_value() {
    for s in [33.0, 35.0] {
        for t in [0.0, 2.48, 15.0] {
            for p in [1000.0, 5000.0, 10000.0] {
                let theta = potential_temperature(s, t, p, 0.0);
                let back = potential_temperature(s, theta, 0.0, p);
                assert!(
                    (back - t).abs() < 1e-3,
                    "drift {} at S={s} T={t} P={p}",
                    back - t
                );
            }
        }
    }
}

#[test]
fn non_positive_conductivity_is_exactly_zero_salinity() {
    for c in [0.0, -1e-9, -5.0] {
        for t in TEMPERATURES {
            for p in PRESSURES {
                assert_eq!(salinity_from_conductivity(c, t, p), 0.0);
            }
        }
    }
}

#[test]
fn density_is_monotonic_in_pressure() {
    // Compressing standard seawater must never decrease its density.
    let mut prev = 0.0;
    for p in PRESSURES {
        let d = density(35.0, 10.0, p).unwrap();
        assert!(d > prev, "density not increasing at P={p}");
        prev = d;
    }
}

#[test]
fn negative_salinity_is_a_typed_error_not_a_nan() {
    let err = density(-1.0, 10.0, 0.0).unwrap_err();
    assert!(err.to_string().contains("non-negative"));
    assert!(matches!(err, AppError::NegativeSalinity { salinity } if salinity == -1.0));
}

#[test]
fn unknown_scale_label_reports_the_offending_input() {
    let err = "kelvin".parse::<TemperatureScale>().unwrap_err();
    assert!(err.to_string().contains("kelvin"));
}
