use crate::eos::horner;

/// Pressure-to-depth numerator, UNESCO (1983) p.28, ascending powers of P
/// (note the zero constant term: zero pressure is zero depth).
const DEPTH_C: [f64; 5] = [0.0, 9.72659, -2.2512e-5, 2.279e-10, -1.82e-15];

/// International gravity formula terms in sin²(latitude).
const GRAV_SURFACE: f64 = 9.780318;
const GRAV_X: [f64; 3] = [1.0, 5.2788e-3, 2.36e-5];

/// Mean vertical gradient of gravity, m/s² per dbar.
const GAM_DASH: f64 = 2.184e-6;

/// Depth in metres below the sea surface for a pressure `p` in dbar at
/// latitude `lat` (decimal degrees; only the magnitude matters).
pub fn depth(p: f64, lat: f64) -> f64 {
    let x = (lat.abs().to_radians()).sin();
    let x = x * x;
    let gravity = GRAV_SURFACE * horner(x, &GRAV_X) + GAM_DASH * 0.5 * p;
    horner(p, &DEPTH_C) / gravity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pressure_is_zero_depth() {
        assert_eq!(depth(0.0, 4.0), 0.0);
        assert_eq!(depth(0.0, -60.0), 0.0);
    }

    #[test]
    fn latitude_sign_has_no_effect() {
        assert_eq!(depth(5000.0, 43.21), depth(5000.0, -43.21));
    }

    #[test]
    fn depth_shrinks_toward_the_poles() {
        // Stronger gravity at high latitude means less water per decibar.
        assert!(depth(5000.0, 85.0) < depth(5000.0, 5.0));
    }
}
