//! Solar coordinate series.
//!
//! Mean anomaly, equation of center, and ecliptic longitude of the Sun,
//! from aa.quae.nl "Position of the Sun". The Sun's ecliptic latitude is
//! taken as zero.

use std::f64::consts::PI;

use solun_frames::{EquatorialCoords, ecliptic_to_equatorial};

/// Longitude of Earth's perihelion, degrees.
const PERIHELION_DEG: f64 = 102.9372;

/// Solar mean anomaly (radians) at `d` days since J2000.0.
pub fn solar_mean_anomaly(d: f64) -> f64 {
    (357.5291 + 0.985_600_28 * d).to_radians()
}

/// Ecliptic longitude of the Sun (radians) from its mean anomaly `m`.
///
/// Not wrapped into [0, 2π).
pub fn solar_ecliptic_longitude(m: f64) -> f64 {
    // equation of center
    let c = (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin()).to_radians();
    let p = PERIHELION_DEG.to_radians();
    m + c + p + PI
}

/// Geocentric equatorial coordinates of the Sun at `d` days since J2000.0.
pub fn sun_coords(d: f64) -> EquatorialCoords {
    let m = solar_mean_anomaly(d);
    let l = solar_ecliptic_longitude(m);
    ecliptic_to_equatorial(l, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solun_frames::OBLIQUITY_RAD;

    #[test]
    fn mean_anomaly_at_j2000() {
        assert!((solar_mean_anomaly(0.0).to_degrees() - 357.5291).abs() < 1e-9);
    }

    #[test]
    fn mean_anomaly_advances_one_turn_per_anomalistic_year() {
        let m0 = solar_mean_anomaly(0.0);
        let m1 = solar_mean_anomaly(365.259_636);
        assert!(((m1 - m0).to_degrees() - 360.0).abs() < 1e-3);
    }

    #[test]
    fn equation_of_center_bounded() {
        // |C| never exceeds ~1.94°
        for i in 0..360 {
            let m = (i as f64).to_radians();
            let c = solar_ecliptic_longitude(m) - m - PERIHELION_DEG.to_radians() - PI;
            assert!(c.to_degrees().abs() < 1.95, "M = {i}°, C = {c}");
        }
    }

    #[test]
    fn declination_within_obliquity() {
        for day in (0..366).step_by(5) {
            let c = sun_coords(day as f64);
            assert!(c.dec_rad.abs() <= OBLIQUITY_RAD + 1e-12);
        }
    }

    #[test]
    fn june_solstice_declination() {
        // 2000-06-21 ≈ d = 172
        let c = sun_coords(172.0);
        let dec = c.dec_rad.to_degrees();
        assert!((dec - 23.44).abs() < 0.05, "dec = {dec}");
    }

    #[test]
    fn march_equinox_declination_near_zero() {
        // 2000-03-20 07:35 UT ≈ d = 78.8
        let dec = sun_coords(78.8).dec_rad.to_degrees();
        assert!(dec.abs() < 0.1, "dec = {dec}");
    }
}
