//! Hour angle → horizontal coordinates.
//!
//! `h` is the local hour angle, `phi` the observer latitude, `dec` the
//! body's declination, all radians.

/// Azimuth measured from south, positive westward. Range [-π, π].
pub fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

/// Geometric altitude above the horizon. Range [-π/2, π/2].
pub fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

/// Parallactic angle (Meeus, *Astronomical Algorithms*, eq. 14.1).
pub fn parallactic_angle(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(phi.tan() * dec.cos() - dec.sin() * h.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    #[test]
    fn transit_altitude() {
        // On the meridian: altitude = 90° − |phi − dec|
        let phi = 40.0_f64.to_radians();
        let dec = 10.0_f64.to_radians();
        let alt = altitude(0.0, phi, dec);
        assert!((alt - 60.0_f64.to_radians()).abs() < EPS, "alt = {alt}");
    }

    #[test]
    fn transit_azimuth_is_south() {
        let az = azimuth(0.0, 40.0_f64.to_radians(), 10.0_f64.to_radians());
        assert!(az.abs() < EPS, "az = {az}");
    }

    #[test]
    fn west_of_meridian_is_positive_azimuth() {
        let az = azimuth(0.3, 40.0_f64.to_radians(), 10.0_f64.to_radians());
        assert!(az > 0.0 && az < PI);
    }

    #[test]
    fn zenith_at_equator() {
        let alt = altitude(0.0, 0.0, 0.0);
        assert!((alt - FRAC_PI_2).abs() < 1e-7);
    }

    #[test]
    fn parallactic_zero_on_meridian() {
        let q = parallactic_angle(0.0, 40.0_f64.to_radians(), 10.0_f64.to_radians());
        assert!(q.abs() < EPS, "q = {q}");
    }

    #[test]
    fn parallactic_sign_follows_hour_angle() {
        let phi = 40.0_f64.to_radians();
        let dec = 10.0_f64.to_radians();
        assert!(parallactic_angle(0.5, phi, dec) > 0.0);
        assert!(parallactic_angle(-0.5, phi, dec) < 0.0);
    }

    #[test]
    fn ranges_hold_over_grid() {
        for hi in -12..=12 {
            for pi in -9..=9 {
                let h = (hi as f64 * 15.0).to_radians();
                let phi = (pi as f64 * 10.0).to_radians();
                let dec = 0.3;
                let alt = altitude(h, phi, dec);
                let az = azimuth(h, phi, dec);
                assert!((-FRAC_PI_2..=FRAC_PI_2).contains(&alt));
                assert!((-PI..=PI).contains(&az));
            }
        }
    }
}
