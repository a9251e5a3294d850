//! Lunar coordinate series.
//!
//! Geocentric ecliptic longitude, latitude, and distance of the Moon from
//! a single-term-per-argument mean orbit expansion (aa.quae.nl "Position
//! of the Moon"). Good to roughly 0.5° in position and 1% in distance.

use solun_frames::{EquatorialCoords, ecliptic_to_equatorial};

/// Geocentric equatorial position and distance of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonCoords {
    /// Right ascension and declination.
    pub equatorial: EquatorialCoords,
    /// Earth–Moon distance in km.
    pub distance_km: f64,
}

/// Geocentric coordinates of the Moon at `d` days since J2000.0.
pub fn moon_coords(d: f64) -> MoonCoords {
    // mean ecliptic longitude
    let l0 = (218.316 + 13.176_396 * d).to_radians();
    // mean anomaly
    let m = (134.963 + 13.064_993 * d).to_radians();
    // mean argument of latitude
    let f = (93.272 + 13.229_350 * d).to_radians();

    let lon = l0 + 6.289_f64.to_radians() * m.sin();
    let lat = 5.128_f64.to_radians() * f.sin();
    let distance_km = 385_001.0 - 20_905.0 * m.cos();

    MoonCoords {
        equatorial: ecliptic_to_equatorial(lon, lat),
        distance_km,
    }
}
