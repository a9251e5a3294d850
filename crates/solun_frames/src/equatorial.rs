//! Ecliptic → equatorial coordinate conversion.

use crate::obliquity::OBLIQUITY_RAD;

/// Geocentric equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in radians, range (-π, π].
    pub ra_rad: f64,
    /// Declination in radians, range [-π/2, π/2].
    pub dec_rad: f64,
}

/// Right ascension of a point at ecliptic longitude `l` and latitude `b`.
pub fn right_ascension(l: f64, b: f64) -> f64 {
    let e = OBLIQUITY_RAD;
    (l.sin() * e.cos() - b.tan() * e.sin()).atan2(l.cos())
}

/// Declination of a point at ecliptic longitude `l` and latitude `b`.
pub fn declination(l: f64, b: f64) -> f64 {
    let e = OBLIQUITY_RAD;
    (b.sin() * e.cos() + b.cos() * e.sin() * l.sin()).asin()
}

/// Convert ecliptic longitude/latitude (radians) to equatorial coordinates.
pub fn ecliptic_to_equatorial(l: f64, b: f64) -> EquatorialCoords {
    EquatorialCoords {
        ra_rad: right_ascension(l, b),
        dec_rad: declination(l, b),
    }
}
