//! Obliquity of the ecliptic.

/// Mean obliquity of the ecliptic used by the almanac series, degrees.
pub const OBLIQUITY_DEG: f64 = 23.4397;

/// Mean obliquity of the ecliptic, radians.
pub const OBLIQUITY_RAD: f64 = OBLIQUITY_DEG * (std::f64::consts::PI / 180.0);
