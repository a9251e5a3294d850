//! Low-precision local sidereal time.
//!
//! θ = 280.16° + 360.9856235° × d − lw
//!
//! where d = days since J2000.0 and lw = west longitude (radians, i.e. the
//! negated east longitude). Valid to a few arcminutes over a few centuries
//! around J2000; the result is NOT wrapped into [0, 2π) because every caller
//! feeds it straight into sin/cos.
//!
//! Source: aa.quae.nl "Computing planetary positions", sidereal time section.

/// Sidereal time at Greenwich at J2000.0, degrees.
const THETA0_DEG: f64 = 280.16;

/// Sidereal rotation rate, degrees per day.
const THETA1_DEG_PER_DAY: f64 = 360.985_623_5;

/// Local sidereal time in radians.
pub fn sidereal_time_rad(days_since_j2000: f64, west_longitude_rad: f64) -> f64 {
    (THETA0_DEG + THETA1_DEG_PER_DAY * days_since_j2000).to_radians() - west_longitude_rad
}
