//! Atmospheric refraction near the horizon.
//!
//! Meeus, *Astronomical Algorithms* 2nd ed., formula 16.4:
//!
//! R = 1.02′ / tan(h + 10.26 / (h + 5.10))   (h in degrees)
//!
//! rewritten here with h and R in radians. The formula is only valid for
//! non-negative altitudes; negative input is clamped to the horizon, which
//! also keeps the inner denominator away from its pole at h ≈ −5.1°.

/// Refraction correction (radians) to ADD to a geometric altitude (radians).
pub fn astro_refraction(altitude_rad: f64) -> f64 {
    let h = if altitude_rad < 0.0 { 0.0 } else { altitude_rad };
    0.000_296_7 / (h + 0.003_125_36 / (h + 0.089_011_79)).tan()
}
