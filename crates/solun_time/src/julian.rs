//! Julian Date ↔ Unix millisecond conversions.
//!
//! The almanac formulas use a continuous day count with the Unix epoch
//! pinned at JD 2440587.5, i.e. `JD = ms / 86_400_000 - 0.5 + 2_440_588`.

/// Milliseconds per day.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Milliseconds per hour.
pub const MS_PER_HOUR: f64 = 3_600_000.0;

/// Julian day number of the Unix epoch day (1970-01-01, noon-based count).
pub const J1970_JD: f64 = 2_440_588.0;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Convert Unix milliseconds to a Julian Date.
pub fn unix_ms_to_jd(unix_ms: i64) -> f64 {
    unix_ms as f64 / MS_PER_DAY - 0.5 + J1970_JD
}

/// Convert a Julian Date to Unix milliseconds, rounded to the nearest ms.
///
/// Returns `None` when `jd` is not finite or the result overflows `i64`.
pub fn jd_to_unix_ms(jd: f64) -> Option<i64> {
    if !jd.is_finite() {
        return None;
    }
    finite_ms_to_i64(((jd + 0.5 - J1970_JD) * MS_PER_DAY).round())
}

/// Days elapsed since J2000.0 for a Julian Date.
pub fn jd_to_days_since_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}

/// Narrow an already-integral millisecond count to `i64`.
pub(crate) fn finite_ms_to_i64(ms: f64) -> Option<i64> {
    // i64::MAX is not exactly representable; 2^63 is the first value past it.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if ms.is_finite() && (-LIMIT..LIMIT).contains(&ms) {
        Some(ms as i64)
    } else {
        None
    }
}
