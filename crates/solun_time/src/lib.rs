//! Time handling for the solun almanac.
//!
//! This crate provides:
//! - Unix millisecond ↔ Julian Date conversion
//! - An `Epoch` type: a timezone-agnostic instant at millisecond resolution
//! - Day frames (UTC / local / fixed offset) for midnight normalization
//! - Low-precision local sidereal time

pub mod day_frame;
pub mod error;
pub mod julian;
pub mod sidereal;

use std::fmt::{Display, Formatter};

use chrono::{DateTime, TimeZone, Utc};

pub use day_frame::DayFrame;
pub use error::TimeError;
pub use julian::{
    J1970_JD, J2000_JD, MS_PER_DAY, MS_PER_HOUR, jd_to_days_since_j2000, jd_to_unix_ms,
    unix_ms_to_jd,
};
pub use sidereal::sidereal_time_rad;

/// An absolute instant, stored as milliseconds since 1970-01-01T00:00:00Z.
///
/// This is the time type consumed and produced by every almanac function.
/// Leap seconds are ignored, as in Unix time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch {
    unix_ms: i64,
}

impl Epoch {
    /// The Unix epoch, 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self { unix_ms: 0 };

    /// Create an epoch from Unix milliseconds.
    pub const fn from_unix_ms(unix_ms: i64) -> Self {
        Self { unix_ms }
    }

    /// Create an epoch from a Julian Date.
    ///
    /// Returns `None` for NaN/infinite input or dates beyond `i64` ms.
    pub fn from_jd(jd: f64) -> Option<Self> {
        jd_to_unix_ms(jd).map(Self::from_unix_ms)
    }

    /// Create an epoch from any chrono date-time.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            unix_ms: dt.timestamp_millis(),
        }
    }

    /// Milliseconds since the Unix epoch.
    pub const fn as_unix_ms(self) -> i64 {
        self.unix_ms
    }

    /// Julian Date.
    pub fn as_jd(self) -> f64 {
        unix_ms_to_jd(self.unix_ms)
    }

    /// Days since J2000.0 (the `d` argument of the almanac series).
    pub fn days_since_j2000(self) -> f64 {
        jd_to_days_since_j2000(self.as_jd())
    }

    /// The instant `hours` later (earlier if negative), truncated toward
    /// zero at millisecond resolution.
    pub fn hours_later(self, hours: f64) -> Option<Self> {
        let ms = (self.unix_ms as f64 + hours * MS_PER_HOUR).trunc();
        julian::finite_ms_to_i64(ms).map(Self::from_unix_ms)
    }

    /// Convert to a chrono UTC date-time, if it is in chrono's range.
    pub fn to_datetime_utc(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.unix_ms)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Epoch {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::from_datetime(&dt)
    }
}

impl Display for Epoch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime_utc() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            None => write!(f, "{} ms", self.unix_ms),
        }
    }
}
