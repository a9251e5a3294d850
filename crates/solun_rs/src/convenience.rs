use chrono::{DateTime, Utc};
use solun_base::{
    GeoLocation, MoonIllumination, MoonPosition, SunPosition, SunTimes, TimesTable,
};
use solun_search::MoonTimes;
use solun_time::{DayFrame, Epoch, TimeError};

use crate::error::SolunError;

fn location(latitude_deg: f64, longitude_deg: f64) -> GeoLocation {
    GeoLocation::new(latitude_deg, longitude_deg, 0.0)
}

/// Azimuth and altitude of the Sun (radians, no refraction).
pub fn sun_position(at: impl Into<Epoch>, latitude_deg: f64, longitude_deg: f64) -> SunPosition {
    solun_base::sun_position(at.into(), &location(latitude_deg, longitude_deg))
}

/// Solar noon, nadir, and the default twilight table for the solar day
/// nearest `at`, for a sea-level observer.
pub fn sun_times(at: impl Into<Epoch>, latitude_deg: f64, longitude_deg: f64) -> SunTimes {
    solun_base::sun_times(
        at.into(),
        &location(latitude_deg, longitude_deg),
        &TimesTable::default(),
    )
}

/// Sun times for an explicit location (including altitude) and table.
pub fn sun_times_with(
    at: impl Into<Epoch>,
    location: &GeoLocation,
    table: &TimesTable,
) -> SunTimes {
    solun_base::sun_times(at.into(), location, table)
}

/// Azimuth, refracted altitude, distance, and parallactic angle of the Moon.
pub fn moon_position(at: impl Into<Epoch>, latitude_deg: f64, longitude_deg: f64) -> MoonPosition {
    solun_base::moon_position(at.into(), &location(latitude_deg, longitude_deg))
}

/// Lunar illumination at `at`.
pub fn moon_illumination(at: impl Into<Epoch>) -> MoonIllumination {
    solun_base::moon_illumination(at.into())
}

/// Lunar illumination at the current system time.
pub fn moon_illumination_now() -> MoonIllumination {
    moon_illumination(Utc::now())
}

/// Moonrise and moonset on the calendar day containing `at`.
///
/// The day is taken in UTC when `is_utc` is set, otherwise in the host's
/// local timezone.
pub fn moon_times(
    at: impl Into<Epoch>,
    latitude_deg: f64,
    longitude_deg: f64,
    is_utc: bool,
) -> Result<MoonTimes, SolunError> {
    moon_times_in(
        at,
        &location(latitude_deg, longitude_deg),
        DayFrame::from_utc_flag(is_utc),
    )
}

/// Moonrise and moonset on the calendar day containing `at` in `frame`.
pub fn moon_times_in(
    at: impl Into<Epoch>,
    location: &GeoLocation,
    frame: DayFrame,
) -> Result<MoonTimes, SolunError> {
    Ok(solun_search::moon_times(at.into(), location, frame)?)
}

/// Convert an almanac epoch back to a chrono UTC date-time.
pub fn to_utc(epoch: Epoch) -> Result<DateTime<Utc>, SolunError> {
    Ok(epoch.to_datetime_utc().ok_or(TimeError::OutOfRange)?)
}
