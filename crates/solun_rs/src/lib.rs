//! Convenience wrapper for the solun Sun and Moon almanac.
//!
//! Accepts chrono date-times (or raw [`Epoch`]s) and plain latitude /
//! longitude degrees, so callers don't need to build [`GeoLocation`]s or
//! pick a day frame for the common cases.
//!
//! # Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use solun_rs::*;
//!
//! let at = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
//! let times = sun_times(at, 31.87, 117.24);
//! let sunrise = times.get("sunrise").expect("sun rises at mid-latitudes");
//! println!("sunrise: {sunrise}");
//!
//! match moon_times(at, 31.87, 117.24, true).unwrap() {
//!     MoonTimes::AlwaysUp => println!("moon up all day"),
//!     MoonTimes::AlwaysDown => println!("moon down all day"),
//!     t => println!("moonrise {:?}, moonset {:?}", t.rise(), t.set()),
//! }
//! ```

pub mod convenience;
pub mod error;

// Everything a caller needs is reachable through `use solun_rs::*`.
pub use convenience::{
    moon_illumination, moon_illumination_now, moon_position, moon_times, moon_times_in,
    sun_position, sun_times, sun_times_with, to_utc,
};
pub use error::SolunError;

// Re-export core types so callers don't need to depend on the layer crates.
pub use solun_base::{
    GeoLocation, MoonIllumination, MoonPosition, SunPosition, SunTimeEvent, SunTimes, TimesEntry,
    TimesTable,
};
pub use solun_frames::EquatorialCoords;
pub use solun_search::MoonTimes;
pub use solun_time::{DayFrame, Epoch, TimeError};
