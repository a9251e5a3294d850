//! Closed-form Sun and Moon almanac computations.
//!
//! This crate provides:
//! - Low-precision solar and lunar coordinate series
//! - Sun and Moon azimuth/altitude for an observer
//! - Lunar illumination (fraction, phase, bright-limb angle)
//! - Solar noon, nadir, and rise/set times for a configurable angle table
//!
//! Formulas follow the aa.quae.nl low-precision series with Meeus
//! corrections; accuracy is on the order of a minute of time and a few
//! arcminutes of angle for dates within a few centuries of J2000.

pub mod illumination;
pub mod moon;
pub mod position;
pub mod position_types;
pub mod sun;
pub mod suntimes;
pub mod suntimes_types;

pub use illumination::{MoonIllumination, moon_illumination};
pub use moon::{MoonCoords, moon_coords};
pub use position::{moon_position, sun_position};
pub use position_types::{GeoLocation, MoonPosition, SunPosition};
pub use sun::{solar_ecliptic_longitude, solar_mean_anomaly, sun_coords};
pub use suntimes::sun_times;
pub use suntimes_types::{SunTimeEvent, SunTimes, TimesEntry, TimesTable, horizon_dip_deg};

pub use solun_time::Epoch;
