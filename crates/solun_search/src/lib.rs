//! Moonrise and moonset search.
//!
//! This crate provides:
//! - A three-point quadratic window fit with in-window root classification
//! - A 24-hour scan of the Moon's corrected altitude in 2-hour windows
//! - A tagged [`MoonTimes`] result (rise, set, both, always up, always down)

pub mod error;
pub mod moon_times;
pub mod moon_times_types;
pub mod quadratic;

pub use error::SearchError;
pub use moon_times::{DayScan, MOON_HORIZON_ALTITUDE_DEG, moon_times, scan_day};
pub use moon_times_types::MoonTimes;
pub use quadratic::{QuadraticWindow, WindowCrossings};
