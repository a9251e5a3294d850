//! Moonrise and moonset for a calendar day.
//!
//! The Moon's altitude is sampled at midnight and then at every hour of the
//! day. Each consecutive triple of samples spanning two hours is fitted with
//! a parabola ([`QuadraticWindow`]) whose zeros inside the window are taken
//! as horizon crossings. The sign of the first sample of the window tells a
//! single crossing's direction; with two crossings in one window the sign of
//! the parabola's extremum does. The scan stops once both a rise and a set
//! are known.
//!
//! Source: K. Burnett, "Moonrise and moonset" (stargazing.net/kepler),
//! after Montenbruck & Pfleger's QUAD search.

use solun_base::{GeoLocation, moon_position};
use solun_time::{DayFrame, Epoch, TimeError};

use crate::error::SearchError;
use crate::moon_times_types::MoonTimes;
use crate::quadratic::{QuadraticWindow, WindowCrossings};

/// Altitude of the Moon's center at rise/set, degrees above the horizon.
///
/// Lunar parallax (~+0.95°) minus semidiameter (~0.26°) minus the horizon
/// refraction already folded into the refracted altitude (~0.56°).
pub const MOON_HORIZON_ALTITUDE_DEG: f64 = 0.133;

/// Width of one fitting window, hours.
const WINDOW_HOURS: usize = 2;

/// Hours in the scanned day.
const DAY_HOURS: usize = 24;

/// Raw outcome of scanning one day of altitude samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayScan {
    /// Hours after the start of the day at which the body rises.
    pub rise_hours: Option<f64>,
    /// Hours after the start of the day at which the body sets.
    pub set_hours: Option<f64>,
    /// Extremum value of the last fitted window.
    pub last_vertex_y: f64,
}

/// Scan 24 hours of `altitude_at(hours_after_midnight)` for horizon
/// crossings (zeros of the sampled function).
///
/// Windows are centred on hours 1, 3, …, 23, each fitted through samples
/// at `i − 1`, `i`, and `i + 1`. A later window overwrites an earlier
/// crossing of the same direction. Scanning stops early once both a rise
/// and a set have been seen.
pub fn scan_day<F>(mut altitude_at: F) -> DayScan
where
    F: FnMut(f64) -> f64,
{
    let mut h0 = altitude_at(0.0);
    let mut rise_hours = None;
    let mut set_hours = None;
    let mut ye = 0.0;

    for i in (1..DAY_HOURS).step_by(WINDOW_HOURS) {
        let i = i as f64;
        let h1 = altitude_at(i);
        let h2 = altitude_at(i + 1.0);

        let window = QuadraticWindow::fit(h0, h1, h2);
        ye = window.vertex_y();

        match window.crossings() {
            WindowCrossings::Zero => {}
            WindowCrossings::One(x) => {
                if h0 < 0.0 {
                    rise_hours = Some(i + x);
                } else {
                    set_hours = Some(i + x);
                }
            }
            WindowCrossings::Two(x1, x2) => {
                // below the horizon between the two zeros: sets first
                let (rise_x, set_x) = if ye < 0.0 { (x2, x1) } else { (x1, x2) };
                rise_hours = Some(i + rise_x);
                set_hours = Some(i + set_x);
            }
        }

        if rise_hours.is_some() && set_hours.is_some() {
            break;
        }

        h0 = h2;
    }

    DayScan {
        rise_hours,
        set_hours,
        last_vertex_y: ye,
    }
}

impl DayScan {
    /// Convert hour offsets into instants after `midnight`.
    ///
    /// With no crossing the day is [`MoonTimes::AlwaysUp`] if the last
    /// fitted extremum is above the horizon, otherwise
    /// [`MoonTimes::AlwaysDown`].
    pub fn into_moon_times(self, midnight: Epoch) -> Result<MoonTimes, TimeError> {
        let at = |hours: f64| midnight.hours_later(hours).ok_or(TimeError::OutOfRange);
        Ok(match (self.rise_hours, self.set_hours) {
            (Some(r), Some(s)) => MoonTimes::RiseAndSet {
                rise: at(r)?,
                set: at(s)?,
            },
            (Some(r), None) => MoonTimes::Rise(at(r)?),
            (None, Some(s)) => MoonTimes::Set(at(s)?),
            (None, None) if self.last_vertex_y > 0.0 => MoonTimes::AlwaysUp,
            (None, None) => MoonTimes::AlwaysDown,
        })
    }
}

/// Moonrise and moonset during the calendar day containing `epoch`.
///
/// The day runs from midnight to midnight in `frame`. Rise and set refer
/// to the refracted altitude of the Moon's center crossing
/// [`MOON_HORIZON_ALTITUDE_DEG`].
pub fn moon_times(
    epoch: Epoch,
    location: &GeoLocation,
    frame: DayFrame,
) -> Result<MoonTimes, SearchError> {
    let midnight = frame.midnight(epoch)?;
    let hc = MOON_HORIZON_ALTITUDE_DEG.to_radians();

    let scan = scan_day(|hours| match midnight.hours_later(hours) {
        Some(t) => moon_position(t, location).altitude_rad - hc,
        None => f64::NAN,
    });

    Ok(scan.into_moon_times(midnight)?)
}
