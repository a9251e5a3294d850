//! Solar noon, nadir, and rise/set times for a table of solar altitudes.
//!
//! Single-shot closed-form approximation (aa.quae.nl "Position of the Sun",
//! sunrise/sunset section): the transit is found from the mean solar day
//! cycle plus the equation of time, and each crossing from the hour angle
//! at which the Sun reaches the target altitude. There is no iteration.
//!
//! When the Sun never reaches an altitude at the given latitude the hour
//! angle is undefined (`acos` of a value outside [-1, 1]); the affected
//! crossing is reported as `None` rather than as an error.

use std::f64::consts::TAU;

use solun_frames::declination;
use solun_time::{Epoch, J2000_JD};

use crate::position_types::GeoLocation;
use crate::sun::{solar_ecliptic_longitude, solar_mean_anomaly};
use crate::suntimes_types::{SunTimeEvent, SunTimes, TimesTable, horizon_dip_deg};

/// Offset of mean solar transit at Greenwich from J2000.0, days.
const J0: f64 = 0.0009;

/// Number of the mean solar day containing `d`, relative to J2000.0.
///
/// Rounds half up, matching `floor(x + 0.5)`.
fn julian_cycle(d: f64, lw: f64) -> f64 {
    (d - J0 - lw / TAU + 0.5).floor()
}

/// Approximate days since J2000.0 of the moment the hour angle equals `ht`.
fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / TAU + n
}

/// Julian Date of the transit, corrected by the equation of time.
fn solar_transit_jd(ds: f64, m: f64, l: f64) -> f64 {
    J2000_JD + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Hour angle (radians) at which a body at declination `dec` reaches
/// altitude `h` for latitude `phi`. NaN if it never does.
fn hour_angle(h: f64, phi: f64, dec: f64) -> f64 {
    ((h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())).acos()
}

/// Julian Date at which the Sun descends through altitude `h` (radians).
fn set_jd(h: f64, lw: f64, phi: f64, dec: f64, n: f64, m: f64, l: f64) -> f64 {
    let w = hour_angle(h, phi, dec);
    let a = approx_transit(w, lw, n);
    solar_transit_jd(a, m, l)
}

/// Compute solar noon, nadir, and the crossing times of every row of
/// `table` for the solar day nearest `epoch` at `location`.
///
/// For an observer above sea level every row's altitude is lowered by the
/// geometric dip of the horizon (see [`horizon_dip_deg`]).
pub fn sun_times(epoch: Epoch, location: &GeoLocation, table: &TimesTable) -> SunTimes {
    let lw = location.west_longitude_rad();
    let phi = location.latitude_rad();
    let dip = horizon_dip_deg(location.altitude_m);

    let d = epoch.days_since_j2000();
    let n = julian_cycle(d, lw);
    let ds = approx_transit(0.0, lw, n);

    let m = solar_mean_anomaly(ds);
    let l = solar_ecliptic_longitude(m);
    let dec = declination(l, 0.0);

    let j_noon = solar_transit_jd(ds, m, l);

    let events = table
        .entries()
        .iter()
        .map(|entry| {
            let h = (entry.angle_deg - dip).to_radians();
            let j_set = set_jd(h, lw, phi, dec, n, m, l);
            let j_rise = j_noon - (j_set - j_noon);
            SunTimeEvent {
                entry: entry.clone(),
                rise: Epoch::from_jd(j_rise),
                set: Epoch::from_jd(j_set),
            }
        })
        .collect();

    SunTimes {
        solar_noon: Epoch::from_jd(j_noon),
        nadir: Epoch::from_jd(j_noon - 0.5),
        events,
    }
}
