//! Lunar illumination: illuminated fraction, phase, and bright-limb angle.
//!
//! Sources: IDL Astronomy Library `mphase.pro` and Meeus, *Astronomical
//! Algorithms* 2nd ed., chapter 48.

use std::f64::consts::PI;

use solun_time::Epoch;

use crate::moon::moon_coords;
use crate::sun::sun_coords;

/// Mean Earth–Sun distance in km.
const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Illumination state of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonIllumination {
    /// Illuminated fraction of the disk, 0 (new) to 1 (full).
    pub fraction: f64,
    /// Phase: 0 new, 0.25 first quarter, 0.5 full, 0.75 last quarter.
    pub phase: f64,
    /// Midpoint angle of the illuminated limb in radians, measured
    /// eastward from the north point of the disk.
    pub angle_rad: f64,
}

impl MoonIllumination {
    /// Whether the Moon is waxing (phase in [0, 0.5)).
    pub fn is_waxing(&self) -> bool {
        self.phase < 0.5
    }
}

/// Illumination of the Moon at `epoch`.
///
/// The epoch is always explicit; a "now" default belongs to the caller.
pub fn moon_illumination(epoch: Epoch) -> MoonIllumination {
    let d = epoch.days_since_j2000();
    let s = sun_coords(d);
    let m = moon_coords(d);
    let (s_ra, s_dec) = (s.ra_rad, s.dec_rad);
    let (m_ra, m_dec) = (m.equatorial.ra_rad, m.equatorial.dec_rad);

    // geocentric elongation of the Moon from the Sun
    let phi = (s_dec.sin() * m_dec.sin() + s_dec.cos() * m_dec.cos() * (s_ra - m_ra).cos()).acos();
    // selenocentric elongation of the Earth from the Sun
    let inc = (SUN_DISTANCE_KM * phi.sin()).atan2(m.distance_km - SUN_DISTANCE_KM * phi.cos());
    let angle = (s_dec.cos() * (s_ra - m_ra).sin())
        .atan2(s_dec.sin() * m_dec.cos() - s_dec.cos() * m_dec.sin() * (s_ra - m_ra).cos());

    let sign = if angle < 0.0 { -1.0 } else { 1.0 };
    MoonIllumination {
        fraction: (1.0 + inc.cos()) / 2.0,
        phase: 0.5 + 0.5 * inc * sign / PI,
        angle_rad: angle,
    }
}
