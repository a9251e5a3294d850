//! Sun and Moon horizontal positions for an observer.

use solun_frames::{altitude, astro_refraction, azimuth, parallactic_angle};
use solun_time::{Epoch, sidereal_time_rad};

use crate::moon::moon_coords;
use crate::position_types::{GeoLocation, MoonPosition, SunPosition};
use crate::sun::sun_coords;

/// Azimuth and geometric altitude of the Sun.
///
/// No refraction correction is applied.
pub fn sun_position(epoch: Epoch, location: &GeoLocation) -> SunPosition {
    let lw = location.west_longitude_rad();
    let phi = location.latitude_rad();
    let d = epoch.days_since_j2000();

    let c = sun_coords(d);
    let h = sidereal_time_rad(d, lw) - c.ra_rad;

    SunPosition {
        azimuth_rad: azimuth(h, phi, c.dec_rad),
        altitude_rad: altitude(h, phi, c.dec_rad),
    }
}

/// Azimuth, refracted altitude, distance, and parallactic angle of the Moon.
pub fn moon_position(epoch: Epoch, location: &GeoLocation) -> MoonPosition {
    let lw = location.west_longitude_rad();
    let phi = location.latitude_rad();
    let d = epoch.days_since_j2000();

    let c = moon_coords(d);
    let dec = c.equatorial.dec_rad;
    let h = sidereal_time_rad(d, lw) - c.equatorial.ra_rad;
    let alt = altitude(h, phi, dec);

    MoonPosition {
        azimuth_rad: azimuth(h, phi, dec),
        altitude_rad: alt + astro_refraction(alt),
        distance_km: c.distance_km,
        parallactic_angle_rad: parallactic_angle(h, phi, dec),
    }
}
