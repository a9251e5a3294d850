//! Observer location and horizontal position results.

/// Geographic location on Earth's surface.
///
/// No range validation is performed: out-of-range values produce
/// well-defined but physically meaningless (possibly NaN) results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Longitude in radians, west positive (`lw` in the almanac formulas).
    pub fn west_longitude_rad(&self) -> f64 {
        (-self.longitude_deg).to_radians()
    }
}

/// Horizontal position of the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Azimuth in radians, from south toward west. Range [-π, π].
    pub azimuth_rad: f64,
    /// Geometric altitude in radians (no refraction). Range [-π/2, π/2].
    pub altitude_rad: f64,
}

/// Horizontal position of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Azimuth in radians, from south toward west. Range [-π, π].
    pub azimuth_rad: f64,
    /// Altitude in radians, corrected for atmospheric refraction.
    pub altitude_rad: f64,
    /// Earth–Moon distance in km.
    pub distance_km: f64,
    /// Parallactic angle in radians.
    pub parallactic_angle_rad: f64,
}
