//! Angle math shared by the Sun and Moon models.
//!
//! Provides ecliptic → equatorial conversion with a fixed J2000 obliquity,
//! hour angle → horizontal (azimuth/altitude) conversion, the parallactic
//! angle, and a low-altitude atmospheric refraction correction.
//!
//! All angles are radians. Azimuth follows the almanac convention of being
//! measured from south, positive toward west.

pub mod equatorial;
pub mod horizontal;
pub mod obliquity;
pub mod refraction;

pub use equatorial::{EquatorialCoords, declination, ecliptic_to_equatorial, right_ascension};
pub use horizontal::{altitude, azimuth, parallactic_angle};
pub use obliquity::{OBLIQUITY_DEG, OBLIQUITY_RAD};
pub use refraction::astro_refraction;
