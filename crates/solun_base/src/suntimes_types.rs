//! Types for solar noon, nadir, and rise/set time tables.
//!
//! A [`TimesTable`] lists the solar altitudes of interest together with the
//! labels of the morning and evening crossings. [`SunTimes`] holds the
//! result of evaluating a table for one day and location.

use solun_time::Epoch;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Label of the solar transit in [`SunTimes`] lookups.
pub const SOLAR_NOON: &str = "solarNoon";

/// Label of the antitransit in [`SunTimes`] lookups.
pub const NADIR: &str = "nadir";

/// One row of a sun-times table: a solar altitude and the labels of its
/// morning (rising) and evening (setting) crossings.
#[derive(Debug, Clone, PartialEq)]
pub struct TimesEntry {
    /// Altitude of the Sun's center in degrees (negative = below horizon).
    pub angle_deg: f64,
    /// Label of the morning crossing.
    pub rise_label: String,
    /// Label of the evening crossing.
    pub set_label: String,
}

impl TimesEntry {
    /// Create a table row.
    pub fn new(angle_deg: f64, rise_label: impl Into<String>, set_label: impl Into<String>) -> Self {
        Self {
            angle_deg,
            rise_label: rise_label.into(),
            set_label: set_label.into(),
        }
    }
}

/// Ordered, caller-owned list of sun-time rows.
///
/// Row order fixes the iteration order of [`SunTimes`]. Duplicate labels
/// are accepted; lookups resolve to the row registered last.
#[derive(Debug, Clone, PartialEq)]
pub struct TimesTable {
    entries: Vec<TimesEntry>,
}

impl Default for TimesTable {
    /// Sunrise/sunset, end/start of the sunrise/sunset disk crossing,
    /// civil, nautical, and astronomical twilight, and golden hour.
    fn default() -> Self {
        Self {
            entries: vec![
                TimesEntry::new(-0.833, "sunrise", "sunset"),
                TimesEntry::new(-0.3, "sunriseEnd", "sunsetStart"),
                TimesEntry::new(-6.0, "dawn", "dusk"),
                TimesEntry::new(-12.0, "nauticalDawn", "nauticalDusk"),
                TimesEntry::new(-18.0, "nightEnd", "night"),
                TimesEntry::new(6.0, "goldenHourEnd", "goldenHour"),
            ],
        }
    }
}

impl TimesTable {
    /// A table with no rows; results then contain only noon and nadir.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a row.
    pub fn register(
        &mut self,
        angle_deg: f64,
        rise_label: impl Into<String>,
        set_label: impl Into<String>,
    ) {
        self.entries.push(TimesEntry::new(angle_deg, rise_label, set_label));
    }

    /// Rows in registration order.
    pub fn entries(&self) -> &[TimesEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<TimesEntry> for TimesTable {
    fn from_iter<I: IntoIterator<Item = TimesEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<TimesEntry> for TimesTable {
    fn extend<I: IntoIterator<Item = TimesEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

/// Geometric dip of the horizon for an observer `altitude_m` above sea
/// level, in degrees. Zero at or below sea level.
///
/// dip = sqrt(2h / R) radians
pub fn horizon_dip_deg(altitude_m: f64) -> f64 {
    if altitude_m > 0.0 {
        (2.0 * altitude_m / EARTH_RADIUS_M).sqrt().to_degrees()
    } else {
        0.0
    }
}

/// Morning and evening crossing times for one table row.
///
/// `None` means the Sun does not reach the row's altitude on this day at
/// this latitude (polar day or night for that angle).
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimeEvent {
    pub entry: TimesEntry,
    pub rise: Option<Epoch>,
    pub set: Option<Epoch>,
}

/// Solar noon, nadir, and one [`SunTimeEvent`] per table row.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes {
    /// Solar transit.
    pub solar_noon: Option<Epoch>,
    /// Solar antitransit, half a day before the transit.
    pub nadir: Option<Epoch>,
    /// Crossings in table order.
    pub events: Vec<SunTimeEvent>,
}

impl SunTimes {
    /// Time for a label: [`SOLAR_NOON`], [`NADIR`], or any rise/set label
    /// from the table. Returns `None` for unknown labels and for crossings
    /// that do not occur.
    pub fn get(&self, label: &str) -> Option<Epoch> {
        match label {
            SOLAR_NOON => self.solar_noon,
            NADIR => self.nadir,
            _ => self.events.iter().rev().find_map(|ev| {
                if ev.entry.set_label == label {
                    Some(ev.set)
                } else if ev.entry.rise_label == label {
                    Some(ev.rise)
                } else {
                    None
                }
            })?,
        }
    }

    /// Whether `label` names a value in this result (even one that is `None`).
    pub fn contains_label(&self, label: &str) -> bool {
        self.iter().any(|(l, _)| l == label)
    }

    /// All `(label, time)` pairs: noon, nadir, then each row's rise and set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<Epoch>)> + '_ {
        [(SOLAR_NOON, self.solar_noon), (NADIR, self.nadir)]
            .into_iter()
            .chain(self.events.iter().flat_map(|ev| {
                [
                    (ev.entry.rise_label.as_str(), ev.rise),
                    (ev.entry.set_label.as_str(), ev.set),
                ]
            }))
    }

    /// Number of labelled values: `2 + 2 × rows`.
    pub fn len(&self) -> usize {
        2 + 2 * self.events.len()
    }

    /// Always `false`: noon and nadir are always present.
    pub fn is_empty(&self) -> bool {
        false
    }
}
