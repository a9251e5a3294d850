//! Result type for moonrise/moonset search.

use solun_time::Epoch;

/// Moon horizon crossings during one calendar day.
///
/// Exactly one shape holds per day: at least one crossing was found, or
/// none was and the Moon stayed on one side of the horizon throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonTimes {
    /// The Moon rises but does not set during the day.
    Rise(Epoch),
    /// The Moon sets but does not rise during the day.
    Set(Epoch),
    /// The Moon both rises and sets (in either order).
    RiseAndSet { rise: Epoch, set: Epoch },
    /// The Moon stays above the horizon all day.
    AlwaysUp,
    /// The Moon stays below the horizon all day.
    AlwaysDown,
}

impl MoonTimes {
    /// Moonrise, if one occurs.
    pub fn rise(&self) -> Option<Epoch> {
        match *self {
            Self::Rise(rise) | Self::RiseAndSet { rise, .. } => Some(rise),
            _ => None,
        }
    }

    /// Moonset, if one occurs.
    pub fn set(&self) -> Option<Epoch> {
        match *self {
            Self::Set(set) | Self::RiseAndSet { set, .. } => Some(set),
            _ => None,
        }
    }

    pub fn is_always_up(&self) -> bool {
        matches!(self, Self::AlwaysUp)
    }

    pub fn is_always_down(&self) -> bool {
        matches!(self, Self::AlwaysDown)
    }
}
