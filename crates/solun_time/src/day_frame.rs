//! Calendar frames used to find the start of a civil day.
//!
//! Moon rise/set tables are computed for a calendar day running from
//! local midnight to the following midnight. Which calendar that is
//! (UTC, the host timezone, or a fixed offset) is the caller's choice.

use chrono::{DateTime, FixedOffset, Local, LocalResult, TimeZone, Utc};

use crate::Epoch;
use crate::error::TimeError;

/// Calendar in which a day boundary is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFrame {
    /// The host's ambient timezone.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
    /// A fixed UTC offset.
    Fixed(FixedOffset),
}

impl DayFrame {
    /// Map a plain "is UTC" flag to a frame: `true` → [`DayFrame::Utc`],
    /// `false` → [`DayFrame::Local`].
    pub fn from_utc_flag(is_utc: bool) -> Self {
        if is_utc { Self::Utc } else { Self::Local }
    }

    /// Start (00:00:00.000) of the calendar day containing `epoch`.
    ///
    /// An ambiguous midnight (clocks set back across 00:00) resolves to the
    /// earlier instant. A midnight swallowed by a daylight-saving gap is
    /// reported as [`TimeError::NonexistentLocalTime`].
    pub fn midnight(self, epoch: Epoch) -> Result<Epoch, TimeError> {
        let utc = epoch.to_datetime_utc().ok_or(TimeError::OutOfRange)?;
        match self {
            Self::Local => start_of_day(&utc.with_timezone(&Local)),
            Self::Utc => start_of_day(&utc),
            Self::Fixed(offset) => start_of_day(&utc.with_timezone(&offset)),
        }
    }
}

fn start_of_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<Epoch, TimeError> {
    let date = dt.date_naive();
    let naive = date.and_hms_opt(0, 0, 0).ok_or(TimeError::OutOfRange)?;
    match dt.timezone().from_local_datetime(&naive) {
        LocalResult::Single(m) => Ok(Epoch::from_datetime(&m)),
        LocalResult::Ambiguous(earliest, _) => Ok(Epoch::from_datetime(&earliest)),
        LocalResult::None => Err(TimeError::NonexistentLocalTime(date)),
    }
}

impl From<FixedOffset> for DayFrame {
    fn from(offset: FixedOffset) -> Self {
        Self::Fixed(offset)
    }
}
