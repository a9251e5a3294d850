//! Error types for epoch and calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

/// Errors from epoch ↔ calendar conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Midnight of the given date does not exist in the requested timezone
    /// (a daylight-saving gap starts at 00:00).
    NonexistentLocalTime(NaiveDate),
    /// Epoch cannot be represented as a calendar date.
    OutOfRange,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonexistentLocalTime(date) => {
                write!(f, "local midnight of {date} does not exist in this timezone")
            }
            Self::OutOfRange => write!(f, "epoch outside the representable calendar range"),
        }
    }
}

impl Error for TimeError {}
