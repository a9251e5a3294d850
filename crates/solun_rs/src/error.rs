//! Unified error type for the convenience wrapper.

use std::error::Error;
use std::fmt::{Display, Formatter};

use solun_search::SearchError;
use solun_time::TimeError;

/// Errors surfaced by the convenience functions.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolunError {
    /// Epoch ↔ calendar conversion failed.
    Time(TimeError),
    /// Moonrise/moonset search failed.
    Search(SearchError),
}

impl Display for SolunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
        }
    }
}

impl Error for SolunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<TimeError> for SolunError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<SearchError> for SolunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
