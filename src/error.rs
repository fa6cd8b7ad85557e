//! Typed error conditions surfaced by the loader and the statistics engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::filters::City;

/// Failures while fetching or decoding a city's trip data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The city's backing data could not be opened or read.
    #[error("trip data for {city} is unavailable at {}: {source}", .path.display())]
    DataSourceUnavailable {
        city: City,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be decoded, or its start time is not a timestamp.
    /// `row` is 1-based and does not count the header.
    #[error("malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    /// The source lacks one of the always-present columns.
    #[error("trip data for {city} has no '{column}' column")]
    MissingColumn { city: City, column: &'static str },
}

/// Statistics that are undefined over the given record set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("no {statistic} available: the record set has no values")]
    NoModeAvailable { statistic: &'static str },

    #[error("{statistic} is undefined over zero trips")]
    DivisionUndefined { statistic: &'static str },
}

/// A filter value outside the supported enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown city '{0}', expected Chicago, New York City or Washington")]
    UnknownCity(String),

    #[error("unknown month '{0}', expected January to June or 'all'")]
    UnknownMonth(String),

    #[error("unknown day '{0}', expected a day of the week or 'all'")]
    UnknownDay(String),
}
