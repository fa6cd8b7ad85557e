//! Dataset loading and filtering.
//!
//! A [`TripSource`] supplies every row of a city; [`load`] decodes the rows,
//! derives month/weekday/hour from each start time and keeps the trips that
//! pass the [`FilterSpec`].
//!
//! A row whose start time does not parse fails the whole load with
//! [`LoadError::MalformedRecord`]; rows are never skipped silently.

mod csv_source;
mod memory;
mod source;
mod types;

pub use csv_source::{CsvSource, read_csv};
pub use memory::InMemorySource;
pub use source::TripSource;
pub use types::{DatasetSchema, FilteredTrips, RawDataset, RawTrip, Trip};

use tracing::info;

use crate::error::LoadError;
use crate::filters::FilterSpec;

/// Fetches the filter's city from `source` and keeps the matching trips.
///
/// # Errors
///
/// Propagates the source's [`LoadError`], and returns
/// [`LoadError::MalformedRecord`] for the first row that cannot be decoded.
#[tracing::instrument(
    skip_all,
    fields(city = %filter.city, month = %filter.month, day = %filter.day)
)]
pub fn load<S: TripSource + ?Sized>(
    source: &S,
    filter: &FilterSpec,
) -> Result<FilteredTrips, LoadError> {
    let raw = source.fetch(filter.city)?;
    let total = raw.rows.len();

    let mut trips = Vec::new();
    for (idx, row) in raw.rows.into_iter().enumerate() {
        let trip = Trip::from_raw(row).map_err(|e| LoadError::MalformedRecord {
            row: idx + 1,
            reason: e.to_string(),
        })?;

        if filter.month.matches(trip.month) && filter.day.matches(trip.day_of_week) {
            trips.push(trip);
        }
    }

    info!(kept = trips.len(), total, "Trips loaded");
    Ok(FilteredTrips::new(*filter, raw.schema, trips))
}
