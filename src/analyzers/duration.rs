use crate::analyzers::types::TripDurationStats;
use crate::analyzers::utility::mean;
use crate::error::StatsError;
use crate::loader::FilteredTrips;

/// Sum and arithmetic mean of trip durations, accumulated as `f64`.
///
/// # Errors
///
/// [`StatsError::DivisionUndefined`] when there are no trips to average.
#[tracing::instrument(name = "trip_duration_stats", skip_all, fields(trips = trips.len()))]
pub fn trip_duration_stats(trips: &FilteredTrips) -> Result<TripDurationStats, StatsError> {
    let durations: Vec<f64> = trips.iter().map(|t| t.trip_duration).collect();

    let mean_duration = mean(&durations).ok_or(StatsError::DivisionUndefined {
        statistic: "mean trip duration",
    })?;

    Ok(TripDurationStats {
        total_duration: durations.iter().sum(),
        mean_duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_util::filtered;
    use crate::loader::{DatasetSchema, RawTrip};

    #[test]
    fn test_trip_duration_stats() {
        let trips = filtered(
            DatasetSchema::default(),
            vec![
                RawTrip::new("2017-01-01 08:00:00", "A", "B", 600.0, "Subscriber"),
                RawTrip::new("2017-01-01 09:00:00", "A", "C", 300.0, "Customer"),
                RawTrip::new("2017-01-01 10:00:00", "A", "C", 0.5, "Customer"),
            ],
        );

        let stats = trip_duration_stats(&trips).unwrap();
        assert_eq!(stats.total_duration, 900.5);
        assert!((stats.mean_duration - 900.5 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_trip_duration_stats_empty() {
        let trips = filtered(DatasetSchema::default(), vec![]);
        assert_eq!(
            trip_duration_stats(&trips).unwrap_err(),
            StatsError::DivisionUndefined {
                statistic: "mean trip duration"
            }
        );
    }
}
