use crate::analyzers::types::StationStats;
use crate::analyzers::utility::mode;
use crate::error::StatsError;
use crate::loader::FilteredTrips;

/// Most used start station, end station and start/end combination.
#[tracing::instrument(name = "station_stats", skip_all, fields(trips = trips.len()))]
pub fn station_stats(trips: &FilteredTrips) -> Result<StationStats, StatsError> {
    let popular_start = mode(trips.iter().map(|t| t.start_station.as_str()))
        .ok_or(StatsError::NoModeAvailable {
            statistic: "popular start station",
        })?
        .to_string();

    let popular_end = mode(trips.iter().map(|t| t.end_station.as_str()))
        .ok_or(StatsError::NoModeAvailable {
            statistic: "popular end station",
        })?
        .to_string();

    let popular_trip = mode(trips.iter().map(|t| t.route())).ok_or(
        StatsError::NoModeAvailable {
            statistic: "popular trip",
        },
    )?;

    Ok(StationStats {
        popular_start,
        popular_end,
        popular_trip,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_util::filtered;
    use crate::loader::{DatasetSchema, RawTrip};

    #[test]
    fn test_station_stats() {
        let trips = filtered(
            DatasetSchema::default(),
            vec![
                RawTrip::new("2017-01-01 08:00:00", "Canal St", "Clark St", 60.0, "Subscriber"),
                RawTrip::new("2017-01-01 08:00:00", "Canal St", "State St", 60.0, "Subscriber"),
                RawTrip::new("2017-01-01 08:00:00", "Clark St", "State St", 60.0, "Subscriber"),
                RawTrip::new("2017-01-01 08:00:00", "Clark St", "State St", 60.0, "Subscriber"),
                RawTrip::new("2017-01-01 08:00:00", "Canal St", "Lake St", 60.0, "Subscriber"),
            ],
        );

        let stats = station_stats(&trips).unwrap();
        assert_eq!(stats.popular_start, "Canal St");
        assert_eq!(stats.popular_end, "State St");
        // The busiest start station is not part of the busiest trip.
        assert_eq!(stats.popular_trip, "Clark St to State St");
    }

    #[test]
    fn test_station_stats_empty() {
        let trips = filtered(DatasetSchema::default(), vec![]);
        assert!(matches!(
            station_stats(&trips),
            Err(StatsError::NoModeAvailable { .. })
        ));
    }
}
