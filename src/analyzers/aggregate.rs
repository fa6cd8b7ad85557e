use tracing::{debug, warn};

use crate::analyzers::duration::trip_duration_stats;
use crate::analyzers::station::station_stats;
use crate::analyzers::time::time_stats;
use crate::analyzers::types::StatsReport;
use crate::analyzers::users::user_stats;
use crate::loader::FilteredTrips;

impl StatsReport {
    /// Runs the four statistic groups over `trips`.
    ///
    /// Groups are independent: one being undefined for this record set does
    /// not prevent the others from being computed.
    #[tracing::instrument(name = "stats_report", skip_all, fields(trips = trips.len()))]
    pub fn compute(trips: &FilteredTrips) -> Self {
        let report = StatsReport {
            filter: *trips.filter(),
            trip_count: trips.len(),
            time: time_stats(trips).into(),
            stations: station_stats(trips).into(),
            durations: trip_duration_stats(trips).into(),
            users: user_stats(trips),
        };

        if report.trip_count == 0 {
            warn!("No trips match the filter");
        }
        debug!(trip_count = report.trip_count, "Statistics computed");

        report
    }
}

#[cfg(test)]
mod tests {
    use crate::analyzers::test_util::filtered;
    use crate::analyzers::types::{StatOutcome, StatsReport};
    use crate::loader::{DatasetSchema, RawTrip};

    #[test]
    fn test_report_over_trips() {
        let trips = filtered(
            DatasetSchema::default(),
            vec![
                RawTrip::new("2017-01-01 08:00:00", "A", "B", 600.0, "Subscriber"),
                RawTrip::new("2017-01-01 09:00:00", "A", "C", 300.0, "Customer"),
            ],
        );

        let report = StatsReport::compute(&trips);
        assert_eq!(report.trip_count, 2);
        assert_eq!(report.time.value().unwrap().popular_month, 1);
        assert_eq!(report.stations.value().unwrap().popular_start, "A");
        assert_eq!(report.durations.value().unwrap().total_duration, 900.0);
        assert_eq!(report.users.user_types.total(), 2);
    }

    #[test]
    fn test_report_over_no_trips_is_partial() {
        let trips = filtered(DatasetSchema::default(), vec![]);

        let report = StatsReport::compute(&trips);
        assert_eq!(report.trip_count, 0);
        assert!(matches!(report.time, StatOutcome::Undefined { .. }));
        assert!(matches!(report.stations, StatOutcome::Undefined { .. }));
        assert!(matches!(report.durations, StatOutcome::Undefined { .. }));
        // User types over zero trips are simply empty.
        assert!(report.users.user_types.is_empty());
    }

    #[test]
    fn test_report_keeps_user_types_without_birth_years() {
        let trips = filtered(
            DatasetSchema::with_demographics(),
            vec![
                RawTrip::new("2017-01-01 08:00:00", "A", "B", 600.0, "Customer").with_gender("Male"),
                RawTrip::new("2017-01-01 09:00:00", "A", "C", 300.0, "Customer"),
            ],
        );

        let report = StatsReport::compute(&trips);
        assert_eq!(report.users.user_types.get("Customer"), Some(2));
        assert_eq!(report.users.gender.available().unwrap().get("Male"), Some(1));
        assert!(matches!(
            report.users.birth_years.available(),
            Some(StatOutcome::Undefined { .. })
        ));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["users"]["user_types"]["Customer"], 2);
        assert_eq!(json["users"]["birth_years"]["value"]["status"], "undefined");
    }

    #[test]
    fn test_report_serializes_undefined_groups() {
        let trips = filtered(DatasetSchema::default(), vec![]);
        let json = serde_json::to_value(StatsReport::compute(&trips)).unwrap();

        assert_eq!(json["durations"]["status"], "undefined");
        assert_eq!(json["users"]["gender"]["status"], "unavailable");
        assert_eq!(json["filter"]["city"], "chicago");
        assert_eq!(json["filter"]["month"], "all");
    }
}
