use crate::analyzers::types::TimeStats;
use crate::analyzers::utility::mode;
use crate::error::StatsError;
use crate::filters::DAYS;
use crate::loader::FilteredTrips;

/// Most frequent start month, weekday and hour.
///
/// # Errors
///
/// [`StatsError::NoModeAvailable`] when there are no trips.
#[tracing::instrument(name = "time_stats", skip_all, fields(trips = trips.len()))]
pub fn time_stats(trips: &FilteredTrips) -> Result<TimeStats, StatsError> {
    let popular_month = mode(trips.iter().map(|t| t.month)).ok_or(StatsError::NoModeAvailable {
        statistic: "popular month",
    })?;

    // Weekday has no ordering of its own; count by Monday-based index.
    let popular_day = mode(trips.iter().map(|t| t.day_of_week.num_days_from_monday()))
        .map(|idx| DAYS[idx as usize])
        .ok_or(StatsError::NoModeAvailable {
            statistic: "popular day",
        })?;

    let popular_hour = mode(trips.iter().map(|t| t.hour)).ok_or(StatsError::NoModeAvailable {
        statistic: "popular hour",
    })?;

    Ok(TimeStats {
        popular_month,
        popular_day,
        popular_hour,
    })
}
