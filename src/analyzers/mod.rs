//! Descriptive statistics over a filtered set of trips.
//!
//! Four independent groups are computed from the same read-only record set:
//! travel times, stations, trip durations and users. Modes break ties in
//! favour of the smallest value.

pub mod aggregate;
pub mod duration;
pub mod station;
pub mod time;
pub mod types;
pub mod users;
pub mod utility;

pub use duration::trip_duration_stats;
pub use station::station_stats;
pub use time::time_stats;
pub use types::{
    BirthYearStats, Demographic, StatOutcome, StationStats, StatsReport, TimeStats,
    TripDurationStats, UserStats, ValueCounts,
};
pub use users::user_stats;
