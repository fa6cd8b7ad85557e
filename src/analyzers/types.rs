//! Result structures produced by the statistics engine.

use chrono::Weekday;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::StatsError;
use crate::filters::{FilterSpec, day_name};

/// Most frequent month, weekday and hour of trip starts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    pub popular_month: u32,
    #[serde(serialize_with = "serialize_day")]
    pub popular_day: Weekday,
    pub popular_hour: u32,
}

/// Most used stations and the most frequent start/end combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub popular_start: String,
    pub popular_end: String,
    pub popular_trip: String,
}

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripDurationStats {
    pub total_duration: f64,
    pub mean_duration: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Counts per category, most frequent first. Serializes as an ordered map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueCounts(Vec<(String, usize)>);

impl ValueCounts {
    pub fn new(counts: Vec<(String, usize)>) -> Self {
        Self(counts)
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, c)| *c)
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, c)| c).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, c)| (k.as_str(), *c))
    }
}

impl Serialize for ValueCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, count) in &self.0 {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

/// A statistic over a column only some cities' datasets have.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Demographic<T> {
    Available(T),
    /// The city's dataset has no such column.
    Unavailable,
}

impl<T> Demographic<T> {
    pub fn available(&self) -> Option<&T> {
        match self {
            Demographic::Available(value) => Some(value),
            Demographic::Unavailable => None,
        }
    }
}

/// User-type counts are always present. Birth years can be undefined on
/// their own when the selected trips carry no birth year at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_types: ValueCounts,
    pub gender: Demographic<ValueCounts>,
    pub birth_years: Demographic<StatOutcome<BirthYearStats>>,
}

/// A computed statistic group, or the reason it is undefined for this record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum StatOutcome<T> {
    Ok(T),
    Undefined { reason: String },
}

impl<T> StatOutcome<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            StatOutcome::Ok(value) => Some(value),
            StatOutcome::Undefined { .. } => None,
        }
    }
}

impl<T> From<Result<T, StatsError>> for StatOutcome<T> {
    fn from(result: Result<T, StatsError>) -> Self {
        match result {
            Ok(value) => StatOutcome::Ok(value),
            Err(e) => StatOutcome::Undefined {
                reason: e.to_string(),
            },
        }
    }
}

/// All four statistic groups for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub filter: FilterSpec,
    pub trip_count: usize,
    pub time: StatOutcome<TimeStats>,
    pub stations: StatOutcome<StationStats>,
    pub durations: StatOutcome<TripDurationStats>,
    pub users: UserStats,
}

fn serialize_day<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(day_name(*day))
}
