//! Trip rows as they come from a source, and as the engine sees them.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

use crate::filters::FilterSpec;
use crate::parser::{parse_birth_year, parse_start_time};

pub(crate) const START_TIME: &str = "Start Time";
pub(crate) const START_STATION: &str = "Start Station";
pub(crate) const END_STATION: &str = "End Station";
pub(crate) const TRIP_DURATION: &str = "Trip Duration";
pub(crate) const USER_TYPE: &str = "User Type";
pub(crate) const GENDER: &str = "Gender";
pub(crate) const BIRTH_YEAR: &str = "Birth Year";

pub(crate) const REQUIRED_COLUMNS: [&str; 5] =
    [START_TIME, START_STATION, END_STATION, TRIP_DURATION, USER_TYPE];

/// Which optional demographic columns a city's dataset carries.
///
/// Presence is a property of the whole dataset, decided once from its header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetSchema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl DatasetSchema {
    pub fn with_demographics() -> Self {
        Self {
            has_gender: true,
            has_birth_year: true,
        }
    }

    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut schema = Self::default();
        for header in headers {
            match header.trim() {
                GENDER => schema.has_gender = true,
                BIRTH_YEAR => schema.has_birth_year = true,
                _ => {}
            }
        }
        schema
    }
}

/// One undecoded row. Start time and birth year stay textual until loading.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "User Type")]
    pub user_type: String,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<String>,
}

impl RawTrip {
    pub fn new(
        start_time: &str,
        start_station: &str,
        end_station: &str,
        trip_duration: f64,
        user_type: &str,
    ) -> Self {
        Self {
            start_time: start_time.to_string(),
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            trip_duration,
            user_type: user_type.to_string(),
            gender: None,
            birth_year: None,
        }
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = Some(gender.to_string());
        self
    }

    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year.to_string());
        self
    }
}

/// Every row of one city, plus its schema.
#[derive(Debug, Clone, Default)]
pub struct RawDataset {
    pub schema: DatasetSchema,
    pub rows: Vec<RawTrip>,
}

/// A decoded trip with its time-derived fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub trip_duration: f64,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    pub month: u32,
    pub day_of_week: Weekday,
    pub hour: u32,
}

impl Trip {
    pub fn from_raw(raw: RawTrip) -> anyhow::Result<Self> {
        let start_time = parse_start_time(&raw.start_time)?;
        if raw.trip_duration.is_nan() || raw.trip_duration < 0.0 {
            anyhow::bail!("trip duration {} is negative", raw.trip_duration);
        }
        let birth_year = match raw.birth_year.as_deref() {
            Some(year) => parse_birth_year(year)?,
            None => None,
        };
        let gender = raw.gender.filter(|g| !g.trim().is_empty());

        Ok(Self {
            month: start_time.month(),
            day_of_week: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            start_station: raw.start_station,
            end_station: raw.end_station,
            trip_duration: raw.trip_duration,
            user_type: raw.user_type,
            gender,
            birth_year,
        })
    }

    /// Start and end station joined the way trips are reported.
    pub fn route(&self) -> String {
        format!("{} to {}", self.start_station, self.end_station)
    }
}

/// Trips of one city that survived a filter, in source order.
#[derive(Debug, Clone)]
pub struct FilteredTrips {
    filter: FilterSpec,
    schema: DatasetSchema,
    trips: Vec<Trip>,
}

impl FilteredTrips {
    pub(crate) fn new(filter: FilterSpec, schema: DatasetSchema, trips: Vec<Trip>) -> Self {
        Self {
            filter,
            schema,
            trips,
        }
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn schema(&self) -> DatasetSchema {
        self.schema
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_from_headers() {
        let schema = DatasetSchema::from_headers(vec![
            "",
            "Start Time",
            "End Time",
            "Trip Duration",
            "Gender",
        ]);
        assert!(schema.has_gender);
        assert!(!schema.has_birth_year);
    }

    #[test]
    fn test_trip_from_raw_derives_time_fields() {
        let raw = RawTrip::new("2017-01-01 08:30:00", "A", "B", 600.0, "Subscriber");
        let trip = Trip::from_raw(raw).unwrap();

        assert_eq!(trip.month, 1);
        assert_eq!(trip.day_of_week, Weekday::Sun);
        assert_eq!(trip.hour, 8);
        assert_eq!(trip.route(), "A to B");
    }

    #[test]
    fn test_trip_from_raw_blank_demographics_are_missing() {
        let mut raw = RawTrip::new("2017-01-01 08:30:00", "A", "B", 600.0, "Customer");
        raw.gender = Some("  ".to_string());
        raw.birth_year = Some(String::new());

        let trip = Trip::from_raw(raw).unwrap();
        assert_eq!(trip.gender, None);
        assert_eq!(trip.birth_year, None);
    }

    #[test]
    fn test_trip_from_raw_rejects_negative_duration() {
        let raw = RawTrip::new("2017-01-01 08:30:00", "A", "B", -1.0, "Customer");
        assert!(Trip::from_raw(raw).is_err());
    }
}
