use crate::analyzers::types::{BirthYearStats, Demographic, StatOutcome, UserStats, ValueCounts};
use crate::analyzers::utility::{mode, value_counts};
use crate::error::StatsError;
use crate::loader::FilteredTrips;

/// User-type counts, plus gender counts and birth-year extremes for cities
/// whose dataset carries those columns. Blank demographic cells are skipped.
///
/// When the dataset has birth years but none of the trips has one, only
/// `birth_years` is undefined ([`StatsError::NoModeAvailable`]).
#[tracing::instrument(name = "user_stats", skip_all, fields(trips = trips.len()))]
pub fn user_stats(trips: &FilteredTrips) -> UserStats {
    let schema = trips.schema();

    let user_types = counts(trips.iter().map(|t| t.user_type.as_str()));

    let gender = if schema.has_gender {
        Demographic::Available(counts(trips.iter().filter_map(|t| t.gender.as_deref())))
    } else {
        Demographic::Unavailable
    };

    let birth_years = if schema.has_birth_year {
        Demographic::Available(StatOutcome::from(birth_year_stats(trips)))
    } else {
        Demographic::Unavailable
    };

    UserStats {
        user_types,
        gender,
        birth_years,
    }
}

fn birth_year_stats(trips: &FilteredTrips) -> Result<BirthYearStats, StatsError> {
    let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();

    let undefined = StatsError::NoModeAvailable {
        statistic: "birth year",
    };
    let earliest = years.iter().copied().min().ok_or(undefined.clone())?;
    let most_recent = years.iter().copied().max().ok_or(undefined.clone())?;
    let most_common = mode(years).ok_or(undefined)?;

    Ok(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}

fn counts<'a>(values: impl Iterator<Item = &'a str>) -> ValueCounts {
    ValueCounts::new(
        value_counts(values)
            .into_iter()
            .map(|(k, c)| (k.to_string(), c))
            .collect(),
    )
}
