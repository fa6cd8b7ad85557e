//! Output formatting and persistence for trip statistics.
//!
//! Supports a human-readable report, JSON serialization, and CSV append.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::{Demographic, StatOutcome, StatsReport, ValueCounts};
use crate::browse::Page;
use crate::filters::{City, DayFilter, MonthFilter, day_name};

const RULE: &str = "----------------------------------------";

/// Logs the report using Rust's debug pretty-print format.
pub fn print_pretty(report: &StatsReport) {
    debug!("{:#?}", report);
}

/// Writes the report as pretty-printed JSON.
pub fn print_json<W: Write>(out: &mut W, report: &StatsReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the four statistic sections as text.
pub fn render_report<W: Write>(out: &mut W, report: &StatsReport) -> Result<()> {
    let filter = &report.filter;
    writeln!(
        out,
        "{} trips in {} (month: {}, day: {})",
        report.trip_count, filter.city, filter.month, filter.day
    )?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nThe Most Frequent Times of Travel\n")?;
    match &report.time {
        StatOutcome::Ok(time) => {
            writeln!(out, "Most Popular Start Month: {}", time.popular_month)?;
            writeln!(out, "Most Popular Start Day of Week: {}", day_name(time.popular_day))?;
            writeln!(out, "Most Popular Start Hour: {}", time.popular_hour)?;
        }
        StatOutcome::Undefined { reason } => writeln!(out, "Unavailable: {reason}")?,
    }
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nThe Most Popular Stations and Trip\n")?;
    match &report.stations {
        StatOutcome::Ok(stations) => {
            writeln!(out, "Most Popular Start Station: {}", stations.popular_start)?;
            writeln!(out, "Most Popular End Station: {}", stations.popular_end)?;
            writeln!(out, "Most Popular Trip: {}", stations.popular_trip)?;
        }
        StatOutcome::Undefined { reason } => writeln!(out, "Unavailable: {reason}")?,
    }
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nTrip Duration\n")?;
    match &report.durations {
        StatOutcome::Ok(durations) => {
            writeln!(out, "Total Travel Time: {}", durations.total_duration)?;
            writeln!(out, "Mean Travel Time: {}", durations.mean_duration)?;
        }
        StatOutcome::Undefined { reason } => writeln!(out, "Unavailable: {reason}")?,
    }
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nUser Stats\n")?;
    let users = &report.users;
    writeln!(out, "User Types:")?;
    write_counts(out, &users.user_types)?;

    match &users.gender {
        Demographic::Available(gender) => {
            writeln!(out, "\nGender Counts:")?;
            write_counts(out, gender)?;
        }
        Demographic::Unavailable => writeln!(out, "\nGender data is not available for this city.")?,
    }

    match &users.birth_years {
        Demographic::Available(StatOutcome::Ok(years)) => {
            writeln!(out, "\nEarliest Year of Birth: {}", years.earliest)?;
            writeln!(out, "Most Recent Year of Birth: {}", years.most_recent)?;
            writeln!(out, "Most Common Year of Birth: {}", years.most_common)?;
        }
        Demographic::Available(StatOutcome::Undefined { .. }) => {
            writeln!(out, "\nBirth Year: no data for the selected trips.")?
        }
        Demographic::Unavailable => writeln!(out, "Birth Year data is not available for this city.")?,
    }
    writeln!(out, "{RULE}")?;

    Ok(())
}

fn write_counts<W: Write>(out: &mut W, counts: &ValueCounts) -> Result<()> {
    if counts.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (value, count) in counts.iter() {
        let label = if value.is_empty() { "(blank)" } else { value };
        writeln!(out, "  {label:<12} {count}")?;
    }
    Ok(())
}

/// Writes one page of raw trips as aligned rows, numbered from the source offset.
pub fn render_page<W: Write>(out: &mut W, page: &Page<'_>) -> Result<()> {
    for (i, trip) in page.rows.iter().enumerate() {
        write!(
            out,
            "{:>6}  {}  {:>9.1}s  {} -> {}  [{}",
            page.offset + i,
            trip.start_time.format("%Y-%m-%d %H:%M:%S"),
            trip.trip_duration,
            trip.start_station,
            trip.end_station,
            trip.user_type,
        )?;
        if let Some(gender) = &trip.gender {
            write!(out, ", {gender}")?;
        }
        if let Some(year) = trip.birth_year {
            write!(out, ", {year}")?;
        }
        writeln!(out, "]")?;
    }
    Ok(())
}

/// One flattened CSV row per query. Undefined statistics are left blank.
#[derive(Debug, Serialize)]
struct SummaryRecord<'a> {
    city: City,
    month: MonthFilter,
    day: DayFilter,
    trip_count: usize,
    popular_month: Option<u32>,
    popular_day: Option<&'static str>,
    popular_hour: Option<u32>,
    popular_start: Option<&'a str>,
    popular_end: Option<&'a str>,
    popular_trip: Option<&'a str>,
    total_duration: Option<f64>,
    mean_duration: Option<f64>,
    earliest_birth_year: Option<i32>,
    most_recent_birth_year: Option<i32>,
    most_common_birth_year: Option<i32>,
}

impl<'a> SummaryRecord<'a> {
    fn from_report(report: &'a StatsReport) -> Self {
        let time = report.time.value();
        let stations = report.stations.value();
        let durations = report.durations.value();
        let years = report
            .users
            .birth_years
            .available()
            .and_then(|years| years.value());

        SummaryRecord {
            city: report.filter.city,
            month: report.filter.month,
            day: report.filter.day,
            trip_count: report.trip_count,
            popular_month: time.map(|t| t.popular_month),
            popular_day: time.map(|t| day_name(t.popular_day)),
            popular_hour: time.map(|t| t.popular_hour),
            popular_start: stations.map(|s| s.popular_start.as_str()),
            popular_end: stations.map(|s| s.popular_end.as_str()),
            popular_trip: stations.map(|s| s.popular_trip.as_str()),
            total_duration: durations.map(|d| d.total_duration),
            mean_duration: durations.map(|d| d.mean_duration),
            earliest_birth_year: years.map(|y| y.earliest),
            most_recent_birth_year: years.map(|y| y.most_recent),
            most_common_birth_year: years.map(|y| y.most_common),
        }
    }
}

/// Appends a summary of `report` as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_summary(path: impl AsRef<Path>, report: &StatsReport) -> Result<()> {
    let path = path.as_ref();
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending CSV summary");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(SummaryRecord::from_report(report))?;
    writer.flush()?;

    info!(path = %path.display(), "Summary appended");
    Ok(())
}
