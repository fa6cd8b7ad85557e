//! The interactive question-and-answer loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{error, info};

use crate::analyzers::StatsReport;
use crate::browse::{DEFAULT_PAGE_SIZE, RowPager};
use crate::loader::{FilteredTrips, TripSource, load};
use crate::output::{render_page, render_report};
use crate::prompt::{ask_direction, ask_filter, ask_yes};

const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";
const NEXT_PAGE_PROMPT: &str = "Do you wish to see the next 5 rows? Enter 'yes' or 'no': ";

/// Asks for a filter, optionally shows raw rows, prints the statistics,
/// and repeats while the user wants to restart.
///
/// A city whose data cannot be loaded is reported and the user may restart;
/// it does not end the session.
pub fn run_interactive<S, R, W>(source: &S, input: &mut R, out: &mut W) -> Result<()>
where
    S: TripSource + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(filter) = ask_filter(input, out)? else {
            break;
        };

        match load(source, &filter) {
            Ok(trips) => {
                browse_rows(&trips, input, out)?;
                render_report(out, &StatsReport::compute(&trips))?;
            }
            Err(e) => {
                error!(error = %e, "Failed to load trips");
                writeln!(out, "Could not load data for {}: {e}", filter.city)?;
            }
        }

        if !ask_yes(input, out, RESTART_PROMPT)? {
            break;
        }
    }

    info!("Interactive session finished");
    Ok(())
}

/// Shows raw rows five at a time from the end the user picks.
pub fn browse_rows<R: BufRead, W: Write>(
    trips: &FilteredTrips,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let Some(direction) = ask_direction(input, out)? else {
        return Ok(());
    };
    if trips.is_empty() {
        writeln!(out, "No trips match the selected filters.")?;
        return Ok(());
    }

    let mut pager = RowPager::new(trips.trips(), direction, DEFAULT_PAGE_SIZE);
    while let Some(page) = pager.next() {
        render_page(out, &page)?;
        if pager.is_exhausted() {
            writeln!(out, "You've reached the end of the dataset.")?;
            break;
        }
        if !ask_yes(input, out, NEXT_PAGE_PROMPT)? {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::City;
    use crate::loader::{DatasetSchema, InMemorySource, RawDataset, RawTrip};
    use std::io::Cursor;

    fn source(rows: usize) -> InMemorySource {
        let rows = (0..rows)
            .map(|i| {
                RawTrip::new(
                    "2017-01-01 08:00:00",
                    &format!("Station {i}"),
                    "Lake St",
                    60.0,
                    "Subscriber",
                )
            })
            .collect();
        InMemorySource::new().with_dataset(
            City::Chicago,
            RawDataset {
                schema: DatasetSchema::default(),
                rows,
            },
        )
    }

    fn session(source: &InMemorySource, answers: &str) -> String {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut out = Vec::new();
        run_interactive(source, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_single_query_without_browsing() {
        let out = session(&source(3), "chicago\nall\nall\nno\nno\n");

        assert!(out.contains("3 trips in Chicago"));
        assert!(out.contains("Most Popular End Station: Lake St"));
        assert_eq!(out.matches("Hello!").count(), 1);
    }

    #[test]
    fn test_browsing_pages_until_end() {
        let out = session(&source(7), "chicago\nall\nall\nfirst\nyes\nno\n");

        assert!(out.contains("Station 0"));
        assert!(out.contains("Station 6"));
        assert!(out.contains("You've reached the end of the dataset."));
    }

    #[test]
    fn test_browsing_stops_when_declined() {
        let out = session(&source(7), "chicago\nall\nall\nbottom\nno\nno\n");

        assert!(out.contains("Station 6"));
        assert!(out.contains("Station 2"));
        assert!(!out.contains("Station 1 "));
        assert!(!out.contains("reached the end"));
    }

    #[test]
    fn test_restart_runs_another_query() {
        let out = session(&source(2), "chicago\nall\nall\nno\nyes\nchicago\njanuary\nsunday\nno\nno\n");

        assert_eq!(out.matches("Hello!").count(), 2);
        assert!(out.contains("(month: january, day: sunday)"));
    }

    #[test]
    fn test_unavailable_city_does_not_end_session() {
        let out = session(&source(1), "washington\nall\nall\nyes\nchicago\nall\nall\nno\nno\n");

        assert!(out.contains("Could not load data for Washington"));
        assert!(out.contains("1 trips in Chicago"));
    }
}
