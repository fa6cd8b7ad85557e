//! Interactive questions that turn typed answers into a [`FilterSpec`].
//!
//! Every prompt re-asks until the answer is valid. End of input yields `None`.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;

use crate::browse::Direction;
use crate::filters::{City, DayFilter, FilterSpec, MonthFilter};

const CITY_PROMPT: &str = "Would you like to see data for Chicago, New York City, or Washington? ";
const MONTH_PROMPT: &str =
    "Which month? January, February, March, April, May, June, or 'all' to apply no month filter: ";
const DAY_PROMPT: &str =
    "Which day? Please type a day (e.g., 'Monday', 'Tuesday', etc.) or 'all' to apply no day filter: ";
const DIRECTION_PROMPT: &str = "Would you like to view the first or bottom 5 rows of the dataset? Enter 'first', 'bottom', or 'no' to skip: ";

/// Reads one trimmed line, or `None` at end of input.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> Result<Option<String>> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask_until_valid<T, R, W>(input: &mut R, out: &mut W, question: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(answer) = read_answer(input, out, question)? else {
            return Ok(None);
        };
        match answer.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(e) => writeln!(out, "Invalid input: {e}.")?,
        }
    }
}

/// Asks for city, month and day in turn.
pub fn ask_filter<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<FilterSpec>> {
    writeln!(out, "Hello! Let's explore some US bikeshare data!")?;

    let Some(city) = ask_until_valid::<City, _, _>(input, out, CITY_PROMPT)? else {
        return Ok(None);
    };
    let Some(month) = ask_until_valid::<MonthFilter, _, _>(input, out, MONTH_PROMPT)? else {
        return Ok(None);
    };
    let Some(day) = ask_until_valid::<DayFilter, _, _>(input, out, DAY_PROMPT)? else {
        return Ok(None);
    };

    writeln!(out, "{}", "-".repeat(40))?;
    Ok(Some(FilterSpec { city, month, day }))
}

/// Asks where to start browsing raw rows; `Ok(None)` means no browsing.
pub fn ask_direction<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<Direction>> {
    loop {
        let Some(answer) = read_answer(input, out, DIRECTION_PROMPT)? else {
            return Ok(None);
        };
        if answer.eq_ignore_ascii_case("no") {
            return Ok(None);
        }
        match answer.parse::<Direction>() {
            Ok(direction) => return Ok(Some(direction)),
            Err(_) => writeln!(out, "Invalid input. Please enter 'first', 'bottom', or 'no'.")?,
        }
    }
}

/// Yes/no question. Anything other than `yes` counts as no.
pub fn ask_yes<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<bool> {
    Ok(read_answer(input, out, question)?.is_some_and(|a| a.eq_ignore_ascii_case("yes")))
}
