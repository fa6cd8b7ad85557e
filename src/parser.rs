//! Field parsers for raw trip rows.

use anyhow::{Result, bail};
use chrono::NaiveDateTime;

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parses a trip start time such as `2017-01-01 00:07:57`.
///
/// # Errors
///
/// Returns an error if the value matches none of the accepted layouts.
pub fn parse_start_time(raw: &str) -> Result<NaiveDateTime> {
    let value = raw.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(ts);
        }
    }
    bail!("'{value}' is not a timestamp")
}

/// Parses a birth year cell. Blank cells are missing values; years written
/// as floats (`1992.0`) are truncated.
pub fn parse_birth_year(raw: &str) -> Result<Option<i32>> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(year) if year.is_finite() => Ok(Some(year.trunc() as i32)),
        _ => bail!("'{value}' is not a birth year"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_start_time() {
        let ts = parse_start_time("2017-06-23 15:09:32").unwrap();
        assert_eq!(ts.month(), 6);
        assert_eq!(ts.day(), 23);
        assert_eq!(ts.hour(), 15);
    }

    #[test]
    fn test_parse_start_time_alternative_layouts() {
        assert!(parse_start_time("2017-06-23T15:09:32").is_ok());
        assert!(parse_start_time("2017-06-23 15:09:32.250").is_ok());
    }

    #[test]
    fn test_parse_start_time_rejects_garbage() {
        assert!(parse_start_time("").is_err());
        assert!(parse_start_time("yesterday").is_err());
        assert!(parse_start_time("2017-13-01 00:00:00").is_err());
    }

    #[test]
    fn test_parse_birth_year() {
        assert_eq!(parse_birth_year("1992.0").unwrap(), Some(1992));
        assert_eq!(parse_birth_year("1985").unwrap(), Some(1985));
        assert_eq!(parse_birth_year("  ").unwrap(), None);
        assert!(parse_birth_year("abc").is_err());
    }
}
