//! Trip data read from `<city>.csv` files in a local directory.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::source::TripSource;
use super::types::{DatasetSchema, RawDataset, RawTrip, REQUIRED_COLUMNS};
use crate::error::LoadError;
use crate::filters::City;

/// Reads one CSV file per city from `data_dir`.
pub struct CsvSource {
    data_dir: PathBuf,
}

impl CsvSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }
}

impl TripSource for CsvSource {
    #[tracing::instrument(skip_all, fields(city = %city))]
    fn fetch(&self, city: City) -> Result<RawDataset, LoadError> {
        let path = self.path_for(city);
        let file = File::open(&path).map_err(|source| LoadError::DataSourceUnavailable {
            city,
            path: path.clone(),
            source,
        })?;
        read_csv(city, &path, file)
    }
}

/// Decodes a whole city dataset from CSV text. `path` is only used in errors.
pub fn read_csv<R: Read>(city: City, path: &Path, reader: R) -> Result<RawDataset, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| csv_error(city, path, 0, e))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn { city, column });
        }
    }
    let schema = DatasetSchema::from_headers(headers.iter());

    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize::<RawTrip>().enumerate() {
        let row = result.map_err(|e| csv_error(city, path, idx + 1, e))?;
        rows.push(row);
    }

    debug!(
        rows = rows.len(),
        has_gender = schema.has_gender,
        has_birth_year = schema.has_birth_year,
        "City dataset read"
    );

    Ok(RawDataset { schema, rows })
}

fn csv_error(city: City, path: &Path, row: usize, err: csv::Error) -> LoadError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::DataSourceUnavailable {
            city,
            path: path.to_path_buf(),
            source,
        },
        _ => LoadError::MalformedRecord { row, reason },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
2,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,,
";

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
";

    #[test]
    fn test_read_csv_with_demographics() {
        let data = read_csv(City::Chicago, Path::new("chicago.csv"), CHICAGO.as_bytes()).unwrap();

        assert_eq!(data.schema, DatasetSchema::with_demographics());
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0].gender.as_deref(), Some("Male"));
        assert_eq!(data.rows[0].birth_year.as_deref(), Some("1992.0"));
        assert_eq!(data.rows[1].gender, None);
        assert_eq!(data.rows[1].birth_year, None);
    }

    #[test]
    fn test_read_csv_without_demographics() {
        let data = read_csv(
            City::Washington,
            Path::new("washington.csv"),
            WASHINGTON.as_bytes(),
        )
        .unwrap();

        assert_eq!(data.schema, DatasetSchema::default());
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.rows[0].trip_duration, 489.066);
    }

    #[test]
    fn test_read_csv_missing_required_column() {
        let text = "Start Time,Start Station,End Station,User Type\n";
        let err = read_csv(City::Chicago, Path::new("x.csv"), text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn {
                column: "Trip Duration",
                ..
            }
        ));
    }

    #[test]
    fn test_read_csv_bad_duration_is_malformed() {
        let text = "\
Start Time,Start Station,End Station,Trip Duration,User Type
2017-01-01 00:00:00,A,B,600,Subscriber
2017-01-01 00:00:00,A,B,long,Subscriber
";
        let err = read_csv(City::Chicago, Path::new("x.csv"), text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { row: 2, .. }));
    }

    #[test]
    fn test_read_csv_padded_headers() {
        let text = "\
 Start Time , Start Station,End Station ,Trip Duration, User Type,Gender
2017-01-01 00:00:00,A,B,600,Subscriber,Female
";
        let data = read_csv(City::Chicago, Path::new("x.csv"), text.as_bytes()).unwrap();
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.rows[0].start_time, "2017-01-01 00:00:00");
        assert_eq!(data.rows[0].user_type, "Subscriber");
        assert!(data.schema.has_gender);
    }

    #[test]
    fn test_read_csv_blank_user_type_is_kept() {
        let text = "\
Start Time,Start Station,End Station,Trip Duration,User Type
2017-01-01 00:00:00,A,B,600,
";
        let data = read_csv(City::Chicago, Path::new("x.csv"), text.as_bytes()).unwrap();
        assert_eq!(data.rows[0].user_type, "");
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let source = CsvSource::new(std::env::temp_dir().join("bikeshare_stats_no_such_dir"));
        let err = source.fetch(City::Washington).unwrap_err();
        assert!(matches!(err, LoadError::DataSourceUnavailable { .. }));
    }
}
