use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use super::source::TripSource;
use super::types::RawDataset;
use crate::error::LoadError;
use crate::filters::City;

/// A [`TripSource`] backed by datasets held in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    datasets: HashMap<City, RawDataset>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(mut self, city: City, dataset: RawDataset) -> Self {
        self.datasets.insert(city, dataset);
        self
    }
}

impl TripSource for InMemorySource {
    fn fetch(&self, city: City) -> Result<RawDataset, LoadError> {
        self.datasets
            .get(&city)
            .cloned()
            .ok_or_else(|| LoadError::DataSourceUnavailable {
                city,
                path: PathBuf::from(city.file_name()),
                source: io::Error::new(io::ErrorKind::NotFound, "no dataset registered"),
            })
    }
}
