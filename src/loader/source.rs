use crate::error::LoadError;
use crate::filters::City;

use super::types::RawDataset;

/// An external source of per-city trip rows.
pub trait TripSource {
    fn fetch(&self, city: City) -> Result<RawDataset, LoadError>;
}
