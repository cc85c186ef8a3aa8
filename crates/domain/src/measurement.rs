//! Measurements — dated observation rows — and the aggregate shapes the
//! API serves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::station::StationCode;

/// One dated observation attributed to a station.
///
/// Precipitation is nullable in the dataset; the temperature observation
/// (`tobs`) is always present. Station references are inherited from the
/// external loader and never validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub station: StationCode,
    pub date: NaiveDate,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

/// A `(date, precipitation)` projection of one measurement row.
///
/// The date is carried as the raw stored text because it becomes a JSON
/// object key verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// Min/avg/max temperature over a filtered set of measurement rows.
///
/// All fields are `None` when the filter matched no rows; the API
/// serializes that as `[null, null, null]` rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureSummary {
    /// Flatten into the fixed `[min, avg, max]` wire order.
    #[must_use]
    pub fn as_triple(&self) -> [Option<f64>; 3] {
        [self.min, self.avg, self.max]
    }
}
