//! Storage port — the read-only query surface over the climate dataset.

use std::future::Future;

use chrono::NaiveDate;

use clima_domain::error::ClimaError;
use clima_domain::measurement::{PrecipitationReading, TemperatureSummary};
use clima_domain::station::StationCode;

/// Read-only repository over the measurement table.
///
/// The backing dataset is pre-populated and externally owned, so the port
/// exposes queries only — there is no write path. Date-range bounds taken
/// from the URL are passed through as raw strings and compared lexically
/// by the store; a malformed bound matches nothing rather than erroring.
pub trait MeasurementRepository {
    /// Every `(date, precipitation)` pair, in store order, duplicates
    /// included.
    fn all_precipitation(
        &self,
    ) -> impl Future<Output = Result<Vec<PrecipitationReading>, ClimaError>> + Send;

    /// Unique station codes present in the measurement table, lexically
    /// ordered.
    fn distinct_station_codes(
        &self,
    ) -> impl Future<Output = Result<Vec<StationCode>, ClimaError>> + Send;

    /// The maximum observation date across all measurements, or `None`
    /// for an empty dataset.
    fn latest_observation_date(
        &self,
    ) -> impl Future<Output = Result<Option<NaiveDate>, ClimaError>> + Send;

    /// The station with the most measurement rows; ties break to the
    /// lexically smallest code. `None` for an empty dataset.
    fn most_active_station(
        &self,
    ) -> impl Future<Output = Result<Option<StationCode>, ClimaError>> + Send;

    /// All temperature observations for `station` with `date >= cutoff`,
    /// date-ascending.
    fn temperatures_since(
        &self,
        station: &StationCode,
        cutoff: NaiveDate,
    ) -> impl Future<Output = Result<Vec<f64>, ClimaError>> + Send;

    /// Min/avg/max temperature over `date >= start`, additionally bounded
    /// by `date <= end` when given. All-`None` when no rows match.
    fn temperature_summary(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> impl Future<Output = Result<TemperatureSummary, ClimaError>> + Send;
}
