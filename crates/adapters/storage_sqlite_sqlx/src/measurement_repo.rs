//! `SQLite` implementation of [`MeasurementRepository`].

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use clima_app::ports::MeasurementRepository;
use clima_domain::date;
use clima_domain::error::ClimaError;
use clima_domain::measurement::{PrecipitationReading, TemperatureSummary};
use clima_domain::station::StationCode;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without
/// polluting domain structs with database concerns.
struct PrecipitationRow(PrecipitationReading);

impl<'r> FromRow<'r, SqliteRow> for PrecipitationRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(PrecipitationReading {
            date: row.try_get("date")?,
            prcp: row.try_get("prcp")?,
        }))
    }
}

struct SummaryRow(TemperatureSummary);

impl<'r> FromRow<'r, SqliteRow> for SummaryRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(TemperatureSummary {
            min: row.try_get("tmin")?,
            avg: row.try_get("tavg")?,
            max: row.try_get("tmax")?,
        }))
    }
}

const SELECT_PRECIPITATION: &str = "SELECT date, prcp FROM measurements";

const SELECT_DISTINCT_STATIONS: &str = r"
    SELECT DISTINCT station FROM measurements
    ORDER BY station ASC
";

const SELECT_LATEST_DATE: &str = "SELECT MAX(date) FROM measurements";

// Tie-break on equal counts is explicit: lexically smallest code wins.
const SELECT_MOST_ACTIVE_STATION: &str = r"
    SELECT station FROM measurements
    GROUP BY station
    ORDER BY COUNT(*) DESC, station ASC
    LIMIT 1
";

const SELECT_TEMPERATURES_SINCE: &str = r"
    SELECT tobs FROM measurements
    WHERE station = ? AND date >= ?
    ORDER BY date ASC
";

const SELECT_SUMMARY_FROM_START: &str = r"
    SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax
    FROM measurements
    WHERE date >= ?
";

const SELECT_SUMMARY_IN_RANGE: &str = r"
    SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax
    FROM measurements
    WHERE date >= ? AND date <= ?
";

/// `SQLite`-backed measurement repository.
pub struct SqliteMeasurementRepository {
    pool: SqlitePool,
}

impl SqliteMeasurementRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MeasurementRepository for SqliteMeasurementRepository {
    async fn all_precipitation(&self) -> Result<Vec<PrecipitationReading>, ClimaError> {
        let rows: Vec<PrecipitationRow> = sqlx::query_as(SELECT_PRECIPITATION)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    async fn distinct_station_codes(&self) -> Result<Vec<StationCode>, ClimaError> {
        let codes: Vec<String> = sqlx::query_scalar(SELECT_DISTINCT_STATIONS)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(codes.into_iter().map(StationCode::from).collect())
    }

    async fn latest_observation_date(&self) -> Result<Option<NaiveDate>, ClimaError> {
        // MAX over an empty table yields a single NULL row.
        let latest: Option<String> = sqlx::query_scalar(SELECT_LATEST_DATE)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(latest
            .as_deref()
            .map(date::parse)
            .transpose()
            .map_err(StorageError::from)?)
    }

    async fn most_active_station(&self) -> Result<Option<StationCode>, ClimaError> {
        let code: Option<String> = sqlx::query_scalar(SELECT_MOST_ACTIVE_STATION)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(code.map(StationCode::from))
    }

    async fn temperatures_since(
        &self,
        station: &StationCode,
        cutoff: NaiveDate,
    ) -> Result<Vec<f64>, ClimaError> {
        let temps: Vec<f64> = sqlx::query_scalar(SELECT_TEMPERATURES_SINCE)
            .bind(station.as_str())
            .bind(date::format(cutoff))
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(temps)
    }

    async fn temperature_summary(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureSummary, ClimaError> {
        let row: SummaryRow = if let Some(end) = end {
            sqlx::query_as(SELECT_SUMMARY_IN_RANGE)
                .bind(start)
                .bind(end)
                .fetch_one(&self.pool)
                .await
                .map_err(StorageError::from)?
        } else {
            sqlx::query_as(SELECT_SUMMARY_FROM_START)
                .bind(start)
                .fetch_one(&self.pool)
                .await
                .map_err(StorageError::from)?
        };

        Ok(row.0)
    }
}
