//! Climate service — use-cases over the measurement repository.

use clima_domain::date;
use clima_domain::error::ClimaError;
use clima_domain::measurement::{PrecipitationReading, TemperatureSummary};
use clima_domain::station::StationCode;

use crate::ports::MeasurementRepository;

/// Application service answering the dataset queries the API serves.
///
/// The repository is injected by the composition root; each call maps to
/// one or two round-trips against the store.
pub struct ClimateService<R> {
    repo: R,
}

impl<R: MeasurementRepository> ClimateService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Every `(date, precipitation)` pair in the dataset.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn precipitation(&self) -> Result<Vec<PrecipitationReading>, ClimaError> {
        self.repo.all_precipitation().await
    }

    /// Unique station codes, lexically ordered.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn station_codes(&self) -> Result<Vec<StationCode>, ClimaError> {
        self.repo.distinct_station_codes().await
    }

    /// Temperature observations from the most active station over the last
    /// 366 days of data.
    ///
    /// Resolution order: latest observation date → lookback cutoff → the
    /// station with the most rows → its observations since the cutoff.
    /// An empty dataset short-circuits to an empty list at each step.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn recent_temperatures(&self) -> Result<Vec<f64>, ClimaError> {
        let Some(latest) = self.repo.latest_observation_date().await? else {
            return Ok(Vec::new());
        };
        let cutoff = date::lookback_cutoff(latest);

        let Some(station) = self.repo.most_active_station().await? else {
            return Ok(Vec::new());
        };
        tracing::debug!(station = %station, cutoff = %cutoff, "selected most active station");

        self.repo.temperatures_since(&station, cutoff).await
    }

    /// Min/avg/max temperature over `date >= start`, bounded by
    /// `date <= end` when given. Bounds are forwarded as raw strings.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn temperature_summary(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureSummary, ClimaError> {
        self.repo.temperature_summary(start, end).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use chrono::NaiveDate;
    use clima_domain::measurement::Measurement;

    use super::*;

    /// Vec-backed repository mirroring the store's query semantics,
    /// including lexical comparison of raw range bounds.
    struct InMemoryMeasurementRepo {
        rows: Vec<Measurement>,
    }

    impl InMemoryMeasurementRepo {
        fn new(rows: Vec<Measurement>) -> Self {
            Self { rows }
        }
    }

    impl MeasurementRepository for InMemoryMeasurementRepo {
        async fn all_precipitation(&self) -> Result<Vec<PrecipitationReading>, ClimaError> {
            Ok(self
                .rows
                .iter()
                .map(|m| PrecipitationReading {
                    date: date::format(m.date),
                    prcp: m.prcp,
                })
                .collect())
        }

        async fn distinct_station_codes(&self) -> Result<Vec<StationCode>, ClimaError> {
            let codes: BTreeSet<StationCode> =
                self.rows.iter().map(|m| m.station.clone()).collect();
            Ok(codes.into_iter().collect())
        }

        async fn latest_observation_date(&self) -> Result<Option<NaiveDate>, ClimaError> {
            Ok(self.rows.iter().map(|m| m.date).max())
        }

        async fn most_active_station(&self) -> Result<Option<StationCode>, ClimaError> {
            let mut counts: BTreeMap<StationCode, usize> = BTreeMap::new();
            for row in &self.rows {
                *counts.entry(row.station.clone()).or_default() += 1;
            }
            // BTreeMap iterates lexically, so `>` keeps the smallest code
            // among equal counts.
            let mut best: Option<(StationCode, usize)> = None;
            for (code, count) in counts {
                if best.as_ref().is_none_or(|(_, top)| count > *top) {
                    best = Some((code, count));
                }
            }
            Ok(best.map(|(code, _)| code))
        }

        async fn temperatures_since(
            &self,
            station: &StationCode,
            cutoff: NaiveDate,
        ) -> Result<Vec<f64>, ClimaError> {
            let mut rows: Vec<&Measurement> = self
                .rows
                .iter()
                .filter(|m| &m.station == station && m.date >= cutoff)
                .collect();
            rows.sort_by_key(|m| m.date);
            Ok(rows.into_iter().map(|m| m.tobs).collect())
        }

        async fn temperature_summary(
            &self,
            start: &str,
            end: Option<&str>,
        ) -> Result<TemperatureSummary, ClimaError> {
            let temps: Vec<f64> = self
                .rows
                .iter()
                .filter(|m| {
                    let text = date::format(m.date);
                    text.as_str() >= start && end.is_none_or(|end| text.as_str() <= end)
                })
                .map(|m| m.tobs)
                .collect();
            if temps.is_empty() {
                return Ok(TemperatureSummary::default());
            }
            let sum: f64 = temps.iter().sum();
            #[allow(clippy::cast_precision_loss)]
            let avg = sum / temps.len() as f64;
            Ok(TemperatureSummary {
                min: Some(temps.iter().copied().fold(f64::INFINITY, f64::min)),
                avg: Some(avg),
                max: Some(temps.iter().copied().fold(f64::NEG_INFINITY, f64::max)),
            })
        }
    }

    fn row(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Measurement {
        Measurement {
            station: StationCode::from(station),
            date: date::parse(date).unwrap(),
            prcp,
            tobs,
        }
    }

    #[tokio::test]
    async fn should_return_empty_when_dataset_has_no_measurements() {
        let service = ClimateService::new(InMemoryMeasurementRepo::new(vec![]));
        assert!(service.recent_temperatures().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_temperatures_of_most_active_station_since_cutoff() {
        // "A" has three rows, "B" two; latest date 2017-08-23 puts the
        // cutoff at 2016-08-22, excluding A's 2016-01-01 row.
        let service = ClimateService::new(InMemoryMeasurementRepo::new(vec![
            row("A", "2016-01-01", None, 60.0),
            row("A", "2017-08-22", Some(0.0), 70.0),
            row("A", "2017-08-23", Some(0.08), 71.0),
            row("B", "2017-08-22", None, 80.0),
            row("B", "2017-08-23", None, 81.0),
        ]));

        let temps = service.recent_temperatures().await.unwrap();
        assert_eq!(temps, vec![70.0, 71.0]);
    }

    #[tokio::test]
    async fn should_break_activity_ties_by_lexical_station_code() {
        let service = ClimateService::new(InMemoryMeasurementRepo::new(vec![
            row("ZZZ", "2017-08-22", None, 80.0),
            row("AAA", "2017-08-23", None, 70.0),
        ]));

        // Both stations have one row; "AAA" wins the tie.
        let temps = service.recent_temperatures().await.unwrap();
        assert_eq!(temps, vec![70.0]);
    }

    #[tokio::test]
    async fn should_list_station_codes_without_duplicates() {
        let service = ClimateService::new(InMemoryMeasurementRepo::new(vec![
            row("B", "2017-08-22", None, 70.0),
            row("A", "2017-08-22", None, 71.0),
            row("B", "2017-08-23", None, 72.0),
        ]));

        let codes = service.station_codes().await.unwrap();
        assert_eq!(
            codes,
            vec![StationCode::from("A"), StationCode::from("B")]
        );
    }

    #[tokio::test]
    async fn should_match_start_only_summary_with_range_to_latest_date() {
        let rows = vec![
            row("A", "2017-08-01", None, 70.0),
            row("A", "2017-08-10", None, 75.0),
            row("A", "2017-08-23", None, 80.0),
        ];
        let service = ClimateService::new(InMemoryMeasurementRepo::new(rows));

        let start_only = service.temperature_summary("2017-08-01", None).await.unwrap();
        let bounded = service
            .temperature_summary("2017-08-01", Some("2017-08-23"))
            .await
            .unwrap();

        assert_eq!(start_only, bounded);
        assert_eq!(start_only.as_triple(), [Some(70.0), Some(75.0), Some(80.0)]);
    }

    #[tokio::test]
    async fn should_return_all_none_summary_when_range_is_empty() {
        let service = ClimateService::new(InMemoryMeasurementRepo::new(vec![row(
            "A",
            "2017-08-22",
            None,
            70.0,
        )]));

        let summary = service
            .temperature_summary("2018-01-01", None)
            .await
            .unwrap();
        assert_eq!(summary.as_triple(), [None, None, None]);
    }

    #[tokio::test]
    async fn should_match_nothing_when_start_bound_is_malformed() {
        // Lexical comparison: "not-a-date" sorts after every ISO date.
        let service = ClimateService::new(InMemoryMeasurementRepo::new(vec![row(
            "A",
            "2017-08-22",
            None,
            70.0,
        )]));

        let summary = service
            .temperature_summary("not-a-date", None)
            .await
            .unwrap();
        assert_eq!(summary.as_triple(), [None, None, None]);
    }

    #[tokio::test]
    async fn should_pass_through_precipitation_rows_in_store_order() {
        let service = ClimateService::new(InMemoryMeasurementRepo::new(vec![
            row("A", "2017-08-22", Some(0.0), 70.0),
            row("B", "2017-08-22", Some(0.15), 71.0),
        ]));

        let readings = service.precipitation().await.unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].prcp, Some(0.0));
        assert_eq!(readings[1].prcp, Some(0.15));
    }
}
