//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod precipitation;
#[allow(clippy::missing_errors_doc)]
pub mod stations;
#[allow(clippy::missing_errors_doc)]
pub mod temperature;

use axum::Router;
use axum::routing::get;

use clima_app::ports::MeasurementRepository;

use crate::state::AppState;

/// Build the `/api/v1.0` sub-router.
///
/// `/tobs` is kept as an alias of `/temperature` for callers of the
/// earlier variant of the API.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: MeasurementRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/precipitation", get(precipitation::list::<R>))
        .route("/stations", get(stations::list::<R>))
        .route("/temperature", get(temperature::recent::<R>))
        .route("/tobs", get(temperature::recent::<R>))
        .route(
            "/temperature/start-date/{start}",
            get(temperature::summary_from_start::<R>),
        )
        .route(
            "/temperature/start-date/{start}/end-date/{end}",
            get(temperature::summary_in_range::<R>),
        )
}
