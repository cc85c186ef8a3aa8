//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use clima_app::ports::MeasurementRepository;

use crate::state::AppState;

/// Plain-text listing served at the root path.
const ROUTE_LISTING: &str = "Available Routes:
/api/v1.0/precipitation
/api/v1.0/stations
/api/v1.0/temperature
/api/v1.0/temperature/start-date/<start>
/api/v1.0/temperature/start-date/<start>/end-date/<end>
";

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api/v1.0` and serves the route listing at
/// `/`. Includes a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: MeasurementRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_routes))
        .route("/health", get(health_check))
        .nest("/api/v1.0", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn list_routes() -> &'static str {
    ROUTE_LISTING
}

async fn health_check() -> &'static str {
    "OK"
}
