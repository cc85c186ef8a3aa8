//! JSON handlers for temperature observations and aggregates.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use clima_app::ports::MeasurementRepository;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the recent-temperatures endpoint.
pub enum ListResponse {
    /// 200 OK with a JSON array of temperature observations.
    Ok(Json<Vec<f64>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the aggregate endpoints.
pub enum SummaryResponse {
    /// 200 OK with the fixed `[min, avg, max]` triple; all-null when the
    /// range matched no rows.
    Ok(Json<[Option<f64>; 3]>),
}

impl IntoResponse for SummaryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1.0/temperature` (alias `/api/v1.0/tobs`)
pub async fn recent<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: MeasurementRepository + Send + Sync + 'static,
{
    let temps = state.climate_service.recent_temperatures().await?;
    Ok(ListResponse::Ok(Json(temps)))
}

/// `GET /api/v1.0/temperature/start-date/{start}`
///
/// The bound is forwarded verbatim; a malformed date matches nothing and
/// yields `[null, null, null]` rather than an error.
pub async fn summary_from_start<R>(
    State(state): State<AppState<R>>,
    Path(start): Path<String>,
) -> Result<SummaryResponse, ApiError>
where
    R: MeasurementRepository + Send + Sync + 'static,
{
    let summary = state.climate_service.temperature_summary(&start, None).await?;
    Ok(SummaryResponse::Ok(Json(summary.as_triple())))
}

/// `GET /api/v1.0/temperature/start-date/{start}/end-date/{end}`
pub async fn summary_in_range<R>(
    State(state): State<AppState<R>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<SummaryResponse, ApiError>
where
    R: MeasurementRepository + Send + Sync + 'static,
{
    let summary = state
        .climate_service
        .temperature_summary(&start, Some(&end))
        .await?;
    Ok(SummaryResponse::Ok(Json(summary.as_triple())))
}
