//! JSON handler for the station list.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use clima_app::ports::MeasurementRepository;
use clima_domain::station::StationCode;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the stations endpoint.
pub enum ListResponse {
    /// 200 OK with a JSON array of station code strings.
    Ok(Json<Vec<StationCode>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1.0/stations`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: MeasurementRepository + Send + Sync + 'static,
{
    let codes = state.climate_service.station_codes().await?;
    Ok(ListResponse::Ok(Json(codes)))
}
