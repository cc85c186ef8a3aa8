//! JSON handler for the precipitation mapping.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use clima_app::ports::MeasurementRepository;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the precipitation endpoint.
pub enum ListResponse {
    /// 200 OK with a JSON object mapping date to precipitation value.
    Ok(Json<BTreeMap<String, Option<f64>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1.0/precipitation`
///
/// When several stations report on the same date, plain insertion over the
/// result order keeps the last row per date (last-write-wins), preserving
/// the behavior of the original service.
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: MeasurementRepository + Send + Sync + 'static,
{
    let readings = state.climate_service.precipitation().await?;

    let mut by_date = BTreeMap::new();
    for reading in readings {
        by_date.insert(reading.date, reading.prcp);
    }

    Ok(ListResponse::Ok(Json(by_date)))
}
