//! Shared application state for axum handlers.

use std::sync::Arc;

use clima_app::ports::MeasurementRepository;
use clima_app::services::climate_service::ClimateService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying type itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Dataset query service.
    pub climate_service: Arc<ClimateService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            climate_service: Arc::clone(&self.climate_service),
        }
    }
}

impl<R> AppState<R>
where
    R: MeasurementRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(climate_service: ClimateService<R>) -> Self {
        Self {
            climate_service: Arc::new(climate_service),
        }
    }
}
