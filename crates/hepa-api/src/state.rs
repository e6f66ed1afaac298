use std::sync::Arc;

use hepa_scorer::service::PredictionService;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
}
