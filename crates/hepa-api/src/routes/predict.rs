use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use hepa_core::models::outcome::Outcome;
use hepa_core::models::patient::RawPatientRecord;
use hepa_features::assemble::FeatureVector;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct PredictResponse {
    pub prediction: Outcome,
}

/// Predict the outcome for one patient record.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<RawPatientRecord>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(raw) = payload?;
    let result = state.service.predict(&raw)?;

    Ok(Json(PredictResponse {
        prediction: result.outcome,
    }))
}

/// Return the assembled feature vector for a record without scoring it.
pub async fn features(
    State(state): State<AppState>,
    payload: Result<Json<RawPatientRecord>, JsonRejection>,
) -> Result<Json<FeatureVector>, ApiError> {
    let Json(raw) = payload?;
    let vector = state.service.features(&raw)?;
    Ok(Json(vector))
}
