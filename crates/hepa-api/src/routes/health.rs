use axum::Json;
use serde::Serialize;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct IndexResponse {
    message: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "API running",
    })
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("no such route".to_string())
}
