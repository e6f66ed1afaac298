use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// Audit logging middleware.
///
/// Logs every API request as a structured `api_request` event. Request
/// bodies carry patient data and are never logged.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let uri = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    tracing::info!(
        request_id = %request_id,
        method = %method,
        path = %uri,
        status = status,
        latency_ms = started.elapsed().as_millis() as u64,
        "api_request"
    );

    response
}
