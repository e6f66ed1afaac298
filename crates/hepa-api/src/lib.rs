//! hepa-api library root.
//!
//! Exposes the router and its modules so integration tests can drive the
//! HTTP surface without binding a socket.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::health::index))
        .route("/health", get(routes::health::health_check))
        // Public schema data
        .route("/schema", get(routes::schema::get_schema))
        .route("/predict", post(routes::predict::predict))
        .route("/features", post(routes::predict::features))
        .fallback(routes::health::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::audit::audit_log)),
        )
        .with_state(state)
}
