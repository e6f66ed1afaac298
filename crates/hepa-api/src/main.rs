use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use hepa_api::config::ApiConfig;
use hepa_api::state::AppState;
use hepa_scorer::service::PredictionService;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ApiConfig::from_env()?;

    // No artifact means no service: fail startup rather than serve errors.
    let service = PredictionService::from_model_dir(&config.model_dir, config.log_policy)?;

    let state = AppState {
        service: Arc::new(service),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        log_policy = %config.log_policy,
        "listening"
    );

    axum::serve(listener, hepa_api::app(state)).await?;
    Ok(())
}
