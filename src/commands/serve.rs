use tracing::info;
use crate::config::Config;
use crate::services::logstats_service;

pub async fn execute(config: &Config) -> Result<(), String> {
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", config.bind, e))?;

    info!("🌐 Serving /logstats_data on http://{}", config.bind);

    axum::serve(listener, logstats_service::router())
        .await
        .map_err(|e| format!("Server error: {}", e))
}
