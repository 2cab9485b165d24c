use tracing::info;
use crate::config::Config;
use crate::services::chart_service::PlottersRenderer;
use crate::services::synthetic_service;

pub async fn execute(config: &Config) -> Result<(), String> {
    info!("🎲 Random command called");

    let chart = synthetic_service::render_random_points(&PlottersRenderer, &config.chart_options(), &config.mount())
        .ok_or_else(|| "No chart rendered".to_string())?;

    info!("✅ {} points drawn into {} ({} bytes)", chart.points, chart.path.display(), chart.bytes);
    Ok(())
}
