use tracing::info;
use crate::config::{parse_record_count, Config};
use crate::services::chart_service::PlottersRenderer;
use crate::services::fetch_service;

/// `fetch [n]`: one request, one chart
pub async fn execute(config: &Config, args: &[&str]) -> Result<(), String> {
    info!("📈 Fetch command called with args: {:?}", args);

    let records = match args.first() {
        Some(raw) => parse_record_count(raw)?,
        None => config.records,
    };

    let client = config.client().map_err(|e| e.to_string())?;
    let chart = fetch_service::fetch_and_render(
        &client,
        records,
        &PlottersRenderer,
        &config.chart_options(),
        &config.mount(),
    )
    .await
    .ok_or_else(|| "No chart rendered".to_string())?;

    info!(
        "✅ {} series / {} points drawn into {} at {}",
        chart.series,
        chart.points,
        chart.path.display(),
        chart.rendered_at.format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}
