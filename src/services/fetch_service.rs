use tracing::{debug, error, info};
use crate::api::logstats::LogStatsClient;
use crate::models::{ChartOptions, ChartPayload, Mount, RenderedChart};
use crate::utils::{ChartError, SummaryTable};
use super::chart_service::ChartRenderer;

/// Number of records the chart page asks for
pub const DEFAULT_FETCH_RECORDS: usize = 1000;

/// Fetch chart input from the logstats endpoint
///
/// The payload is returned as parsed. The only check on top of the JSON
/// shape is that series keys are unique.
pub async fn fetch_series(client: &LogStatsClient, records: usize) -> Result<ChartPayload, ChartError> {
    let payload = client.fetch_series(records).await?;

    if let Some(key) = payload.duplicate_key() {
        return Err(ChartError::MalformedPayload(format!("duplicate series key '{}'", key)));
    }

    debug!(
        "Fetched {} series / {} points from {}",
        payload.series().len(),
        payload.point_count(),
        client.base_url()
    );
    Ok(payload)
}

/// Fetch once, then render once
///
/// Every failure is logged and turns into `None`; nothing is retried.
pub async fn fetch_and_render<R: ChartRenderer>(
    client: &LogStatsClient,
    records: usize,
    renderer: &R,
    options: &ChartOptions,
    mount: &Mount,
) -> Option<RenderedChart> {
    let payload = match fetch_series(client, records).await {
        Ok(payload) => payload,
        Err(e) => {
            error!("Skipping chart '{}': {}", mount.id, e);
            return None;
        }
    };

    info!("📈 Rendering {} series into '{}'", payload.series().len(), mount.id);

    match renderer.render(&payload, options, mount) {
        Ok(chart) => {
            info!("\n{}", SummaryTable::from_payload(&payload, options.y_axis.fraction_digits).render());
            Some(chart)
        }
        Err(e) => {
            error!("Skipping chart '{}': {}", mount.id, e);
            None
        }
    }
}
