use rand::Rng;
use tracing::{error, info};
use crate::models::{ChartOptions, ChartPayload, Mount, Point, RenderedChart, Series};
use crate::utils::SummaryTable;
use super::chart_service::ChartRenderer;

pub const RANDOM_POINTS_KEY: &str = "Random Points";
pub const RANDOM_POINTS_COLOR: &str = "#2222ff";
pub const RANDOM_POINTS_COUNT: usize = 100;

/// One series of `count` points with `x = index` and `y` uniform in [0, 1)
pub fn random_series<R: Rng>(rng: &mut R, key: &str, color: &str, count: usize) -> Series {
    let values = (0..count)
        .map(|i| Point::new(i as f64, rng.gen::<f64>()))
        .collect();

    Series::new(key, Some(color), values)
}

/// The demo dataset drawn from the supplied generator
pub fn random_points_with<R: Rng>(rng: &mut R) -> ChartPayload {
    ChartPayload::Many(vec![random_series(
        rng,
        RANDOM_POINTS_KEY,
        RANDOM_POINTS_COLOR,
        RANDOM_POINTS_COUNT,
    )])
}

/// The demo dataset with a fresh, unseeded draw
pub fn random_points() -> ChartPayload {
    random_points_with(&mut rand::thread_rng())
}

/// Generate the demo dataset and render it once
///
/// Render failures are logged and reported as `None`.
pub fn render_random_points<R: ChartRenderer>(
    renderer: &R,
    options: &ChartOptions,
    mount: &Mount,
) -> Option<RenderedChart> {
    let payload = random_points();
    info!("🎲 Generated {} random points", payload.point_count());

    match renderer.render(&payload, options, mount) {
        Ok(chart) => {
            info!("\n{}", SummaryTable::from_payload(&payload, options.y_axis.fraction_digits).render());
            Some(chart)
        }
        Err(e) => {
            error!("Failed to render random points: {}", e);
            None
        }
    }
}
