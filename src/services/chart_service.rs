use std::ops::Range;
use chrono::Utc;
use plotters::prelude::*;
use tracing::{debug, info};
use crate::models::{ChartOptions, ChartPayload, Mount, Point, RenderedChart, Series};
use crate::utils::{format_tick, render_error, ChartError};

/// Default line colors for series that carry none (d3 category10)
const PALETTE: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

/// Something that can draw chart input into a mount point
pub trait ChartRenderer {
    fn render(
        &self,
        payload: &ChartPayload,
        options: &ChartOptions,
        mount: &Mount,
    ) -> Result<RenderedChart, ChartError>;
}

/// Renders chart input as a static SVG line chart with plotters
#[derive(Debug, Default, Clone, Copy)]
pub struct PlottersRenderer;

impl ChartRenderer for PlottersRenderer {
    fn render(
        &self,
        payload: &ChartPayload,
        options: &ChartOptions,
        mount: &Mount,
    ) -> Result<RenderedChart, ChartError> {
        if !mount.exists() {
            return Err(ChartError::MissingMountPoint(format!(
                "mount directory '{}' does not exist",
                mount.dir.display()
            )));
        }

        // Static output: transitions and the hover guideline have nothing to act on
        debug!(
            duration_ms = options.duration.as_millis() as u64,
            interactive_guideline = options.use_interactive_guideline,
            "Ignoring interactive chart options for SVG output"
        );

        let svg = draw_svg(payload, options)?;
        let path = mount.svg_path();
        std::fs::write(&path, svg.as_bytes())
            .map_err(|e| ChartError::Render(format!("Failed to write {}: {}", path.display(), e)))?;

        info!("Chart '{}' written to {}", mount.id, path.display());

        Ok(RenderedChart {
            path,
            series: payload.series().len(),
            points: payload.point_count(),
            bytes: svg.len(),
            rendered_at: Utc::now(),
        })
    }
}

/// Draw the whole chart into an in-memory SVG document
fn draw_svg(payload: &ChartPayload, options: &ChartOptions) -> Result<String, ChartError> {
    let series = payload.series();
    let (x_range, y_range) = axis_ranges(series)?;
    let x_digits = options.x_axis.fraction_digits;
    let y_digits = options.y_axis.fraction_digits;
    // Staggering halves label density so long tick labels don't collide
    let x_label_count = if options.x_axis.stagger_labels { 5 } else { 10 };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc(options.x_axis.label.as_str())
            .y_desc(options.y_axis.label.as_str())
            .x_labels(x_label_count)
            .x_label_formatter(&|x: &f64| format_tick(Some(*x), x_digits))
            .y_label_formatter(&|y: &f64| format_tick(Some(*y), y_digits))
            .draw()
            .map_err(render_error)?;

        for (idx, s) in series.iter().enumerate() {
            let color = series_color(s.color.as_deref(), idx);
            let mut segments = line_segments(&s.values).into_iter();

            // First segment carries the legend entry, even when it is empty
            let first = segments.next().unwrap_or_default();
            chart
                .draw_series(LineSeries::new(first, color))
                .map_err(render_error)?
                .label(format!("{} ({})", s.key, format_tick(s.last_value(), y_digits)))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

            for segment in segments {
                chart
                    .draw_series(LineSeries::new(segment, color))
                    .map_err(render_error)?;
            }
        }

        if !series.is_empty() {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(render_error)?;
        }

        root.present().map_err(render_error)?;
    }

    Ok(svg)
}

/// Split a series into drawable runs; a missing y ends the current run
pub fn line_segments(values: &[Point]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for point in values {
        match point.y {
            Some(y) => current.push((point.x, y)),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Largest magnitude drawn; beyond this, padding and tick math overflow f64
const MAX_PLOT_MAGNITUDE: f64 = 1e300;

/// X and Y ranges covering every available point; y gets 10% headroom
pub fn axis_ranges(series: &[Series]) -> Result<(Range<f64>, Range<f64>), ChartError> {
    let xs = series.iter().flat_map(|s| s.values.iter().map(|p| p.x));
    let ys = series.iter().flat_map(|s| s.values.iter().filter_map(|p| p.y));
    Ok((padded_range("x", xs, 0.0)?, padded_range("y", ys, 0.1)?))
}

fn padded_range(
    axis: &str,
    values: impl Iterator<Item = f64>,
    padding: f64,
) -> Result<Range<f64>, ChartError> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if min > max {
        return Ok(0.0..1.0);
    }
    if min.abs() > MAX_PLOT_MAGNITUDE || max.abs() > MAX_PLOT_MAGNITUDE {
        return Err(ChartError::MalformedPayload(format!(
            "{} values [{:e}, {:e}] exceed the plottable magnitude {:e}",
            axis, min, max, MAX_PLOT_MAGNITUDE
        )));
    }

    let pad = if min == max {
        (min.abs() * 0.05).max(0.5)
    } else {
        (max - min) * padding
    };
    Ok((min - pad)..(max + pad))
}

/// Parse `#rgb` / `#rrggbb`, falling back to the palette slot for `idx`
pub fn series_color(color: Option<&str>, idx: usize) -> RGBColor {
    color
        .and_then(parse_hex_color)
        .unwrap_or(PALETTE[idx % PALETTE.len()])
}

fn parse_hex_color(color: &str) -> Option<RGBColor> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut rgb = hex.chars().map(|c| channel(&c.to_string()).map(|v| v * 17));
            Some(RGBColor(rgb.next()??, rgb.next()??, rgb.next()??))
        }
        6 => Some(RGBColor(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}
