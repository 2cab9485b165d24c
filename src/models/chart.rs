//! Chart rendering models

use std::path::{Path, PathBuf};
use std::time::Duration;
use chrono::{DateTime, Utc};

/// Label and tick formatting for one axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisOptions {
    pub label: String,
    /// Digits after the decimal point on tick labels
    pub fraction_digits: usize,
    pub stagger_labels: bool,
}

/// Options handed to the renderer together with the data
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub duration: Duration,
    pub use_interactive_guideline: bool,
    pub x_axis: AxisOptions,
    pub y_axis: AxisOptions,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            use_interactive_guideline: true,
            x_axis: AxisOptions {
                label: "Time (s)".to_string(),
                fraction_digits: 1,
                stagger_labels: true,
            },
            y_axis: AxisOptions {
                label: "Voltage (V)".to_string(),
                fraction_digits: 2,
                stagger_labels: false,
            },
            width: 960,
            height: 500,
        }
    }
}

/// Where a chart gets appended: an existing directory plus the chart id
#[derive(Debug, Clone, PartialEq)]
pub struct Mount {
    pub dir: PathBuf,
    pub id: String,
}

impl Mount {
    pub fn new(dir: impl Into<PathBuf>, id: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            id: id.into(),
        }
    }

    /// Path of the SVG document appended into the mount
    pub fn svg_path(&self) -> PathBuf {
        self.dir.join(format!("{}.svg", self.id))
    }

    pub fn exists(&self) -> bool {
        Path::new(&self.dir).is_dir()
    }
}

/// What a render produced; returned to the caller instead of kept globally
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub path: PathBuf,
    pub series: usize,
    pub points: usize,
    pub bytes: usize,
    pub rendered_at: DateTime<Utc>,
}
