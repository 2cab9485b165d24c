//! Data models for the chart pipeline
//!
//! Series data flows from a source (HTTP or synthetic) to a renderer;
//! the chart models describe how and where it gets drawn.

pub mod chart;
pub mod series;

// Re-export commonly used types for convenience
pub use chart::{ChartOptions, Mount, RenderedChart};
pub use series::{ChartPayload, Point, Series};
