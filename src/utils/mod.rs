pub mod errors;
pub mod format;
pub mod table;

pub use errors::{render_error, ChartError};
pub use format::format_tick;
pub use table::SummaryTable;
