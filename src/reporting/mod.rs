pub mod formatter;
pub mod summary;

pub use formatter::render_forecast_markdown;
pub use summary::{render_summary, write_summary, SUMMARY_FILE_NAME};
