//! Text renderers for a finished run.

mod chart;
mod markdown;
mod narrative;
mod table;

pub use chart::{render_price_chart, ChartSize};
pub use markdown::MarkdownReportGenerator;
pub use narrative::{format_size, render_narrative};
pub use table::render_event_table;
