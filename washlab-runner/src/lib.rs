//! WashLab Runner: run orchestration, config, rendering and export.
//!
//! This crate builds on `washlab-core` to provide:
//! - Single-run orchestration: parameters → events → summary → price series
//! - TOML config files with default fallback
//! - Plain-text narrative, event table and price chart for terminals
//! - Markdown report, JSON and CSV artifact export

pub mod config;
pub mod export;
pub mod reporting;
pub mod runner;

pub use config::{ConfigError, SimulationConfig};
pub use export::{export_events_csv, export_json, export_prices_csv, import_json, save_artifacts};
pub use reporting::{
    format_size, render_event_table, render_narrative, render_price_chart, MarkdownReportGenerator,
};
pub use runner::{fingerprint, run_simulation, RunError, SimulationRun, SCHEMA_VERSION};
