//! Single-run orchestration.
//!
//! `run_simulation()` is the one entry point used by the CLI and the TUI:
//! validate, generate, then derive the summary and the chart series from the
//! same event sequence. Nothing is carried between runs.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use washlab_core::{
    generate_events, price_series, Event, PricePoint, SimulationError, SimulationParameters,
    SimulationSummary,
};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

/// Everything one run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Content hash of the parameters; identical inputs share an id.
    pub fingerprint: String,
    pub params: SimulationParameters,
    pub events: Vec<Event>,
    pub summary: SimulationSummary,
    pub prices: Vec<PricePoint>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl SimulationRun {
    /// First 12 hex characters of the fingerprint, for directory names.
    pub fn short_id(&self) -> &str {
        let end = self.fingerprint.len().min(12);
        &self.fingerprint[..end]
    }
}

/// Deterministic blake3 hash of the parameter set.
pub fn fingerprint(params: &SimulationParameters) -> String {
    // Field order is fixed by the struct, so the JSON is stable.
    let json = serde_json::to_string(params).unwrap_or_default();
    blake3::hash(json.as_bytes()).to_hex().to_string()
}

/// Run the full sequence for one parameter set.
pub fn run_simulation(params: &SimulationParameters) -> Result<SimulationRun, RunError> {
    let events = generate_events(params)?;
    let summary = SimulationSummary::from_run(params, &events);
    let prices = price_series(&events);
    let fingerprint = fingerprint(params);

    debug!(
        fingerprint = %fingerprint,
        events = events.len(),
        prices = prices.len(),
        "simulation run complete"
    );

    Ok(SimulationRun {
        schema_version: SCHEMA_VERSION,
        fingerprint,
        params: *params,
        events,
        summary,
        prices,
    })
}
