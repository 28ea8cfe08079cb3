//! Export: JSON, CSV, and Markdown artifact generation.
//!
//! Provides three export formats for a finished run:
//! - **JSON**: full round-trip serialization with schema versioning
//! - **CSV**: event tape and traded price series for external tools
//! - **Markdown**: human-readable single-run report
//!
//! All persisted artifacts include a `schema_version` field. Newer versions
//! are rejected on load.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use washlab_core::{Event, PricePoint, SimulationParameters, SimulationSummary};

use crate::reporting::MarkdownReportGenerator;
use crate::runner::{SimulationRun, SCHEMA_VERSION};

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a `SimulationRun` to pretty JSON.
pub fn export_json(run: &SimulationRun) -> Result<String> {
    serde_json::to_string_pretty(run).context("failed to serialize SimulationRun to JSON")
}

/// Deserialize a `SimulationRun` from JSON, rejecting newer schema versions.
pub fn import_json(json: &str) -> Result<SimulationRun> {
    let run: SimulationRun =
        serde_json::from_str(json).context("failed to deserialize SimulationRun from JSON")?;
    if run.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            run.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(run)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the event tape as CSV.
///
/// Columns: time, actor, action, price, size, note. Quote rows carry the
/// `bid=X,ask=Y` form in the price column (quoted by the writer).
pub fn export_events_csv(events: &[Event]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["time", "actor", "action", "price", "size", "note"])?;

    for e in events {
        wtr.write_record([
            e.time.to_string().as_str(),
            e.actor.as_str(),
            e.action.as_str(),
            e.price.to_string().as_str(),
            e.size.map(|s| format!("{s:.2}")).unwrap_or_default().as_str(),
            e.note.as_str(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Export the traded price series as CSV with time, action, price columns.
pub fn export_prices_csv(prices: &[PricePoint]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["time", "action", "price"])?;
    for p in prices {
        wtr.write_record([
            p.time.to_string().as_str(),
            p.action.as_str(),
            format!("{:.4}", p.price).as_str(),
        ])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Small index written next to the full run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub schema_version: u32,
    pub fingerprint: String,
    pub generated_at: DateTime<Utc>,
    pub params: SimulationParameters,
    pub summary: SimulationSummary,
}

/// Paths written by `save_artifacts`.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub dir: PathBuf,
    pub manifest: PathBuf,
    pub run_json: PathBuf,
    pub events_csv: PathBuf,
    pub prices_csv: PathBuf,
    pub report_markdown: Option<PathBuf>,
}

/// Save the full artifact set for a single run.
///
/// Creates `run_{fingerprint[..12]}/` under `output_dir` containing:
/// - `manifest.json`: fingerprint, timestamp, parameters, summary
/// - `run.json`: the full `SimulationRun`
/// - `events.csv`: event tape
/// - `prices.csv`: traded price series
/// - `report.md`: when `include_report` is set
///
/// Re-saving identical parameters overwrites the same directory.
pub fn save_artifacts(
    run: &SimulationRun,
    output_dir: &Path,
    include_report: bool,
) -> Result<ArtifactPaths> {
    let dir = output_dir.join(format!("run_{}", run.short_id()));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create artifact dir: {}", dir.display()))?;

    let manifest = RunManifest {
        schema_version: run.schema_version,
        fingerprint: run.fingerprint.clone(),
        generated_at: Utc::now(),
        params: run.params,
        summary: run.summary,
    };
    let manifest_path = dir.join("manifest.json");
    let manifest_json =
        serde_json::to_string_pretty(&manifest).context("failed to serialize run manifest")?;
    write(&manifest_path, &manifest_json)?;

    let run_json = dir.join("run.json");
    write(&run_json, &export_json(run)?)?;

    let events_csv = dir.join("events.csv");
    write(&events_csv, &export_events_csv(&run.events)?)?;

    let prices_csv = dir.join("prices.csv");
    write(&prices_csv, &export_prices_csv(&run.prices)?)?;

    let report_markdown = if include_report {
        let path = dir.join("report.md");
        write(&path, &MarkdownReportGenerator.generate(run))?;
        Some(path)
    } else {
        None
    };

    info!(dir = %dir.display(), fingerprint = %run.fingerprint, "saved run artifacts");

    Ok(ArtifactPaths {
        dir,
        manifest: manifest_path,
        run_json,
        events_csv,
        prices_csv,
        report_markdown,
    })
}

fn write(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::run_simulation;

    fn default_run() -> SimulationRun {
        run_simulation(&SimulationParameters::default()).unwrap()
    }

    #[test]
    fn json_roundtrip_preserves_events() {
        let run = default_run();
        let back = import_json(&export_json(&run).unwrap()).unwrap();
        assert_eq!(back.events, run.events);
        assert_eq!(back.fingerprint, run.fingerprint);
    }

    #[test]
    fn newer_schema_rejected() {
        let mut run = default_run();
        run.schema_version = SCHEMA_VERSION + 1;
        let json = export_json(&run).unwrap();
        let err = import_json(&json).unwrap_err();
        assert!(err.to_string().contains("unsupported schema version"));
    }

    #[test]
    fn events_csv_quotes_the_quote_price() {
        let run = default_run();
        let csv = export_events_csv(&run.events).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("time,actor,action,price,size,note"));
        let first = lines.next().unwrap();
        assert!(first.starts_with("0,algo,quote,\"bid=20.00,ask=80.00\",,"));
        assert_eq!(csv.lines().count(), run.events.len() + 1);
    }

    #[test]
    fn prices_csv_rows() {
        let run = default_run();
        let csv = export_prices_csv(&run.prices).unwrap();
        assert_eq!(csv.lines().count(), run.prices.len() + 1);
        assert_eq!(csv.lines().nth(1), Some("2,buy,22.0000"));
    }
}
