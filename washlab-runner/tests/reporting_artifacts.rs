use washlab_core::{ParamId, SimulationParameters};
use washlab_runner::export::RunManifest;
use washlab_runner::{import_json, run_simulation, save_artifacts, SimulationConfig};

#[test]
fn test_save_artifacts_writes_bundle() {
    let temp_dir = tempfile::tempdir().unwrap();
    let run = run_simulation(&SimulationParameters::default()).unwrap();

    let paths = save_artifacts(&run, temp_dir.path(), false).unwrap();
    assert!(paths.dir.ends_with(format!("run_{}", run.short_id())));
    assert!(paths.manifest.exists());
    assert!(paths.run_json.exists());
    assert!(paths.events_csv.exists());
    assert!(paths.prices_csv.exists());
    assert!(paths.report_markdown.is_none());
}

#[test]
fn test_save_artifacts_with_report() {
    let temp_dir = tempfile::tempdir().unwrap();
    let run = run_simulation(&SimulationParameters::default()).unwrap();

    let paths = save_artifacts(&run, temp_dir.path(), true).unwrap();
    let report = paths.report_markdown.unwrap();
    assert!(report.exists());
    let text = std::fs::read_to_string(report).unwrap();
    assert!(text.contains("Unrealized loss per contract: 8.00"));
}

#[test]
fn test_saved_run_reloads() {
    let temp_dir = tempfile::tempdir().unwrap();
    let params = SimulationParameters::default().with(ParamId::PumpStep, 2.0);
    let run = run_simulation(&params).unwrap();

    let paths = save_artifacts(&run, temp_dir.path(), false).unwrap();
    let json = std::fs::read_to_string(&paths.run_json).unwrap();
    let reloaded = import_json(&json).unwrap();
    assert_eq!(reloaded.params, params);
    assert_eq!(reloaded.events, run.events);

    let manifest: RunManifest =
        serde_json::from_str(&std::fs::read_to_string(&paths.manifest).unwrap()).unwrap();
    assert_eq!(manifest.fingerprint, run.fingerprint);
    assert_eq!(manifest.summary.pump_trade_count, 10);
}

#[test]
fn test_same_params_share_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let a = run_simulation(&SimulationParameters::default()).unwrap();
    let b = run_simulation(&SimulationParameters::default()).unwrap();

    let pa = save_artifacts(&a, temp_dir.path(), false).unwrap();
    let pb = save_artifacts(&b, temp_dir.path(), false).unwrap();
    assert_eq!(pa.dir, pb.dir);
}

#[test]
fn test_config_file_roundtrip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("nested").join("washlab.toml");

    let mut config = SimulationConfig::default();
    config.parameters.fair_price = 55.0;
    config.write_file(&path).unwrap();

    let loaded = SimulationConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);

    let run = run_simulation(&loaded.parameters).unwrap();
    assert_eq!(run.summary.pump_last_price, Some(55.0));
}
