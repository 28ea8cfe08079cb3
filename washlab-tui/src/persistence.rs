//! App state persistence: JSON save/load across restarts.
//!
//! Only the slider values and UI position survive a restart; runs are
//! always regenerated.

use std::path::Path;

use serde::{Deserialize, Serialize};

use washlab_core::{ParamId, SimulationParameters};

use crate::app::{AppState, Overlay, Panel};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub params: SimulationParameters,
    pub active_panel: Panel,
    pub active_param: usize,
    pub welcome_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            params: SimulationParameters::default(),
            active_panel: Panel::Parameters,
            active_param: 0,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        params: app.params,
        active_panel: app.active_panel,
        active_param: app.active_param,
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

/// Apply persisted state to AppState.
///
/// Stored values are clamped back onto the sliders before the re-run, so a
/// hand-edited file cannot push the UI outside its ranges.
pub fn apply(app: &mut AppState, state: PersistedState) {
    let mut params = state.params;
    for id in ParamId::ALL {
        let value = params.get(id);
        let fixed = if value.is_finite() {
            id.spec().clamp(value)
        } else {
            id.spec().default
        };
        params = params.with(id, fixed);
    }

    app.params = params;
    app.active_panel = state.active_panel;
    app.active_param = state.active_param.min(ParamId::ALL.len() - 1);
    if !state.welcome_dismissed {
        app.overlay = Overlay::Welcome;
    }
    app.rerun();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("washlab").join("state.json");

        let mut state = PersistedState::default();
        state.params.fair_price = 65.0;
        state.active_panel = Panel::Events;
        state.welcome_dismissed = true;

        save(&path, &state).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.params.fair_price, 65.0);
        assert_eq!(loaded.active_panel, Panel::Events);
        assert!(loaded.welcome_dismissed);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert_eq!(loaded.params, SimulationParameters::default());
        assert!(!loaded.welcome_dismissed);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.params, SimulationParameters::default());
    }

    #[test]
    fn apply_clamps_out_of_range_values() {
        let mut app = AppState::new(SimulationParameters::default());
        let mut state = PersistedState::default();
        state.params.pump_step = 0.0;
        state.params.fair_price = 1_000.0;
        state.active_param = 99;
        state.welcome_dismissed = true;

        apply(&mut app, state);
        assert_eq!(app.params.pump_step, 0.5);
        assert_eq!(app.params.fair_price, 100.0);
        assert_eq!(app.active_param, ParamId::ALL.len() - 1);
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.run.is_some());
    }

    #[test]
    fn extract_captures_ui_position() {
        let mut app = AppState::new(SimulationParameters::default());
        app.active_panel = Panel::Chart;
        app.active_param = 3;
        let state = extract(&app);
        assert_eq!(state.active_panel, Panel::Chart);
        assert_eq!(state.active_param, 3);
        assert!(state.welcome_dismissed);
    }
}
