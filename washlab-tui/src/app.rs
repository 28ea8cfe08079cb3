//! Application state: single-owner, main-thread only.
//!
//! Holds the current parameter set and the run generated from it. Any
//! parameter change discards the run and generates a fresh one.

use serde::{Deserialize, Serialize};
use tracing::warn;

use washlab_core::{ParamId, SimulationParameters};
use washlab_runner::{run_simulation, SimulationRun};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Parameters,
    Chart,
    Events,
    Summary,
    Help,
}

impl Panel {
    pub const COUNT: usize = 5;

    pub fn index(self) -> usize {
        match self {
            Panel::Parameters => 0,
            Panel::Chart => 1,
            Panel::Events => 2,
            Panel::Summary => 3,
            Panel::Help => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Parameters),
            1 => Some(Panel::Chart),
            2 => Some(Panel::Events),
            3 => Some(Panel::Summary),
            4 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Parameters => "Parameters",
            Panel::Chart => "Chart",
            Panel::Events => "Events",
            Panel::Summary => "Summary",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % Self::COUNT).unwrap_or(Panel::Parameters)
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + Self::COUNT - 1) % Self::COUNT)
            .unwrap_or(Panel::Parameters)
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Modal layer drawn over the active panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
}

pub struct AppState {
    pub running: bool,
    pub active_panel: Panel,
    pub overlay: Overlay,
    pub params: SimulationParameters,
    /// Slider under the cursor on the Parameters panel.
    pub active_param: usize,
    /// Latest successful run. Kept on screen if a later run fails.
    pub run: Option<SimulationRun>,
    /// Selected row on the Events panel.
    pub event_cursor: usize,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(params: SimulationParameters) -> Self {
        let mut app = Self {
            running: true,
            active_panel: Panel::Parameters,
            overlay: Overlay::None,
            params,
            active_param: 0,
            run: None,
            event_cursor: 0,
            status_message: None,
        };
        app.rerun();
        app
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    pub fn active_param_id(&self) -> ParamId {
        ParamId::ALL[self.active_param.min(ParamId::ALL.len() - 1)]
    }

    pub fn select_next_param(&mut self) {
        if self.active_param + 1 < ParamId::ALL.len() {
            self.active_param += 1;
        }
    }

    pub fn select_prev_param(&mut self) {
        self.active_param = self.active_param.saturating_sub(1);
    }

    /// Move the active slider by `steps` increments and re-run.
    pub fn nudge_active(&mut self, steps: i32) {
        let id = self.active_param_id();
        let spec = id.spec();
        let current = self.params.get(id);
        let next = spec.nudge(current, steps);
        if next != current {
            self.params = self.params.with(id, next);
            self.rerun();
        }
    }

    /// Put the active slider back on its default and re-run.
    pub fn reset_active(&mut self) {
        let id = self.active_param_id();
        self.params = self.params.with(id, id.spec().default);
        self.rerun();
    }

    pub fn reset_all(&mut self) {
        self.params = SimulationParameters::default();
        self.rerun();
        self.set_status("All parameters reset to defaults");
    }

    /// Regenerate the whole sequence from the current parameters.
    pub fn rerun(&mut self) {
        match run_simulation(&self.params) {
            Ok(run) => {
                let last = run.events.len().saturating_sub(1);
                self.event_cursor = self.event_cursor.min(last);
                self.set_status(format!(
                    "{} events, {} wash trades, buyer loss {:.2}/contract",
                    run.events.len(),
                    run.summary.pump_trade_count,
                    run.summary.unrealized_loss
                ));
                if run.summary.pump_trade_count == 0 {
                    self.set_warning("Pump start is above fair price: no wash trades emitted");
                }
                self.run = Some(run);
            }
            Err(e) => {
                warn!(error = %e, "simulation rejected");
                self.set_error(e.to_string());
            }
        }
    }

    pub fn event_count(&self) -> usize {
        self.run.as_ref().map(|r| r.events.len()).unwrap_or(0)
    }

    pub fn scroll_events(&mut self, delta: isize) {
        let count = self.event_count();
        if count == 0 {
            return;
        }
        let next = self.event_cursor as isize + delta;
        self.event_cursor = next.clamp(0, count as isize - 1) as usize;
    }
}
