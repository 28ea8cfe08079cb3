//! WashLab TUI: five-panel terminal interface with vim-style navigation.
//!
//! Panels:
//! 1. Parameters: eight sliders; every change re-runs the whole sequence
//! 2. Chart: traded price over time
//! 3. Events: the full event tape
//! 4. Summary: narrative of the lured buyer's loss
//! 5. Help: keyboard shortcuts

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::{AppState, Panel};
pub use input::handle_key;
