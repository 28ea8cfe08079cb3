//! WashLab TUI: five-panel terminal interface with vim-style navigation.

use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use washlab_core::SimulationParameters;
use washlab_tui::{AppState, handle_key, persistence, ui};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let state_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("washlab");
    let state_path = state_dir.join("state.json");

    init_logging(&state_dir)?;
    info!(state = %state_path.display(), "washlab-tui starting");

    // Build app state, then restore sliders and panel from the last session.
    let mut app = AppState::new(SimulationParameters::default());
    persistence::apply(&mut app, persistence::load(&state_path));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let persisted = persistence::extract(&app);
    if let Err(e) = persistence::save(&state_path, &persisted) {
        warn!(error = %e, "failed to save UI state");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Log to a file next to the saved state; stderr belongs to the alternate screen.
fn init_logging(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating {}", dir.display()))?;
    let log_path = dir.join("washlab-tui.log");
    let file = File::create(&log_path)
        .with_context(|| format!("creating {}", log_path.display()))?;

    // A second init (e.g. under a test harness) is not an error worth failing on.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
