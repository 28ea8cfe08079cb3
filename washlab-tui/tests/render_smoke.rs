//! Draw every panel into an in-memory terminal and check the visible text.

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use washlab_core::{ParamId, SimulationParameters};
use washlab_tui::app::Overlay;
use washlab_tui::{AppState, Panel, ui};

fn render(app: &AppState) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn app_on(panel: Panel) -> AppState {
    let mut app = AppState::new(SimulationParameters::default());
    app.active_panel = panel;
    app
}

#[test]
fn parameters_panel_lists_every_slider() {
    let text = render(&app_on(Panel::Parameters));
    assert!(text.contains("Parameters [1]"));
    for id in ParamId::ALL {
        assert!(text.contains(id.spec().label), "missing {}", id.spec().label);
    }
    assert!(text.contains("Wash trades: 19"));
}

#[test]
fn chart_panel_draws_axes() {
    let text = render(&app_on(Panel::Chart));
    assert!(text.contains("Chart [2]"));
    assert!(text.contains("Price"));
    assert!(text.contains("t=2"));
}

#[test]
fn events_panel_shows_tape() {
    let text = render(&app_on(Panel::Events));
    assert!(text.contains("Events [3]"));
    assert!(text.contains("market_buy"));
    assert!(text.contains("bid=20.00,ask=80.00"));
}

#[test]
fn summary_panel_shows_loss() {
    let text = render(&app_on(Panel::Summary));
    assert!(text.contains("Summary [4]"));
    assert!(text.contains("Unrealized loss to the lured buyer: 8.00"));
}

#[test]
fn help_panel_lists_keys() {
    let text = render(&app_on(Panel::Help));
    assert!(text.contains("Global Navigation"));
    assert!(text.contains("Reset every slider"));
}

#[test]
fn welcome_overlay_drawn_on_top() {
    let mut app = app_on(Panel::Parameters);
    app.overlay = Overlay::Welcome;
    let text = render(&app);
    assert!(text.contains("Welcome to WashLab"));
}

#[test]
fn status_bar_shows_validation_error() {
    let mut app = app_on(Panel::Parameters);
    app.params = app.params.with(ParamId::PumpStep, 0.0);
    app.rerun();
    let text = render(&app);
    assert!(text.contains("pump_step"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = app_on(Panel::Events);
    let backend = TestBackend::new(20, 5);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, &app)).unwrap();
}
