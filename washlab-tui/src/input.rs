//! Keyboard input dispatch: overlays → global keys → panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Panel};

/// Coarse slider move for `H` / `L`.
const BIG_STEP: i32 = 5;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Welcome {
        app.overlay = Overlay::None;
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Parameters; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Chart; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Events; return; }
        KeyCode::Char('4') => { app.active_panel = Panel::Summary; return; }
        KeyCode::Char('5') | KeyCode::Char('?') => { app.active_panel = Panel::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Parameters => handle_parameters_key(app, key),
        Panel::Events => handle_events_key(app, key),
        Panel::Chart | Panel::Summary | Panel::Help => {} // display only
    }
}

fn handle_parameters_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next_param(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev_param(),
        KeyCode::Char('l') | KeyCode::Right => app.nudge_active(1),
        KeyCode::Char('h') | KeyCode::Left => app.nudge_active(-1),
        KeyCode::Char('L') => app.nudge_active(BIG_STEP),
        KeyCode::Char('H') => app.nudge_active(-BIG_STEP),
        KeyCode::Char('d') => app.reset_active(),
        KeyCode::Char('r') => app.reset_all(),
        _ => {}
    }
}

fn handle_events_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_events(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_events(-1),
        KeyCode::PageDown => app.scroll_events(10),
        KeyCode::PageUp => app.scroll_events(-10),
        KeyCode::Char('g') | KeyCode::Home => app.event_cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.event_cursor = app.event_count().saturating_sub(1);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use washlab_core::SimulationParameters;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> AppState {
        AppState::new(SimulationParameters::default())
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn number_keys_switch_panels() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.active_panel, Panel::Events);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_panel, Panel::Summary);
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.active_panel, Panel::Events);
    }

    #[test]
    fn welcome_overlay_swallows_first_key() {
        let mut app = app();
        app.overlay = Overlay::Welcome;
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn slider_keys_adjust_active_param() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.params.fair_price, 41.0);
        handle_key(&mut app, press(KeyCode::Char('L')));
        assert_eq!(app.params.fair_price, 46.0);
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('h')));
        assert_eq!(app.params.algo_bid, 19.0);
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.params, SimulationParameters::default());
    }

    #[test]
    fn event_keys_scroll() {
        let mut app = app();
        app.active_panel = Panel::Events;
        handle_key(&mut app, press(KeyCode::Char('G')));
        assert_eq!(app.event_cursor, app.event_count() - 1);
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.event_cursor, app.event_count() - 2);
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.event_cursor, 0);
    }

    #[test]
    fn release_events_ignored() {
        let mut app = app();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.running);
    }
}
