//! Parrot/neon theme tokens for the WashLab TUI
//!
//! # Color Palette
//! - **Accent**: Electric cyan (primary highlights, focus)
//! - **Positive**: Neon green (the algo's gain)
//! - **Negative**: Hot pink (the lured buyer's loss, errors)
//! - **Warning**: Neon orange (alerts, thresholds)
//! - **Neutral**: Cool purple (secondary info)
//! - **Muted**: Steel blue (hints, disabled text)

use ratatui::style::{Color, Modifier, Style};

use washlab_core::{Action, Actor};

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Cursor row: reversed accent.
pub fn selected() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

/// Colour for a row of the event tape, keyed on what happened.
pub fn action_color(action: Action) -> Color {
    match action {
        Action::Quote => NEUTRAL,
        Action::LimitBuy => TEXT_SECONDARY,
        Action::Buy => WARNING,
        Action::MarketBuy => NEGATIVE,
        Action::Sell => POSITIVE,
    }
}

pub fn actor_color(actor: Actor) -> Color {
    match actor {
        Actor::Algo => ACCENT,
        Actor::HumanLimitBuy => TEXT_SECONDARY,
        Actor::MomentumBuyer => NEGATIVE,
    }
}
