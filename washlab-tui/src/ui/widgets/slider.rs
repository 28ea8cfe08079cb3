//! Labeled horizontal slider widget.
//!
//! One row per parameter: `label: [=======     ] 40.00`.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use washlab_core::ParamSpec;

use crate::theme;

/// Width of the label column, right-aligned.
const LABEL_WIDTH: usize = 20;

/// Text bar for a slider filled to `fraction` (clamped to 0..=1).
pub fn slider_bar(fraction: f64, width: usize) -> String {
    let frac = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (frac * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

pub struct Slider<'a> {
    spec: &'a ParamSpec,
    value: f64,
    active: bool,
}

impl<'a> Slider<'a> {
    pub fn new(spec: &'a ParamSpec, value: f64) -> Self {
        Self {
            spec,
            value,
            active: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// The slider as a single styled line sized for `width` columns.
    pub fn line(&self, width: u16) -> Line<'static> {
        // label + ": " + "[" + bar + "]" + " 100.00" + " (default)"
        let fixed = LABEL_WIDTH + 2 + 2 + 8 + 10;
        let bar_width = (width as usize).saturating_sub(fixed).clamp(4, 40);

        let label_style = if self.active {
            theme::selected()
        } else {
            theme::muted()
        };
        let bar_style = if self.active {
            theme::accent()
        } else {
            theme::muted()
        };
        let value_style = if self.active {
            theme::accent_bold()
        } else {
            theme::text()
        };

        let mut spans = vec![
            Span::styled(
                format!("{:>width$}: ", self.spec.label, width = LABEL_WIDTH),
                label_style,
            ),
            Span::styled(slider_bar(self.spec.fraction(self.value), bar_width), bar_style),
            Span::styled(format!(" {:>7.2}", self.value), value_style),
        ];
        if self.value != self.spec.default {
            spans.push(Span::styled(
                format!(" ({:.2})", self.spec.default),
                Style::default().fg(theme::MUTED).add_modifier(Modifier::DIM),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for Slider<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let line = self.line(area.width);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
