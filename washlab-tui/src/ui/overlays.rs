//! First-run welcome overlay.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::theme;
use crate::ui::centered_rect;

pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to WashLab ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "An algo wash-trades an illiquid option to lure a momentum buyer.",
            theme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Move the sliders on the Parameters panel with h/l",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Press 2 to watch the pump on the price chart",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Press 3 for the event tape, 4 for the buyer's loss",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}
