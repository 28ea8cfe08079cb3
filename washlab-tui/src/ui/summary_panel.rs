//! Panel 4 (Summary): narrative of what the sequence did to the lured buyer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use washlab_runner::render_narrative;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(run) = &app.run else {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled("No run to summarize.", theme::muted()))),
            area,
        );
        return;
    };
    let s = &run.summary;

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Run ", theme::muted()),
            Span::styled(run.short_id().to_string(), theme::accent_bold()),
            Span::styled(format!("  ({} events)", s.event_count), theme::muted()),
        ]),
        Line::from(""),
    ];

    for text in render_narrative(run).lines() {
        let style = if text.starts_with("Unrealized loss") {
            theme::negative()
        } else if text.starts_with("Pump") {
            theme::warning()
        } else {
            theme::text()
        };
        lines.push(Line::from(Span::styled(format!("  {text}"), style)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Pump markup over start: ", theme::muted()),
        Span::styled(format!("{:.2}", s.pump_markup()), theme::warning()),
        Span::styled("   Pump volume: ", theme::muted()),
        Span::styled(format!("{:.0}", s.pump_volume), theme::warning()),
    ]));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
