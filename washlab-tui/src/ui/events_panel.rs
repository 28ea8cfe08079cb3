//! Panel 3 (Events): the full event tape, one row per event.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};

use washlab_core::Event;
use washlab_runner::format_size;

use crate::app::AppState;
use crate::theme;

const HEADERS: [&str; 6] = ["Time", "Actor", "Action", "Price", "Size", "Note"];

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(run) = &app.run else {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled("No events.", theme::muted()))),
            area,
        );
        return;
    };

    let header_cells = HEADERS.iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    });
    let header = Row::new(header_cells).height(1);

    let rows = run.events.iter().map(event_row);

    let widths = [
        Constraint::Length(5),
        Constraint::Length(16),
        Constraint::Length(11),
        Constraint::Length(20),
        Constraint::Length(7),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(theme::selected())
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.event_cursor));
    f.render_stateful_widget(table, area, &mut state);
}

/// Size column text, formatted the same way as the CLI table and report.
fn size_text(event: &Event) -> String {
    event.size.map(format_size).unwrap_or_else(|| "-".to_string())
}

fn event_row(event: &Event) -> Row<'static> {
    let size = size_text(event);
    let cells = vec![
        Cell::from(format!("{}", event.time)),
        Cell::from(event.actor.as_str())
            .style(Style::default().fg(theme::actor_color(event.actor))),
        Cell::from(event.action.as_str())
            .style(Style::default().fg(theme::action_color(event.action))),
        Cell::from(event.price.to_string()),
        Cell::from(size),
        Cell::from(event.note.clone()).style(theme::muted()),
    ];
    Row::new(cells).style(theme::text()).height(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use washlab_core::{generate_events, Action, SimulationParameters};

    #[test]
    fn size_column_keeps_fractional_sizes() {
        let params = SimulationParameters {
            normal_buyer_size: 12.5,
            ..SimulationParameters::default()
        };
        let events = generate_events(&params).unwrap();
        let market_buy = events
            .iter()
            .find(|e| e.action == Action::MarketBuy)
            .unwrap();
        assert_eq!(size_text(market_buy), "12.50");
    }

    #[test]
    fn size_column_whole_and_missing() {
        let events = generate_events(&SimulationParameters::default()).unwrap();
        assert_eq!(size_text(&events[0]), "-");
        assert_eq!(size_text(&events[2]), "10");
    }
}
