//! Panel 1 (Parameters): eight sliders plus the headline figures of the current run.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use washlab_core::ParamId;

use crate::app::AppState;
use crate::theme;
use crate::ui::widgets::Slider;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = ParamId::ALL.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(rows),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "[j/k]select [h/l]adjust [H/L]x5 [d]default [r]reset all",
            theme::muted(),
        ))),
        chunks[0],
    );

    let slider_area = chunks[1];
    for (i, id) in ParamId::ALL.iter().enumerate() {
        let row = Rect {
            y: slider_area.y + i as u16,
            height: 1,
            ..slider_area
        };
        if row.y >= slider_area.bottom() {
            break;
        }
        let slider = Slider::new(id.spec(), app.params.get(*id)).active(i == app.active_param);
        f.render_widget(slider, row);
    }

    f.render_widget(Paragraph::new(headline(app)), chunks[3]);
}

fn headline(app: &AppState) -> Vec<Line<'static>> {
    let Some(run) = &app.run else {
        return vec![Line::from(Span::styled(
            "No run yet: adjust a parameter to generate one.",
            theme::muted(),
        ))];
    };
    let s = &run.summary;

    vec![
        Line::from(vec![
            Span::styled("Wash trades: ", theme::muted()),
            Span::styled(format!("{}", s.pump_trade_count), theme::warning()),
            Span::styled("   Momentum buy: ", theme::muted()),
            Span::styled(format!("{:.2}", s.momentum_buyer_price), theme::negative()),
            Span::styled("   Sell threshold: ", theme::muted()),
            Span::styled(format!("{:.2}", s.sell_to_normal_threshold), theme::positive()),
        ]),
        Line::from(vec![
            Span::styled("Buyer loss: ", theme::muted()),
            Span::styled(
                format!("{:.2}/contract, {:.2} total", s.unrealized_loss, s.total_buyer_loss),
                theme::negative(),
            ),
            Span::styled(format!("   run {}", run.short_id()), theme::neutral()),
        ]),
    ]
}
