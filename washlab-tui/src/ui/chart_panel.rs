//! Panel 2 (Chart): traded price over time with the lure and the dump marked.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};

use washlab_core::{Action, PricePoint};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    match &app.run {
        Some(run) if !run.prices.is_empty() => render_chart(f, area, &run.prices, run.summary.fair_price),
        _ => render_empty(f, area),
    }
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("No trades to plot.", theme::muted())),
        Line::from(""),
        Line::from(Span::styled(
            "Adjust the sliders on the Parameters panel (press 1).",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn points_where(prices: &[PricePoint], action: Action) -> Vec<(f64, f64)> {
    prices
        .iter()
        .filter(|p| p.action == action)
        .map(|p| (p.time as f64, p.price))
        .collect()
}

fn render_chart(f: &mut Frame, area: Rect, prices: &[PricePoint], fair: f64) {
    let min_y = prices.iter().map(|p| p.price).fold(fair, f64::min);
    let max_y = prices.iter().map(|p| p.price).fold(fair, f64::max);

    let padding = ((max_y - min_y).abs() * 0.05).max(1.0);
    let y_min = (min_y - padding).max(0.0);
    let y_max = max_y + padding;
    let x_min = prices.first().map(|p| p.time as f64).unwrap_or(0.0);
    let x_max = prices.last().map(|p| p.time as f64).unwrap_or(1.0).max(x_min + 1.0);

    let series: Vec<(f64, f64)> = prices.iter().map(|p| (p.time as f64, p.price)).collect();
    let fair_line = vec![(x_min, fair), (x_max, fair)];
    let lure = points_where(prices, Action::MarketBuy);
    let dump = points_where(prices, Action::Sell);

    let datasets = vec![
        Dataset::default()
            .name("fair")
            .marker(symbols::Marker::Braille)
            .style(theme::muted())
            .graph_type(GraphType::Line)
            .data(&fair_line),
        Dataset::default()
            .name("last trade")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(theme::ACCENT))
            .graph_type(GraphType::Line)
            .data(&series),
        Dataset::default()
            .name("momentum buy")
            .marker(symbols::Marker::Dot)
            .style(theme::negative())
            .graph_type(GraphType::Scatter)
            .data(&lure),
        Dataset::default()
            .name("algo sell")
            .marker(symbols::Marker::Dot)
            .style(theme::positive())
            .graph_type(GraphType::Scatter)
            .data(&dump),
    ];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled("Time", theme::muted()))
                .style(theme::muted())
                .bounds([x_min, x_max])
                .labels(vec![
                    Span::styled(format!("t={x_min:.0}"), theme::muted()),
                    Span::styled(format!("t={x_max:.0}"), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Price", theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.0}"), theme::muted()),
                    Span::styled(format!("{fair:.0}"), theme::muted()),
                    Span::styled(format!("{y_max:.0}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}
