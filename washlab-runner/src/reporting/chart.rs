//! ASCII price-over-time chart for terminals without the TUI.

use washlab_core::{Action, PricePoint};

/// Plot area in characters, excluding the axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: usize,
    pub height: usize,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 60,
            height: 12,
        }
    }
}

const LABEL_WIDTH: usize = 8;

fn marker(action: Action) -> char {
    match action {
        Action::Buy => '*',
        Action::MarketBuy => 'M',
        Action::Sell => 'S',
        Action::Quote | Action::LimitBuy => '.',
    }
}

/// Scatter the traded prices onto a character grid.
///
/// Pump trades plot as `*`, the momentum buyer as `M`, the algo's sell as
/// `S`. Later points overwrite earlier ones sharing a cell.
pub fn render_price_chart(prices: &[PricePoint], size: ChartSize) -> String {
    if prices.is_empty() || size.width < 2 || size.height < 2 {
        return "(no trades to plot)\n".to_string();
    }

    let (mut lo, mut hi) = prices
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.price), hi.max(p.price))
        });
    if hi - lo < f64::EPSILON {
        lo -= 1.0;
        hi += 1.0;
    }

    // Time bounds from the data, not its order; imported runs may be unsorted.
    let t0 = prices.iter().map(|p| p.time).min().unwrap_or(0);
    let t1 = prices.iter().map(|p| p.time).max().unwrap_or(t0);
    let span = (t1 - t0).max(1) as f64;

    let mut grid = vec![vec![' '; size.width]; size.height];
    for p in prices {
        let x = ((p.time - t0) as f64 / span * (size.width - 1) as f64).round() as usize;
        let y = ((hi - p.price) / (hi - lo) * (size.height - 1) as f64).round() as usize;
        grid[y.min(size.height - 1)][x.min(size.width - 1)] = marker(p.action);
    }

    let mut out = String::new();
    for (row, cells) in grid.iter().enumerate() {
        let label = if row == 0 {
            format!("{hi:>width$.2}", width = LABEL_WIDTH)
        } else if row == size.height - 1 {
            format!("{lo:>width$.2}", width = LABEL_WIDTH)
        } else {
            " ".repeat(LABEL_WIDTH)
        };
        let line: String = cells.iter().collect();
        out.push_str(&format!("{label} |{}\n", line.trim_end()));
    }

    out.push_str(&format!(
        "{} +{}\n",
        " ".repeat(LABEL_WIDTH),
        "-".repeat(size.width)
    ));
    let first = format!("t={t0}");
    let last = format!("t={t1}");
    let gap = size.width.saturating_sub(first.len() + last.len());
    out.push_str(&format!(
        "{}  {first}{}{last}\n",
        " ".repeat(LABEL_WIDTH),
        " ".repeat(gap)
    ));
    out.push_str(&format!(
        "{}  * wash trade  M momentum buy  S algo sell\n",
        " ".repeat(LABEL_WIDTH)
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use washlab_core::{generate_events, price_series, SimulationParameters};

    fn default_series() -> Vec<PricePoint> {
        price_series(&generate_events(&SimulationParameters::default()).unwrap())
    }

    #[test]
    fn unsorted_times_do_not_underflow() {
        let prices = vec![
            PricePoint { time: 9, action: Action::Sell, price: 48.0 },
            PricePoint { time: 2, action: Action::Buy, price: 22.0 },
            PricePoint { time: 5, action: Action::MarketBuy, price: 42.0 },
        ];
        let chart = render_price_chart(&prices, ChartSize::default());
        assert!(chart.contains("t=2"));
        assert!(chart.contains("t=9"));
        assert!(chart.contains('S'));
        assert!(chart.contains('M'));
    }

    #[test]
    fn empty_series() {
        assert_eq!(
            render_price_chart(&[], ChartSize::default()),
            "(no trades to plot)\n"
        );
    }

    #[test]
    fn axis_labels_span_price_range() {
        let chart = render_price_chart(&default_series(), ChartSize::default());
        let lines: Vec<&str> = chart.lines().collect();
        assert!(lines[0].trim_start().starts_with("48.00"));
        assert!(lines[11].trim_start().starts_with("22.00"));
        assert!(chart.contains("t=2"));
        assert!(chart.contains("t=22"));
    }

    #[test]
    fn sell_plots_top_right() {
        let size = ChartSize::default();
        let chart = render_price_chart(&default_series(), size);
        let top = chart.lines().next().unwrap();
        assert!(top.ends_with('S'));
        let bottom = chart.lines().nth(size.height - 1).unwrap();
        assert!(bottom.contains('*'));
    }

    #[test]
    fn flat_series_does_not_divide_by_zero() {
        let flat = vec![PricePoint {
            time: 3,
            action: Action::Sell,
            price: 10.0,
        }];
        let chart = render_price_chart(&flat, ChartSize { width: 10, height: 4 });
        assert!(chart.contains('S'));
        assert!(chart.contains("11.00"));
        assert!(chart.contains("9.00"));
    }
}
