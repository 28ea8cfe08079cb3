//! Plain-language account of what the sequence did to the lured buyer.

use washlab_core::SELL_THRESHOLD_MULTIPLIER;

use crate::runner::SimulationRun;

/// One line per phase, ending with the buyer's loss and the quote reset.
pub fn render_narrative(run: &SimulationRun) -> String {
    let s = &run.summary;
    let p = &run.params;
    let mut lines = Vec::with_capacity(9);

    lines.push(format!("Fair value of the option: {:.2}", s.fair_price));
    lines.push(format!(
        "Algo quotes both sides: bid={:.2}, ask={:.2}",
        s.algo_bid, s.algo_ask
    ));
    lines.push(format!(
        "Human rests a limit buy at {:.2}",
        s.human_limit_buy_price
    ));

    match (s.pump_first_price, s.pump_last_price) {
        (Some(first), Some(last)) => lines.push(format!(
            "Pump: {} wash trades walk the last price from {:.2} to {:.2} \
             (step {:.2}, {} per trade, {} total)",
            s.pump_trade_count,
            first,
            last,
            p.pump_step,
            format_size(p.pump_trade_size),
            format_size(s.pump_volume),
        )),
        _ => lines.push(format!(
            "Pump: none (start {:.2} is already above fair {:.2})",
            p.pump_start_price, s.fair_price
        )),
    }

    lines.push(format!(
        "Momentum buyer lured in at {:.2} for {}",
        s.momentum_buyer_price,
        format_size(s.normal_buyer_size)
    ));
    lines.push(format!(
        "Algo sells to the buyer at the threshold {:.2} (fair x {:.2})",
        s.sell_to_normal_threshold, SELL_THRESHOLD_MULTIPLIER
    ));
    lines.push(format!(
        "Unrealized loss to the lured buyer: {:.2} per contract, {:.2} total",
        s.unrealized_loss, s.total_buyer_loss
    ));
    lines.push(format!(
        "Algo restores its quotes: bid={:.2}, ask={:.2}",
        s.algo_bid, s.algo_ask
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Sizes are whole contracts in practice; drop the decimals when they are.
pub fn format_size(size: f64) -> String {
    if size.fract() == 0.0 {
        format!("{size:.0}")
    } else {
        format!("{size:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::run_simulation;
    use washlab_core::{ParamId, SimulationParameters};

    #[test]
    fn default_narrative_mentions_every_figure() {
        let run = run_simulation(&SimulationParameters::default()).unwrap();
        let text = render_narrative(&run);

        assert!(text.contains("Fair value of the option: 40.00"));
        assert!(text.contains("bid=20.00, ask=80.00"));
        assert!(text.contains("19 wash trades walk the last price from 22.00 to 40.00"));
        assert!(text.contains("threshold 48.00"));
        assert!(text.contains("8.00 per contract, 240.00 total"));
        assert!(text.ends_with("Algo restores its quotes: bid=20.00, ask=80.00\n"));
    }

    #[test]
    fn narrative_without_pump() {
        let params = SimulationParameters::default().with(ParamId::PumpStartPrice, 45.0);
        let run = run_simulation(&params).unwrap();
        let text = render_narrative(&run);
        assert!(text.contains("Pump: none"));
    }

    #[test]
    fn sizes_drop_trailing_zeros() {
        assert_eq!(format_size(30.0), "30");
        assert_eq!(format_size(12.5), "12.50");
    }
}
