//! Derived statistics of a run.

use serde::{Deserialize, Serialize};

use crate::event::{Action, Event};
use crate::params::SimulationParameters;

/// The algo sells into the momentum buyer at this multiple of fair price.
pub const SELL_THRESHOLD_MULTIPLIER: f64 = 1.20;

/// The momentum buyer's market order prints this far above fair price.
pub const MOMENTUM_PREMIUM: f64 = 2.0;

/// Price at which the algo dumps on the momentum buyer.
pub fn sell_to_normal_threshold(params: &SimulationParameters) -> f64 {
    params.fair_price * SELL_THRESHOLD_MULTIPLIER
}

/// Per-contract gap between what the buyer paid and fair value.
pub fn unrealized_loss(params: &SimulationParameters) -> f64 {
    sell_to_normal_threshold(params) - params.fair_price
}

pub fn momentum_buyer_price(params: &SimulationParameters) -> f64 {
    params.fair_price + MOMENTUM_PREMIUM
}

/// Scalars reported alongside the event table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub fair_price: f64,
    pub algo_bid: f64,
    pub algo_ask: f64,
    pub human_limit_buy_price: f64,
    pub pump_trade_count: usize,
    /// First and last pump prints; `None` when the pump emitted nothing.
    pub pump_first_price: Option<f64>,
    pub pump_last_price: Option<f64>,
    pub pump_volume: f64,
    pub momentum_buyer_price: f64,
    pub normal_buyer_size: f64,
    pub sell_to_normal_threshold: f64,
    pub unrealized_loss: f64,
    /// `unrealized_loss` across the whole momentum buyer size.
    pub total_buyer_loss: f64,
    pub event_count: usize,
}

impl SimulationSummary {
    /// Compute the summary from the run's inputs and its generated events.
    pub fn from_run(params: &SimulationParameters, events: &[Event]) -> Self {
        let pump_prices: Vec<f64> = events
            .iter()
            .filter(|e| e.action == Action::Buy)
            .filter_map(|e| e.price.as_trade())
            .collect();

        let loss = unrealized_loss(params);

        Self {
            fair_price: params.fair_price,
            algo_bid: params.algo_bid,
            algo_ask: params.algo_ask,
            human_limit_buy_price: params.human_limit_buy_price,
            pump_trade_count: pump_prices.len(),
            pump_first_price: pump_prices.first().copied(),
            pump_last_price: pump_prices.last().copied(),
            pump_volume: pump_prices.len() as f64 * params.pump_trade_size,
            momentum_buyer_price: momentum_buyer_price(params),
            normal_buyer_size: params.normal_buyer_size,
            sell_to_normal_threshold: sell_to_normal_threshold(params),
            unrealized_loss: loss,
            total_buyer_loss: loss * params.normal_buyer_size,
            event_count: events.len(),
        }
    }

    /// How far the pump walked the last price, zero if it never ran.
    pub fn pump_markup(&self) -> f64 {
        match (self.pump_first_price, self.pump_last_price) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }
}
