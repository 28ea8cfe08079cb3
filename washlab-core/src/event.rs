//! Event: one timestamped step of the scripted sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who acted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    /// The manipulator: quotes both sides and trades with itself.
    Algo,
    /// A passive human bid resting below the pump.
    HumanLimitBuy,
    /// A third party that chases the rising last price.
    MomentumBuyer,
}

impl Actor {
    pub fn as_str(self) -> &'static str {
        match self {
            Actor::Algo => "algo",
            Actor::HumanLimitBuy => "human_limit_buy",
            Actor::MomentumBuyer => "momentum_buyer",
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What was done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Quote,
    LimitBuy,
    Buy,
    Sell,
    MarketBuy,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Quote => "quote",
            Action::LimitBuy => "limit_buy",
            Action::Buy => "buy",
            Action::Sell => "sell",
            Action::MarketBuy => "market_buy",
        }
    }

    /// Actions that print a trade and belong on the price chart.
    pub fn is_trade(self) -> bool {
        matches!(self, Action::Buy | Action::Sell | Action::MarketBuy)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price attached to an event: a two-sided quote or a single price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventPrice {
    Quote { bid: f64, ask: f64 },
    Trade { price: f64 },
}

impl EventPrice {
    pub fn trade(price: f64) -> Self {
        EventPrice::Trade { price }
    }

    /// Numeric price for trade-like events, `None` for quotes.
    pub fn as_trade(&self) -> Option<f64> {
        match self {
            EventPrice::Trade { price } => Some(*price),
            EventPrice::Quote { .. } => None,
        }
    }
}

/// `bid=20.00,ask=80.00` for quotes, `22.00` for trades.
impl fmt::Display for EventPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventPrice::Quote { bid, ask } => write!(f, "bid={bid:.2},ask={ask:.2}"),
            EventPrice::Trade { price } => write!(f, "{price:.2}"),
        }
    }
}

/// One record of the sequence. Never mutated after the generator returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub time: u64,
    pub actor: Actor,
    pub action: Action,
    pub price: EventPrice,
    /// Order size where a parameter defines one.
    pub size: Option<f64>,
    pub note: String,
}

/// A traded price on the chart's time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: u64,
    pub action: Action,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_display() {
        let p = EventPrice::Quote { bid: 20.0, ask: 80.0 };
        assert_eq!(p.to_string(), "bid=20.00,ask=80.00");
        assert_eq!(p.as_trade(), None);
    }

    #[test]
    fn trade_display() {
        let p = EventPrice::trade(22.5);
        assert_eq!(p.to_string(), "22.50");
        assert_eq!(p.as_trade(), Some(22.5));
    }

    #[test]
    fn trade_actions() {
        assert!(Action::Buy.is_trade());
        assert!(Action::Sell.is_trade());
        assert!(Action::MarketBuy.is_trade());
        assert!(!Action::Quote.is_trade());
        assert!(!Action::LimitBuy.is_trade());
    }

    #[test]
    fn snake_case_names() {
        assert_eq!(
            serde_json::to_string(&Actor::HumanLimitBuy).unwrap(),
            "\"human_limit_buy\""
        );
        assert_eq!(
            serde_json::to_string(&Action::MarketBuy).unwrap(),
            "\"market_buy\""
        );
        assert_eq!(Actor::MomentumBuyer.to_string(), "momentum_buyer");
    }

    #[test]
    fn price_is_tagged() {
        let json = serde_json::to_value(EventPrice::Quote { bid: 1.0, ask: 2.0 }).unwrap();
        assert_eq!(json["kind"], "quote");
        let json = serde_json::to_value(EventPrice::trade(3.0)).unwrap();
        assert_eq!(json["kind"], "trade");
        assert_eq!(json["price"], 3.0);
    }
}
