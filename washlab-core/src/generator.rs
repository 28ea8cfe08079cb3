//! The scripted event generator.
//!
//! Six fixed phases, one shared clock:
//! 1. algo posts its passive bid/ask
//! 2. human rests a limit buy
//! 3. pump: algo self-trades from `pump_start_price` up to `fair_price`
//! 4. momentum buyer lifts the offer at `fair_price + 2`
//! 5. algo sells into the buyer at the sell threshold
//! 6. algo restores its original quotes
//!
//! The clock starts at 0 and advances by exactly one per emitted event.

use tracing::debug;

use crate::error::SimulationError;
use crate::event::{Action, Actor, Event, EventPrice, PricePoint};
use crate::params::SimulationParameters;
use crate::summary::{momentum_buyer_price, sell_to_normal_threshold};

/// Upper bound on pump trades in one run.
pub const MAX_PUMP_EVENTS: u64 = 10_000;

/// Slack on the pump's upper bound so `start + i * step` landing a rounding
/// error above `fair_price` still counts as reaching it.
const PRICE_EPSILON: f64 = 1e-9;

/// Number of pump trades: one per step from start while price <= fair.
///
/// Saturates at `u64::MAX` for ranges too wide to count, which the
/// generator then rejects as `PumpTooLong`.
pub fn pump_trade_count(params: &SimulationParameters) -> u64 {
    if params.pump_start_price > params.fair_price + PRICE_EPSILON || params.pump_step <= 0.0 {
        return 0;
    }
    let steps = ((params.fair_price - params.pump_start_price) / params.pump_step + PRICE_EPSILON)
        .floor();
    // `as` saturates on out-of-range floats.
    (steps as u64).saturating_add(1)
}

/// Generate the full event sequence for one run.
///
/// Validates first; on error nothing is produced. Identical inputs always
/// yield identical sequences.
pub fn generate_events(params: &SimulationParameters) -> Result<Vec<Event>, SimulationError> {
    params.validate()?;

    let pump_count = pump_trade_count(params);
    if pump_count > MAX_PUMP_EVENTS {
        return Err(SimulationError::PumpTooLong {
            count: pump_count,
            max: MAX_PUMP_EVENTS,
        });
    }

    let mut clock = Clock::default();
    let mut events = Vec::with_capacity(pump_count as usize + 5);

    let quotes = EventPrice::Quote {
        bid: params.algo_bid,
        ask: params.algo_ask,
    };

    events.push(Event {
        time: clock.tick(),
        actor: Actor::Algo,
        action: Action::Quote,
        price: quotes,
        size: None,
        note: "Algo posts passive two-sided quotes".into(),
    });

    events.push(Event {
        time: clock.tick(),
        actor: Actor::HumanLimitBuy,
        action: Action::LimitBuy,
        price: EventPrice::trade(params.human_limit_buy_price),
        size: None,
        note: "Human rests a passive limit buy".into(),
    });

    for i in 0..pump_count {
        let price = params.pump_start_price + i as f64 * params.pump_step;
        events.push(Event {
            time: clock.tick(),
            actor: Actor::Algo,
            action: Action::Buy,
            price: EventPrice::trade(price),
            size: Some(params.pump_trade_size),
            note: format!("Wash trade {} of {}: algo buys from itself", i + 1, pump_count),
        });
    }

    events.push(Event {
        time: clock.tick(),
        actor: Actor::MomentumBuyer,
        action: Action::MarketBuy,
        price: EventPrice::trade(momentum_buyer_price(params)),
        size: Some(params.normal_buyer_size),
        note: "Momentum buyer chases the rising last price".into(),
    });

    events.push(Event {
        time: clock.tick(),
        actor: Actor::Algo,
        action: Action::Sell,
        price: EventPrice::trade(sell_to_normal_threshold(params)),
        size: Some(params.normal_buyer_size),
        note: "Algo sells into the momentum buyer at the inflated threshold".into(),
    });

    events.push(Event {
        time: clock.tick(),
        actor: Actor::Algo,
        action: Action::Quote,
        price: quotes,
        size: None,
        note: "Algo restores its original quotes".into(),
    });

    debug!(
        events = events.len(),
        pump_trades = pump_count,
        fair_price = params.fair_price,
        "generated wash-trade sequence"
    );

    Ok(events)
}

/// Traded prices in chronological order, for plotting.
///
/// Keeps buys, sells and market buys; drops quotes and the resting limit.
pub fn price_series(events: &[Event]) -> Vec<PricePoint> {
    events
        .iter()
        .filter(|e| e.action.is_trade())
        .filter_map(|e| {
            e.price.as_trade().map(|price| PricePoint {
                time: e.time,
                action: e.action,
                price,
            })
        })
        .collect()
}

#[derive(Debug, Default)]
struct Clock {
    next: u64,
}

impl Clock {
    fn tick(&mut self) -> u64 {
        let now = self.next;
        self.next += 1;
        now
    }
}
