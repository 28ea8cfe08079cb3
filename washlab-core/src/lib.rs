//! WashLab Core: parameters, event types, generator, derived statistics.
//!
//! This crate contains the heart of the simulation:
//! - `SimulationParameters` with structural validation and slider ranges
//! - Event types (actor, action, quote-or-trade price)
//! - The scripted generator: quote, limit buy, pump, lure, dump, reset
//! - Derived summary statistics (sell threshold, buyer loss)

pub mod error;
pub mod event;
pub mod generator;
pub mod params;
pub mod summary;

pub use error::SimulationError;
pub use event::{Action, Actor, Event, EventPrice, PricePoint};
pub use generator::{generate_events, price_series, MAX_PUMP_EVENTS};
pub use params::{ParamId, ParamSpec, SimulationParameters, PARAM_SPECS};
pub use summary::{SimulationSummary, SELL_THRESHOLD_MULTIPLIER};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: all core types are Send + Sync so a front end
    /// can hand a finished run across threads without a retrofit.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<SimulationParameters>();
        require_sync::<SimulationParameters>();
        require_send::<Event>();
        require_sync::<Event>();
        require_send::<EventPrice>();
        require_sync::<EventPrice>();
        require_send::<PricePoint>();
        require_sync::<PricePoint>();
        require_send::<SimulationSummary>();
        require_sync::<SimulationSummary>();
        require_send::<SimulationError>();
        require_sync::<SimulationError>();
    }

    #[test]
    fn default_parameters_generate() {
        let events = generate_events(&SimulationParameters::default()).unwrap();
        assert!(!events.is_empty());
    }
}
