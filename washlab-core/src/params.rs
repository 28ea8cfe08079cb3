//! Simulation parameters and their slider ranges.
//!
//! One immutable `SimulationParameters` value drives one run. Front ends
//! adjust individual fields through `ParamId` and the `PARAM_SPECS` table,
//! then hand the whole struct to the generator.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// The eight numeric inputs of a run.
///
/// Missing keys deserialize to the defaults, so partial config files work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    pub fair_price: f64,
    pub algo_bid: f64,
    pub algo_ask: f64,
    pub human_limit_buy_price: f64,
    pub pump_start_price: f64,
    pub pump_step: f64,
    pub pump_trade_size: f64,
    pub normal_buyer_size: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            fair_price: 40.0,
            algo_bid: 20.0,
            algo_ask: 80.0,
            human_limit_buy_price: 21.0,
            pump_start_price: 22.0,
            pump_step: 1.0,
            pump_trade_size: 10.0,
            normal_buyer_size: 30.0,
        }
    }
}

impl SimulationParameters {
    /// Structural checks the generator relies on.
    ///
    /// Every field must be finite and non-negative, `pump_step` must be
    /// strictly positive, and the algo's ask may not sit below its bid.
    /// `pump_start_price <= fair_price` is expected but not enforced; a
    /// start above fair simply produces no pump trades.
    pub fn validate(&self) -> Result<(), SimulationError> {
        for id in ParamId::ALL {
            let value = self.get(id);
            if !value.is_finite() {
                return Err(SimulationError::InvalidParameter {
                    name: id.name(),
                    reason: format!("must be finite (got {value})"),
                });
            }
            if value < 0.0 {
                return Err(SimulationError::InvalidParameter {
                    name: id.name(),
                    reason: format!("must be non-negative (got {value})"),
                });
            }
        }

        if self.pump_step <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "pump_step",
                reason: format!("must be > 0 (got {})", self.pump_step),
            });
        }

        if self.algo_ask < self.algo_bid {
            return Err(SimulationError::InvalidParameter {
                name: "algo_ask",
                reason: format!(
                    "ask {} is below bid {}",
                    self.algo_ask, self.algo_bid
                ),
            });
        }

        Ok(())
    }

    /// Check every field against its slider range from `PARAM_SPECS`.
    pub fn check_ranges(&self) -> Result<(), SimulationError> {
        for spec in PARAM_SPECS.iter() {
            let value = self.get(spec.id);
            if !spec.contains(value) {
                return Err(SimulationError::OutOfRange {
                    name: spec.id.name(),
                    value,
                    min: spec.min,
                    max: spec.max,
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, id: ParamId) -> f64 {
        match id {
            ParamId::FairPrice => self.fair_price,
            ParamId::AlgoBid => self.algo_bid,
            ParamId::AlgoAsk => self.algo_ask,
            ParamId::HumanLimitBuyPrice => self.human_limit_buy_price,
            ParamId::PumpStartPrice => self.pump_start_price,
            ParamId::PumpStep => self.pump_step,
            ParamId::PumpTradeSize => self.pump_trade_size,
            ParamId::NormalBuyerSize => self.normal_buyer_size,
        }
    }

    /// Return a copy with one field replaced.
    pub fn with(mut self, id: ParamId, value: f64) -> Self {
        match id {
            ParamId::FairPrice => self.fair_price = value,
            ParamId::AlgoBid => self.algo_bid = value,
            ParamId::AlgoAsk => self.algo_ask = value,
            ParamId::HumanLimitBuyPrice => self.human_limit_buy_price = value,
            ParamId::PumpStartPrice => self.pump_start_price = value,
            ParamId::PumpStep => self.pump_step = value,
            ParamId::PumpTradeSize => self.pump_trade_size = value,
            ParamId::NormalBuyerSize => self.normal_buyer_size = value,
        }
        self
    }
}

/// Identifies one of the eight parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamId {
    FairPrice,
    AlgoBid,
    AlgoAsk,
    HumanLimitBuyPrice,
    PumpStartPrice,
    PumpStep,
    PumpTradeSize,
    NormalBuyerSize,
}

impl ParamId {
    pub const ALL: [ParamId; 8] = [
        ParamId::FairPrice,
        ParamId::AlgoBid,
        ParamId::AlgoAsk,
        ParamId::HumanLimitBuyPrice,
        ParamId::PumpStartPrice,
        ParamId::PumpStep,
        ParamId::PumpTradeSize,
        ParamId::NormalBuyerSize,
    ];

    /// Field name as it appears in configs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            ParamId::FairPrice => "fair_price",
            ParamId::AlgoBid => "algo_bid",
            ParamId::AlgoAsk => "algo_ask",
            ParamId::HumanLimitBuyPrice => "human_limit_buy_price",
            ParamId::PumpStartPrice => "pump_start_price",
            ParamId::PumpStep => "pump_step",
            ParamId::PumpTradeSize => "pump_trade_size",
            ParamId::NormalBuyerSize => "normal_buyer_size",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ParamId::ALL.into_iter().find(|id| id.name() == name)
    }

    pub fn spec(self) -> &'static ParamSpec {
        &PARAM_SPECS[self.index()]
    }

    pub fn index(self) -> usize {
        match self {
            ParamId::FairPrice => 0,
            ParamId::AlgoBid => 1,
            ParamId::AlgoAsk => 2,
            ParamId::HumanLimitBuyPrice => 3,
            ParamId::PumpStartPrice => 4,
            ParamId::PumpStep => 5,
            ParamId::PumpTradeSize => 6,
            ParamId::NormalBuyerSize => 7,
        }
    }
}

/// Slider metadata for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub id: ParamId,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl ParamSpec {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Move `value` by `steps` slider increments, snapped to the step grid
    /// and clamped to the range.
    pub fn nudge(&self, value: f64, steps: i32) -> f64 {
        let raw = value + self.step * f64::from(steps);
        let snapped = self.min + ((raw - self.min) / self.step).round() * self.step;
        self.clamp(snapped)
    }

    /// Position of `value` inside the range as a 0..=1 fraction.
    pub fn fraction(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 {
            return 1.0;
        }
        ((value - self.min) / range).clamp(0.0, 1.0)
    }
}

/// Ranges, defaults and steps for every parameter, indexed by `ParamId::index`.
pub static PARAM_SPECS: [ParamSpec; 8] = [
    ParamSpec {
        id: ParamId::FairPrice,
        label: "Fair price",
        min: 20.0,
        max: 100.0,
        default: 40.0,
        step: 1.0,
    },
    ParamSpec {
        id: ParamId::AlgoBid,
        label: "Algo bid",
        min: 0.0,
        max: 50.0,
        default: 20.0,
        step: 1.0,
    },
    ParamSpec {
        id: ParamId::AlgoAsk,
        label: "Algo ask",
        min: 50.0,
        max: 120.0,
        default: 80.0,
        step: 1.0,
    },
    ParamSpec {
        id: ParamId::HumanLimitBuyPrice,
        label: "Human limit buy",
        min: 0.0,
        max: 50.0,
        default: 21.0,
        step: 1.0,
    },
    ParamSpec {
        id: ParamId::PumpStartPrice,
        label: "Pump start",
        min: 0.0,
        max: 50.0,
        default: 22.0,
        step: 1.0,
    },
    ParamSpec {
        id: ParamId::PumpStep,
        label: "Pump step",
        min: 0.5,
        max: 5.0,
        default: 1.0,
        step: 0.5,
    },
    ParamSpec {
        id: ParamId::PumpTradeSize,
        label: "Pump trade size",
        min: 5.0,
        max: 50.0,
        default: 10.0,
        step: 1.0,
    },
    ParamSpec {
        id: ParamId::NormalBuyerSize,
        label: "Momentum buyer size",
        min: 10.0,
        max: 100.0,
        default: 30.0,
        step: 1.0,
    },
];
