//! Errors raised before or during event generation.

use thiserror::Error;

/// Errors from parameter validation and the event generator.
///
/// Generation is all-or-nothing: any of these means no events were produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("parameter '{name}' = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("pump would emit {count} trades (max {max}); increase pump_step")]
    PumpTooLong { count: u64, max: u64 },
}

impl SimulationError {
    /// Name of the offending parameter, if the error is tied to one.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            SimulationError::InvalidParameter { name, .. } => Some(name),
            SimulationError::OutOfRange { name, .. } => Some(name),
            SimulationError::PumpTooLong { .. } => Some("pump_step"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_parameter() {
        let err = SimulationError::InvalidParameter {
            name: "pump_step",
            reason: "must be > 0 (got 0)".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter 'pump_step': must be > 0 (got 0)"
        );
        assert_eq!(err.parameter(), Some("pump_step"));
    }

    #[test]
    fn out_of_range_message() {
        let err = SimulationError::OutOfRange {
            name: "fair_price",
            value: 150.0,
            min: 20.0,
            max: 100.0,
        };
        assert_eq!(
            err.to_string(),
            "parameter 'fair_price' = 150 is outside [20, 100]"
        );
    }
}
