//! Threshold selection error types.

use thiserror::Error;

/// Errors that can occur when selecting a threshold
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ThresholdError {
    /// An input sequence was empty
    #[error("All input lists must be non-empty ({name} is empty)")]
    EmptyInput { name: &'static str },

    /// An input sequence does not line up with the thresholds
    #[error("All input lists must have the same length ({name} has {found}, expected {expected})")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    /// An input value was negative or not a number
    #[error("All inputs must be non-negative ({name}[{index}] = {value})")]
    NegativeValue {
        name: &'static str,
        index: usize,
        value: f64,
    },

    /// Selection configuration could not be loaded or is out of range
    #[error("Invalid selection config: {0}")]
    InvalidConfig(String),
}

impl ThresholdError {
    /// Whether this error reports malformed caller input, as opposed to configuration.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::InvalidConfig(_))
    }
}
