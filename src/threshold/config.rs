//! Selection configuration.

use super::error::ThresholdError;
use serde::{Deserialize, Serialize};

/// Recall floor applied when no configuration is given.
pub const DEFAULT_MIN_RECALL: f64 = 0.9;

/// Tunable parameters of threshold selection.
///
/// Missing fields fall back to their defaults, so `{}` is a valid config.
///
/// # Example
///
/// ```rust
/// use modfsm::threshold::SelectionConfig;
///
/// let config = SelectionConfig::from_json(r#"{ "min_recall": 0.8 }"#).unwrap();
/// assert_eq!(config.min_recall, 0.8);
///
/// let config = SelectionConfig::from_json("{}").unwrap();
/// assert_eq!(config, SelectionConfig::default());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    /// Minimum recall a threshold must reach to be considered
    pub min_recall: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_recall: DEFAULT_MIN_RECALL,
        }
    }
}

impl SelectionConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ThresholdError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ThresholdError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that `min_recall` is a finite value in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if !(0.0..=1.0).contains(&self.min_recall) {
            return Err(ThresholdError::InvalidConfig(format!(
                "min_recall must be within [0, 1], got {}",
                self.min_recall
            )));
        }
        Ok(())
    }
}
