//! Recall-constrained threshold selection.
//!
//! Given per-threshold confusion counts, pick the threshold whose recall
//! reaches a floor (0.9 by default) and, when false positives are known,
//! whose precision is highest among those. Without false positives the
//! smallest qualifying threshold wins.
//!
//! Indices where recall or precision is undefined (zero denominator) are
//! skipped with a warning rather than failing the whole selection.

use serde::Serialize;
use tracing::{debug, warn};

pub mod config;
pub mod error;

pub use config::{SelectionConfig, DEFAULT_MIN_RECALL};
pub use error::ThresholdError;

/// Recall and precision observed at one threshold.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThresholdMetrics {
    pub index: usize,
    pub threshold: f64,
    /// `None` when true positives and false negatives are both zero
    pub recall: Option<f64>,
    /// `None` when false positives were not supplied, or when true and false
    /// positives are both zero (reported with a warning)
    pub precision: Option<f64>,
    /// Whether recall reaches the configured floor
    pub qualifies: bool,
}

/// Threshold selector with a configurable recall floor.
///
/// # Example
///
/// ```rust
/// use modfsm::threshold::{SelectionConfig, ThresholdSelector};
///
/// let selector = ThresholdSelector::new(SelectionConfig { min_recall: 0.8 }).unwrap();
/// let best = selector
///     .select(&[0.1, 0.2], &[8.0, 9.0], &[2.0, 3.0], None, None)
///     .unwrap();
/// assert_eq!(best, Some(0.1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ThresholdSelector {
    config: SelectionConfig,
}

impl ThresholdSelector {
    pub fn new(config: SelectionConfig) -> Result<Self, ThresholdError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Compute recall, precision and qualification for every index.
    ///
    /// Inputs are validated first: no negative (or NaN) values, no empty
    /// sequences, and every sequence as long as `thresholds`.
    /// `true_negatives` is validated but does not affect the metrics.
    ///
    /// Every undefined recall, and every undefined precision when false
    /// positives are supplied, is reported with a warning.
    pub fn evaluate(
        &self,
        thresholds: &[f64],
        true_positives: &[f64],
        false_negatives: &[f64],
        true_negatives: Option<&[f64]>,
        false_positives: Option<&[f64]>,
    ) -> Result<Vec<ThresholdMetrics>, ThresholdError> {
        let mut inputs = vec![
            ("thresholds", thresholds),
            ("true_positives", true_positives),
            ("false_negatives", false_negatives),
        ];
        if let Some(values) = true_negatives {
            inputs.push(("true_negatives", values));
        }
        if let Some(values) = false_positives {
            inputs.push(("false_positives", values));
        }
        validate_inputs(&inputs)?;

        let metrics = thresholds
            .iter()
            .enumerate()
            .map(|(index, &threshold)| {
                let tp = true_positives[index];
                let fn_ = false_negatives[index];

                let recall = if tp + fn_ == 0.0 {
                    warn!(
                        index,
                        threshold,
                        "true positives and false negatives are both zero, recall cannot be calculated"
                    );
                    None
                } else {
                    Some(tp / (tp + fn_))
                };

                let precision = match false_positives.map(|fp| fp[index]) {
                    None => None,
                    Some(fp) if tp + fp == 0.0 => {
                        warn!(
                            index,
                            threshold,
                            "true positives and false positives are both zero, precision cannot be calculated"
                        );
                        None
                    }
                    Some(fp) => Some(tp / (tp + fp)),
                };

                ThresholdMetrics {
                    index,
                    threshold,
                    recall,
                    precision,
                    qualifies: recall.is_some_and(|r| r >= self.config.min_recall),
                }
            })
            .collect();

        Ok(metrics)
    }

    /// Pick the best threshold, or `None` when no index qualifies.
    pub fn select(
        &self,
        thresholds: &[f64],
        true_positives: &[f64],
        false_negatives: &[f64],
        true_negatives: Option<&[f64]>,
        false_positives: Option<&[f64]>,
    ) -> Result<Option<f64>, ThresholdError> {
        let metrics = self.evaluate(
            thresholds,
            true_positives,
            false_negatives,
            true_negatives,
            false_positives,
        )?;

        let mut best: Option<(f64, f64)> = None;
        let mut lowest: Option<f64> = None;

        for m in metrics.iter().filter(|m| m.qualifies) {
            lowest = Some(lowest.map_or(m.threshold, |t| t.min(m.threshold)));

            // Undefined precision was already reported by `evaluate`
            if let Some(precision) = m.precision {
                if best.map_or(true, |(_, top)| precision > top) {
                    best = Some((m.threshold, precision));
                }
            }
        }

        // An explicit precision winner takes priority, even at threshold 0.0
        let selected = best.map(|(threshold, _)| threshold).or(lowest);
        debug!(?selected, min_recall = self.config.min_recall, "threshold selected");
        Ok(selected)
    }
}

/// Select the best threshold with the default recall floor of 0.9.
///
/// # Example
///
/// ```rust
/// use modfsm::threshold::find_best_threshold;
///
/// let best = find_best_threshold(
///     &[0.1, 0.2, 0.3, 0.4, 0.5],
///     &[50.0, 48.0, 45.0, 40.0, 35.0],
///     &[5.0, 6.0, 7.0, 8.0, 9.0],
///     Some(&[30.0, 32.0, 33.0, 40.0, 50.0]),
///     Some(&[10.0, 12.0, 14.0, 18.0, 20.0]),
/// )
/// .unwrap();
/// assert_eq!(best, Some(0.1));
/// ```
pub fn find_best_threshold(
    thresholds: &[f64],
    true_positives: &[f64],
    false_negatives: &[f64],
    true_negatives: Option<&[f64]>,
    false_positives: Option<&[f64]>,
) -> Result<Option<f64>, ThresholdError> {
    ThresholdSelector::default().select(
        thresholds,
        true_positives,
        false_negatives,
        true_negatives,
        false_positives,
    )
}

fn validate_inputs(inputs: &[(&'static str, &[f64])]) -> Result<(), ThresholdError> {
    for &(name, values) in inputs {
        // NaN counts as negative
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| v.is_nan() || **v < 0.0)
        {
            return Err(ThresholdError::NegativeValue { name, index, value });
        }
    }

    if let Some(&(name, _)) = inputs.iter().find(|(_, values)| values.is_empty()) {
        return Err(ThresholdError::EmptyInput { name });
    }

    let expected = inputs[0].1.len();
    if let Some(&(name, values)) = inputs.iter().find(|(_, values)| values.len() != expected) {
        return Err(ThresholdError::LengthMismatch {
            name,
            expected,
            found: values.len(),
        });
    }

    Ok(())
}
