//! Threshold Selection
//!
//! This example evaluates a small sweep of thresholds and selects the one
//! with the best precision among those keeping recall at or above 0.9.
//!
//! Run with: cargo run --example best_threshold
//! Warnings for undefined recall or precision are printed by the subscriber.

use modfsm::threshold::{SelectionConfig, ThresholdSelector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Threshold Selection Example ===\n");

    let thresholds = [0.1, 0.2, 0.3, 0.4, 0.5];
    let tp = [50.0, 48.0, 45.0, 40.0, 0.0];
    let fn_ = [5.0, 6.0, 7.0, 8.0, 0.0];
    let tn = [30.0, 32.0, 33.0, 40.0, 50.0];
    let fp = [10.0, 12.0, 14.0, 18.0, 20.0];

    let selector = ThresholdSelector::new(SelectionConfig::from_json(r#"{ "min_recall": 0.9 }"#)?)?;

    let metrics = selector.evaluate(&thresholds, &tp, &fn_, Some(&tn), Some(&fp))?;
    println!("Metrics:\n{}\n", serde_json::to_string_pretty(&metrics)?);

    match selector.select(&thresholds, &tp, &fn_, Some(&tn), Some(&fp))? {
        Some(best) => println!("Best threshold: {}", best),
        None => println!("No threshold reaches recall {}", selector.config().min_recall),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
