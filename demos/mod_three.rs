//! Binary Mod-Three Calculator
//!
//! This example drives the mod-three machine over a few binary strings.
//!
//! Key concepts:
//! - One-shot remainder computation
//! - Incremental feeding without reset
//! - Invalid digits surfaced as errors
//!
//! Run with: cargo run --example mod_three
//! Set RUST_LOG=modfsm=trace to watch every transition.

use modfsm::core::FiniteStateMachine;
use modfsm::mod_three::ModThreeMachine;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Mod-Three Machine Example ===\n");

    let mut machine = ModThreeMachine::new();

    for input in ["1101", "1110", "1111", "10", ""] {
        match machine.compute_remainder(input) {
            Ok(remainder) => println!("{:>6} mod 3 = {}", format!("{:?}", input), remainder),
            Err(e) => println!("{:>6} failed: {}", input, e),
        }
    }

    println!("\nFeeding \"110\" one digit at a time:");
    machine.reset();
    for digit in ["1", "1", "0"] {
        match machine.feed(digit) {
            Ok(residue) => println!("  read {} -> state {:?} (residue {})", digit, machine.current_state(), residue),
            Err(e) => println!("  read {} failed: {}", digit, e),
        }
    }

    println!("\nInvalid input:");
    if let Err(e) = machine.compute_remainder("1021") {
        println!("  {}", e);
        println!("  state after failure: {:?}", machine.current_state());
    }

    println!("\n=== Example Complete ===");
}
