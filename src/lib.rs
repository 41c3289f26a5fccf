//! Modfsm: deterministic finite state machines and a threshold selector
//!
//! The crate has two independent parts. The [`core`] module describes any
//! deterministic finite state machine as a validated quintuple (states,
//! alphabet, initial state, accepting states, transition table) plus a
//! mutable current state, and the [`FiniteStateMachine`] trait drives it one
//! symbol at a time. [`mod_three`] specializes it into a calculator for the
//! remainder of a binary number divided by 3.
//!
//! The [`threshold`] module picks a classification threshold that keeps
//! recall above a floor while maximizing precision.
//!
//! Non-fatal conditions (an unmapped transition, an undefined recall or
//! precision) are reported as `tracing` warnings; the library never installs
//! a subscriber itself.
//!
//! # Example
//!
//! ```rust
//! use modfsm::core::FiniteStateMachine;
//! use modfsm::mod_three::{ModThreeMachine, ModThreeState};
//!
//! let mut machine = ModThreeMachine::new();
//! assert_eq!(machine.compute_remainder("1101"), Ok(1));
//! assert_eq!(machine.current_state(), &ModThreeState::S1);
//!
//! machine.reset();
//! machine.process("10".chars()).unwrap();
//! assert_eq!(machine.accepting_state(), Ok(&ModThreeState::S2));
//! ```

pub mod builder;
pub mod core;
pub mod mod_three;
pub mod threshold;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use crate::builder::{ConfigurationError, MachineBuilder};
pub use crate::core::{FiniteStateMachine, MachineDefinition, MachineError, State, StateMachine};
pub use crate::mod_three::{ModThreeMachine, ModThreeState};
pub use crate::threshold::{find_best_threshold, SelectionConfig, ThresholdError, ThresholdSelector};
