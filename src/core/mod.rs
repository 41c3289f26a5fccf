//! Core finite state machine types.
//!
//! This module contains the generic machinery shared by every machine:
//! - State and symbol traits
//! - The validated machine definition
//! - The `FiniteStateMachine` contract and its runtime
//!
//! Concrete machines only supply the per-symbol transition.

mod definition;
mod error;
mod machine;
mod state;

pub use definition::{MachineDefinition, TransitionTable};
pub use error::{ConfigurationError, MachineError};
pub use machine::{FiniteStateMachine, StateMachine};
pub use state::{State, Symbol};
