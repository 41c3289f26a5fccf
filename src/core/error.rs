//! Errors raised while defining or driving a state machine.

use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur while processing input or querying the result.
///
/// Both variants carry the offending value so callers can report it
/// without re-deriving it from the machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError<S: Debug, A: Debug> {
    /// A symbol outside the machine's alphabet was fed to `process`.
    #[error("Invalid input symbol: {symbol:?}")]
    InvalidSymbol { symbol: A },

    /// The accepting state was requested while the machine is elsewhere.
    #[error("Current state {state:?} is not an accepting state")]
    NotAccepting { state: S },
}

/// Errors that can occur when building a machine definition.
///
/// States and symbols are carried as their `Debug` rendering so the error
/// type stays independent of the machine's label types.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    EmptyStates,

    #[error("No input symbols defined. Add at least one symbol to the alphabet")]
    EmptyAlphabet,

    #[error("Initial state {state} is not a declared state")]
    UnknownInitialState { state: String },

    #[error("Accepting state {state} is not a declared state")]
    UnknownAcceptingState { state: String },

    #[error("Transition source {state} is not a declared state")]
    UnknownTransitionSource { state: String },

    #[error("Transition target {state} is not a declared state")]
    UnknownTransitionTarget { state: String },

    #[error("Transition symbol {symbol} is not in the alphabet")]
    UnknownTransitionSymbol { symbol: String },

    #[error("Transition ({state}, {symbol}) is already mapped to {existing}, cannot remap to {target}")]
    ConflictingTransition {
        state: String,
        symbol: String,
        existing: String,
        target: String,
    },
}
