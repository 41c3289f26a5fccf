//! Machine runtime and the transition contract concrete machines implement.

use super::definition::{MachineDefinition, TransitionTable};
use super::error::MachineError;
use super::state::{State, Symbol};
use std::collections::HashSet;
use tracing::{debug, trace};

/// A machine definition paired with its current state.
///
/// The current state changes only through [`step`](Self::step) and
/// [`reset`](Self::reset). `step` moves along the definition's own table, so
/// the current state is always one of the declared states.
#[derive(Clone, Debug)]
pub struct StateMachine<S: State, A: Symbol> {
    definition: MachineDefinition<S, A>,
    current: S,
}

impl<S: State, A: Symbol> StateMachine<S, A> {
    /// Create a new state machine in the definition's initial state
    pub fn new(definition: MachineDefinition<S, A>) -> Self {
        let current = definition.initial_state().clone();
        Self {
            definition,
            current,
        }
    }

    pub fn definition(&self) -> &MachineDefinition<S, A> {
        &self.definition
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Follow the table entry for `(current, symbol)`.
    ///
    /// Returns the new current state, or `None` when the pair is unmapped,
    /// in which case the current state is left untouched.
    pub fn step(&mut self, symbol: &A) -> Option<&S> {
        let next = self.definition.target(&self.current, symbol)?.clone();
        trace!(from = self.current.name(), to = next.name(), ?symbol, "transition");
        self.current = next;
        Some(&self.current)
    }

    /// Return to the initial state
    pub fn reset(&mut self) {
        self.current = self.definition.initial_state().clone();
    }
}

/// Contract shared by every deterministic finite state machine.
///
/// Implementors own a [`StateMachine`] and supply
/// [`apply_transition`](Self::apply_transition); sequence driving, acceptance
/// queries and the read-only view of the quintuple are provided.
///
/// # Example
///
/// ```rust
/// use modfsm::builder::MachineBuilder;
/// use modfsm::core::{FiniteStateMachine, StateMachine};
///
/// struct Toggle {
///     machine: StateMachine<&'static str, char>,
/// }
///
/// impl FiniteStateMachine for Toggle {
///     type State = &'static str;
///     type Symbol = char;
///
///     fn machine(&self) -> &StateMachine<&'static str, char> {
///         &self.machine
///     }
///
///     fn machine_mut(&mut self) -> &mut StateMachine<&'static str, char> {
///         &mut self.machine
///     }
///
///     fn apply_transition(&mut self, symbol: &char) -> &'static str {
///         self.machine.step(symbol);
///         *self.machine.current_state()
///     }
/// }
///
/// let definition = MachineBuilder::new()
///     .states(["off", "on"])
///     .alphabet(['t'])
///     .initial("off")
///     .accepting(["on"])
///     .transition("off", 't', "on")
///     .transition("on", 't', "off")
///     .build()
///     .unwrap();
///
/// let mut toggle = Toggle { machine: StateMachine::new(definition) };
/// toggle.process("ttt".chars()).unwrap();
/// assert_eq!(toggle.accepting_state(), Ok(&"on"));
/// ```
pub trait FiniteStateMachine {
    type State: State;
    type Symbol: Symbol;

    fn machine(&self) -> &StateMachine<Self::State, Self::Symbol>;

    fn machine_mut(&mut self) -> &mut StateMachine<Self::State, Self::Symbol>;

    /// Consume one symbol and return the resulting current state.
    ///
    /// Callers must only pass symbols from the alphabet. [`process`](Self::process)
    /// enforces that; direct callers are responsible for it themselves.
    fn apply_transition(&mut self, symbol: &Self::Symbol) -> Self::State;

    fn current_state(&self) -> &Self::State {
        self.machine().current_state()
    }

    /// Check if the current state is an accepting state (pure)
    fn is_accepting(&self) -> bool {
        self.machine().definition().is_accepting(self.current_state())
    }

    /// Get the current state if it is accepting.
    fn accepting_state(&self) -> Result<&Self::State, MachineError<Self::State, Self::Symbol>> {
        if self.is_accepting() {
            Ok(self.current_state())
        } else {
            Err(MachineError::NotAccepting {
                state: self.current_state().clone(),
            })
        }
    }

    fn reset(&mut self) {
        self.machine_mut().reset();
    }

    /// Feed a sequence of symbols in order.
    ///
    /// Stops at the first symbol outside the alphabet. Symbols consumed
    /// before it stay applied; the offending symbol changes nothing.
    fn process<I>(&mut self, input: I) -> Result<&Self::State, MachineError<Self::State, Self::Symbol>>
    where
        I: IntoIterator<Item = Self::Symbol>,
    {
        debug!(from = self.current_state().name(), "processing input sequence");

        for symbol in input {
            if !self.machine().definition().accepts_symbol(&symbol) {
                debug!(?symbol, state = self.current_state().name(), "rejected input symbol");
                return Err(MachineError::InvalidSymbol { symbol });
            }
            self.apply_transition(&symbol);
        }

        debug!(to = self.current_state().name(), "input sequence processed");
        Ok(self.current_state())
    }

    fn states(&self) -> &HashSet<Self::State> {
        self.machine().definition().states()
    }

    fn alphabet(&self) -> &HashSet<Self::Symbol> {
        self.machine().definition().alphabet()
    }

    fn initial_state(&self) -> &Self::State {
        self.machine().definition().initial_state()
    }

    fn accepting_states(&self) -> &HashSet<Self::State> {
        self.machine().definition().accepting_states()
    }

    fn transitions(&self) -> &TransitionTable<Self::State, Self::Symbol> {
        self.machine().definition().transitions()
    }
}
