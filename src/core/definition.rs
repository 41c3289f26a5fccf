//! The immutable shape of a deterministic finite state machine.

use super::error::ConfigurationError;
use super::state::{State, Symbol};
use std::collections::{HashMap, HashSet};

/// Transition relation keyed by `(state, symbol)`.
///
/// Not required to be total. Unmapped pairs are left to the concrete
/// machine's transition policy.
pub type TransitionTable<S, A> = HashMap<(S, A), S>;

/// Validated quintuple of states, alphabet, initial state, accepting
/// states and transition relation.
///
/// A definition is checked once when it is created and never changes
/// afterwards; accessors hand out shared references only.
///
/// # Example
///
/// ```rust
/// use modfsm::core::MachineDefinition;
/// use std::collections::{HashMap, HashSet};
///
/// let definition = MachineDefinition::new(
///     HashSet::from(["even", "odd"]),
///     HashSet::from(['a']),
///     "even",
///     HashSet::from(["even"]),
///     HashMap::from([(("even", 'a'), "odd"), (("odd", 'a'), "even")]),
/// )
/// .unwrap();
///
/// assert_eq!(definition.initial_state(), &"even");
/// assert!(definition.is_accepting(&"even"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MachineDefinition<S: State, A: Symbol> {
    states: HashSet<S>,
    alphabet: HashSet<A>,
    initial_state: S,
    accepting_states: HashSet<S>,
    transitions: TransitionTable<S, A>,
}

impl<S: State, A: Symbol> MachineDefinition<S, A> {
    /// Create a definition, validating every structural invariant.
    ///
    /// The initial state, every accepting state and both ends of every
    /// transition must be declared states, and every transition symbol must
    /// belong to the alphabet.
    pub fn new(
        states: HashSet<S>,
        alphabet: HashSet<A>,
        initial_state: S,
        accepting_states: HashSet<S>,
        transitions: TransitionTable<S, A>,
    ) -> Result<Self, ConfigurationError> {
        if states.is_empty() {
            return Err(ConfigurationError::EmptyStates);
        }
        if alphabet.is_empty() {
            return Err(ConfigurationError::EmptyAlphabet);
        }
        if !states.contains(&initial_state) {
            return Err(ConfigurationError::UnknownInitialState {
                state: format!("{:?}", initial_state),
            });
        }
        if let Some(state) = accepting_states.iter().find(|s| !states.contains(*s)) {
            return Err(ConfigurationError::UnknownAcceptingState {
                state: format!("{:?}", state),
            });
        }
        for ((from, symbol), to) in &transitions {
            if !states.contains(from) {
                return Err(ConfigurationError::UnknownTransitionSource {
                    state: format!("{:?}", from),
                });
            }
            if !alphabet.contains(symbol) {
                return Err(ConfigurationError::UnknownTransitionSymbol {
                    symbol: format!("{:?}", symbol),
                });
            }
            if !states.contains(to) {
                return Err(ConfigurationError::UnknownTransitionTarget {
                    state: format!("{:?}", to),
                });
            }
        }

        Ok(Self {
            states,
            alphabet,
            initial_state,
            accepting_states,
            transitions,
        })
    }

    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    pub fn alphabet(&self) -> &HashSet<A> {
        &self.alphabet
    }

    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    pub fn accepting_states(&self) -> &HashSet<S> {
        &self.accepting_states
    }

    pub fn transitions(&self) -> &TransitionTable<S, A> {
        &self.transitions
    }

    /// Check whether `symbol` belongs to the alphabet (pure)
    pub fn accepts_symbol(&self, symbol: &A) -> bool {
        self.alphabet.contains(symbol)
    }

    /// Check whether `state` is an accepting state (pure)
    pub fn is_accepting(&self, state: &S) -> bool {
        self.accepting_states.contains(state)
    }

    /// Look up the target of `(state, symbol)`, if mapped (pure)
    pub fn target(&self, state: &S, symbol: &A) -> Option<&S> {
        self.transitions.get(&(state.clone(), symbol.clone()))
    }
}
