//! Builder for constructing machine definitions.

use crate::core::{ConfigurationError, MachineDefinition, State, Symbol};
use std::collections::{HashMap, HashSet};

/// Builder for constructing machine definitions with a fluent API.
///
/// Transitions are collected in insertion order and only checked when
/// [`build`](Self::build) runs, so the sets may be declared in any order.
pub struct MachineBuilder<S: State, A: Symbol> {
    states: HashSet<S>,
    alphabet: HashSet<A>,
    initial: Option<S>,
    accepting: HashSet<S>,
    transitions: Vec<(S, A, S)>,
}

impl<S: State, A: Symbol> MachineBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
            alphabet: HashSet::new(),
            initial: None,
            accepting: HashSet::new(),
            transitions: Vec::new(),
        }
    }

    /// Declare a single state.
    pub fn state(mut self, state: S) -> Self {
        self.states.insert(state);
        self
    }

    /// Declare several states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Declare the input alphabet.
    pub fn alphabet(mut self, symbols: impl IntoIterator<Item = A>) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Mark states as accepting.
    pub fn accepting(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Map `(from, symbol)` to `to`.
    pub fn transition(mut self, from: S, symbol: A, to: S) -> Self {
        self.transitions.push((from, symbol, to));
        self
    }

    /// Build the definition.
    /// Returns an error if the initial state is missing or any invariant fails.
    pub fn build(self) -> Result<MachineDefinition<S, A>, ConfigurationError> {
        let initial = self.initial.ok_or(ConfigurationError::MissingInitialState)?;

        let mut table: HashMap<(S, A), S> = HashMap::with_capacity(self.transitions.len());
        for (from, symbol, to) in self.transitions {
            if let Some(existing) = table.get(&(from.clone(), symbol.clone())) {
                if *existing != to {
                    return Err(ConfigurationError::ConflictingTransition {
                        state: format!("{:?}", from),
                        symbol: format!("{:?}", symbol),
                        existing: format!("{:?}", existing),
                        target: format!("{:?}", to),
                    });
                }
                continue;
            }
            table.insert((from, symbol), to);
        }

        MachineDefinition::new(self.states, self.alphabet, initial, self.accepting, table)
    }
}

impl<S: State, A: Symbol> Default for MachineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    fn base() -> MachineBuilder<TestState, u8> {
        MachineBuilder::new()
            .states([TestState::Initial, TestState::Processing])
            .state(TestState::Complete)
            .alphabet([0, 1])
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = base().build();

        assert!(matches!(result, Err(ConfigurationError::MissingInitialState)));
    }

    #[test]
    fn fluent_api_builds_definition() {
        let definition = base()
            .initial(TestState::Initial)
            .accepting([TestState::Complete])
            .transition(TestState::Initial, 1, TestState::Processing)
            .transition(TestState::Processing, 1, TestState::Complete)
            .build()
            .unwrap();

        assert_eq!(definition.initial_state(), &TestState::Initial);
        assert_eq!(definition.states().len(), 3);
        assert_eq!(definition.transitions().len(), 2);
        assert!(definition.is_accepting(&TestState::Complete));
    }

    #[test]
    fn builder_allows_empty_transition_table() {
        let definition = base().initial(TestState::Initial).build();

        assert!(definition.is_ok());
    }

    #[test]
    fn repeated_identical_transition_is_accepted() {
        let definition = base()
            .initial(TestState::Initial)
            .transition(TestState::Initial, 0, TestState::Initial)
            .transition(TestState::Initial, 0, TestState::Initial)
            .build()
            .unwrap();

        assert_eq!(definition.transitions().len(), 1);
    }

    #[test]
    fn conflicting_transition_is_rejected() {
        let result = base()
            .initial(TestState::Initial)
            .transition(TestState::Initial, 0, TestState::Processing)
            .transition(TestState::Initial, 0, TestState::Complete)
            .build();

        assert_eq!(
            result,
            Err(ConfigurationError::ConflictingTransition {
                state: "Initial".to_string(),
                symbol: "0".to_string(),
                existing: "Processing".to_string(),
                target: "Complete".to_string(),
            })
        );
    }

    #[test]
    fn builder_error_is_the_core_configuration_error() {
        let result: Result<_, crate::builder::ConfigurationError> =
            MachineBuilder::<TestState, u8>::new().build();
        let err: crate::core::ConfigurationError = result.unwrap_err();

        assert_eq!(err, ConfigurationError::MissingInitialState);
    }

    #[test]
    fn builder_surfaces_definition_errors() {
        let result = base()
            .initial(TestState::Initial)
            .transition(TestState::Initial, 7, TestState::Processing)
            .build();

        assert!(matches!(
            result,
            Err(ConfigurationError::UnknownTransitionSymbol { .. })
        ));
    }
}
