//! State and symbol traits for finite state machines.
//!
//! States and symbols are opaque labels. The machine only needs to compare,
//! hash, and print them.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the current state is handed back to callers by value
/// - `Eq` + `Hash`: states are members of sets and keys of the transition table
/// - `Debug`: states appear in errors and diagnostics
///
/// # Example
///
/// ```rust
/// use modfsm::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for input symbols.
///
/// Blanket-implemented for every type that can be compared, hashed,
/// cloned and printed, so `char`, `u8` or `&'static str` work as alphabets.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T> Symbol for T where T: Clone + Eq + Hash + Debug {}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }
    }

    fn assert_symbol<A: Symbol>(_: &A) {}

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn string_states_use_their_text_as_name() {
        assert_eq!("q0".name(), "q0");
        assert_eq!(String::from("q1").name(), "q1");
    }

    #[test]
    fn common_types_are_symbols() {
        assert_symbol(&'0');
        assert_symbol(&1u8);
        assert_symbol(&"a");
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(TestState::Processing, TestState::Processing.clone());
        assert_ne!(TestState::Processing, TestState::Complete);
    }
}
