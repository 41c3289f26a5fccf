//! Binary mod-three calculator.
//!
//! Reads a binary number most significant bit first and tracks the value of
//! the prefix read so far modulo 3. Reading bit `b` in residue `r` moves to
//! `(2 * r + b) mod 3`.

use crate::builder::MachineBuilder;
use crate::core::{FiniteStateMachine, MachineError, State, StateMachine};
use crate::state_enum;
use tracing::{debug, warn};

state_enum! {
    /// Residue of the binary prefix read so far.
    pub enum ModThreeState {
        S0,
        S1,
        S2,
    }
}

impl ModThreeState {
    pub fn residue(&self) -> u8 {
        match self {
            Self::S0 => 0,
            Self::S1 => 1,
            Self::S2 => 2,
        }
    }

    /// Map a residue back to its state. `None` for values of 3 and above.
    pub fn from_residue(residue: u8) -> Option<Self> {
        match residue {
            0 => Some(Self::S0),
            1 => Some(Self::S1),
            2 => Some(Self::S2),
            _ => None,
        }
    }
}

/// Finite state machine computing the remainder of a binary string divided by 3.
///
/// All three states are accepting, so any fully consumed binary string
/// yields a residue.
///
/// # Example
///
/// ```rust
/// use modfsm::mod_three::ModThreeMachine;
///
/// let mut machine = ModThreeMachine::new();
/// assert_eq!(machine.compute_remainder("1101"), Ok(1));
/// assert_eq!(machine.compute_remainder("110"), Ok(0));
/// assert_eq!(machine.compute_remainder(""), Ok(0));
/// assert!(machine.compute_remainder("102").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ModThreeMachine {
    machine: StateMachine<ModThreeState, char>,
}

impl ModThreeMachine {
    pub fn new() -> Self {
        use ModThreeState::{S0, S1, S2};

        let definition = MachineBuilder::new()
            .states([S0, S1, S2])
            .alphabet(['0', '1'])
            .initial(S0)
            .accepting([S0, S1, S2])
            .transition(S0, '0', S0)
            .transition(S0, '1', S1)
            .transition(S1, '0', S2)
            .transition(S1, '1', S0)
            .transition(S2, '0', S1)
            .transition(S2, '1', S2)
            .build()
            .expect("Mod-three table only uses declared states and symbols");

        Self {
            machine: StateMachine::new(definition),
        }
    }

    /// Compute `value(binary) mod 3`, starting from a fresh machine.
    ///
    /// The empty string denotes zero. Any character other than `'0'` or
    /// `'1'` fails with [`MachineError::InvalidSymbol`].
    pub fn compute_remainder(
        &mut self,
        binary: &str,
    ) -> Result<u8, MachineError<ModThreeState, char>> {
        self.reset();

        if binary.is_empty() {
            return Ok(0);
        }

        self.process(binary.chars())?;
        let remainder = self.accepting_state()?.residue();

        debug!(input = binary, remainder, "computed remainder");
        Ok(remainder)
    }

    /// Feed more digits without resetting, returning the running residue.
    pub fn feed(&mut self, binary: &str) -> Result<u8, MachineError<ModThreeState, char>> {
        Ok(self.process(binary.chars())?.residue())
    }
}

impl Default for ModThreeMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl FiniteStateMachine for ModThreeMachine {
    type State = ModThreeState;
    type Symbol = char;

    fn machine(&self) -> &StateMachine<ModThreeState, char> {
        &self.machine
    }

    fn machine_mut(&mut self) -> &mut StateMachine<ModThreeState, char> {
        &mut self.machine
    }

    /// Follow the table. An unmapped pair is not a rejection: the machine
    /// logs a warning and keeps its current state.
    fn apply_transition(&mut self, symbol: &char) -> ModThreeState {
        if self.machine.step(symbol).is_none() {
            warn!(
                state = self.machine.current_state().name(),
                ?symbol,
                "no transition defined, machine remains in the current state"
            );
        }
        *self.machine.current_state()
    }
}
