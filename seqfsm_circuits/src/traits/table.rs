use std::fmt;

use itertools::iproduct;

use super::FsmState;

/// Whether a machine's output logic reads the input directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineStyle {
    /// Output depends on the current state and the current input.
    Mealy,
    /// Output depends on the registered state only.
    Moore,
}

impl fmt::Display for MachineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mealy => write!(f, "Mealy"),
            Self::Moore => write!(f, "Moore"),
        }
    }
}

/// One row of a transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition<S> {
    /// State before the tick.
    pub state: S,
    /// Input bit sampled during the tick.
    pub input: bool,
    /// State latched at the end of the tick.
    pub next: S,
}

impl<S: fmt::Display> fmt::Display for Transition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --{}--> {}",
            self.state,
            u8::from(self.input),
            self.next
        )
    }
}

/// Next-state logic of a sequence detector.
///
/// Implementations are pure: the same `(state, input)` pair always maps to the
/// same next state, and every pair is defined.
pub trait TransitionTable {
    /// The machine's state set.
    type State: FsmState;

    /// Short machine name, e.g. `mealy_1101`.
    const NAME: &'static str;

    /// The bit sequence the machine recognizes, oldest bit first.
    const PATTERN: &'static str;

    /// Maps the current state and input bit to the next state.
    fn next_state(state: Self::State, input: bool) -> Self::State;

    /// Enumerates every row of the table in state-encoding order, input 0 first.
    fn transitions() -> impl Iterator<Item = Transition<Self::State>> {
        iproduct!(Self::State::ALL.iter().copied(), [false, true]).map(|(state, input)| {
            Transition {
                state,
                input,
                next: Self::next_state(state, input),
            }
        })
    }
}

/// Output logic of a sequence detector.
pub trait OutputPolicy: TransitionTable {
    /// Whether the output reads the input (Mealy) or only the state (Moore).
    const STYLE: MachineStyle;

    /// Computes the match signal.
    ///
    /// Moore implementations ignore `input`.
    fn output(state: Self::State, input: bool) -> bool;
}
