//! Moore-style detector for the sequence `1100`.
//!
//! The match output is a function of the registered state alone: it is high
//! for exactly the ticks the machine spends in [`Moore1100State::S4`].

use std::fmt;

use crate::traits::{FsmState, MachineStyle, OutputPolicy, TransitionTable};

/// States of the `1100` Moore detector, named after the matched prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Moore1100State {
    /// Nothing useful matched.
    #[default]
    S0,
    /// Prefix `1`.
    S1,
    /// Prefix `11`; further ones keep the machine here.
    S2,
    /// Prefix `110`.
    S3,
    /// Full match `1100`.
    S4,
}

impl fmt::Display for Moore1100State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.encoding())
    }
}

impl FsmState for Moore1100State {
    const MACHINE: &'static str = Moore1100::NAME;
    const INITIAL: Self = Self::S0;
    const ALL: &'static [Self] = &[Self::S0, Self::S1, Self::S2, Self::S3, Self::S4];

    fn encoding(self) -> u8 {
        self as u8
    }
}

/// Table and output logic of the `1100` Moore detector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Moore1100;

impl TransitionTable for Moore1100 {
    type State = Moore1100State;

    const NAME: &'static str = "moore_1100";
    const PATTERN: &'static str = "1100";

    fn next_state(state: Moore1100State, input: bool) -> Moore1100State {
        use Moore1100State::*;
        match (state, input) {
            (S0, false) => S0,
            (S0, true) => S1,
            (S1, false) => S0,
            (S1, true) => S2,
            (S2, false) => S3,
            (S2, true) => S2,
            (S3, false) => S4,
            (S3, true) => S1,
            (S4, false) => S0,
            (S4, true) => S1,
        }
    }
}

impl OutputPolicy for Moore1100 {
    const STYLE: MachineStyle = MachineStyle::Moore;

    fn output(state: Moore1100State, _input: bool) -> bool {
        state == Moore1100State::S4
    }
}
