//! Mealy-style detector for the sequence `1101`.
//!
//! The match output rises in the same tick that the completing `1` arrives,
//! while the machine is still in [`Mealy1101State::S3`]. Overlapping matches
//! are recognized: the trailing `1` of a match starts the next prefix.

use std::fmt;

use crate::traits::{FsmState, MachineStyle, OutputPolicy, TransitionTable};

/// States of the `1101` Mealy detector, named after the matched prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mealy1101State {
    /// Nothing useful matched.
    #[default]
    S0,
    /// Prefix `1`.
    S1,
    /// Prefix `11`; further ones keep the machine here.
    S2,
    /// Prefix `110`; a `1` completes the match.
    S3,
}

impl fmt::Display for Mealy1101State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.encoding())
    }
}

impl FsmState for Mealy1101State {
    const MACHINE: &'static str = Mealy1101::NAME;
    const INITIAL: Self = Self::S0;
    const ALL: &'static [Self] = &[Self::S0, Self::S1, Self::S2, Self::S3];

    fn encoding(self) -> u8 {
        self as u8
    }
}

/// Table and output logic of the `1101` Mealy detector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mealy1101;

impl TransitionTable for Mealy1101 {
    type State = Mealy1101State;

    const NAME: &'static str = "mealy_1101";
    const PATTERN: &'static str = "1101";

    fn next_state(state: Mealy1101State, input: bool) -> Mealy1101State {
        use Mealy1101State::*;
        match (state, input) {
            (S0, false) => S0,
            (S0, true) => S1,
            (S1, false) => S0,
            (S1, true) => S2,
            (S2, false) => S3,
            (S2, true) => S2,
            (S3, false) => S0,
            (S3, true) => S1,
        }
    }
}

impl OutputPolicy for Mealy1101 {
    const STYLE: MachineStyle = MachineStyle::Mealy;

    fn output(state: Mealy1101State, input: bool) -> bool {
        state == Mealy1101State::S3 && input
    }
}
