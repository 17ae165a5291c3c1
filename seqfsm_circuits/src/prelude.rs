//! Convenience re-exports for working with the circuit models.

pub use crate::debounce::DebounceCounter;
pub use crate::detector::{Mealy1101Detector, Moore1100Detector, SequenceDetector};
pub use crate::traits::{
    Clocked, FsmState, MachineStyle, OutputPolicy, Transition, TransitionTable, run_clocked,
};
pub use crate::variants::{Mealy1101, Mealy1101State, Moore1100, Moore1100State};

pub use seqfsm_common::{
    ClockedRegister, Config, ConfigBuilder, FsmError, ResetPolarity, format_bits, parse_bits,
};
