//! Core traits shared by the circuit models.

mod clocked;
mod state;
mod table;

pub use clocked::{Clocked, run_clocked};
pub use state::FsmState;
pub use table::{MachineStyle, OutputPolicy, Transition, TransitionTable};
