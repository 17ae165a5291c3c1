use std::fmt::{Debug, Display};
use std::hash::Hash;

use seqfsm_common::FsmError;

/// A closed, enumerated state set for a finite-state machine.
///
/// Each state has a binary register encoding; `S0` is always encoded as 0 and
/// is the reset state.
pub trait FsmState: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static {
    /// Name of the machine this state set belongs to, used in diagnostics.
    const MACHINE: &'static str;

    /// The reset state.
    const INITIAL: Self;

    /// Every state, in encoding order.
    const ALL: &'static [Self];

    /// Register encoding of this state.
    fn encoding(self) -> u8;

    /// Decodes a register value, rejecting codes outside the state set.
    fn from_encoding(code: u8) -> Result<Self, FsmError> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.encoding() == code)
            .ok_or_else(|| {
                tracing::warn!("rejected register code {} for {}", code, Self::MACHINE);
                FsmError::invalid_encoding(Self::MACHINE, code)
            })
    }

    /// Number of register bits needed to hold every encoding.
    fn register_width() -> u32 {
        let max = Self::ALL.iter().map(|s| s.encoding()).max().unwrap_or(0);
        (u8::BITS - max.leading_zeros()).max(1)
    }
}
