//! Error types for the circuit models.
//!
//! Transition and output logic is total, so nothing here is raised while a
//! circuit is ticking. Errors only come from decoding raw values at the edges:
//! register encodings, bit strings, and counter widths.

use thiserror::Error;

/// Errors that can occur while constructing or decoding circuit values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    /// A raw register code does not name any state of the machine.
    ///
    /// The state set is closed, so this indicates an internal-consistency
    /// failure in whatever produced the code.
    #[error("Internal: register code {code:#04b} is not a state of {machine}")]
    InvalidEncoding {
        /// Name of the machine whose state set was violated.
        machine: &'static str,
        /// The offending register value.
        code: u8,
    },

    /// A bit string contained something other than `0`, `1` or `_`.
    #[error("Invalid bit '{found}' at index {index}")]
    InvalidBit {
        /// Character offset into the source string.
        index: usize,
        /// The rejected character.
        found: char,
    },

    /// A counter width that cannot be held in the register.
    #[error("Counter width must be between 1 and {max} bits, got {0}", max = crate::MAX_COUNTER_WIDTH)]
    InvalidCounterWidth(u8),
}

impl FsmError {
    /// Create an invalid encoding error.
    pub const fn invalid_encoding(machine: &'static str, code: u8) -> Self {
        Self::InvalidEncoding { machine, code }
    }

    /// Create an invalid bit error.
    pub const fn invalid_bit(index: usize, found: char) -> Self {
        Self::InvalidBit { index, found }
    }

    /// Returns true if the error reports a broken state-set invariant.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::InvalidEncoding { .. })
    }
}
