//! Clocked storage primitive.
//!
//! A [`ClockedRegister`] models a flip-flop bank with an asynchronous reset:
//! the held value only changes at a tick, and an asserted reset wins over
//! whatever the next-value logic computed for that tick.

use contracts::*;

/// A value register updated once per discrete tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockedRegister<T> {
    /// Value currently held.
    value: T,
    /// Value loaded on reset.
    initial: T,
}

impl<T: Copy + PartialEq> ClockedRegister<T> {
    /// Creates a register holding its reset value.
    pub const fn new(initial: T) -> Self {
        Self {
            value: initial,
            initial,
        }
    }

    /// Returns the value held since the last tick.
    #[must_use]
    pub const fn get(&self) -> T {
        self.value
    }

    /// Returns the value the register is forced to on reset.
    #[must_use]
    pub const fn initial(&self) -> T {
        self.initial
    }

    /// Returns true if the register currently holds its reset value.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.value == self.initial
    }

    /// Latches `next` unless reset is asserted, and returns the new value.
    ///
    /// Reset takes priority over the computed next value.
    #[ensures(!reset || ret == self.initial, "asserted reset must load the initial value")]
    #[ensures(reset || ret == next)]
    pub fn tick(&mut self, reset: bool, next: T) -> T {
        self.value = if reset { self.initial } else { next };
        self.value
    }

    /// Forces the register to its reset value outside of a tick.
    pub fn reset(&mut self) {
        self.value = self.initial;
    }
}

impl<T: Copy + PartialEq + Default> Default for ClockedRegister<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
