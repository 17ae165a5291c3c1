//! Saturating debounce counter.
//!
//! The counter clears whenever the raw input is low and counts up while it is
//! high, holding at its terminal count (`2^width - 1`). The clean output is
//! high exactly while the counter sits at terminal count, so it rises on the
//! tick the count first reaches it and stays up until the raw input drops.

use contracts::*;
use seqfsm_common::{
    ClockedRegister, Config, DEFAULT_COUNTER_WIDTH, FsmError, MAX_COUNTER_WIDTH, ResetPolarity,
    validate_counter_width,
};
use tracing::{debug, trace};

use crate::traits::Clocked;

/// A bounded counter that filters a noisy input into a clean level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceCounter {
    count: ClockedRegister<u8>,
    clean: ClockedRegister<bool>,
    width: u8,
    terminal_count: u8,
    polarity: ResetPolarity,
}

impl DebounceCounter {
    /// Creates a 3-bit counter (terminal count 7).
    #[must_use]
    pub fn new() -> Self {
        Self::build(DEFAULT_COUNTER_WIDTH, ResetPolarity::default())
    }

    /// Creates a counter `width` bits wide.
    pub fn with_width(width: u8) -> Result<Self, FsmError> {
        validate_counter_width(width)?;
        Ok(Self::build(width, ResetPolarity::default()))
    }

    /// Creates a counter from the configured width and reset polarity.
    pub fn from_config(config: &Config) -> Result<Self, FsmError> {
        config.validate()?;
        Ok(Self::build(config.debounce_width, config.reset_polarity))
    }

    #[requires((1..=MAX_COUNTER_WIDTH).contains(&width))]
    fn build(width: u8, polarity: ResetPolarity) -> Self {
        Self {
            count: ClockedRegister::new(0),
            clean: ClockedRegister::new(false),
            width,
            terminal_count: u8::MAX >> (MAX_COUNTER_WIDTH - width),
            polarity,
        }
    }

    /// Advances the counter by one tick and returns the clean output.
    #[ensures(self.count() <= self.terminal_count())]
    #[ensures(ret == (self.count() == self.terminal_count()))]
    pub fn tick(&mut self, reset: bool, raw: bool) -> bool {
        let was_clean = self.clean.get();
        let current = self.count.get();

        let next = match (raw, current < self.terminal_count) {
            (false, _) => 0,
            (true, true) => current + 1,
            (true, false) => current,
        };
        let count = self.count.tick(reset, next);
        let clean = self.clean.tick(reset, raw && count == self.terminal_count);

        trace!(
            "debounce: raw={} count {} -> {}, clean={}",
            u8::from(raw),
            current,
            count,
            u8::from(clean)
        );
        if clean != was_clean {
            debug!(
                "debounce: clean output {} at count {}",
                if clean { "rose" } else { "fell" },
                count
            );
        }

        clean
    }

    /// Advances one tick from a raw reset line level, honoring the configured polarity.
    pub fn clock(&mut self, reset_level: bool, raw: bool) -> bool {
        let reset = self.polarity.is_asserted(reset_level);
        self.tick(reset, raw)
    }

    /// Returns the current count.
    #[must_use]
    pub const fn count(&self) -> u8 {
        self.count.get()
    }

    /// Returns the clean output.
    #[must_use]
    pub const fn clean(&self) -> bool {
        self.clean.get()
    }

    /// Returns the count at which the counter saturates.
    #[must_use]
    pub const fn terminal_count(&self) -> u8 {
        self.terminal_count
    }

    /// Returns the counter width in bits.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Clears the counter and the clean output.
    pub fn reset(&mut self) {
        self.count.reset();
        self.clean.reset();
    }
}

impl Default for DebounceCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Clocked for DebounceCounter {
    type Input = bool;
    type Output = bool;

    fn tick(&mut self, reset: bool, raw: bool) -> bool {
        Self::tick(self, reset, raw)
    }

    fn reset(&mut self) {
        Self::reset(self);
    }
}
