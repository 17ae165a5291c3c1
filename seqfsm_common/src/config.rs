//! Configuration shared by the circuit models.
//!
//! The circuits themselves are fixed; what varies between boards is how the
//! raw reset line is wired and how wide the debounce counter is.
//!
//! ```ignore
//! use seqfsm_common::{Config, ResetPolarity};
//! let cfg = Config::builder()
//!     .reset_polarity(ResetPolarity::ActiveHigh)
//!     .debounce_width(4)
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

use crate::FsmError;

/// Widest debounce counter the register model supports.
pub const MAX_COUNTER_WIDTH: u8 = 8;

/// Counter width used when none is configured (terminal count 7).
pub const DEFAULT_COUNTER_WIDTH: u8 = 3;

/// Which level of the raw reset line means "reset asserted".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolarity {
    /// Reset is asserted while the line is low (`rst_n`).
    #[default]
    ActiveLow,
    /// Reset is asserted while the line is high.
    ActiveHigh,
}

impl ResetPolarity {
    /// Converts a raw reset line level into the asserted flag.
    #[must_use]
    pub const fn is_asserted(self, level: bool) -> bool {
        match self {
            Self::ActiveLow => !level,
            Self::ActiveHigh => level,
        }
    }

    /// Returns the line level that keeps the circuit out of reset.
    #[must_use]
    pub const fn idle_level(self) -> bool {
        matches!(self, Self::ActiveLow)
    }
}

impl std::fmt::Display for ResetPolarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ActiveLow => write!(f, "active-low"),
            Self::ActiveHigh => write!(f, "active-high"),
        }
    }
}

/// Circuit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How raw reset levels are interpreted by `clock` entry points.
    pub reset_polarity: ResetPolarity,
    /// Width of the debounce counter in bits.
    pub debounce_width: u8,
}

impl Config {
    /// Starts a builder seeded with the defaults.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Checks that the configured values can be realized by the circuit models.
    pub const fn validate(&self) -> Result<(), FsmError> {
        validate_counter_width(self.debounce_width)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reset_polarity: ResetPolarity::default(),
            debounce_width: DEFAULT_COUNTER_WIDTH,
        }
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Sets the reset line polarity.
    pub const fn reset_polarity(mut self, polarity: ResetPolarity) -> Self {
        self.config.reset_polarity = polarity;
        self
    }

    /// Shorthand for an active-high reset line.
    pub const fn active_high_reset(self) -> Self {
        self.reset_polarity(ResetPolarity::ActiveHigh)
    }

    /// Sets the debounce counter width in bits.
    pub const fn debounce_width(mut self, width: u8) -> Self {
        self.config.debounce_width = width;
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}

/// Rejects counter widths that do not fit the register model.
pub const fn validate_counter_width(width: u8) -> Result<(), FsmError> {
    if width == 0 || width > MAX_COUNTER_WIDTH {
        return Err(FsmError::InvalidCounterWidth(width));
    }
    Ok(())
}
