//! Clocked sequence detector.
//!
//! A [`SequenceDetector`] wires a [`ClockedRegister`] to a variant's
//! [`TransitionTable`] and [`OutputPolicy`]. Each tick it
//!
//! 1. samples the input bit and the reset flag,
//! 2. computes the next state (the initial state if reset is asserted),
//! 3. latches it in the register, and
//! 4. reports the match output: Mealy variants read the pre-tick state and
//!    the input, Moore variants read the freshly latched state.
//!
//! An asserted reset clears the register before the output logic looks at it,
//! so a reset tick always reports the initial state's output.

use std::marker::PhantomData;

use seqfsm_common::{ClockedRegister, Config, FsmError, ResetPolarity};
use tracing::{debug, trace};

use crate::traits::{Clocked, FsmState, MachineStyle, OutputPolicy, Transition, run_clocked};
use crate::variants::{Mealy1101, Moore1100};

/// Detector for the sequence `1101` with Mealy output timing.
pub type Mealy1101Detector = SequenceDetector<Mealy1101>;

/// Detector for the sequence `1100` with Moore output timing.
pub type Moore1100Detector = SequenceDetector<Moore1100>;

/// A continuously running recognizer for one detector variant.
#[derive(Debug, Clone)]
pub struct SequenceDetector<V: OutputPolicy> {
    /// The only mutable piece of the machine.
    register: ClockedRegister<V::State>,
    /// Interpretation of raw reset levels for [`Self::clock`].
    polarity: ResetPolarity,
    _variant: PhantomData<V>,
}

impl<V: OutputPolicy> SequenceDetector<V> {
    /// Creates a detector in the reset state with an active-low reset line.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(V::State::INITIAL, ResetPolarity::default())
    }

    /// Creates a detector in the reset state using the configured reset polarity.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_state(V::State::INITIAL, config.reset_polarity)
    }

    /// Creates a detector whose register already holds the raw value `code`.
    ///
    /// Codes outside the state set are rejected rather than mapped to `S0`.
    pub fn from_encoded(code: u8) -> Result<Self, FsmError> {
        let state = V::State::from_encoding(code)?;
        Ok(Self::with_state(state, ResetPolarity::default()))
    }

    fn with_state(state: V::State, polarity: ResetPolarity) -> Self {
        let mut register = ClockedRegister::new(V::State::INITIAL);
        register.tick(false, state);
        Self {
            register,
            polarity,
            _variant: PhantomData,
        }
    }

    /// Advances the detector by one tick and returns the match output.
    pub fn tick(&mut self, reset: bool, input: bool) -> bool {
        let (step, output) = self.step(reset, input);

        if reset {
            debug!("{}: reset asserted in {}", V::NAME, step.state);
        }
        trace!("{}: {}, out={}", V::NAME, step, u8::from(output));
        if output {
            debug!("{}: matched {}", V::NAME, V::PATTERN);
        }

        output
    }

    /// Applies one tick and returns the register move it made with the output.
    ///
    /// The returned transition starts from the state held before the tick, even
    /// when reset cleared it before the output logic ran.
    fn step(&mut self, reset: bool, input: bool) -> (Transition<V::State>, bool) {
        let before = self.register.get();
        let current = if reset { self.register.initial() } else { before };
        let latched = self.register.tick(reset, V::next_state(current, input));

        let output = match V::STYLE {
            MachineStyle::Mealy => V::output(current, input),
            MachineStyle::Moore => V::output(latched, input),
        };
        let step = Transition {
            state: before,
            input,
            next: latched,
        };
        (step, output)
    }

    /// Advances one tick from a raw reset line level, honoring the configured polarity.
    pub fn clock(&mut self, reset_level: bool, input: bool) -> bool {
        let reset = self.polarity.is_asserted(reset_level);
        self.tick(reset, input)
    }

    /// Feeds a bit stream with reset deasserted and returns one output per tick.
    pub fn run<I: IntoIterator<Item = bool>>(&mut self, bits: I) -> Vec<bool> {
        run_clocked(self, bits)
    }

    /// Returns the registered state.
    #[must_use]
    pub const fn state(&self) -> V::State {
        self.register.get()
    }

    /// Returns the register encoding of the current state.
    #[must_use]
    pub fn encoded_state(&self) -> u8 {
        self.register.get().encoding()
    }

    /// Returns the output logic's value for the registered state and `input`.
    ///
    /// Moore variants ignore `input`, so this is the level held since the last
    /// tick. For Mealy variants it is the output the next tick will report for
    /// `input` when reset stays deasserted.
    #[must_use]
    pub fn output(&self, input: bool) -> bool {
        V::output(self.register.get(), input)
    }

    /// Returns the reset polarity used by [`Self::clock`].
    #[must_use]
    pub const fn polarity(&self) -> ResetPolarity {
        self.polarity
    }

    /// Returns the output timing of this variant.
    #[must_use]
    pub const fn style(&self) -> MachineStyle {
        V::STYLE
    }

    /// Forces the register to the initial state outside the tick protocol.
    pub fn reset(&mut self) {
        self.register.reset();
    }
}

impl<V: OutputPolicy> Default for SequenceDetector<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: OutputPolicy> Clocked for SequenceDetector<V> {
    type Input = bool;
    type Output = bool;

    fn tick(&mut self, reset: bool, input: bool) -> bool {
        Self::tick(self, reset, input)
    }

    fn reset(&mut self) {
        Self::reset(self);
    }
}
