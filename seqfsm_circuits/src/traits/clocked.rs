/// A synchronous circuit advanced one discrete tick at a time.
pub trait Clocked {
    /// Value sampled on each tick.
    type Input;
    /// Value observable after each tick.
    type Output;

    /// Advances the circuit by one tick.
    ///
    /// An asserted `reset` returns the circuit to its reset state within the
    /// same tick, whatever `input` is.
    fn tick(&mut self, reset: bool, input: Self::Input) -> Self::Output;

    /// Forces the circuit into its reset state without advancing time.
    fn reset(&mut self);
}

/// Feeds `inputs` to `circuit` with reset deasserted and collects one output per tick.
pub fn run_clocked<C, I>(circuit: &mut C, inputs: I) -> Vec<C::Output>
where
    C: Clocked,
    I: IntoIterator<Item = C::Input>,
{
    inputs
        .into_iter()
        .map(|input| circuit.tick(false, input))
        .collect()
}
