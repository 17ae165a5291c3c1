//! Bit-string helpers.
//!
//! Streams are written the way they appear on a waveform, oldest bit first,
//! with optional `_` separators as in Verilog literals (`"1101_1101"`).

use itertools::Itertools;

use crate::FsmError;

/// Parses a string of `0`/`1` characters into a bit stream.
pub fn parse_bits(s: &str) -> Result<Vec<bool>, FsmError> {
    s.chars()
        .enumerate()
        .filter(|(_, c)| *c != '_')
        .map(|(index, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(FsmError::invalid_bit(index, other)),
        })
        .collect()
}

/// Renders a bit stream as a string of `0`/`1` characters.
#[must_use]
pub fn format_bits(bits: &[bool]) -> String {
    bits.iter().map(|b| if *b { '1' } else { '0' }).join("")
}
