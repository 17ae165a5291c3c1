//! Integration test suite for the circuit models.
//!
//! Drives the detectors and the debounce counter through the scenario
//! streams they are expected to recognize, tick by tick.

mod counters;
mod detectors;
