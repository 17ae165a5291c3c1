//! Clocked circuit models: sequence detectors and a debounce counter.
//!
//! Every circuit here is a synchronous, single-writer state machine advanced
//! one discrete tick at a time through the [`Clocked`](traits::Clocked) trait.
//! The two sequence detectors share one generic [`SequenceDetector`] and
//! differ only in their [`TransitionTable`](traits::TransitionTable) and
//! [`OutputPolicy`](traits::OutputPolicy).

pub mod debounce;
pub mod detector;
pub mod prelude;
pub mod traits;
pub mod variants;

pub use debounce::DebounceCounter;
pub use detector::{Mealy1101Detector, Moore1100Detector, SequenceDetector};
