//! Concrete detector variants.

pub mod mealy_1101;
pub mod moore_1100;

pub use mealy_1101::{Mealy1101, Mealy1101State};
pub use moore_1100::{Moore1100, Moore1100State};
