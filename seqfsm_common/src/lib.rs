//! Common utilities and shared types for the seqfsm workspace.
//!
//! This crate provides the clocked register primitive, configuration handling,
//! the error type, and bit-string helpers used across the circuit models.

mod bits;
mod config;
mod error;
mod register;

pub use crate::bits::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::register::*;
