//! Pep/9 architectural state.
//!
//! This module contains the programmer-visible state of the machine:
//! 1. **Registers:** A, X, PC, SP and the instruction register.
//! 2. **Status:** The NZVC condition flags.

/// Register file and register selection.
pub mod registers;

/// Condition code flags.
pub mod status;

pub use registers::{Reg, Registers};
pub use status::StatusBits;
