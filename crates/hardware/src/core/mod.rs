//! Core processor implementation.
//!
//! This module contains the CPU implementation: the architectural state, the
//! execution units, and the `Cpu` type that owns memory and runs the
//! fetch-decode-execute loop.

/// Architectural state (registers, status flags).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Execution units (ALU, addressing modes, branch conditions).
pub mod units;

pub use self::cpu::Cpu;
