//! Execution units and functional components.
//!
//! This module contains the processor's execution units: the ALU with its
//! flag helpers, the addressing-mode decoder of the load/store unit, and the
//! branch condition evaluator.

/// Arithmetic Logic Unit for 16-bit word operations.
pub mod alu;

/// Branch Resolution Unit: condition decode and evaluation.
pub mod bru;

/// Load/Store Unit: addressing-mode decode and base address computation.
pub mod lsu;
