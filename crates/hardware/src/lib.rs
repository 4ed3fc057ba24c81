//! Pep/9 instruction-set simulator library.
//!
//! This crate implements the Pep/9 accumulator machine with the following:
//! 1. **Core:** Registers, NZVC flags, and the fetch-decode-execute loop.
//! 2. **Memory:** 64 KiB of RAM with memory-mapped console ports at 0xFC15/0xFC16.
//! 3. **ISA:** Opcode decoding into instruction families and addressing modes.
//! 4. **Simulation:** Image loader, configuration, bounded runs, and statistics.

/// Common types and constants (widths, port addresses, errors).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (arch state, execution units, instruction semantics).
pub mod core;
/// Instruction set decoding.
pub mod isa;
/// Program loader and top-level simulator.
pub mod sim;
/// Memory and console devices.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, flags, memory, and stats.
pub use crate::core::Cpu;
/// Bounded driver around the CPU run loop.
pub use crate::sim::Simulator;
