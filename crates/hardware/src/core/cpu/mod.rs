//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Owns the register file, status flags, and halt latch.
//! 2. **Memory:** Owns RAM and the memory-mapped console buffers.
//! 3. **Lifecycle:** `initialize`, `load_program`, and `run` for host collaborators.
//! 4. **Observability:** Instruction tracing and statistics collection.

/// Fetch/run loop.
pub mod execution;

/// Instruction family implementations.
pub mod instructions;

/// Addressing-mode resolution against memory.
pub mod memory;

use tracing::{debug, warn};

use crate::common::constants::{RAM_SIZE, RESET_PC};
use crate::config::Config;
use crate::core::arch::{Registers, StatusBits};
use crate::soc::Memory;
use crate::stats::SimStats;

/// The whole Pep/9 machine.
///
/// There is exactly one mutable instance per run; every instruction is a method
/// on it and mutates its registers, flags, and memory in place.
#[derive(Debug)]
pub struct Cpu {
    /// Programmer-visible registers and the instruction register.
    pub regs: Registers,
    /// NZVC condition flags.
    pub status: StatusBits,
    /// RAM and console buffers.
    pub memory: Memory,
    /// Set by a fatal error; cleared by [`Cpu::initialize`].
    pub halted: bool,
    /// Emit a `trace` event for every executed instruction.
    pub trace: bool,
    /// Performance statistics.
    pub stats: SimStats,
    /// Address the current instruction was fetched from.
    pub(crate) instruction_pc: u16,
    reset_sp: u16,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Cpu {
    /// Creates a machine with zeroed memory and registers.
    ///
    /// Registers stay zero until [`Cpu::initialize`] applies the reset values
    /// from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Registers::default(),
            status: StatusBits::default(),
            memory: Memory::new(),
            halted: false,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            instruction_pc: RESET_PC,
            reset_sp: config.general.initial_sp,
        }
    }

    /// Resets PC to 0, A and X to 0, SP to the configured value, and clears the
    /// halt latch.
    ///
    /// RAM, the console buffers, the flags, and the instruction register are
    /// left untouched.
    pub fn initialize(&mut self) {
        self.regs.pc = RESET_PC;
        self.regs.a = 0;
        self.regs.x = 0;
        self.regs.sp = self.reset_sp;
        self.halted = false;
        debug!(
            pc = RESET_PC,
            sp = self.reset_sp,
            "machine initialized"
        );
    }

    /// Copies `program` into RAM starting at address 0.
    ///
    /// Nothing else is reset. An image larger than RAM is truncated.
    pub fn load_program(&mut self, program: &[u8]) {
        let written = self.memory.load(program);
        if written < program.len() {
            warn!(
                len = program.len(),
                capacity = RAM_SIZE,
                "program image truncated to fit RAM"
            );
        }
        debug!(bytes = written, "program loaded");
    }

    /// Formats the registers and flags on one line.
    pub fn dump_state(&self) -> String {
        format!("{} NZVC={}", self.regs, self.status)
    }
}
