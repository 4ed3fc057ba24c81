//! Main Execution Loop.
//!
//! This module implements the von Neumann cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the opcode at PC and, for opcodes from 0x12 up, the
//!    big-endian operand that follows.
//! 2. **Dispatch:** Hands the instruction to the family implementations.
//! 3. **Termination:** Loops while `(!halted && opcode != STOP) || pc == 0`.
//!
//! The `pc == 0` disjunct means the first fetch from address 0 always executes,
//! and a STOP fetched from 0xFFFF (which wraps PC to 0) does not end the run.

use tracing::{debug, error};

use super::Cpu;
use crate::common::constants::HALT_OPCODE;
use crate::common::error::MachineError;
use crate::isa::has_operand;

impl Cpu {
    /// Runs until STOP or a fatal error.
    ///
    /// Never yields; callers needing a bound should drive [`Cpu::step`] themselves
    /// (see [`crate::sim::Simulator`]).
    pub fn run(&mut self) -> Result<(), MachineError> {
        while self.is_running() {
            self.step()?;
        }
        debug!(
            pc = self.regs.pc,
            instructions = self.stats.instructions_retired,
            "machine halted"
        );
        Ok(())
    }

    /// The loop condition of [`Cpu::run`].
    pub const fn is_running(&self) -> bool {
        (!self.halted && self.regs.opcode != HALT_OPCODE) || self.regs.pc == 0
    }

    /// Performs one fetch and execute.
    ///
    /// A fatal error latches `halted` before it is returned.
    pub fn step(&mut self) -> Result<(), MachineError> {
        self.fetch();
        self.execute().inspect_err(|e| {
            self.halted = true;
            error!(opcode = e.opcode(), "{e}");
        })
    }

    fn fetch(&mut self) {
        self.instruction_pc = self.regs.pc;
        self.regs.opcode = self.memory.read_u8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);

        if has_operand(self.regs.opcode) {
            self.regs.operand = self.memory.read_u16(self.regs.pc);
            self.regs.pc = self.regs.pc.wrapping_add(2);
        }
    }
}
