//! Addressing-Mode Resolution.
//!
//! This module resolves the operand of the current instruction against memory. It
//! performs the following:
//! 1. **Effective Address:** Base address from the registers, then one pointer
//!    dereference (always a word) for the deferred modes.
//! 2. **Load:** Reads a byte (zero-extended) or word, or takes the operand itself
//!    for immediate mode, and sets N and Z from the value.
//! 3. **Store:** Writes a byte (low half) or word; immediate mode is rejected.

use super::Cpu;
use crate::common::data::Width;
use crate::common::error::MachineError;
use crate::core::units::lsu::AddressingMode;

impl Cpu {
    /// Effective address of the current operand, or `None` for immediate mode.
    pub fn effective_address(&mut self, mode: AddressingMode) -> Option<u16> {
        let base = mode.base_address(self.regs.operand, self.regs.sp, self.regs.x)?;
        if mode.is_deferred() {
            Some(self.memory.read_u16(base))
        } else {
            Some(base)
        }
    }

    /// Resolves the current operand as a value and sets N and Z from it.
    ///
    /// Immediate byte loads take the low byte of the operand.
    pub fn load_operand(&mut self, mode: AddressingMode, width: Width) -> u16 {
        let value = match (self.effective_address(mode), width) {
            (None, Width::Word) => self.regs.operand,
            (None, Width::Byte) => self.regs.operand & 0x00FF,
            (Some(addr), Width::Word) => self.memory.read_u16(addr),
            (Some(addr), Width::Byte) => u16::from(self.memory.read_u8(addr)),
        };
        self.status.set_nz(value);
        value
    }

    /// Writes `value` to the location named by the current operand.
    ///
    /// # Errors
    ///
    /// [`MachineError::InvalidStoreTarget`] if `mode` is immediate; memory is
    /// left unchanged.
    pub fn store_operand(
        &mut self,
        mode: AddressingMode,
        width: Width,
        value: u16,
    ) -> Result<(), MachineError> {
        let addr = self
            .effective_address(mode)
            .ok_or(MachineError::InvalidStoreTarget {
                opcode: self.regs.opcode,
                pc: self.instruction_pc,
            })?;
        match width {
            Width::Byte => self.memory.write_u8(addr, value as u8),
            Width::Word => self.memory.write_u16(addr, value),
        }
        Ok(())
    }
}
