//! Pep/9 Register File.
//!
//! This module implements the programmer-visible registers. It performs the following:
//! 1. **Storage:** Accumulator, index register, program counter, and stack pointer.
//! 2. **Instruction Register:** The last fetched opcode and operand.
//! 3. **Selection:** The [`Reg`] tag used by instructions that operate on "A or X".

use std::fmt;

use crate::common::constants::{REGISTER_BIT_0, REGISTER_BIT_3};

/// Programmer-visible registers plus the decoded instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: u16,
    /// Index register.
    pub x: u16,
    /// Program counter: byte offset of the next instruction.
    pub pc: u16,
    /// Stack pointer: grows downward.
    pub sp: u16,
    /// Last fetched instruction byte.
    pub opcode: u8,
    /// Last fetched operand; stale for opcodes below 0x12.
    pub operand: u16,
}

/// Selects the accumulator or the index register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg {
    /// Accumulator.
    A,
    /// Index register.
    X,
}

impl Reg {
    /// Register encoded by bit 3 (load, store, compare, arithmetic).
    pub const fn from_bit3(opcode: u8) -> Self {
        Self::from_mask(opcode, REGISTER_BIT_3)
    }

    /// Register encoded by bit 0 (unary instructions).
    pub const fn from_bit0(opcode: u8) -> Self {
        Self::from_mask(opcode, REGISTER_BIT_0)
    }

    const fn from_mask(opcode: u8, mask: u8) -> Self {
        if opcode & mask == 0 { Self::A } else { Self::X }
    }
}

impl Registers {
    /// Reads the selected register.
    pub const fn read(&self, reg: Reg) -> u16 {
        match reg {
            Reg::A => self.a,
            Reg::X => self.x,
        }
    }

    /// Writes the selected register.
    pub const fn write(&mut self, reg: Reg, val: u16) {
        match reg {
            Reg::A => self.a = val,
            Reg::X => self.x = val,
        }
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A={:#06x} X={:#06x} SP={:#06x} PC={:#06x} IR={:#04x}",
            self.a, self.x, self.sp, self.pc, self.opcode
        )?;
        if self.opcode >= crate::common::constants::OPERAND_THRESHOLD {
            write!(f, " {:#06x}", self.operand)?;
        }
        Ok(())
    }
}
