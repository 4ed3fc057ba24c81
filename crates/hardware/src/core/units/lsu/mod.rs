//! Load/Store Unit (LSU).
//!
//! This module decodes the eight Pep/9 addressing modes from the low three bits
//! of an opcode and computes the pre-deferral base address for each. The memory
//! side of resolution (following pointer cells, reading or writing the
//! operand) lives on [`crate::core::Cpu`], which owns the memory.
//!
//! | bits | mode | effective location |
//! |------|------|--------------------|
//! | 0 | immediate | the operand itself |
//! | 1 | direct | `Mem[Op]` |
//! | 2 | indirect | `Mem[Mem[Op]]` |
//! | 3 | stack-relative | `Mem[SP + Op]` |
//! | 4 | stack-relative deferred | `Mem[Mem[SP + Op]]` |
//! | 5 | indexed | `Mem[Op + X]` |
//! | 6 | stack-indexed | `Mem[SP + Op + X]` |
//! | 7 | stack-deferred indexed | `Mem[Mem[SP + Op + X]]` |

use crate::common::constants::MODE_MASK;

/// Pep/9 addressing mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressingMode {
    /// `i`: the operand is the value.
    Immediate,
    /// `d`: `Mem[Op]`.
    Direct,
    /// `n`: `Mem[Mem[Op]]`.
    Indirect,
    /// `s`: `Mem[SP + Op]`.
    StackRelative,
    /// `sf`: `Mem[Mem[SP + Op]]`.
    StackRelativeDeferred,
    /// `x`: `Mem[Op + X]`.
    Indexed,
    /// `sx`: `Mem[SP + Op + X]`.
    StackIndexed,
    /// `sfx`: `Mem[Mem[SP + Op + X]]`.
    StackDeferredIndexed,
}

impl AddressingMode {
    /// Decodes the `aaa` field (low three bits) of an opcode.
    pub const fn from_opcode(opcode: u8) -> Self {
        match opcode & MODE_MASK {
            0 => Self::Immediate,
            1 => Self::Direct,
            2 => Self::Indirect,
            3 => Self::StackRelative,
            4 => Self::StackRelativeDeferred,
            5 => Self::Indexed,
            6 => Self::StackIndexed,
            _ => Self::StackDeferredIndexed,
        }
    }

    /// True for the modes whose base address holds a pointer word.
    pub const fn is_deferred(self) -> bool {
        matches!(
            self,
            Self::Indirect | Self::StackRelativeDeferred | Self::StackDeferredIndexed
        )
    }

    /// Address computed from the registers, before any pointer is followed.
    ///
    /// Returns `None` for [`AddressingMode::Immediate`], which names no location.
    /// All additions wrap at 0xFFFF.
    pub const fn base_address(self, operand: u16, sp: u16, x: u16) -> Option<u16> {
        match self {
            Self::Immediate => None,
            Self::Direct | Self::Indirect => Some(operand),
            Self::StackRelative | Self::StackRelativeDeferred => Some(sp.wrapping_add(operand)),
            Self::Indexed => Some(operand.wrapping_add(x)),
            Self::StackIndexed | Self::StackDeferredIndexed => {
                Some(sp.wrapping_add(operand).wrapping_add(x))
            }
        }
    }
}
