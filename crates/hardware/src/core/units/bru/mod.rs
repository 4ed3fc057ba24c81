//! Branch Resolution Unit (BRU).
//!
//! Decodes the condition of a branch opcode (0x12-0x23) and evaluates it against
//! the current flags. Opcodes come in pairs: the even opcode branches to the
//! operand, the odd one to operand + X.

use crate::core::arch::StatusBits;

/// Condition tested by a branch instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCondition {
    /// `BR`: unconditional.
    Always,
    /// `BRLE`: N or Z.
    LessEqual,
    /// `BRLT`: N.
    Less,
    /// `BREQ`: Z.
    Equal,
    /// `BRNE`: not Z.
    NotEqual,
    /// `BRGE`: not N.
    GreaterEqual,
    /// `BRGT`: neither N nor Z.
    Greater,
    /// `BRV`: V.
    Overflow,
    /// `BRC`: C.
    Carry,
}

impl BranchCondition {
    /// Decodes a branch opcode. Returns `None` outside 0x12-0x23.
    pub const fn from_opcode(opcode: u8) -> Option<Self> {
        Some(match opcode {
            0x12 | 0x13 => Self::Always,
            0x14 | 0x15 => Self::LessEqual,
            0x16 | 0x17 => Self::Less,
            0x18 | 0x19 => Self::Equal,
            0x1A | 0x1B => Self::NotEqual,
            0x1C | 0x1D => Self::GreaterEqual,
            0x1E | 0x1F => Self::Greater,
            0x20 | 0x21 => Self::Overflow,
            0x22 | 0x23 => Self::Carry,
            _ => return None,
        })
    }

    /// Evaluates the condition against `flags`.
    pub const fn is_taken(self, flags: &StatusBits) -> bool {
        match self {
            Self::Always => true,
            Self::LessEqual => flags.n || flags.z,
            Self::Less => flags.n,
            Self::Equal => flags.z,
            Self::NotEqual => !flags.z,
            Self::GreaterEqual => !flags.n,
            Self::Greater => !flags.n && !flags.z,
            Self::Overflow => flags.v,
            Self::Carry => flags.c,
        }
    }
}
