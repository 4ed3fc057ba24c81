//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 16-bit ALU shared by the arithmetic, compare,
//! and unary instruction families.
//!
//! Operations are organized into submodules by category:
//! - [`flags`]:  NZVC helpers (negative, carry, overflow, sign change)
//! - [`shifts`]: Asl, Asr, Rol, Ror

/// Condition-code helpers.
pub mod flags;

/// Shift and rotate operations.
pub mod shifts;

use self::flags::{is_carry, is_overflow};
use crate::core::arch::StatusBits;

/// Binary ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// `a + b`.
    Add,
    /// `a - b`.
    Sub,
    /// `a & b`.
    And,
    /// `a | b`.
    Or,
}

/// Arithmetic Logic Unit for 16-bit word operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes a binary operation and updates the flags it defines.
    ///
    /// Add and Sub set V and C from the pre-operation operands (Sub adds the
    /// negation of `b`). All four set N and Z from the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use pep9_core::core::arch::StatusBits;
    /// use pep9_core::core::units::alu::{Alu, AluOp};
    ///
    /// let mut flags = StatusBits::default();
    /// assert_eq!(Alu::execute(AluOp::Add, 0x7FFF, 1, &mut flags), 0x8000);
    /// assert!(flags.v && flags.n && !flags.c);
    ///
    /// assert_eq!(Alu::execute(AluOp::Sub, 5, 5, &mut flags), 0);
    /// assert!(flags.z);
    /// ```
    pub const fn execute(op: AluOp, a: u16, b: u16, flags: &mut StatusBits) -> u16 {
        let result = match op {
            AluOp::Add => {
                flags.v = is_overflow(a, b);
                flags.c = is_carry(a, b);
                a.wrapping_add(b)
            }
            AluOp::Sub => {
                let neg = b.wrapping_neg();
                flags.v = is_overflow(a, neg);
                flags.c = is_carry(a, neg);
                a.wrapping_sub(b)
            }
            AluOp::And => a & b,
            AluOp::Or => a | b,
        };
        flags.set_nz(result);
        result
    }
}
