//! Pep/9 Instruction Decoder.
//!
//! This module maps an opcode byte to a structured [`Instruction`]. Pep/9 packs
//! the register, access width, and addressing mode into the opcode itself, so
//! decoding never needs the operand.
//!
//! | opcodes | family |
//! |---------|--------|
//! | 0x00 | STOP |
//! | 0x01-0x02 | RET |
//! | 0x03-0x11 | unary |
//! | 0x12-0x23 | branch |
//! | 0x24-0x25 | CALL |
//! | 0x26-0x4F | unassigned |
//! | 0x50-0x9F | ADDSP, SUBSP, ADDr, SUBr, ANDr, ORr |
//! | 0xA0-0xBF | CPr |
//! | 0xC0-0xDF | LDr |
//! | 0xE0-0xFF | STr |

use crate::common::constants::{OPERAND_THRESHOLD, REGISTER_BIT_0};
use crate::common::data::Width;
use crate::core::arch::Reg;
use crate::core::units::alu::AluOp;
use crate::core::units::bru::BranchCondition;
use crate::core::units::lsu::AddressingMode;

/// Destination of a non-unary arithmetic instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithTarget {
    /// `ADDSP` / `SUBSP`.
    StackPointer,
    /// `ADDr`, `SUBr`, `ANDr`, `ORr`.
    Register(Reg),
}

/// Unary (operand-less) operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// `MOVSPA`: A <- SP.
    MovSpA,
    /// `MOVFLGA`: A <- NZVC.
    MovFlgA,
    /// `MOVAFLG`: NZVC <- A.
    MovAFlg,
    /// `NOTr`: bitwise invert.
    Not(Reg),
    /// `NEGr`: two's-complement negate.
    Neg(Reg),
    /// `ASLr`: arithmetic shift left.
    Asl(Reg),
    /// `ASRr`: arithmetic shift right.
    Asr(Reg),
    /// `ROLr`: rotate left through carry.
    Rol(Reg),
    /// `RORr`: rotate right through carry.
    Ror(Reg),
}

/// A decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `STOP`.
    Halt,
    /// `RET`.
    Return,
    /// `CALL`; `indexed` adds X to the target.
    Call {
        /// Target is `operand + X`.
        indexed: bool,
    },
    /// Operand-less register operation.
    Unary(UnaryOp),
    /// Conditional or unconditional branch.
    Branch {
        /// Condition tested against the flags.
        condition: BranchCondition,
        /// Target is `operand + X`.
        indexed: bool,
    },
    /// Two-operand arithmetic or logic.
    Arithmetic {
        /// ALU operation.
        op: AluOp,
        /// Register combined with the operand and written back.
        target: ArithTarget,
        /// Operand addressing mode.
        mode: AddressingMode,
    },
    /// `CPWr`: operand minus register, flags only.
    Compare {
        /// Register subtracted from the operand.
        reg: Reg,
        /// Operand addressing mode.
        mode: AddressingMode,
    },
    /// `LDWr` / `LDBr`.
    Load {
        /// Destination register.
        reg: Reg,
        /// Access width.
        width: Width,
        /// Source addressing mode.
        mode: AddressingMode,
    },
    /// `STWr` / `STBr`.
    Store {
        /// Source register.
        reg: Reg,
        /// Access width.
        width: Width,
        /// Destination addressing mode.
        mode: AddressingMode,
    },
}

/// True if `opcode` is followed by a 2-byte operand.
#[inline]
pub const fn has_operand(opcode: u8) -> bool {
    opcode >= OPERAND_THRESHOLD
}

/// Decodes `opcode`, returning `None` for unassigned opcodes (0x26-0x4F).
pub const fn decode(opcode: u8) -> Option<Instruction> {
    let mode = AddressingMode::from_opcode(opcode);
    let reg = Reg::from_bit3(opcode);
    let indexed = opcode & REGISTER_BIT_0 != 0;

    let inst = match opcode {
        0x00 => Instruction::Halt,
        0x01 | 0x02 => Instruction::Return,
        0x03..=0x11 => Instruction::Unary(decode_unary(opcode)),
        0x12..=0x23 => match BranchCondition::from_opcode(opcode) {
            Some(condition) => Instruction::Branch { condition, indexed },
            None => return None,
        },
        0x24 | 0x25 => Instruction::Call { indexed },
        0x50..=0x57 => Instruction::Arithmetic {
            op: AluOp::Add,
            target: ArithTarget::StackPointer,
            mode,
        },
        0x58..=0x5F => Instruction::Arithmetic {
            op: AluOp::Sub,
            target: ArithTarget::StackPointer,
            mode,
        },
        0x60..=0x9F => Instruction::Arithmetic {
            op: match opcode & 0xF0 {
                0x60 => AluOp::Add,
                0x70 => AluOp::Sub,
                0x80 => AluOp::And,
                _ => AluOp::Or,
            },
            target: ArithTarget::Register(reg),
            mode,
        },
        0xA0..=0xBF => Instruction::Compare { reg, mode },
        0xC0..=0xDF => Instruction::Load {
            reg,
            width: Width::from_opcode(opcode),
            mode,
        },
        0xE0..=0xFF => Instruction::Store {
            reg,
            width: Width::from_opcode(opcode),
            mode,
        },
        _ => return None,
    };
    Some(inst)
}

const fn decode_unary(opcode: u8) -> UnaryOp {
    let reg = Reg::from_bit0(opcode);
    match opcode {
        0x03 => UnaryOp::MovSpA,
        0x04 => UnaryOp::MovFlgA,
        0x05 => UnaryOp::MovAFlg,
        0x06 | 0x07 => UnaryOp::Not(reg),
        0x08 | 0x09 => UnaryOp::Neg(reg),
        0x0A | 0x0B => UnaryOp::Asl(reg),
        0x0C | 0x0D => UnaryOp::Asr(reg),
        0x0E | 0x0F => UnaryOp::Rol(reg),
        _ => UnaryOp::Ror(reg),
    }
}
