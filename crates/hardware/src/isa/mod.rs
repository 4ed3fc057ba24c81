//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode map and decoding logic for the Pep/9 instruction set.
//! Every instruction is a one-byte opcode; opcodes from 0x12 up are followed by
//! a big-endian 16-bit operand.

/// Opcode decoding into instruction families.
pub mod decode;

pub use decode::{ArithTarget, Instruction, UnaryOp, decode, has_operand};
