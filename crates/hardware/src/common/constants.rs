//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** RAM size and the memory-mapped console ports.
//! 2. **Reset Constants:** Register values applied by `Cpu::initialize`.
//! 3. **Instruction Constants:** Opcode field masks and the operand threshold.

/// Size of main memory in bytes (the full 16-bit address space).
pub const RAM_SIZE: usize = 0x1_0000;

/// Size of each console ring buffer in bytes.
pub const IO_BUFFER_SIZE: usize = 256;

/// Reading this address pops the next byte of standard input.
pub const INPUT_PORT: u16 = 0xFC15;

/// Writing this address pushes a byte onto standard output.
pub const OUTPUT_PORT: u16 = 0xFC16;

/// Program counter after reset.
pub const RESET_PC: u16 = 0x0000;

/// Stack pointer after reset (just below the operating-system area).
pub const RESET_SP: u16 = 0xFB8F;

/// The STOP instruction.
pub const HALT_OPCODE: u8 = 0x00;

/// Opcodes at or above this value carry a 2-byte operand.
pub const OPERAND_THRESHOLD: u8 = 0x12;

/// Bit mask for the addressing-mode field (`aaa`) of an opcode.
pub const MODE_MASK: u8 = 0x07;

/// Bit selecting byte (set) or word (clear) access in the load/store families.
pub const BYTE_ACCESS_BIT: u8 = 0x10;

/// Bit selecting the index register in families with an `r` field at bit 3.
pub const REGISTER_BIT_3: u8 = 0x08;

/// Bit selecting the index register in unary instructions, and indexed
/// addressing in branch and call instructions.
pub const REGISTER_BIT_0: u8 = 0x01;

/// Sign bit of a 16-bit word.
pub const SIGN_BIT: u16 = 0x8000;
