//! Memory Access Width.
//!
//! Loads and stores move either a single byte or a big-endian word. The width is
//! decided once per instruction from the opcode and matched at each access site.

use super::constants::BYTE_ACCESS_BIT;

/// Width of a data access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    /// Single byte; loads zero-extend to 16 bits, stores keep the low byte.
    Byte,

    /// Two consecutive bytes, high byte at the lower address.
    Word,
}

impl Width {
    /// Selects the width encoded by bit 4 of a load or store opcode.
    pub const fn from_opcode(opcode: u8) -> Self {
        if opcode & BYTE_ACCESS_BIT == 0 {
            Self::Word
        } else {
            Self::Byte
        }
    }
}
