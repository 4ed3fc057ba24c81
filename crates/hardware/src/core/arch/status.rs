//! Condition Code Flags.
//!
//! The four NZVC status bits are global machine state. Every instruction that
//! touches them overwrites exactly the bits it defines and leaves the rest alone.

use std::fmt;

use crate::core::units::alu::flags::is_negative;

/// Negative, Zero, oVerflow, and Carry flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusBits {
    /// Negative.
    pub n: bool,
    /// Zero.
    pub z: bool,
    /// Overflow.
    pub v: bool,
    /// Carry.
    pub c: bool,
}

impl StatusBits {
    /// Sets N and Z from a 16-bit result.
    pub const fn set_nz(&mut self, result: u16) {
        self.n = is_negative(result);
        self.z = result == 0;
    }

    /// Packs the flags into the low nibble: bit 0 = C, 1 = V, 2 = Z, 3 = N.
    pub const fn to_nibble(self) -> u16 {
        (self.c as u16) | ((self.v as u16) << 1) | ((self.z as u16) << 2) | ((self.n as u16) << 3)
    }
}

impl fmt::Display for StatusBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, name: char| if set { name } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            bit(self.n, 'N'),
            bit(self.z, 'Z'),
            bit(self.v, 'V'),
            bit(self.c, 'C')
        )
    }
}
