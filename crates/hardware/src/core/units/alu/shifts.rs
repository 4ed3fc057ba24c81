//! Shift and rotate operations.
//!
//! Each helper returns `(result, carry_out)`, where `carry_out` is the bit
//! evicted by the operation. Rotates take the current carry as the bit shifted
//! in, so sixteen-plus-one rotations bring both the value and the carry back.

/// Arithmetic shift left. Bit 15 is evicted, bit 0 becomes 0.
#[inline]
pub const fn asl(value: u16) -> (u16, bool) {
    (value << 1, value & 0x8000 != 0)
}

/// Arithmetic shift right. Bit 0 is evicted, bit 15 is replicated.
#[inline]
pub const fn asr(value: u16) -> (u16, bool) {
    ((value >> 1) | (value & 0x8000), value & 0x0001 != 0)
}

/// Rotate left through carry: `carry_in` enters bit 0, bit 15 leaves.
#[inline]
pub const fn rol(value: u16, carry_in: bool) -> (u16, bool) {
    ((value << 1) | carry_in as u16, value & 0x8000 != 0)
}

/// Rotate right through carry: `carry_in` enters bit 15, bit 0 leaves.
#[inline]
pub const fn ror(value: u16, carry_in: bool) -> (u16, bool) {
    ((value >> 1) | ((carry_in as u16) << 15), value & 0x0001 != 0)
}
