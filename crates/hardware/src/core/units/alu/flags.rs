//! Condition-code helpers.
//!
//! These pure functions are the single source of truth for the N, C, and V
//! semantics of every flag-setting instruction. Subtraction is addition of the
//! negation: callers subtracting `b` pass `b.wrapping_neg()`.

use crate::common::constants::SIGN_BIT;

/// True iff bit 15 of `v` is set.
#[inline]
pub const fn is_negative(v: u16) -> bool {
    v & SIGN_BIT != 0
}

/// True iff the untruncated sum `a + b` does not fit in 16 bits.
#[inline]
pub const fn is_carry(a: u16, b: u16) -> bool {
    (a as u32) + (b as u32) > 0xFFFF
}

/// True iff `a` and `b` share a sign and their truncated sum has the other sign.
#[inline]
pub const fn is_overflow(a: u16, b: u16) -> bool {
    let result = a.wrapping_add(b);
    (is_negative(a) && is_negative(b) && !is_negative(result))
        || (!is_negative(a) && !is_negative(b) && is_negative(result))
}

/// True iff `before` and `after` have different signs.
///
/// Unary shifts, rotates, and negation report this as V.
#[inline]
pub const fn sign_changed(before: u16, after: u16) -> bool {
    is_negative(before) != is_negative(after)
}
