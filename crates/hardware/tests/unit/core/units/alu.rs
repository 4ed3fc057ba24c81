//! ALU and condition-code helper tests.
//!
//! Boundary vectors for the flag helpers, property tests tying them to their
//! definitions, and the shift/rotate primitives.

use pep9_core::core::arch::StatusBits;
use pep9_core::core::units::alu::flags::{is_carry, is_negative, is_overflow, sign_changed};
use pep9_core::core::units::alu::shifts::{asl, asr, rol, ror};
use pep9_core::core::units::alu::{Alu, AluOp};
use proptest::prelude::*;
use rstest::rstest;

fn alu(op: AluOp, a: u16, b: u16) -> (u16, StatusBits) {
    let mut flags = StatusBits::default();
    let result = Alu::execute(op, a, b, &mut flags);
    (result, flags)
}

// ─── Flag helpers ────────────────────────────────────────────────────────────

#[rstest]
#[case(0xFFFF, 0x0001, true)]
#[case(0x7FFF, 0x0001, false)]
#[case(0x8000, 0x8000, true)]
#[case(0x0000, 0x0000, false)]
#[case(0xFFFF, 0x0000, false)]
fn carry_boundaries(#[case] a: u16, #[case] b: u16, #[case] expected: bool) {
    assert_eq!(is_carry(a, b), expected);
}

#[rstest]
#[case(0x7FFF, 0x0001, true)]
#[case(0x8000, 0x8000, true)]
#[case(0x0000, 0xFFFF, false)]
#[case(0x8000, 0x7FFF, false)]
#[case(0xFFFF, 0xFFFF, false)]
fn overflow_boundaries(#[case] a: u16, #[case] b: u16, #[case] expected: bool) {
    assert_eq!(is_overflow(a, b), expected);
}

proptest! {
    #[test]
    fn negative_is_bit_15(v in any::<u16>()) {
        prop_assert_eq!(is_negative(v), (v >> 15) & 1 == 1);
    }

    #[test]
    fn carry_matches_widened_sum(a in any::<u16>(), b in any::<u16>()) {
        prop_assert_eq!(is_carry(a, b), u32::from(a) + u32::from(b) > 0xFFFF);
    }

    #[test]
    fn overflow_matches_signed_sum(a in any::<u16>(), b in any::<u16>()) {
        let wide = i32::from(a as i16) + i32::from(b as i16);
        prop_assert_eq!(is_overflow(a, b), wide > i32::from(i16::MAX) || wide < i32::from(i16::MIN));
    }

    #[test]
    fn sub_is_add_of_negation(a in any::<u16>(), b in any::<u16>()) {
        let (diff, sub_flags) = alu(AluOp::Sub, a, b);
        prop_assert_eq!(diff, a.wrapping_sub(b));
        prop_assert_eq!(sub_flags.v, is_overflow(a, b.wrapping_neg()));
        prop_assert_eq!(sub_flags.c, is_carry(a, b.wrapping_neg()));
    }
}

#[test]
fn sign_change() {
    assert!(sign_changed(0x7FFF, 0x8000));
    assert!(!sign_changed(0x8000, 0xFFFF));
}

// ─── Binary operations ───────────────────────────────────────────────────────

#[test]
fn add_sets_all_four_flags() {
    let (r, f) = alu(AluOp::Add, 0xFFFF, 0x0001);
    assert_eq!(r, 0);
    assert!(f.z && f.c && !f.n && !f.v);
}

#[test]
fn sub_equal_operands() {
    let (r, f) = alu(AluOp::Sub, 5, 5);
    assert_eq!(r, 0);
    assert!(f.z && f.c && !f.v && !f.n);
}

#[test]
fn sub_zero_has_no_carry() {
    let (r, f) = alu(AluOp::Sub, 3, 0);
    assert_eq!(r, 3);
    assert!(!f.c && !f.z);
}

#[test]
fn logic_ops_leave_v_and_c() {
    let mut flags = StatusBits {
        v: true,
        c: true,
        ..StatusBits::default()
    };
    assert_eq!(Alu::execute(AluOp::And, 0xF0F0, 0x8F00, &mut flags), 0x8000);
    assert!(flags.n && !flags.z && flags.v && flags.c);
    assert_eq!(Alu::execute(AluOp::Or, 0x0000, 0x0000, &mut flags), 0);
    assert!(flags.z && !flags.n && flags.v && flags.c);
}

// ─── Shifts and rotates ──────────────────────────────────────────────────────

#[test]
fn arithmetic_shifts() {
    assert_eq!(asl(0xC001), (0x8002, true));
    assert_eq!(asl(0x4000), (0x8000, false));
    assert_eq!(asr(0x8001), (0xC000, true));
    assert_eq!(asr(0x0004), (0x0002, false));
}

#[test]
fn rotate_left_walks_a_bit_through_carry() {
    let mut value = 0x0001;
    let mut carry = false;
    for step in 1..=15 {
        (value, carry) = rol(value, carry);
        assert_eq!(value, 1 << step);
        assert!(!carry);
    }
    (value, carry) = rol(value, carry);
    assert_eq!((value, carry), (0x0000, true));
    (value, carry) = rol(value, carry);
    assert_eq!((value, carry), (0x0001, false));
}

#[test]
fn rotate_right_walks_a_bit_through_carry() {
    let mut value = 0x8000;
    let mut carry = false;
    for step in 1..=15 {
        (value, carry) = ror(value, carry);
        assert_eq!(value, 0x8000 >> step);
        assert!(!carry);
    }
    (value, carry) = ror(value, carry);
    assert_eq!((value, carry), (0x0000, true));
    (value, carry) = ror(value, carry);
    assert_eq!((value, carry), (0x8000, false));
}

proptest! {
    #[test]
    fn seventeen_rotations_are_identity(v in any::<u16>(), c in any::<bool>()) {
        let (mut value, mut carry) = (v, c);
        for _ in 0..17 {
            (value, carry) = rol(value, carry);
        }
        prop_assert_eq!((value, carry), (v, c));
        for _ in 0..17 {
            (value, carry) = ror(value, carry);
        }
        prop_assert_eq!((value, carry), (v, c));
    }
}
