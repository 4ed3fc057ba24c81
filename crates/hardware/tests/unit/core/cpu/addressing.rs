//! Addressing-mode round trips.
//!
//! A word stored through a mode and loaded back through the same mode and
//! operand must come back unchanged, and must land where the mode says.

use crate::common::builder::{ProgramBuilder, mode, op};
use crate::common::harness::TestContext;
use rstest::rstest;

const SP: u16 = 0xF000;
const X: u16 = 0x0004;

fn round_trip(m: u8, operand: u16, load: u8, store: u8, value: u16) -> ProgramBuilder {
    ProgramBuilder::new()
        .op(op::LDWA | mode::I, value)
        .op(store | m, operand)
        .op(op::LDWA | mode::I, 0x0000)
        .op(load | m, operand)
        .halt()
}

#[rstest]
#[case::direct(mode::D, 0x0100, None, 0x0100)]
#[case::indirect(mode::N, 0x0100, Some((0x0100, 0x0200)), 0x0200)]
#[case::stack_relative(mode::S, 0x0010, None, 0xF010)]
#[case::stack_relative_deferred(mode::SF, 0x0010, Some((0xF010, 0x0300)), 0x0300)]
#[case::indexed(mode::X, 0x0100, None, 0x0104)]
#[case::stack_indexed(mode::SX, 0x0010, None, 0xF014)]
#[case::stack_deferred_indexed(mode::SFX, 0x0010, Some((0xF014, 0x0400)), 0x0400)]
fn word_round_trip(
    #[case] m: u8,
    #[case] operand: u16,
    #[case] pointer: Option<(u16, u16)>,
    #[case] target: u16,
) {
    let program = round_trip(m, operand, op::LDWA, op::STWA, 0xBEEF).build();
    let mut ctx = TestContext::new().load(&program).with_sp(SP).with_x(X);
    if let Some((cell, ptr)) = pointer {
        ctx = ctx.poke_u16(cell, ptr);
    }
    let ctx = ctx.run_to_halt();
    assert_eq!(ctx.regs().a, 0xBEEF);
    assert_eq!(ctx.peek_u16(target), 0xBEEF);
    if let Some((cell, ptr)) = pointer {
        assert_eq!(ctx.peek_u16(cell), ptr, "pointer cell untouched");
    }
}

#[test]
fn byte_round_trip_through_index() {
    let program = round_trip(mode::X, 0x0100, op::LDBA, op::STBA, 0x12AB).build();
    let ctx = TestContext::new()
        .load(&program)
        .with_x(X)
        .run_to_halt();
    assert_eq!(ctx.regs().a, 0x00AB);
    assert_eq!(ctx.peek_u8(0x0104), 0xAB);
    assert_eq!(ctx.peek_u8(0x0105), 0x00);
}

#[test]
fn immediate_load_is_the_operand() {
    let ctx = TestContext::new()
        .load(&ProgramBuilder::new().op(op::LDWX | mode::I, 0xBEEF).halt().build())
        .run_to_halt();
    assert_eq!(ctx.regs().x, 0xBEEF);
}

#[test]
fn indirect_pointer_is_a_word() {
    // LDBA 0x0100,n with Mem[0x0100] = 0x0123 reads the byte at 0x0123.
    let ctx = TestContext::new()
        .load(&ProgramBuilder::new().op(op::LDBA | mode::N, 0x0100).halt().build())
        .poke_u16(0x0100, 0x0123)
        .poke_u8(0x0123, 0x5A)
        .run_to_halt();
    assert_eq!(ctx.regs().a, 0x005A);
}

#[test]
fn indirect_through_the_input_port_pops_one_byte() {
    // Only the high byte of the pointer comes from the port; the low byte is
    // the RAM cell at 0xFC16.
    let ctx = TestContext::new()
        .with_input(&[0x02])
        .load(&ProgramBuilder::new().op(op::LDWA | mode::N, 0xFC15).halt().build())
        .poke_u16(0x0200, 0x7777)
        .run_to_halt();
    assert_eq!(ctx.regs().a, 0x7777);
    assert_eq!(ctx.cpu().memory.input.read_pos(), 1);
}
