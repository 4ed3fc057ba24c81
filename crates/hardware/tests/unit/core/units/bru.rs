//! Branch condition truth tables.

use pep9_core::core::arch::StatusBits;
use pep9_core::core::units::bru::BranchCondition;
use rstest::rstest;

fn flags(n: bool, z: bool, v: bool, c: bool) -> StatusBits {
    StatusBits { n, z, v, c }
}

#[rstest]
#[case(BranchCondition::Always, flags(false, false, false, false), true)]
#[case(BranchCondition::LessEqual, flags(true, false, false, false), true)]
#[case(BranchCondition::LessEqual, flags(false, true, false, false), true)]
#[case(BranchCondition::LessEqual, flags(false, false, true, true), false)]
#[case(BranchCondition::Less, flags(true, false, false, false), true)]
#[case(BranchCondition::Less, flags(false, true, false, false), false)]
#[case(BranchCondition::Equal, flags(false, true, false, false), true)]
#[case(BranchCondition::Equal, flags(true, false, false, false), false)]
#[case(BranchCondition::NotEqual, flags(false, false, false, false), true)]
#[case(BranchCondition::NotEqual, flags(false, true, false, false), false)]
#[case(BranchCondition::GreaterEqual, flags(false, true, false, false), true)]
#[case(BranchCondition::GreaterEqual, flags(true, false, false, false), false)]
#[case(BranchCondition::Greater, flags(false, false, false, false), true)]
#[case(BranchCondition::Greater, flags(false, true, false, false), false)]
#[case(BranchCondition::Greater, flags(true, false, false, false), false)]
#[case(BranchCondition::Overflow, flags(false, false, true, false), true)]
#[case(BranchCondition::Overflow, flags(false, false, false, true), false)]
#[case(BranchCondition::Carry, flags(false, false, false, true), true)]
#[case(BranchCondition::Carry, flags(false, false, true, false), false)]
fn truth_table(
    #[case] condition: BranchCondition,
    #[case] status: StatusBits,
    #[case] taken: bool,
) {
    assert_eq!(condition.is_taken(&status), taken);
}

#[test]
fn opcode_pairs_share_a_condition() {
    for even in (0x12u8..0x24).step_by(2) {
        assert_eq!(
            BranchCondition::from_opcode(even),
            BranchCondition::from_opcode(even + 1)
        );
        assert!(BranchCondition::from_opcode(even).is_some());
    }
    assert_eq!(BranchCondition::from_opcode(0x11), None);
    assert_eq!(BranchCondition::from_opcode(0x24), None);
}
