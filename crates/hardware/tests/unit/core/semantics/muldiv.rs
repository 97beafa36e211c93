use pretty_assertions::assert_eq;
use rstest::rstest;
use rv64emu_core::isa::rv64m::funct3 as m;

use super::exec_binary;
use crate::common::InstructionBuilder as I;

const MIN: u64 = 1 << 63;
const NEG_ONE: u64 = u64::MAX;
const W_MIN: u64 = 0xFFFF_FFFF_8000_0000;

fn op(funct3: u32) -> I {
    I::new().muldiv(funct3, 10, 11, 12)
}

fn op_w(funct3: u32) -> I {
    I::new().muldiv_w(funct3, 10, 11, 12)
}

#[rstest]
#[case::mul(op(m::MUL), 6, 7, 42)]
#[case::mul_wraps(op(m::MUL), MIN, 2, 0)]
#[case::mulh_negative(op(m::MULH), NEG_ONE, NEG_ONE, 0)]
#[case::mulh_min(op(m::MULH), MIN, 2, NEG_ONE)]
#[case::mulhsu(op(m::MULHSU), NEG_ONE, 2, NEG_ONE)]
#[case::mulhu(op(m::MULHU), NEG_ONE, 2, 1)]
#[case::div(op(m::DIV), (-7_i64) as u64, 2, (-3_i64) as u64)]
#[case::divu(op(m::DIVU), NEG_ONE, 2, NEG_ONE >> 1)]
#[case::rem_sign_follows_dividend(op(m::REM), (-7_i64) as u64, 2, NEG_ONE)]
#[case::remu(op(m::REMU), 7, 3, 1)]
#[case::mulw(op_w(m::MUL), 0x1_0000_0002, 0x8000_0000, 0)]
#[case::mulw_sign_extends(op_w(m::MUL), 0x4000_0000, 2, W_MIN)]
#[case::divw(op_w(m::DIV), 0xFFFF_FFF9, 2, (-3_i64) as u64)]
#[case::divuw(op_w(m::DIVU), 0xFFFF_FFFF, 1, NEG_ONE)]
#[case::remw(op_w(m::REM), 0xFFFF_FFF9, 2, NEG_ONE)]
#[case::remuw(op_w(m::REMU), 0xFFFF_FFFF, 0x1_0000_0000, NEG_ONE)]
fn products_and_quotients(
    #[case] inst: I,
    #[case] lhs: u64,
    #[case] rhs: u64,
    #[case] expected: u64,
) {
    assert_eq!(exec_binary(inst, lhs, rhs), expected);
}

#[rstest]
#[case::div(op(m::DIV), 42, NEG_ONE)]
#[case::divu(op(m::DIVU), 42, NEG_ONE)]
#[case::rem(op(m::REM), 42, 42)]
#[case::remu(op(m::REMU), 42, 42)]
#[case::divw(op_w(m::DIV), 42, NEG_ONE)]
#[case::divuw(op_w(m::DIVU), 42, NEG_ONE)]
#[case::remw(op_w(m::REM), 0x8000_0000, W_MIN)]
#[case::remuw(op_w(m::REMU), 0x8000_0000, W_MIN)]
fn division_by_zero_does_not_trap(#[case] inst: I, #[case] dividend: u64, #[case] expected: u64) {
    assert_eq!(exec_binary(inst, dividend, 0), expected);
}

#[rstest]
#[case::div(op(m::DIV), MIN, MIN)]
#[case::rem(op(m::REM), MIN, 0)]
#[case::divw(op_w(m::DIV), W_MIN, W_MIN)]
#[case::remw(op_w(m::REM), W_MIN, 0)]
fn signed_overflow(#[case] inst: I, #[case] dividend: u64, #[case] expected: u64) {
    assert_eq!(exec_binary(inst, dividend, NEG_ONE), expected);
}
