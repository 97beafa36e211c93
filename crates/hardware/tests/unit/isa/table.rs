//! Decode table classification tests.
//!
//! Each legal encoding must resolve to exactly one instruction identity and
//! every other encoding to `IllegalInstruction` carrying the raw word.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use rv64emu_core::common::Trap;
use rv64emu_core::isa::op::{InstClass, Op};
use rv64emu_core::isa::rv64a::funct5;
use rv64emu_core::isa::table::DecodeTable;

use crate::common::InstructionBuilder as I;

fn lookup(raw: u32) -> Result<Op, Trap> {
    DecodeTable::global().lookup(raw).map(|entry| entry.op)
}

#[rstest]
#[case(I::new().lui(1, 0x12345), Op::Lui)]
#[case(I::new().auipc(1, 1), Op::Auipc)]
#[case(I::new().jal(1, 16), Op::Jal)]
#[case(I::new().jalr(1, 2, 0), Op::Jalr)]
#[case(I::new().beq(1, 2, 8), Op::Beq)]
#[case(I::new().bgeu(1, 2, 8), Op::Bgeu)]
#[case(I::new().lb(1, 2, 0), Op::Lb)]
#[case(I::new().lwu(1, 2, 0), Op::Lwu)]
#[case(I::new().sh(1, 2, 0), Op::Sh)]
#[case(I::new().sd(1, 2, 0), Op::Sd)]
#[case(I::new().addi(10, 10, 42), Op::Addi)]
#[case(I::new().sltiu(1, 2, 3), Op::Sltiu)]
#[case(I::new().slli(1, 2, 63), Op::Slli)]
#[case(I::new().srli(1, 2, 32), Op::Srli)]
#[case(I::new().srai(1, 2, 33), Op::Srai)]
#[case(I::new().add(1, 2, 3), Op::Add)]
#[case(I::new().sub(1, 2, 3), Op::Sub)]
#[case(I::new().sra(1, 2, 3), Op::Sra)]
#[case(I::new().and(1, 2, 3), Op::And)]
#[case(I::new().addiw(1, 2, -1), Op::Addiw)]
#[case(I::new().slliw(1, 2, 31), Op::Slliw)]
#[case(I::new().sraiw(1, 2, 31), Op::Sraiw)]
#[case(I::new().subw(1, 2, 3), Op::Subw)]
#[case(I::new().sraw(1, 2, 3), Op::Sraw)]
#[case(I::new().mul(1, 2, 3), Op::Mul)]
#[case(I::new().muldiv(0b011, 1, 2, 3), Op::Mulhu)]
#[case(I::new().div(1, 2, 3), Op::Div)]
#[case(I::new().muldiv(0b111, 1, 2, 3), Op::Remu)]
#[case(I::new().muldiv_w(0b000, 1, 2, 3), Op::Mulw)]
#[case(I::new().muldiv_w(0b101, 1, 2, 3), Op::Divuw)]
#[case(I::new().muldiv_w(0b111, 1, 2, 3), Op::Remuw)]
#[case(I::new().lr_w(1, 2), Op::LrW)]
#[case(I::new().sc_d(1, 2, 3), Op::ScD)]
#[case(I::new().amoadd_w(1, 2, 3), Op::AmoaddW)]
#[case(I::new().amo(funct5::AMOMAXU, 0b011, 1, 2, 3), Op::AmomaxuD)]
#[case(I::new().amo(funct5::AMOXOR, 0b010, 1, 2, 3), Op::AmoxorW)]
#[case(I::new().fence(), Op::Fence)]
#[case(I::new().fence_i(), Op::FenceI)]
#[case(I::new().ecall(), Op::Ecall)]
#[case(I::new().ebreak(), Op::Ebreak)]
fn legal_encodings_resolve(#[case] inst: I, #[case] op: Op) {
    assert_eq!(lookup(inst.build()), Ok(op));
}

#[rstest]
#[case(funct5::LR, Op::LrW, Op::LrD)]
#[case(funct5::SC, Op::ScW, Op::ScD)]
#[case(funct5::AMOSWAP, Op::AmoswapW, Op::AmoswapD)]
#[case(funct5::AMOADD, Op::AmoaddW, Op::AmoaddD)]
#[case(funct5::AMOXOR, Op::AmoxorW, Op::AmoxorD)]
#[case(funct5::AMOAND, Op::AmoandW, Op::AmoandD)]
#[case(funct5::AMOOR, Op::AmoorW, Op::AmoorD)]
#[case(funct5::AMOMIN, Op::AmominW, Op::AmominD)]
#[case(funct5::AMOMAX, Op::AmomaxW, Op::AmomaxD)]
#[case(funct5::AMOMINU, Op::AmominuW, Op::AmominuD)]
#[case(funct5::AMOMAXU, Op::AmomaxuW, Op::AmomaxuD)]
fn atomics_resolve_at_both_widths(#[case] f5: u32, #[case] word: Op, #[case] double: Op) {
    let rs2 = if f5 == funct5::LR { 0 } else { 3 };
    assert_eq!(lookup(I::new().amo(f5, 0b010, 1, 2, rs2).build()), Ok(word));
    assert_eq!(lookup(I::new().amo(f5, 0b011, 1, 2, rs2).build()), Ok(double));
}

#[rstest]
#[case::all_zero(0x0000_0000)]
#[case::all_ones(0xFFFF_FFFF)]
#[case::unused_opcode(0x0000_007F)]
#[case::branch_funct3_2(I::new().beq(1, 2, 8).funct3(0b010).build())]
#[case::load_funct3_7(I::new().lb(1, 2, 0).funct3(0b111).build())]
#[case::store_funct3_4(I::new().sb(1, 2, 0).funct3(0b100).build())]
#[case::jalr_funct3_1(I::new().jalr(1, 2, 0).funct3(0b001).build())]
#[case::reg_funct7_2(I::new().add(1, 2, 3).funct7(0b0000010).build())]
#[case::sll_funct7_sub(I::new().sll(1, 2, 3).funct7(0b0100000).build())]
#[case::slli_funct6_arith(I::new().slli(1, 2, 1).imm(0x401).build())]
#[case::srli_funct6_bad(I::new().srli(1, 2, 1).imm(0x801).build())]
#[case::slliw_shamt_bit5(I::new().slliw(1, 2, 0).imm(0x20).build())]
#[case::sraiw_shamt_bit5(I::new().sraiw(1, 2, 0).imm(0x420).build())]
#[case::reg32_funct3_2_m(I::new().muldiv_w(0b010, 1, 2, 3).build())]
#[case::reg32_funct3_4_base(I::new().addw(1, 2, 3).funct3(0b100).build())]
#[case::amo_funct3_0(I::new().amoadd_w(1, 2, 3).funct3(0b000).build())]
#[case::amo_funct5_unused(I::new().amo(0b00101, 0b010, 1, 2, 3).build())]
#[case::misc_mem_funct3_2(I::new().fence().funct3(0b010).build())]
#[case::system_funct12_2(I::new().ecall().imm(2).build())]
#[case::csrrw(I::new().ecall().funct3(0b001).build())]
fn illegal_encodings_trap_with_raw_word(#[case] raw: u32) {
    assert_eq!(lookup(raw), Err(Trap::IllegalInstruction(raw)));
}

#[test]
fn amo_ordering_bits_do_not_affect_classification() {
    for (aq, rl) in [(false, false), (true, false), (false, true), (true, true)] {
        let raw = I::new().amoswap_d(1, 2, 3).ordering(aq, rl).build();
        assert_eq!(lookup(raw), Ok(Op::AmoswapD));
    }
}

#[test]
fn srai_accepts_six_bit_shift_amounts() {
    // funct6 discriminates, so shamt[5] (bit 25) is an operand bit.
    assert_eq!(lookup(I::new().srai(1, 2, 63).build()), Ok(Op::Srai));
    assert_eq!(lookup(I::new().slli(1, 2, 32).build()), Ok(Op::Slli));
}

#[test]
fn table_covers_rv64ima() {
    // RV64I 49, fences and environment calls 4, RV64M 13, RV64A 22.
    let table = DecodeTable::global();
    assert_eq!(table.len(), 88);
    assert!(!table.is_empty());
}

#[test]
fn global_table_is_built_once() {
    assert!(std::ptr::eq(DecodeTable::global(), DecodeTable::global()));
}

#[test]
fn classes_match_instruction_groups() {
    assert_eq!(Op::Addi.class(), InstClass::Alu);
    assert_eq!(Op::Mulhsu.class(), InstClass::Alu);
    assert_eq!(Op::Lwu.class(), InstClass::Load);
    assert_eq!(Op::Sb.class(), InstClass::Store);
    assert_eq!(Op::Bltu.class(), InstClass::Branch);
    assert_eq!(Op::Jalr.class(), InstClass::Jump);
    assert_eq!(Op::ScW.class(), InstClass::Atomic);
    assert_eq!(Op::AmominuD.class(), InstClass::Atomic);
    assert_eq!(Op::Ecall.class(), InstClass::System);
}

proptest! {
    #[test]
    fn every_word_resolves_or_traps_with_itself(raw in any::<u32>().prop_map(|w| w | 0b11)) {
        match DecodeTable::global().lookup(raw) {
            Ok(entry) => prop_assert!(!entry.op.mnemonic().is_empty()),
            Err(trap) => prop_assert_eq!(trap, Trap::IllegalInstruction(raw)),
        }
    }
}
