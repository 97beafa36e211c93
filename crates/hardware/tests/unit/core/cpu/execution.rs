//! Execution step tests: fetch, length dispatch, PC commit, and trap state.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rv64emu_core::common::{MemWidth, Trap};
use rv64emu_core::isa::op::Op;

use crate::common::harness::{DATA_BASE, RAM_BASE};
use crate::common::{InstructionBuilder as I, TestContext};

#[test]
fn addi_retires_and_advances_pc() {
    let mut ctx = TestContext::new().load_program(&[0x02A5_0513]);
    ctx.set_reg(10, 0);

    let retired = ctx.step().unwrap();
    assert_eq!(retired.pc, RAM_BASE);
    assert_eq!(retired.op, Op::Addi);
    assert_eq!(retired.next_pc, RAM_BASE + 4);
    assert_eq!(retired.inst.raw(), 0x02A5_0513);
    assert_eq!(ctx.get_reg(10), 42);
    assert_eq!(ctx.cpu().pc, RAM_BASE + 4);
}

#[test]
fn x0_stays_zero_after_writes() {
    let mut ctx = TestContext::new().load_program(&[
        I::new().addi(0, 0, 5).build(),
        I::new().lui(0, 0x12345).build(),
        I::new().jal(0, 4).build(),
        I::new().add(1, 0, 0).build(),
    ]);
    ctx.run_steps(4);
    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn counted_loop_sums() {
    // t0 = 5; a0 = 0; loop: a0 += t0; t0 -= 1; bne t0, zero, loop
    let mut ctx = TestContext::new().load_program(&[
        I::new().addi(5, 0, 5).build(),
        I::new().addi(10, 0, 0).build(),
        I::new().add(10, 10, 5).build(),
        I::new().addi(5, 5, -1).build(),
        I::new().bne(5, 0, -8).build(),
    ]);
    ctx.run_steps(2 + 5 * 3);
    assert_eq!(ctx.get_reg(10), 15);
    assert_eq!(ctx.cpu().pc, RAM_BASE + 20);
}

#[test]
fn taken_branch_commits_target_not_target_plus_four() {
    let mut ctx = TestContext::new().load_program(&[I::new().beq(0, 0, 12).build()]);
    let retired = ctx.step().unwrap();
    assert_eq!(retired.next_pc, RAM_BASE + 12);
    assert_eq!(ctx.cpu().pc, RAM_BASE + 12);
}

#[test]
fn jal_links_and_jumps() {
    let mut ctx = TestContext::new().load_program(&[I::new().jal(1, 0x100).build()]);
    ctx.run_steps(1);
    assert_eq!(ctx.get_reg(1), RAM_BASE + 4);
    assert_eq!(ctx.cpu().pc, RAM_BASE + 0x100);
}

#[test]
fn jalr_clears_bit_zero() {
    let mut ctx = TestContext::new().load_program(&[I::new().jalr(1, 5, 0).build()]);
    ctx.set_reg(5, RAM_BASE + 0x41);
    ctx.run_steps(1);
    assert_eq!(ctx.cpu().pc, RAM_BASE + 0x40);
    assert_eq!(ctx.get_reg(1), RAM_BASE + 4);
}

#[test]
fn jalr_with_rd_equal_rs1_uses_old_base() {
    let mut ctx = TestContext::new().load_program(&[I::new().jalr(1, 1, 8).build()]);
    ctx.set_reg(1, RAM_BASE + 0x200);
    ctx.run_steps(1);
    assert_eq!(ctx.cpu().pc, RAM_BASE + 0x208);
    assert_eq!(ctx.get_reg(1), RAM_BASE + 4);
}

#[test]
fn misaligned_jalr_traps_without_linking() {
    let mut ctx = TestContext::new().load_program(&[I::new().jalr(1, 5, 2).build()]);
    ctx.set_reg(5, RAM_BASE + 0x40);
    ctx.set_reg(1, 0x1111);

    let trap = ctx.step().unwrap_err();
    assert_eq!(trap, Trap::InstructionAddressMisaligned(RAM_BASE + 0x42));
    assert_eq!(ctx.get_reg(1), 0x1111);
    assert_eq!(ctx.cpu().pc, RAM_BASE);
}

#[test]
fn misaligned_jal_traps_without_linking() {
    let mut ctx = TestContext::new().load_program(&[I::new().jal(1, 6).build()]);
    let trap = ctx.step().unwrap_err();
    assert_eq!(trap, Trap::InstructionAddressMisaligned(RAM_BASE + 6));
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn misaligned_branch_traps_only_when_taken() {
    let mut ctx = TestContext::new().load_program(&[
        I::new().bne(0, 0, 6).build(),
        I::new().beq(0, 0, 6).build(),
    ]);
    ctx.run_steps(1);
    assert_eq!(ctx.cpu().pc, RAM_BASE + 4);

    let trap = ctx.step().unwrap_err();
    assert_eq!(trap, Trap::InstructionAddressMisaligned(RAM_BASE + 10));
    assert_eq!(ctx.cpu().pc, RAM_BASE + 4);
}

#[test]
fn compressed_parcel_is_illegal_with_low_half() {
    let mut ctx = TestContext::new().load_program(&[0xABCD_4501]);
    assert_eq!(ctx.step(), Err(Trap::IllegalInstruction(0x4501)));
    assert_eq!(ctx.cpu().pc, RAM_BASE);
}

#[test]
fn illegal_instruction_leaves_state_and_drops_reservation() {
    let mut ctx = TestContext::new().load_program(&[I::new().lr_d(5, 6).build(), 0xFFFF_FFFF]);
    ctx.set_reg(6, DATA_BASE);
    ctx.run_steps(1);
    assert!(ctx.cpu().reservations.is_reserved(DATA_BASE));

    let before = ctx.cpu().regs.clone();
    assert_eq!(ctx.step(), Err(Trap::IllegalInstruction(0xFFFF_FFFF)));
    assert_eq!(ctx.cpu().pc, RAM_BASE + 4);
    assert_eq!(ctx.cpu().regs, before);
    assert!(ctx.cpu().reservations.is_empty());
}

#[test]
fn misaligned_pc_fails_fetch() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().pc = RAM_BASE + 2;
    assert_eq!(ctx.step(), Err(Trap::InstructionAddressMisaligned(RAM_BASE + 2)));
}

#[test]
fn unmapped_fetch_faults_under_fault_policy() {
    let mut ctx = TestContext::faulting();
    ctx.cpu_mut().pc = 0x4000;
    assert_eq!(ctx.step(), Err(Trap::InstructionAccessFault(0x4000)));
}

#[test]
fn unmapped_fetch_reads_zero_under_ignore_policy() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().pc = 0x4000;
    assert_eq!(ctx.step(), Err(Trap::IllegalInstruction(0)));
}

#[test]
fn ecall_and_ebreak_report_their_pc() {
    let mut ctx = TestContext::new().load_program(&[
        I::new().ecall().build(),
        I::new().ebreak().build(),
    ]);
    assert_eq!(ctx.step(), Err(Trap::EnvironmentCall(RAM_BASE)));
    ctx.cpu_mut().pc = RAM_BASE + 4;
    assert_eq!(ctx.step(), Err(Trap::Breakpoint(RAM_BASE + 4)));
}

#[test]
fn ecall_with_nonzero_rd_is_illegal() {
    let raw = I::new().ecall().rd(1).build();
    let mut ctx = TestContext::new().load_program(&[raw]);
    assert_eq!(ctx.step(), Err(Trap::IllegalInstruction(raw)));
}

#[test]
fn fences_are_no_ops() {
    let mut ctx = TestContext::new().load_program(&[
        I::new().fence().build(),
        I::new().fence_i().build(),
    ]);
    ctx.run_steps(2);
    assert_eq!(ctx.cpu().pc, RAM_BASE + 8);
}

#[test]
fn lui_and_auipc() {
    let mut ctx = TestContext::new().load_program(&[
        I::new().lui(5, 0x12345).build(),
        I::new().auipc(6, 0x1).build(),
        I::new().lui(7, 0xFFFFF).build(),
    ]);
    ctx.run_steps(3);
    assert_eq!(ctx.get_reg(5), 0x1234_5000);
    assert_eq!(ctx.get_reg(6), RAM_BASE + 4 + 0x1000);
    assert_eq!(ctx.get_reg(7), 0xFFFF_FFFF_FFFF_F000);
}

#[test]
fn self_modifying_store_is_seen_by_next_fetch() {
    // sw t1, 8(t0) overwrites the third instruction with addi a0, zero, 7.
    let patch = I::new().addi(10, 0, 7).build();
    let mut ctx = TestContext::new().load_program(&[
        I::new().sw(5, 6, 8).build(),
        I::new().fence_i().build(),
        I::new().nop().build(),
    ]);
    ctx.set_reg(5, RAM_BASE);
    ctx.set_reg(6, u64::from(patch));
    ctx.run_steps(3);
    assert_eq!(ctx.get_reg(10), 7);
    assert_eq!(ctx.read_mem(RAM_BASE + 8, MemWidth::Word), u64::from(patch));
}

#[rstest]
#[case::lui(I::new().lui(0, 0x12345))]
#[case::auipc(I::new().auipc(0, 1))]
#[case::jal(I::new().jal(0, 4))]
#[case::jalr(I::new().jalr(0, 5, 4))]
#[case::load(I::new().ld(0, 5, 0))]
#[case::addi(I::new().addi(0, 6, 1))]
#[case::add(I::new().add(0, 6, 6))]
#[case::addiw(I::new().addiw(0, 6, 1))]
#[case::sllw(I::new().sllw(0, 6, 6))]
#[case::mul(I::new().mul(0, 6, 6))]
#[case::div(I::new().div(0, 6, 0))]
#[case::lr(I::new().lr_d(0, 7))]
#[case::sc(I::new().sc_d(0, 7, 6))]
#[case::amo(I::new().amoswap_d(0, 7, 6))]
fn writes_to_x0_are_discarded(#[case] inst: I) {
    let mut ctx = TestContext::new().load_program(&[inst.build()]);
    ctx.set_reg(5, RAM_BASE);
    ctx.set_reg(6, 0x55);
    ctx.set_reg(7, DATA_BASE);
    let _ = ctx.step().expect("instruction retires");
    assert_eq!(ctx.get_reg(0), 0);
}
