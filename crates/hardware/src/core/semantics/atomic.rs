//! Atomic memory operations (RV64A).
//!
//! All three shapes are generic over [`OperandWidth`], so `.w` and `.d`
//! forms share one implementation. AMOs are additionally parameterized by
//! their `funct5` selector.
//!
//! The effective address is `rs1` with no offset and must be aligned to the
//! access width. A misaligned address traps before memory is touched:
//! `LoadAddressMisaligned` for LR, `StoreAddressMisaligned` for SC and AMOs.
//! The `aq`/`rl` bits need no action on a single in-order hart.

use tracing::debug;

use super::next_pc;
use crate::common::{AccessType, Trap};
use crate::core::Cpu;
use crate::core::units::alu::OperandWidth;
use crate::core::units::lsu::{AtomicOp, atomic_alu};
use crate::isa::instruction::Instruction;

/// `lr.{w,d} rd, (rs1)`: load and place a reservation.
///
/// The encoding requires `rs2 == 0`; anything else is illegal.
pub fn lr<W: OperandWidth>(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    if inst.rs2() != 0 {
        return Err(Trap::IllegalInstruction(inst.raw()));
    }
    let addr = cpu.regs.read(inst.rs1());
    if !W::MEM.is_aligned(addr) {
        return Err(Trap::LoadAddressMisaligned(addr));
    }
    let value = cpu.load(addr, W::MEM)?;
    cpu.reservations.reserve(addr, W::MEM);
    cpu.regs.write(inst.rd(), W::sext(value));
    Ok(next_pc(cpu, inst))
}

/// `sc.{w,d} rd, rs2, (rs1)`: store if reserved.
///
/// If the hart's reservation matches the address and width, the store
/// happens and `rd = 0`; otherwise memory is untouched and `rd = 1`. The
/// reservation is released in both cases.
pub fn sc<W: OperandWidth>(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    let addr = cpu.regs.read(inst.rs1());
    if !W::MEM.is_aligned(addr) {
        return Err(Trap::StoreAddressMisaligned(addr));
    }
    let value = cpu.regs.read(inst.rs2());
    let success = cpu.reservations.take(addr, W::MEM);
    if success {
        cpu.store(addr, value, W::MEM)?;
    }
    cpu.stats.record_sc(success);
    cpu.regs.write(inst.rd(), u64::from(!success));
    Ok(next_pc(cpu, inst))
}

/// `amo<op>.{w,d} rd, rs2, (rs1)`: indivisible read-modify-write.
///
/// Memory receives `op(old, rs2)` and `rd` receives `old`, sign-extended
/// from the operand width. Access faults on either half are reported as
/// store/AMO faults.
pub fn amo<W: OperandWidth, const FUNCT5: u32>(
    cpu: &mut Cpu,
    inst: Instruction,
) -> Result<u64, Trap> {
    let op = AtomicOp::from_funct5(FUNCT5).ok_or(Trap::IllegalInstruction(inst.raw()))?;
    let addr = cpu.regs.read(inst.rs1());
    if !W::MEM.is_aligned(addr) {
        return Err(Trap::StoreAddressMisaligned(addr));
    }
    let operand = cpu.regs.read(inst.rs2());
    let old = cpu.access_load(addr, W::MEM, AccessType::Write)?;
    let new = atomic_alu::<W>(op, old, operand);
    cpu.store(addr, new, W::MEM)?;
    debug!(?op, "amo at {addr:#x}: {old:#x} -> {new:#x}");
    cpu.regs.write(inst.rd(), W::sext(old));
    Ok(next_pc(cpu, inst))
}
