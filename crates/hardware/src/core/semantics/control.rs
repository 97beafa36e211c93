//! Control transfer and upper-immediate instructions.
//!
//! Targets are checked before any register is written: without the C
//! extension every target must be 4-byte aligned, and a misaligned target
//! raises `InstructionAddressMisaligned` with the link register untouched.

use super::next_pc;
use crate::common::Trap;
use crate::common::constants::INSTRUCTION_ALIGNMENT;
use crate::core::Cpu;
use crate::isa::instruction::Instruction;

/// Returns `target` if it is a legal instruction address.
#[inline(always)]
fn check_target(target: u64) -> Result<u64, Trap> {
    if target % INSTRUCTION_ALIGNMENT == 0 {
        Ok(target)
    } else {
        Err(Trap::InstructionAddressMisaligned(target))
    }
}

/// `lui rd, imm`
pub fn lui(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    cpu.regs.write(inst.rd(), inst.imm_u() as u64);
    Ok(next_pc(cpu, inst))
}

/// `auipc rd, imm`
pub fn auipc(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    let value = cpu.pc.wrapping_add(inst.imm_u() as u64);
    cpu.regs.write(inst.rd(), value);
    Ok(next_pc(cpu, inst))
}

/// `jal rd, offset`
pub fn jal(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    let target = check_target(cpu.pc.wrapping_add(inst.imm_j() as u64))?;
    let link = next_pc(cpu, inst);
    cpu.regs.write(inst.rd(), link);
    Ok(target)
}

/// `jalr rd, offset(rs1)`. Bit 0 of the sum is cleared.
pub fn jalr(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    let base = cpu.regs.read(inst.rs1());
    let target = check_target(base.wrapping_add(inst.imm_i() as u64) & !1)?;
    let link = next_pc(cpu, inst);
    cpu.regs.write(inst.rd(), link);
    Ok(target)
}

#[inline(always)]
fn branch(cpu: &Cpu, inst: Instruction, taken: fn(u64, u64) -> bool) -> Result<u64, Trap> {
    if taken(cpu.regs.read(inst.rs1()), cpu.regs.read(inst.rs2())) {
        check_target(cpu.pc.wrapping_add(inst.imm_b() as u64))
    } else {
        Ok(next_pc(cpu, inst))
    }
}

/// `beq rs1, rs2, offset`
pub fn beq(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    branch(cpu, inst, |a, b| a == b)
}

/// `bne rs1, rs2, offset`
pub fn bne(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    branch(cpu, inst, |a, b| a != b)
}

/// `blt rs1, rs2, offset` (signed)
pub fn blt(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    branch(cpu, inst, |a, b| (a as i64) < (b as i64))
}

/// `bge rs1, rs2, offset` (signed)
pub fn bge(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    branch(cpu, inst, |a, b| (a as i64) >= (b as i64))
}

/// `bltu rs1, rs2, offset`
pub fn bltu(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    branch(cpu, inst, |a, b| a < b)
}

/// `bgeu rs1, rs2, offset`
pub fn bgeu(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    branch(cpu, inst, |a, b| a >= b)
}
