//! Loads and stores (RV64I).
//!
//! The effective address is `rs1 + imm` with no alignment requirement; the
//! bus receives it unmodified. The bus returns raw bits and signed loads
//! sign-extend them here.

use super::next_pc;
use crate::common::{MemWidth, Trap};
use crate::core::Cpu;
use crate::isa::decode::sign_extend;
use crate::isa::instruction::Instruction;

#[inline(always)]
fn load(cpu: &mut Cpu, inst: Instruction, width: MemWidth, signed: bool) -> Result<u64, Trap> {
    let addr = cpu.regs.read(inst.rs1()).wrapping_add(inst.imm_i() as u64);
    let raw = cpu.load(addr, width)?;
    let value = if signed {
        sign_extend(raw, width.bits()) as u64
    } else {
        raw
    };
    cpu.regs.write(inst.rd(), value);
    Ok(next_pc(cpu, inst))
}

#[inline(always)]
fn store(cpu: &mut Cpu, inst: Instruction, width: MemWidth) -> Result<u64, Trap> {
    let addr = cpu.regs.read(inst.rs1()).wrapping_add(inst.imm_s() as u64);
    let value = cpu.regs.read(inst.rs2());
    cpu.store(addr, value, width)?;
    Ok(next_pc(cpu, inst))
}

/// `lb rd, offset(rs1)`
pub fn lb(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    load(cpu, inst, MemWidth::Byte, true)
}

/// `lh rd, offset(rs1)`
pub fn lh(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    load(cpu, inst, MemWidth::Half, true)
}

/// `lw rd, offset(rs1)`
pub fn lw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    load(cpu, inst, MemWidth::Word, true)
}

/// `ld rd, offset(rs1)`
pub fn ld(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    load(cpu, inst, MemWidth::Double, true)
}

/// `lbu rd, offset(rs1)`
pub fn lbu(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    load(cpu, inst, MemWidth::Byte, false)
}

/// `lhu rd, offset(rs1)`
pub fn lhu(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    load(cpu, inst, MemWidth::Half, false)
}

/// `lwu rd, offset(rs1)`
pub fn lwu(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    load(cpu, inst, MemWidth::Word, false)
}

/// `sb rs2, offset(rs1)`
pub fn sb(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    store(cpu, inst, MemWidth::Byte)
}

/// `sh rs2, offset(rs1)`
pub fn sh(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    store(cpu, inst, MemWidth::Half)
}

/// `sw rs2, offset(rs1)`
pub fn sw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    store(cpu, inst, MemWidth::Word)
}

/// `sd rs2, offset(rs1)`
pub fn sd(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    store(cpu, inst, MemWidth::Double)
}
