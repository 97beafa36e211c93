//! Leaf instruction semantics.
//!
//! Every function here is a [`Handler`]: it receives the CPU and the fetched
//! instruction, performs exactly one state transition, and returns the PC of
//! the next instruction. Sequential instructions return `pc + length`;
//! jumps and taken branches return their target. The dispatcher commits
//! whatever PC the handler returns and never adds the length itself.
//!
//! A handler that returns `Err` must not have changed any architectural
//! state. Handlers therefore compute and validate everything (targets,
//! alignment, bus accesses) before the final register write.

/// Atomic memory operations (LR, SC, AMOs).
pub mod atomic;

/// Upper immediates, jumps, and conditional branches.
pub mod control;

/// Integer register-register and register-immediate operations.
pub mod integer;

/// Loads and stores.
pub mod memory;

/// Multiply and divide (RV64M).
pub mod muldiv;

/// FENCE, FENCE.I, ECALL, EBREAK.
pub mod system;

use crate::common::Trap;
use crate::core::Cpu;
use crate::isa::instruction::Instruction;

/// An instruction implementation: executes `inst` and returns the next PC.
pub type Handler = fn(&mut Cpu, Instruction) -> Result<u64, Trap>;

/// Address of the instruction following `inst`.
#[inline(always)]
pub(crate) const fn next_pc(cpu: &Cpu, inst: Instruction) -> u64 {
    cpu.pc.wrapping_add(inst.length())
}

/// `rd = f(rs1, rs2)`
#[inline(always)]
pub(crate) fn reg_reg(
    cpu: &mut Cpu,
    inst: Instruction,
    f: fn(u64, u64) -> u64,
) -> Result<u64, Trap> {
    let v = f(cpu.regs.read(inst.rs1()), cpu.regs.read(inst.rs2()));
    cpu.regs.write(inst.rd(), v);
    Ok(next_pc(cpu, inst))
}

/// `rd = f(rs1, imm_i)`
#[inline(always)]
pub(crate) fn reg_imm(
    cpu: &mut Cpu,
    inst: Instruction,
    f: fn(u64, u64) -> u64,
) -> Result<u64, Trap> {
    let v = f(cpu.regs.read(inst.rs1()), inst.imm_i() as u64);
    cpu.regs.write(inst.rd(), v);
    Ok(next_pc(cpu, inst))
}

/// `rd = f(rs1, shamt)`
#[inline(always)]
pub(crate) fn reg_shamt(
    cpu: &mut Cpu,
    inst: Instruction,
    f: fn(u64, u64) -> u64,
) -> Result<u64, Trap> {
    let v = f(cpu.regs.read(inst.rs1()), u64::from(inst.shamt()));
    cpu.regs.write(inst.rd(), v);
    Ok(next_pc(cpu, inst))
}
