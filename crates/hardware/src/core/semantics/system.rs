//! Memory ordering and environment instructions.
//!
//! With one in-order hart and no caches, both fences are no-ops. ECALL and
//! EBREAK never retire: they raise their trap with the PC of the instruction
//! and leave the decision to the run loop.

use super::next_pc;
use crate::common::Trap;
use crate::core::Cpu;
use crate::isa::instruction::Instruction;

/// `fence pred, succ`
pub fn fence(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    Ok(next_pc(cpu, inst))
}

/// `fence.i`
pub fn fence_i(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    Ok(next_pc(cpu, inst))
}

/// ECALL and EBREAK reserve `rd` and `rs1`; both must be zero.
fn check_env_operands(inst: Instruction) -> Result<(), Trap> {
    if inst.rd() == 0 && inst.rs1() == 0 {
        Ok(())
    } else {
        Err(Trap::IllegalInstruction(inst.raw()))
    }
}

/// `ecall`
pub fn ecall(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    check_env_operands(inst)?;
    Err(Trap::EnvironmentCall(cpu.pc))
}

/// `ebreak`
pub fn ebreak(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    check_env_operands(inst)?;
    Err(Trap::Breakpoint(cpu.pc))
}
