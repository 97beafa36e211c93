//! Multiply and divide instructions (RV64M).
//!
//! None of these trap; see [`arithmetic`] for the division-by-zero and
//! overflow results.

use super::reg_reg;
use crate::common::Trap;
use crate::core::Cpu;
use crate::core::units::alu::{Double, Word, arithmetic};
use crate::isa::instruction::Instruction;

/// `mul rd, rs1, rs2`
pub fn mul(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::mul::<Double>)
}

/// `mulh rd, rs1, rs2`
pub fn mulh(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::mulh)
}

/// `mulhsu rd, rs1, rs2`
pub fn mulhsu(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::mulhsu)
}

/// `mulhu rd, rs1, rs2`
pub fn mulhu(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::mulhu)
}

/// `div rd, rs1, rs2`
pub fn div(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::div::<Double>)
}

/// `divu rd, rs1, rs2`
pub fn divu(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::divu::<Double>)
}

/// `rem rd, rs1, rs2`
pub fn rem(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::rem::<Double>)
}

/// `remu rd, rs1, rs2`
pub fn remu(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::remu::<Double>)
}

/// `mulw rd, rs1, rs2`
pub fn mulw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::mul::<Word>)
}

/// `divw rd, rs1, rs2`
pub fn divw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::div::<Word>)
}

/// `divuw rd, rs1, rs2`
pub fn divuw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::divu::<Word>)
}

/// `remw rd, rs1, rs2`
pub fn remw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::rem::<Word>)
}

/// `remuw rd, rs1, rs2`
pub fn remuw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::remu::<Word>)
}
