//! Integer computational instructions (RV64I).
//!
//! Each handler names the ALU routine it applies; `W` forms reuse the same
//! routine instantiated at [`Word`] width, which sign-extends the 32-bit
//! result into the destination.

use super::{reg_imm, reg_reg, reg_shamt};
use crate::common::Trap;
use crate::core::Cpu;
use crate::core::units::alu::{Double, Word, arithmetic, logic, shifts};
use crate::isa::instruction::Instruction;

/// `addi rd, rs1, imm`
pub fn addi(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_imm(cpu, inst, arithmetic::add::<Double>)
}

/// `slti rd, rs1, imm`
pub fn slti(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_imm(cpu, inst, logic::slt)
}

/// `sltiu rd, rs1, imm`. The immediate is sign-extended, then compared unsigned.
pub fn sltiu(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_imm(cpu, inst, logic::sltu)
}

/// `xori rd, rs1, imm`
pub fn xori(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_imm(cpu, inst, logic::xor)
}

/// `ori rd, rs1, imm`
pub fn ori(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_imm(cpu, inst, logic::or)
}

/// `andi rd, rs1, imm`
pub fn andi(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_imm(cpu, inst, logic::and)
}

/// `slli rd, rs1, shamt`
pub fn slli(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_shamt(cpu, inst, shifts::sll::<Double>)
}

/// `srli rd, rs1, shamt`
pub fn srli(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_shamt(cpu, inst, shifts::srl::<Double>)
}

/// `srai rd, rs1, shamt`
pub fn srai(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_shamt(cpu, inst, shifts::sra::<Double>)
}

/// `add rd, rs1, rs2`
pub fn add(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::add::<Double>)
}

/// `sub rd, rs1, rs2`
pub fn sub(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::sub::<Double>)
}

/// `sll rd, rs1, rs2`
pub fn sll(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, shifts::sll::<Double>)
}

/// `slt rd, rs1, rs2`
pub fn slt(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, logic::slt)
}

/// `sltu rd, rs1, rs2`
pub fn sltu(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, logic::sltu)
}

/// `xor rd, rs1, rs2`
pub fn xor(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, logic::xor)
}

/// `srl rd, rs1, rs2`
pub fn srl(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, shifts::srl::<Double>)
}

/// `sra rd, rs1, rs2`
pub fn sra(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, shifts::sra::<Double>)
}

/// `or rd, rs1, rs2`
pub fn or(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, logic::or)
}

/// `and rd, rs1, rs2`
pub fn and(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, logic::and)
}

/// `addiw rd, rs1, imm`
pub fn addiw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_imm(cpu, inst, arithmetic::add::<Word>)
}

/// `slliw rd, rs1, shamt`
pub fn slliw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_shamt(cpu, inst, shifts::sll::<Word>)
}

/// `srliw rd, rs1, shamt`
pub fn srliw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_shamt(cpu, inst, shifts::srl::<Word>)
}

/// `sraiw rd, rs1, shamt`
pub fn sraiw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_shamt(cpu, inst, shifts::sra::<Word>)
}

/// `addw rd, rs1, rs2`
pub fn addw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::add::<Word>)
}

/// `subw rd, rs1, rs2`
pub fn subw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, arithmetic::sub::<Word>)
}

/// `sllw rd, rs1, rs2`
pub fn sllw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, shifts::sll::<Word>)
}

/// `srlw rd, rs1, rs2`
pub fn srlw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, shifts::srl::<Word>)
}

/// `sraw rd, rs1, rs2`
pub fn sraw(cpu: &mut Cpu, inst: Instruction) -> Result<u64, Trap> {
    reg_reg(cpu, inst, shifts::sra::<Word>)
}
