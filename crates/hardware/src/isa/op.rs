//! Instruction identities.
//!
//! An [`Op`] is what the decode table resolves an encoding to. It carries no
//! operands; those are read from the [`Instruction`](crate::isa::instruction::Instruction)
//! by the handler. `Op` exists so tracing, disassembly and statistics can name
//! and classify an instruction without re-running the decode.

use std::fmt;

use serde::Serialize;

/// Coarse instruction class used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstClass {
    /// Integer arithmetic, logic, shifts, compares, LUI/AUIPC and RV64M.
    Alu,
    /// Loads.
    Load,
    /// Stores.
    Store,
    /// Conditional branches.
    Branch,
    /// JAL and JALR.
    Jump,
    /// LR, SC and AMOs.
    Atomic,
    /// FENCE, FENCE.I, ECALL, EBREAK.
    System,
}

/// Operand layout of an instruction, used to render its assembly text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandForm {
    /// `rd, rs1, rs2`
    Register,
    /// `rd, rs1, imm`
    Immediate,
    /// `rd, rs1, shamt`
    Shift,
    /// `rd, imm(rs1)`
    Load,
    /// `rs2, imm(rs1)`
    Store,
    /// `rs1, rs2, offset`
    Branch,
    /// `rd, imm[31:12]`
    Upper,
    /// `rd, offset`
    Jump,
    /// `rd, (rs1)`
    LoadReserved,
    /// `rd, rs2, (rs1)`
    Amo,
    /// No operands.
    None,
}

/// Every instruction the interpreter executes: RV64I, RV64M, RV64A,
/// FENCE/FENCE.I and ECALL/EBREAK.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    // RV64I: upper immediates and jumps
    Lui,
    Auipc,
    Jal,
    Jalr,
    // RV64I: branches
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    // RV64I: loads
    Lb,
    Lh,
    Lw,
    Ld,
    Lbu,
    Lhu,
    Lwu,
    // RV64I: stores
    Sb,
    Sh,
    Sw,
    Sd,
    // RV64I: register-immediate
    Addi,
    Slti,
    Sltiu,
    Xori,
    Ori,
    Andi,
    Slli,
    Srli,
    Srai,
    // RV64I: register-register
    Add,
    Sub,
    Sll,
    Slt,
    Sltu,
    Xor,
    Srl,
    Sra,
    Or,
    And,
    // RV64I: 32-bit forms
    Addiw,
    Slliw,
    Srliw,
    Sraiw,
    Addw,
    Subw,
    Sllw,
    Srlw,
    Sraw,
    // RV64M
    Mul,
    Mulh,
    Mulhsu,
    Mulhu,
    Div,
    Divu,
    Rem,
    Remu,
    Mulw,
    Divw,
    Divuw,
    Remw,
    Remuw,
    // RV64A
    LrW,
    ScW,
    AmoswapW,
    AmoaddW,
    AmoxorW,
    AmoandW,
    AmoorW,
    AmominW,
    AmomaxW,
    AmominuW,
    AmomaxuW,
    LrD,
    ScD,
    AmoswapD,
    AmoaddD,
    AmoxorD,
    AmoandD,
    AmoorD,
    AmominD,
    AmomaxD,
    AmominuD,
    AmomaxuD,
    // Ordering and environment
    Fence,
    FenceI,
    Ecall,
    Ebreak,
}

impl Op {
    /// Returns the assembly mnemonic.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lui => "lui",
            Self::Auipc => "auipc",
            Self::Jal => "jal",
            Self::Jalr => "jalr",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blt => "blt",
            Self::Bge => "bge",
            Self::Bltu => "bltu",
            Self::Bgeu => "bgeu",
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Ld => "ld",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
            Self::Lwu => "lwu",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
            Self::Sd => "sd",
            Self::Addi => "addi",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Xori => "xori",
            Self::Ori => "ori",
            Self::Andi => "andi",
            Self::Slli => "slli",
            Self::Srli => "srli",
            Self::Srai => "srai",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
            Self::Addiw => "addiw",
            Self::Slliw => "slliw",
            Self::Srliw => "srliw",
            Self::Sraiw => "sraiw",
            Self::Addw => "addw",
            Self::Subw => "subw",
            Self::Sllw => "sllw",
            Self::Srlw => "srlw",
            Self::Sraw => "sraw",
            Self::Mul => "mul",
            Self::Mulh => "mulh",
            Self::Mulhsu => "mulhsu",
            Self::Mulhu => "mulhu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Rem => "rem",
            Self::Remu => "remu",
            Self::Mulw => "mulw",
            Self::Divw => "divw",
            Self::Divuw => "divuw",
            Self::Remw => "remw",
            Self::Remuw => "remuw",
            Self::LrW => "lr.w",
            Self::ScW => "sc.w",
            Self::AmoswapW => "amoswap.w",
            Self::AmoaddW => "amoadd.w",
            Self::AmoxorW => "amoxor.w",
            Self::AmoandW => "amoand.w",
            Self::AmoorW => "amoor.w",
            Self::AmominW => "amomin.w",
            Self::AmomaxW => "amomax.w",
            Self::AmominuW => "amominu.w",
            Self::AmomaxuW => "amomaxu.w",
            Self::LrD => "lr.d",
            Self::ScD => "sc.d",
            Self::AmoswapD => "amoswap.d",
            Self::AmoaddD => "amoadd.d",
            Self::AmoxorD => "amoxor.d",
            Self::AmoandD => "amoand.d",
            Self::AmoorD => "amoor.d",
            Self::AmominD => "amomin.d",
            Self::AmomaxD => "amomax.d",
            Self::AmominuD => "amominu.d",
            Self::AmomaxuD => "amomaxu.d",
            Self::Fence => "fence",
            Self::FenceI => "fence.i",
            Self::Ecall => "ecall",
            Self::Ebreak => "ebreak",
        }
    }

    /// Returns the statistics class of this instruction.
    #[must_use]
    pub const fn class(self) -> InstClass {
        match self {
            Self::Jal | Self::Jalr => InstClass::Jump,
            Self::Beq | Self::Bne | Self::Blt | Self::Bge | Self::Bltu | Self::Bgeu => {
                InstClass::Branch
            }
            Self::Lb | Self::Lh | Self::Lw | Self::Ld | Self::Lbu | Self::Lhu | Self::Lwu => {
                InstClass::Load
            }
            Self::Sb | Self::Sh | Self::Sw | Self::Sd => InstClass::Store,
            Self::Fence | Self::FenceI | Self::Ecall | Self::Ebreak => InstClass::System,
            op if op.is_atomic() => InstClass::Atomic,
            _ => InstClass::Alu,
        }
    }

    /// Returns the operand layout used by the disassembler.
    #[must_use]
    pub const fn form(self) -> OperandForm {
        match self {
            Self::Lui | Self::Auipc => OperandForm::Upper,
            Self::Jal => OperandForm::Jump,
            Self::Jalr => OperandForm::Load,
            Self::Beq | Self::Bne | Self::Blt | Self::Bge | Self::Bltu | Self::Bgeu => {
                OperandForm::Branch
            }
            Self::Lb | Self::Lh | Self::Lw | Self::Ld | Self::Lbu | Self::Lhu | Self::Lwu => {
                OperandForm::Load
            }
            Self::Sb | Self::Sh | Self::Sw | Self::Sd => OperandForm::Store,
            Self::Addi
            | Self::Slti
            | Self::Sltiu
            | Self::Xori
            | Self::Ori
            | Self::Andi
            | Self::Addiw => OperandForm::Immediate,
            Self::Slli | Self::Srli | Self::Srai | Self::Slliw | Self::Srliw | Self::Sraiw => {
                OperandForm::Shift
            }
            Self::LrW | Self::LrD => OperandForm::LoadReserved,
            Self::Fence | Self::FenceI | Self::Ecall | Self::Ebreak => OperandForm::None,
            op if op.is_atomic() => OperandForm::Amo,
            _ => OperandForm::Register,
        }
    }

    /// Returns `true` for LR, SC and every AMO.
    #[must_use]
    pub const fn is_atomic(self) -> bool {
        matches!(
            self,
            Self::LrW
                | Self::ScW
                | Self::AmoswapW
                | Self::AmoaddW
                | Self::AmoxorW
                | Self::AmoandW
                | Self::AmoorW
                | Self::AmominW
                | Self::AmomaxW
                | Self::AmominuW
                | Self::AmomaxuW
                | Self::LrD
                | Self::ScD
                | Self::AmoswapD
                | Self::AmoaddD
                | Self::AmoxorD
                | Self::AmoandD
                | Self::AmoorD
                | Self::AmominD
                | Self::AmomaxD
                | Self::AmominuD
                | Self::AmomaxuD
        )
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
