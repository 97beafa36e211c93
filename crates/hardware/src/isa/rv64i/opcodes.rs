//! RISC-V Base Integer (I) Opcodes.
//!
//! Major opcodes (bits 6-0). Each one selects a format family in the decode table.

/// Load instructions (LB, LH, LW, LD, LBU, LHU, LWU). I-type.
pub const OP_LOAD: u32 = 0b0000011;

/// Memory ordering instructions (FENCE, FENCE.I). I-type.
pub const OP_MISC_MEM: u32 = 0b0001111;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, ...). I-type.
pub const OP_IMM: u32 = 0b0010011;

/// Add Upper Immediate to PC (AUIPC). U-type.
pub const OP_AUIPC: u32 = 0b0010111;

/// 32-bit immediate arithmetic (ADDIW, SLLIW, SRLIW, SRAIW). RV64 only.
pub const OP_IMM_32: u32 = 0b0011011;

/// Store instructions (SB, SH, SW, SD). S-type.
pub const OP_STORE: u32 = 0b0100011;

/// Register-register arithmetic (ADD, SUB, ... and the M extension). R-type.
pub const OP_REG: u32 = 0b0110011;

/// Load Upper Immediate (LUI). U-type.
pub const OP_LUI: u32 = 0b0110111;

/// 32-bit register-register arithmetic (ADDW, SUBW, MULW, ...). RV64 only.
pub const OP_REG_32: u32 = 0b0111011;

/// Conditional branches (BEQ, BNE, BLT, BGE, BLTU, BGEU). B-type.
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump and Link Register (JALR). I-type.
pub const OP_JALR: u32 = 0b1100111;

/// Jump and Link (JAL). J-type.
pub const OP_JAL: u32 = 0b1101111;
