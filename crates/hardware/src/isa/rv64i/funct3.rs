//! `funct3` selectors (bits 14:12) of the base integer opcodes.
//!
//! The same three bits mean different things under each major opcode, so
//! the constants are grouped by the opcode they qualify.

// OP_LOAD: width in the low two bits, zero-extension in bit 2.

/// `lb`
pub const LB: u32 = 0b000;
/// `lh`
pub const LH: u32 = 0b001;
/// `lw`
pub const LW: u32 = 0b010;
/// `ld`
pub const LD: u32 = 0b011;
/// `lbu`
pub const LBU: u32 = 0b100;
/// `lhu`
pub const LHU: u32 = 0b101;
/// `lwu`
pub const LWU: u32 = 0b110;

// OP_STORE

/// `sb`
pub const SB: u32 = 0b000;
/// `sh`
pub const SH: u32 = 0b001;
/// `sw`
pub const SW: u32 = 0b010;
/// `sd`
pub const SD: u32 = 0b011;

// OP_BRANCH: 0b010 and 0b011 are unassigned.

/// `beq`: taken if `rs1 == rs2`.
pub const BEQ: u32 = 0b000;
/// `bne`: taken if `rs1 != rs2`.
pub const BNE: u32 = 0b001;
/// `blt`: signed `rs1 < rs2`.
pub const BLT: u32 = 0b100;
/// `bge`: signed `rs1 >= rs2`.
pub const BGE: u32 = 0b101;
/// `bltu`: unsigned `rs1 < rs2`.
pub const BLTU: u32 = 0b110;
/// `bgeu`: unsigned `rs1 >= rs2`.
pub const BGEU: u32 = 0b111;

// OP_IMM, OP_REG and their 32-bit forms. funct7 separates add/sub and srl/sra.

/// `add`, `sub`, `addi` and the `w` forms.
pub const ADD_SUB: u32 = 0b000;
/// `sll`, `slli`, `sllw`, `slliw`
pub const SLL: u32 = 0b001;
/// `slt`, `slti`
pub const SLT: u32 = 0b010;
/// `sltu`, `sltiu`
pub const SLTU: u32 = 0b011;
/// `xor`, `xori`
pub const XOR: u32 = 0b100;
/// `srl`/`sra` and their immediate and `w` forms.
pub const SRL_SRA: u32 = 0b101;
/// `or`, `ori`
pub const OR: u32 = 0b110;
/// `and`, `andi`
pub const AND: u32 = 0b111;

// OP_JALR and OP_MISC_MEM

/// `jalr`; every other value is illegal.
pub const JALR: u32 = 0b000;
/// `fence`
pub const FENCE: u32 = 0b000;
/// `fence.i` (Zifencei)
pub const FENCE_I: u32 = 0b001;
