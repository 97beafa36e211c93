//! Instruction word model and field extraction.
//!
//! A fetched instruction is kept as its raw 32-bit encoding. Every field the
//! dispatcher or a handler needs is derived on demand through
//! [`InstructionBits`]; nothing is cached or mutated after fetch.

use crate::common::constants::{
    COMPRESSED_INSTRUCTION_MASK, INSTRUCTION_SIZE_16, INSTRUCTION_SIZE_32,
    STANDARD_INSTRUCTION_VALUE,
};
use crate::isa::decode;
use crate::isa::rv64a::opcodes::{AQ_BIT, RL_BIT};

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for a 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct5 field (bits 27-31).
pub const FUNCT5_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct6 field (bits 26-31).
pub const FUNCT6_MASK: u32 = 0x3F;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the funct12 field (bits 20-31).
pub const FUNCT12_MASK: u32 = 0xFFF;
/// Bit mask for the 6-bit RV64 shift amount (bits 20-25).
pub const SHAMT_MASK: u32 = 0x3F;

/// Field extraction for raw RISC-V instruction encodings.
///
/// Implemented for `u32` so decode tables can classify a word without
/// wrapping it first.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Register 0 (x0) is hardwired to zero and writes to it are discarded.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct5 field (bits 27-31), the AMO operation selector.
    fn funct5(&self) -> u32;

    /// Extracts the funct6 field (bits 26-31), used by RV64 shift-immediates.
    fn funct6(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Distinguishes base from alternate encodings (ADD vs SUB) and the
    /// M extension (funct7 = 1) from the base integer set.
    fn funct7(&self) -> u32;

    /// Extracts the funct12 field (bits 20-31), used by SYSTEM instructions.
    fn funct12(&self) -> u32;

    /// Extracts the 6-bit shift amount (bits 20-25).
    fn shamt(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct5(&self) -> u32 {
        (self >> 27) & FUNCT5_MASK
    }

    #[inline(always)]
    fn funct6(&self) -> u32 {
        (self >> 26) & FUNCT6_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn funct12(&self) -> u32 {
        (self >> 20) & FUNCT12_MASK
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 20) & SHAMT_MASK
    }
}

/// An immutable fetched instruction word.
///
/// Construction never fails: any 32-bit value is structurally decodable.
/// Whether the encoding names a real instruction is decided by the decode
/// table at dispatch time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Instruction(u32);

impl Instruction {
    /// Wraps a raw instruction word.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw encoding.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the encoded length in bytes.
    ///
    /// Words whose low two bits are not `0b11` belong to the compressed
    /// (16-bit) space.
    #[must_use]
    pub const fn length(self) -> u64 {
        if self.0 & COMPRESSED_INSTRUCTION_MASK == STANDARD_INSTRUCTION_VALUE {
            INSTRUCTION_SIZE_32
        } else {
            INSTRUCTION_SIZE_16
        }
    }

    /// Returns `true` for a 16-bit (compressed) encoding.
    #[must_use]
    pub const fn is_compressed(self) -> bool {
        self.length() == INSTRUCTION_SIZE_16
    }

    /// Major opcode, bits [6:0].
    #[must_use]
    pub fn opcode(self) -> u32 {
        self.0.opcode()
    }

    /// Destination register, bits [11:7].
    #[must_use]
    pub fn rd(self) -> usize {
        self.0.rd()
    }

    /// First source register, bits [19:15].
    #[must_use]
    pub fn rs1(self) -> usize {
        self.0.rs1()
    }

    /// Second source register, bits [24:20].
    #[must_use]
    pub fn rs2(self) -> usize {
        self.0.rs2()
    }

    /// Minor opcode, bits [14:12].
    #[must_use]
    pub fn funct3(self) -> u32 {
        self.0.funct3()
    }

    /// Bits [31:27].
    #[must_use]
    pub fn funct5(self) -> u32 {
        self.0.funct5()
    }

    /// Bits [31:25].
    #[must_use]
    pub fn funct7(self) -> u32 {
        self.0.funct7()
    }

    /// 6-bit shift amount, bits [25:20].
    #[must_use]
    pub fn shamt(self) -> u32 {
        self.0.shamt()
    }

    /// Acquire ordering bit of an AMO.
    #[must_use]
    pub const fn aq(self) -> bool {
        (self.0 >> 25) & AQ_BIT != 0
    }

    /// Release ordering bit of an AMO.
    #[must_use]
    pub const fn rl(self) -> bool {
        (self.0 >> 25) & RL_BIT != 0
    }

    /// Sign-extended I-type immediate.
    #[must_use]
    pub const fn imm_i(self) -> i64 {
        decode::imm_i(self.0)
    }

    /// Sign-extended S-type immediate.
    #[must_use]
    pub const fn imm_s(self) -> i64 {
        decode::imm_s(self.0)
    }

    /// Sign-extended B-type immediate (always even).
    #[must_use]
    pub const fn imm_b(self) -> i64 {
        decode::imm_b(self.0)
    }

    /// U-type immediate, already shifted into bits [31:12] and sign-extended.
    #[must_use]
    pub const fn imm_u(self) -> i64 {
        decode::imm_u(self.0)
    }

    /// Sign-extended J-type immediate (always even).
    #[must_use]
    pub const fn imm_j(self) -> i64 {
        decode::imm_j(self.0)
    }
}

impl From<u32> for Instruction {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
