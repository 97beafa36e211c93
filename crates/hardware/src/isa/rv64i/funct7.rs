//! RISC-V Base Integer (I) Function Codes (funct7 / funct6).
//!
//! The `funct7` field (bits 31-25) distinguishes R-type operations that share
//! a `funct3` (ADD vs SUB, SRL vs SRA). RV64 shift-immediates carry a 6-bit
//! shift amount, so their discriminant is `funct6` (bits 31-26) instead.

/// Default operation (ADD, SRL, SLLW, ...).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SUBW).
pub const SUB: u32 = 0b0100000;

/// Alternate operation for shifts (SRA, SRAW, SRAIW).
pub const SRA: u32 = 0b0100000;

/// `funct6` of SLLI/SRLI on RV64.
pub const SHIFT_LOGICAL_6: u32 = 0b000000;

/// `funct6` of SRAI on RV64.
pub const SHIFT_ARITH_6: u32 = 0b010000;
