//! RISC-V Multiply/Divide Extension (M) Opcodes.
//!
//! The M extension shares `OP_REG` and `OP_REG_32` with the base integer set.
//! It is distinguished by the `funct7` field having the value 1.

/// M-Extension selector in the funct7 field.
pub const M_EXTENSION: u32 = 0b0000001;
