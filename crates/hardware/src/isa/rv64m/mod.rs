//! RISC-V Multiply/Divide Extension (M).
//!
//! These instructions reuse the funct3 space of `OP_REG`/`OP_REG_32` and are
//! told apart from the base operations by `funct7 == M_EXTENSION`.

/// Function code 3 definitions for multiply/divide operations.
pub mod funct3;

/// Multiply/divide extension opcodes.
pub mod opcodes;
