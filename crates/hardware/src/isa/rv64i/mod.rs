//! RISC-V Base Integer Instruction Set (I).
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (Load, Store, Branch, Jal, OpImm, OpReg, etc.).
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: Additional opcode bits for R-type and shift-immediate instructions.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 (and RV64 funct6) definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;
