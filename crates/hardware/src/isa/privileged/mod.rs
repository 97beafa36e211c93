//! System instruction and trap cause definitions.
//!
//! # Modules
//!
//! - `cause`: Exception cause codes used by `Trap::cause`.
//! - `opcodes`: System opcode and the ECALL/EBREAK function codes.

/// Exception cause code definitions.
pub mod cause;

/// System instruction opcodes (ECALL, EBREAK).
pub mod opcodes;
