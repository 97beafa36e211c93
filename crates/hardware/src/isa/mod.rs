//! Instruction Set Architecture (ISA) Definitions.
//!
//! Field layouts, opcode and function-code constants organized by RISC-V
//! extension, and the classification table that maps an encoding to the
//! handler executing it.
//!
//! # Extensions
//!
//! * `rv64i`: Base Integer Instruction Set (64-bit).
//! * `rv64m`: Standard Extension for Integer Multiplication and Division.
//! * `rv64a`: Standard Extension for Atomic Instructions.
//! * `privileged`: ECALL/EBREAK encodings and exception cause codes.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Immediate extraction and sign extension.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Instruction identities and their classes.
pub mod op;

/// System instruction encodings and exception causes.
pub mod privileged;

/// Atomic memory operations extension (AMO instructions).
pub mod rv64a;

/// Base integer instruction set (64-bit RISC-V core instructions).
pub mod rv64i;

/// Integer multiply/divide extension (MUL, DIV, REM instructions).
pub mod rv64m;

/// Opcode → handler classification table.
pub mod table;
