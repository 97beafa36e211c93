//! RISC-V Atomic Extension (A).
//!
//! AMOs perform a read-modify-write in a single instruction; LR/SC implement
//! optimistic concurrency via a reservation. The operation is selected by
//! `funct5` (bits 31-27) and the width by `funct3`.

/// Function code 3 definitions (operation width).
pub mod funct3;

/// Function code 5 definitions (operation).
pub mod funct5;

/// Atomic extension opcode and ordering bits.
pub mod opcodes;
