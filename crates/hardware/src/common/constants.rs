//! Global Emulator Constants.
//!
//! This module defines system-wide constants. It includes:
//! 1. **Instruction Constants:** Instruction lengths and the compressed-instruction marker.
//! 2. **Register Constants:** Register file size.
//! 3. **Exit Conventions:** The bare-metal `exit` system call number.

/// Size of a compressed (16-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_16: u64 = 2;

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_32: u64 = 4;

/// Bit mask selecting the two low bits that mark instruction length.
pub const COMPRESSED_INSTRUCTION_MASK: u32 = 0x3;

/// Value of the two low bits for a standard 32-bit instruction.
///
/// Any other value marks a 16-bit compressed instruction.
pub const STANDARD_INSTRUCTION_VALUE: u32 = 0x3;

/// Required alignment of jump and branch targets without the C extension.
pub const INSTRUCTION_ALIGNMENT: u64 = 4;

/// Number of general-purpose integer registers.
pub const NUM_GPRS: usize = 32;

/// Linux/newlib system call number for `exit`, passed in `a7` with `ecall`.
pub const SYSCALL_EXIT: u64 = 93;

/// Sentinel stored in the exit-request cell while no exit has been requested.
pub const NO_EXIT_REQUESTED: u64 = u64::MAX;
