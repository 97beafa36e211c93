//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Maps register indices to their standard ABI mnemonics for disassembly and
//! register dumps, and names the indices the simulator itself reads.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (return address, ra).
pub const REG_RA: usize = 1;
/// Register x2 (stack pointer, sp).
pub const REG_SP: usize = 2;
/// Register x10 (first argument/return value, a0).
pub const REG_A0: usize = 10;
/// Register x17 (system call number, a7).
pub const REG_A7: usize = 17;

/// ABI names of the integer registers, indexed by register number.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name of integer register `idx`, or `"x?"` when out of range.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x?")
}
