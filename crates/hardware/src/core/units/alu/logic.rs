//! ALU logical and comparison operations.
//!
//! These only exist in the full 64-bit width; RV64 has no `W` forms of them.

/// Bitwise AND.
#[inline]
pub const fn and(a: u64, b: u64) -> u64 {
    a & b
}

/// Bitwise OR.
#[inline]
pub const fn or(a: u64, b: u64) -> u64 {
    a | b
}

/// Bitwise XOR.
#[inline]
pub const fn xor(a: u64, b: u64) -> u64 {
    a ^ b
}

/// Set-less-than, signed. Returns 1 or 0.
#[inline]
pub const fn slt(a: u64, b: u64) -> u64 {
    ((a as i64) < (b as i64)) as u64
}

/// Set-less-than, unsigned. Returns 1 or 0.
#[inline]
pub const fn sltu(a: u64, b: u64) -> u64 {
    (a < b) as u64
}
