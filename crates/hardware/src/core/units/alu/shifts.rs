//! ALU shift operations.
//!
//! The shift amount is masked to 6 bits for 64-bit shifts and to 5 bits for
//! the `W` forms. Word results are sign-extended from bit 31, so `SRLW` of a
//! value with bit 31 set after the shift still yields a negative register.

use super::width::OperandWidth;

/// Shift left logical.
#[inline]
pub fn sll<W: OperandWidth>(a: u64, shamt: u64) -> u64 {
    let sh = shamt as u32 & W::SHAMT_MASK;
    W::sext(a << sh)
}

/// Shift right logical. Zeroes enter from bit `BITS - 1`.
#[inline]
pub fn srl<W: OperandWidth>(a: u64, shamt: u64) -> u64 {
    let sh = shamt as u32 & W::SHAMT_MASK;
    W::sext(W::zext(a) >> sh)
}

/// Shift right arithmetic. Copies of bit `BITS - 1` enter from the top.
#[inline]
pub fn sra<W: OperandWidth>(a: u64, shamt: u64) -> u64 {
    let sh = shamt as u32 & W::SHAMT_MASK;
    W::sext((W::signed(a) >> sh) as u64)
}
