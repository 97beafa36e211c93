//! ALU arithmetic operations.
//!
//! Addition, subtraction and the M-extension multiply/divide family.
//! Routines taking an [`OperandWidth`] parameter serve both the 64-bit form
//! and its `W` counterpart; word results are sign-extended from bit 31.
//!
//! Division never traps. Dividing by zero yields all ones (quotient) or the
//! dividend (remainder), and the signed overflow case `MIN / -1` yields the
//! dividend (quotient) or zero (remainder).

use super::width::OperandWidth;

/// Number of bits in XLEN for RV64 (used for high-multiply shift).
const XLEN_BITS: u32 = 64;

/// `a + b`, wrapping.
#[inline]
pub fn add<W: OperandWidth>(a: u64, b: u64) -> u64 {
    W::sext(a.wrapping_add(b))
}

/// `a - b`, wrapping.
#[inline]
pub fn sub<W: OperandWidth>(a: u64, b: u64) -> u64 {
    W::sext(a.wrapping_sub(b))
}

/// Low half of `a * b`. The low bits of a product do not depend on signedness.
#[inline]
pub fn mul<W: OperandWidth>(a: u64, b: u64) -> u64 {
    W::sext(a.wrapping_mul(b))
}

/// Upper 64 bits of signed × signed.
#[inline]
pub fn mulh(a: u64, b: u64) -> u64 {
    (((a as i64 as i128) * (b as i64 as i128)) >> XLEN_BITS) as u64
}

/// Upper 64 bits of signed × unsigned.
#[inline]
pub fn mulhsu(a: u64, b: u64) -> u64 {
    (((a as i64 as i128).wrapping_mul(b as u128 as i128)) >> XLEN_BITS) as u64
}

/// Upper 64 bits of unsigned × unsigned.
#[inline]
pub fn mulhu(a: u64, b: u64) -> u64 {
    (((a as u128) * (b as u128)) >> XLEN_BITS) as u64
}

/// Signed division.
///
/// For `W = Word` the `i64` quotient of two sign-extended words cannot
/// overflow, and `i32::MIN / -1 = 2^31` truncates back to `i32::MIN`.
/// For `W = Double`, `wrapping_div` returns `i64::MIN`. Both equal the dividend.
#[inline]
pub fn div<W: OperandWidth>(a: u64, b: u64) -> u64 {
    let (a, b) = (W::signed(a), W::signed(b));
    if b == 0 {
        u64::MAX
    } else {
        W::sext(a.wrapping_div(b) as u64)
    }
}

/// Unsigned division. The quotient is sign-extended for `W = Word`.
#[inline]
pub fn divu<W: OperandWidth>(a: u64, b: u64) -> u64 {
    let (a, b) = (W::zext(a), W::zext(b));
    if b == 0 {
        u64::MAX
    } else {
        W::sext(a / b)
    }
}

/// Signed remainder. The sign follows the dividend.
#[inline]
pub fn rem<W: OperandWidth>(a: u64, b: u64) -> u64 {
    let (a, b) = (W::signed(a), W::signed(b));
    if b == 0 {
        a as u64
    } else {
        W::sext(a.wrapping_rem(b) as u64)
    }
}

/// Unsigned remainder. The result is sign-extended for `W = Word`.
#[inline]
pub fn remu<W: OperandWidth>(a: u64, b: u64) -> u64 {
    let (a, b) = (W::zext(a), W::zext(b));
    if b == 0 {
        W::sext(a)
    } else {
        W::sext(a % b)
    }
}
