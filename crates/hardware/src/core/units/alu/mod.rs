//! Arithmetic Logic Unit (ALU).
//!
//! Pure integer operations used by the instruction semantics, organized by
//! category:
//! - [`arithmetic`]: add, sub and the M extension (mul*, div*, rem*)
//! - [`logic`]:      and, or, xor, slt, sltu
//! - [`shifts`]:     sll, srl, sra
//!
//! Width-sensitive operations are generic over [`OperandWidth`]; instantiate
//! with [`Double`] for the 64-bit form and [`Word`] for the `W` form.
//!
//! ```
//! use rv64emu_core::core::units::alu::{arithmetic, Double, Word};
//!
//! assert_eq!(arithmetic::add::<Double>(42, 8), 50);
//! // 32-bit addition wraps to 0 and sign-extends.
//! assert_eq!(arithmetic::add::<Word>(0xFFFF_FFFF, 1), 0);
//! // Division by zero yields all ones.
//! assert_eq!(arithmetic::div::<Double>(7, 0), u64::MAX);
//! ```

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

/// 32/64-bit operand width views.
pub mod width;

pub use width::{Double, OperandWidth, Word};
