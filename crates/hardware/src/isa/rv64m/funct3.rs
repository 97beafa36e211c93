//! `funct3` selectors of the M extension.
//!
//! Valid under `OP_REG` and `OP_REG_32` with `funct7 == M_EXTENSION`. The
//! 32-bit opcode only assigns `MUL` and the four divide/remainder codes.

/// `mul`/`mulw`: low half of the product.
pub const MUL: u32 = 0b000;
/// `mulh`: high half, both operands signed.
pub const MULH: u32 = 0b001;
/// `mulhsu`: high half, `rs1` signed and `rs2` unsigned.
pub const MULHSU: u32 = 0b010;
/// `mulhu`: high half, both operands unsigned.
pub const MULHU: u32 = 0b011;
/// `div`/`divw`
pub const DIV: u32 = 0b100;
/// `divu`/`divuw`
pub const DIVU: u32 = 0b101;
/// `rem`/`remw`
pub const REM: u32 = 0b110;
/// `remu`/`remuw`
pub const REMU: u32 = 0b111;
