//! Immediate reassembly for the RISC-V instruction formats.
//!
//! Each format scatters its immediate across the word differently; B-type and
//! J-type interleave bits so that the sign always lives in bit 31. The helpers
//! here gather the pieces back into place and sign-extend to 64 bits with an
//! arithmetic shift.

/// Width of a value processed by [`sign_extend`].
const VALUE_WIDTH: u32 = 64;

/// Bit shift for the I-type immediate (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
const I_IMM_SHIFT: u32 = 20;

/// Number of bits in an I-type or S-type immediate.
const IS_IMM_BITS: u32 = 12;

/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const S_IMM_LOW_SHIFT: u32 = 7;
const S_IMM_LOW_MASK: u32 = 0x1F;
const S_IMM_HIGH_SHIFT: u32 = 25;
const S_IMM_HIGH_MASK: u32 = 0x7F;
const S_IMM_HIGH_POS: u32 = 5;

/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
const B_IMM_BITS: u32 = 13;
const B_IMM_11_SHIFT: u32 = 7;
const B_IMM_4_1_SHIFT: u32 = 8;
const B_IMM_4_1_MASK: u32 = 0xF;
const B_IMM_10_5_SHIFT: u32 = 25;
const B_IMM_10_5_MASK: u32 = 0x3F;
const B_IMM_12_SHIFT: u32 = 31;

/// U-Type format: `imm[31:12] | rd | opcode`
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
const J_IMM_BITS: u32 = 21;
const J_IMM_19_12_SHIFT: u32 = 12;
const J_IMM_19_12_MASK: u32 = 0xFF;
const J_IMM_11_SHIFT: u32 = 20;
const J_IMM_10_1_SHIFT: u32 = 21;
const J_IMM_10_1_MASK: u32 = 0x3FF;
const J_IMM_20_SHIFT: u32 = 31;

/// Sign-extends the low `bits` bits of `val` to a 64-bit signed integer.
///
/// Bits above `bits` in the input are ignored. `bits` must be in `1..=64`.
///
/// ```
/// use rv64emu_core::isa::decode::sign_extend;
///
/// assert_eq!(sign_extend(0x800, 12) as u64, 0xFFFF_FFFF_FFFF_F800);
/// assert_eq!(sign_extend(0x7FF, 12), 0x7FF);
/// ```
#[inline(always)]
pub const fn sign_extend(val: u64, bits: u32) -> i64 {
    let shift = VALUE_WIDTH - bits;
    ((val << shift) as i64) >> shift
}

/// Decodes the I-type immediate (loads, JALR, OP-IMM).
#[inline(always)]
pub const fn imm_i(inst: u32) -> i64 {
    sign_extend((inst >> I_IMM_SHIFT) as u64, IS_IMM_BITS)
}

/// Decodes the S-type immediate (stores).
#[inline(always)]
pub const fn imm_s(inst: u32) -> i64 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    sign_extend(((high << S_IMM_HIGH_POS) | low) as u64, IS_IMM_BITS)
}

/// Decodes the B-type immediate (conditional branches). Bit 0 is always zero.
#[inline(always)]
pub const fn imm_b(inst: u32) -> i64 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & 1;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (inst >> B_IMM_12_SHIFT) & 1;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined as u64, B_IMM_BITS)
}

/// Decodes the U-type immediate (LUI, AUIPC) as the sign-extended upper 20 bits.
#[inline(always)]
pub const fn imm_u(inst: u32) -> i64 {
    (inst & U_IMM_MASK) as i32 as i64
}

/// Decodes the J-type immediate (JAL). Bit 0 is always zero.
#[inline(always)]
pub const fn imm_j(inst: u32) -> i64 {
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & 1;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (inst >> J_IMM_20_SHIFT) & 1;

    let combined = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined as u64, J_IMM_BITS)
}
