//! Trap and width helper tests.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rv64emu_core::common::{MemWidth, Trap};

#[rstest]
#[case(Trap::InstructionAddressMisaligned(0x8000_0002), 0, 0x8000_0002)]
#[case(Trap::InstructionAccessFault(0x4000), 1, 0x4000)]
#[case(Trap::IllegalInstruction(0xFFFF_FFFF), 2, 0xFFFF_FFFF)]
#[case(Trap::Breakpoint(0x8000_0010), 3, 0x8000_0010)]
#[case(Trap::LoadAddressMisaligned(0x1001), 4, 0x1001)]
#[case(Trap::LoadAccessFault(0x10), 5, 0x10)]
#[case(Trap::StoreAddressMisaligned(0x1003), 6, 0x1003)]
#[case(Trap::StoreAccessFault(0x20), 7, 0x20)]
#[case(Trap::EnvironmentCall(0x8000_0000), 11, 0x8000_0000)]
fn trap_cause_and_value(#[case] trap: Trap, #[case] cause: u64, #[case] tval: u64) {
    assert_eq!(trap.cause(), cause);
    assert_eq!(trap.tval(), tval);
}

#[test]
fn trap_display_names_the_value_in_hex() {
    assert_eq!(
        Trap::IllegalInstruction(0x1234).to_string(),
        "IllegalInstruction(0x1234)"
    );
}

#[rstest]
#[case(MemWidth::Byte, 8, 1, 0xFF)]
#[case(MemWidth::Half, 16, 2, 0xFFFF)]
#[case(MemWidth::Word, 32, 4, 0xFFFF_FFFF)]
#[case(MemWidth::Double, 64, 8, u64::MAX)]
fn mem_width_geometry(
    #[case] width: MemWidth,
    #[case] bits: u32,
    #[case] bytes: u64,
    #[case] mask: u64,
) {
    assert_eq!(width.bits(), bits);
    assert_eq!(width.bytes(), bytes);
    assert_eq!(width.mask(), mask);
    assert_eq!(MemWidth::from_bits(bits), Some(width));
}

#[test]
fn mem_width_alignment() {
    assert!(MemWidth::Byte.is_aligned(0x1001));
    assert!(MemWidth::Word.is_aligned(0x1004));
    assert!(!MemWidth::Word.is_aligned(0x1002));
    assert!(!MemWidth::Double.is_aligned(0x1004));
    assert_eq!(MemWidth::from_bits(12), None);
}
