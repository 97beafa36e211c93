use rstest::rstest;
use rv64emu_core::core::units::alu::logic;

#[rstest]
#[case(u64::MAX, 0, 1, 0)]
#[case(0, u64::MAX, 0, 1)]
#[case(5, 5, 0, 0)]
#[case(1 << 63, 1, 1, 0)]
fn comparisons(#[case] a: u64, #[case] b: u64, #[case] slt: u64, #[case] sltu: u64) {
    assert_eq!(logic::slt(a, b), slt);
    assert_eq!(logic::sltu(a, b), sltu);
}

#[test]
fn bitwise() {
    assert_eq!(logic::and(0xF0F0, 0xFF00), 0xF000);
    assert_eq!(logic::or(0xF0F0, 0xFF00), 0xFFF0);
    assert_eq!(logic::xor(0xF0F0, 0xFF00), 0x0FF0);
}
