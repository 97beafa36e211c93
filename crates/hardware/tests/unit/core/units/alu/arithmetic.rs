use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rv64emu_core::core::units::alu::{Double, OperandWidth, Word, arithmetic};

#[test]
fn word_results_are_sign_extended() {
    assert_eq!(arithmetic::add::<Word>(0x7FFF_FFFF, 1), 0xFFFF_FFFF_8000_0000);
    assert_eq!(arithmetic::sub::<Word>(0, 1), u64::MAX);
    assert_eq!(arithmetic::add::<Double>(0x7FFF_FFFF, 1), 0x8000_0000);
}

#[test]
fn high_multiplies() {
    assert_eq!(arithmetic::mulhu(u64::MAX, u64::MAX), u64::MAX - 1);
    assert_eq!(arithmetic::mulh(u64::MAX, u64::MAX), 0);
    assert_eq!(arithmetic::mulhsu(u64::MAX, u64::MAX), u64::MAX);
}

#[test]
fn division_edge_cases() {
    assert_eq!(arithmetic::div::<Double>(5, 0), u64::MAX);
    assert_eq!(arithmetic::rem::<Double>(5, 0), 5);
    assert_eq!(arithmetic::divu::<Word>(5, 0), u64::MAX);
    assert_eq!(arithmetic::remu::<Word>(0x1_0000_0005, 0), 5);
    assert_eq!(arithmetic::div::<Double>(i64::MIN as u64, u64::MAX), i64::MIN as u64);
    assert_eq!(arithmetic::rem::<Double>(i64::MIN as u64, u64::MAX), 0);
}

proptest! {
    #[test]
    fn quotient_and_remainder_recompose(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let (ua, ub) = (a as u64, b as u64);
        let q = arithmetic::div::<Double>(ua, ub);
        let r = arithmetic::rem::<Double>(ua, ub);
        prop_assert_eq!(q.wrapping_mul(ub).wrapping_add(r), ua);
    }

    #[test]
    fn unsigned_quotient_and_remainder_recompose(a in any::<u64>(), b in 1..=u64::MAX) {
        let q = arithmetic::divu::<Double>(a, b);
        let r = arithmetic::remu::<Double>(a, b);
        prop_assert!(r < b);
        prop_assert_eq!(q * b + r, a);
    }

    #[test]
    fn word_forms_are_always_sign_extended(a in any::<u64>(), b in any::<u64>()) {
        for v in [
            arithmetic::add::<Word>(a, b),
            arithmetic::mul::<Word>(a, b),
            arithmetic::div::<Word>(a, b),
            arithmetic::remu::<Word>(a, b),
        ] {
            prop_assert_eq!(Word::sext(v), v);
        }
    }

    #[test]
    fn mulhu_matches_wide_product(a in any::<u64>(), b in any::<u64>()) {
        let wide = u128::from(a) * u128::from(b);
        prop_assert_eq!(arithmetic::mulhu(a, b), (wide >> 64) as u64);
        prop_assert_eq!(arithmetic::mul::<Double>(a, b), wide as u64);
    }
}
