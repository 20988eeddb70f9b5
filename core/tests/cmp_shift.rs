//! Predicates, comparison, and shift laws.

mod common;

use bigint_core::Int;
use core::cmp::Ordering;

#[test]
fn ordering_matches_signed_intuition() {
    let neg = common::int_from_i64(-5);
    let zero = Int::new();
    let pos = common::int_from_i64(5);
    assert_eq!(neg.compare(&zero), Ordering::Less);
    assert_eq!(zero.compare(&pos), Ordering::Less);
    assert_eq!(neg.compare(&pos), Ordering::Less);
    assert_eq!(pos.compare(&pos), Ordering::Equal);
}

#[test]
fn power_of_two_detection() {
    assert!(Int::new().is_power_of_two());
    for k in 0..200u64 {
        let p = Int::from_power_of_two(k).unwrap();
        assert!(p.is_power_of_two(), "2^{k} should be a power of two");
        let mut not_p = p.clone();
        not_p.add_digit_(1).unwrap();
        assert!(!not_p.is_power_of_two());
    }
}

#[test]
fn count_bits_of_power_of_two() {
    for k in [0u64, 1, 27, 28, 29, 127, 128, 500] {
        let p = Int::from_power_of_two(k).unwrap();
        assert_eq!(p.count_bits(), k + 1);
    }
}

#[test]
fn shift_left_is_multiply_by_power_of_two() {
    let mut r = common::rng(2);
    for _ in 0..100 {
        let a = common::rand_int(&mut r, 300, true);
        for k in [0u64, 1, 27, 28, 60, 99] {
            let mut shifted = a.clone();
            shifted.shl_(k).unwrap();
            let two_k = Int::from_power_of_two(k).unwrap();
            let via_mul = a.mul(&two_k).unwrap();
            assert_eq!(shifted, via_mul, "shl({k}) should equal mul by 2^{k}");
        }
    }
}

#[test]
fn shift_right_is_truncating_divide() {
    let mut r = common::rng(3);
    for _ in 0..100 {
        let a = common::rand_int(&mut r, 300, true);
        for k in [0u64, 1, 27, 28, 60, 99] {
            let mut shifted = a.clone();
            shifted.shr_(k).unwrap();
            let two_k = Int::from_power_of_two(k).unwrap();
            let via_div = a.div(&two_k).unwrap();
            assert_eq!(shifted, via_div, "shr({k}) should equal truncating div by 2^{k}");
        }
    }
}

#[test]
fn shift_by_zero_is_identity() {
    let a = common::int_from_i64(-123456);
    let mut shifted = a.clone();
    shifted.shl_(0).unwrap();
    assert_eq!(a, shifted);
    let mut shifted = a.clone();
    shifted.shr_(0).unwrap();
    assert_eq!(a, shifted);
}

#[test]
fn shift_right_past_bit_length_is_zero() {
    let a = common::int_from_u64(12345);
    let mut shifted = a.clone();
    shifted.shr_(a.count_bits() + 10).unwrap();
    assert!(shifted.is_zero());
}

#[test]
fn shr_digit_whole_limb_matches_bit_shift() {
    let a = common::rand_int(&mut common::rng(4), 400, false);
    for n in 0..5usize {
        let mut by_limb = a.clone();
        by_limb.shr_digit_(n).unwrap();
        let mut by_bits = a.clone();
        by_bits.shr_(n as u64 * bigint_core::DIGIT_BITS as u64).unwrap();
        assert_eq!(by_limb, by_bits);
    }
}
