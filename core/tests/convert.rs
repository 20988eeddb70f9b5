//! Bitfield extraction and narrow-type conversions.

mod common;

use bigint_core::Int;
use rand_xoshiro::rand_core::RngCore;

#[test]
fn u64_round_trip() {
    let mut r = common::rng(50);
    for _ in 0..300 {
        let v = r.next_u64();
        assert_eq!(common::int_from_u64(v).get_u64(), v);
    }
}

#[test]
fn u32_round_trip() {
    let mut r = common::rng(51);
    for _ in 0..300 {
        let v = r.next_u32();
        assert_eq!(common::int_from_u64(v as u64).get_u32(), v);
    }
}

#[test]
fn i64_round_trip_for_values_fitting_63_bits() {
    let mut r = common::rng(52);
    for _ in 0..300 {
        let v = (r.next_u64() >> 1) as i64 * if r.next_u32() % 2 == 0 { 1 } else { -1 };
        assert_eq!(common::int_from_i64(v).get_i64(), v);
    }
}

#[test]
fn bitfield_extract_matches_manual_shift_mask() {
    let mut r = common::rng(53);
    for _ in 0..200 {
        let v = r.next_u64();
        let a = common::int_from_u64(v);
        for (offset, count) in [(0u64, 8u32), (8, 8), (16, 16), (3, 5), (32, 32), (0, 64)] {
            let extracted = a.bitfield_extract(offset, count).unwrap();
            let expected = if count == 64 {
                v >> offset
            } else {
                (v >> offset) & ((1u64 << count) - 1)
            };
            assert_eq!(extracted as u64, expected, "offset={offset} count={count}");
        }
    }
}

#[test]
fn power_of_two_constructor_matches_shift() {
    for k in [0u64, 1, 27, 28, 63, 64, 127] {
        let p = Int::from_power_of_two(k).unwrap();
        let mut one = common::int_from_i64(1);
        one.shl_(k).unwrap();
        assert_eq!(p, one);
    }
}

#[test]
fn rand_respects_requested_bit_count() {
    let mut r = common::rng(54);
    for bits in [1u64, 7, 8, 28, 29, 100] {
        let mut a = Int::new();
        a.rand(bits, &mut r).unwrap();
        assert!(a.count_bits() <= bits, "rand({bits}) produced {} bits", a.count_bits());
    }
}

#[test]
fn get_float_matches_f64_cast_for_small_values() {
    let mut r = common::rng(55);
    for _ in 0..100 {
        let v = r.next_u32() as u64;
        let a = common::int_from_u64(v);
        assert_eq!(a.get_float(), v as f64);
    }
}
