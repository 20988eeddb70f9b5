//! The literal end-to-end scenarios named as acceptance criteria: each one
//! pins a specific input/output pair rather than a general law, so a
//! regression here points straight at what broke.

mod common;

use bigint_core::Int;

#[test]
fn scenario_1_add_two_to_the_128_doubled() {
    let a = Int::from_power_of_two(128).unwrap();
    let sum = a.add(&a).unwrap();
    assert_eq!(sum, Int::from_power_of_two(129).unwrap());
    assert_eq!(sum.used(), a.used() + 1);
}

#[test]
fn scenario_2_mul_ten_to_the_20_squared() {
    let e20 = common::int_from_i64(10).pow(&common::int_from_i64(20)).unwrap();
    let e40 = common::int_from_i64(10).pow(&common::int_from_i64(40)).unwrap();
    assert_eq!(e20.mul(&e20).unwrap(), e40);
}

#[test]
fn scenario_3_divmod_ten_to_the_40_by_ten_to_the_20() {
    let e20 = common::int_from_i64(10).pow(&common::int_from_i64(20)).unwrap();
    let e40 = common::int_from_i64(10).pow(&common::int_from_i64(40)).unwrap();
    let (q, r) = e40.divmod(&e20).unwrap();
    assert_eq!(q, e20);
    assert!(r.is_zero());
    assert_eq!(r.sign(), bigint_core::Sign::NonNegative);
}

#[test]
fn scenario_4_sqrt_ten_to_the_40() {
    let e20 = common::int_from_i64(10).pow(&common::int_from_i64(20)).unwrap();
    let e40 = common::int_from_i64(10).pow(&common::int_from_i64(40)).unwrap();
    assert_eq!(e40.sqrt().unwrap(), e20);
}

#[test]
fn scenario_5_pow_two_1000() {
    let p = common::int_from_i64(2).pow(&common::int_from_i64(1000)).unwrap();
    assert_eq!(p.count_bits(), 1001);
    assert!(p.is_power_of_two());
}

#[test]
fn scenario_6_and_minus_one_256_bit_with_0xff() {
    let minus_one = common::int_from_i64(-1);
    let mask = common::int_from_i64(0xFF);
    assert_eq!(minus_one.and(&mask).unwrap(), mask);
}
