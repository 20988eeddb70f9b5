//! Canonicalization invariants and the storage-layer primitives
//! (`grow`/`shrink`/`clamp`/`copy_from`/`swap`) from the storage layer.

mod common;

use bigint_core::{Int, Sign};

fn assert_canonical(x: &Int) {
    if x.used() == 0 {
        assert_eq!(x.sign(), Sign::NonNegative);
    } else {
        assert_ne!(x.limbs()[x.used() - 1], 0);
    }
    assert!(x.capacity() >= x.used());
}

#[test]
fn zero_is_canonical() {
    let z = Int::new();
    assert!(z.is_zero());
    assert_canonical(&z);
}

#[test]
fn negative_zero_normalizes() {
    // 5 - 5 should produce a zero with NonNegative sign, not a "negative
    // zero".
    let five = common::int_from_i64(5);
    let r = five.sub(&five).unwrap();
    assert!(r.is_zero());
    assert_eq!(r.sign(), Sign::NonNegative);
}

#[test]
fn copy_from_self_is_noop() {
    let mut a = common::int_from_u64(123456789);
    let snapshot = a.clone();
    a.copy_from(&a).unwrap();
    assert_eq!(a, snapshot);
}

#[test]
fn copy_from_matches_source() {
    let src = common::int_from_i64(-987654321);
    let mut dest = Int::new();
    dest.copy_from(&src).unwrap();
    assert_eq!(dest, src);
    assert_canonical(&dest);
}

#[test]
fn swap_exchanges_contents() {
    let mut a = common::int_from_i64(11);
    let mut b = common::int_from_i64(-22);
    let a_orig = a.clone();
    let b_orig = b.clone();
    a.swap(&mut b).unwrap();
    assert_eq!(a, b_orig);
    assert_eq!(b, a_orig);
}

#[test]
fn set_zero_preserves_capacity() {
    let mut a = common::int_from_u64(u64::MAX);
    let cap_before = a.capacity();
    a.set_zero().unwrap();
    assert!(a.is_zero());
    assert_eq!(a.capacity(), cap_before);
}

#[test]
fn grow_never_shrinks_capacity() {
    let mut a = Int::new();
    a.grow(100).unwrap();
    let cap = a.capacity();
    a.grow(4).unwrap();
    assert!(a.capacity() >= cap);
}

#[test]
fn shrink_reclaims_unused_capacity() {
    let mut a = Int::new();
    a.grow(500).unwrap();
    a.copy_from(&common::int_from_u64(42)).unwrap();
    a.shrink().unwrap();
    assert!(a.capacity() < 500);
    assert_eq!(a, common::int_from_u64(42));
}

#[test]
fn immutable_sentinels_reject_mutation() {
    let mut zero = Int::sentinel_zero();
    let err = zero.set_zero();
    assert!(err.is_err());
    let mut one = Int::sentinel_one();
    assert!(one.add_digit_(1).is_err());
}

#[test]
fn clamp_idempotent_after_every_op() {
    let mut r = common::rng(1);
    for _ in 0..200 {
        let a = common::rand_int(&mut r, 256, true);
        let b = common::rand_int(&mut r, 256, true);
        for result in [
            a.add(&b).unwrap(),
            a.sub(&b).unwrap(),
            a.mul(&b).unwrap(),
            a.and(&b).unwrap(),
            a.or(&b).unwrap(),
            a.xor(&b).unwrap(),
        ] {
            assert_canonical(&result);
        }
    }
}
