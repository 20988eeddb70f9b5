use bigint_core::Int;
use rand_xoshiro::rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro128StarStar;

/// A fixed-seed generator, so a test failure is reproducible across runs.
pub fn rng(seed: u64) -> Xoshiro128StarStar {
    Xoshiro128StarStar::seed_from_u64(seed)
}

pub fn int_from_i64(v: i64) -> Int {
    let mut out = Int::new();
    out.set_i64(v).unwrap();
    out
}

pub fn int_from_u64(v: u64) -> Int {
    let mut out = Int::new();
    out.set_u64(v).unwrap();
    out
}

/// A random non-negative `Int` of up to `bits` bits, optionally negated.
pub fn rand_int(r: &mut impl RngCore, bits: u64, allow_negative: bool) -> Int {
    let mut out = Int::new();
    out.rand(bits, r).unwrap();
    if allow_negative && r.next_u32() % 2 == 0 && !out.is_zero() {
        out = out.neg().unwrap();
    }
    out
}
