//! Higher-level algebraic operations built on top of the additive,
//! multiplicative, and divisive cores: integer roots, exponentiation,
//! logarithm, factorial, gcd/lcm, and modular arithmetic.

use crate::int::{Int, Sign};
use bigint_internals::widening::small_pow;
use bigint_internals::{Error, Result, FACTORIAL_BINARY_SPLIT_CUTOFF, MAX_ITERATIONS_ROOT_N};

impl Int {
    /// Integer square root (`floor(sqrt(self))`), via [`Int::root_n`] with
    /// `n = 2`.
    pub fn sqrt(&self) -> Result<Int> {
        self.root_n(2)
    }

    /// Integer `n`-th root (`floor(self^(1/n))`), found by Newton's method
    /// on `f(x) = x^n - self`.
    ///
    /// `n` must be positive; an even `n` additionally requires `self` be
    /// non-negative (no real even root of a negative number exists). `n ==
    /// 1` returns `self` unchanged. The iteration is seeded from a rough
    /// bit-count estimate and is bounded by [`MAX_ITERATIONS_ROOT_N`] rather
    /// than an infinite loop; in practice Newton's method converges to a
    /// fixed point in a small constant number of iterations for any operand
    /// this crate can hold, but even if it doesn't, the one-step-at-a-time
    /// settle loop that follows always walks the estimate to the exact
    /// floor, so hitting the bound is logged, not surfaced as an error.
    pub fn root_n(&self, n: u32) -> Result<Int> {
        if n == 0 {
            return Err(Error::MathDomainError("root_n: n must be positive"));
        }
        if self.is_negative() && n % 2 == 0 {
            return Err(Error::MathDomainError(
                "root_n: even root of a negative number",
            ));
        }
        if self.is_zero() {
            return Ok(Int::new());
        }
        if n == 1 {
            return Ok(self.clone_mutable());
        }
        let negative_odd_root = self.is_negative();
        let mag = self.abs()?;
        if mag.compare_digit(1) != core::cmp::Ordering::Greater {
            // |self| <= 1: its own n-th root.
            return Ok(self.clone_mutable());
        }

        let n_int = Int::from_u64(n as u64);

        // Seed the iteration with 2^ceil(bits/n), an overestimate of the
        // true root (within a small constant factor) that Newton's method
        // converges down from monotonically.
        let bits = mag.count_bits();
        let seed_bits = ((bits + n as u64 - 1) / n as u64).max(1);
        let mut x = Int::from_power_of_two(seed_bits)?;

        let mut converged = false;
        for _ in 0..MAX_ITERATIONS_ROOT_N {
            let x_pow_n_minus_1 = x.pow(&Int::from_u64((n - 1) as u64))?;
            let x_pow_n = x_pow_n_minus_1.mul(&x)?;
            if x_pow_n.compare(&mag) == core::cmp::Ordering::Equal {
                converged = true;
                break;
            }
            // x_next = ((n-1)*x + self/x^(n-1)) / n
            let numerator_term1 = x.mul_digit((n - 1) as bigint_internals::Digit)?;
            let divisor_term2 = mag.div(&x_pow_n_minus_1)?;
            let sum = numerator_term1.add(&divisor_term2)?;
            let next = sum.div(&n_int)?;
            if next.compare(&x) == core::cmp::Ordering::Equal {
                converged = true;
                break;
            }
            x = next;
        }
        if !converged {
            // The settle loop below always walks `x` to the exact floor
            // regardless, so this isn't fatal - just noteworthy, since it
            // means the quadratic-convergence estimate above didn't settle
            // on its own within the iteration budget.
            log::debug!(
                "root_n: Newton iteration hit MAX_ITERATIONS_ROOT_N ({MAX_ITERATIONS_ROOT_N}) without reaching a fixed point (n={n}, bits={bits}); falling back to the settle loop"
            );
        }

        // Newton's method for integer roots can oscillate by one at the
        // boundary; settle by nudging down until x^n <= mag < (x+1)^n.
        loop {
            let x_pow_n = x.pow(&n_int)?;
            if x_pow_n.compare(&mag) == core::cmp::Ordering::Greater {
                x.sub_digit_(1)?;
            } else {
                let mut x_plus_1 = x.clone_mutable();
                x_plus_1.add_digit_(1)?;
                let next_pow_n = x_plus_1.pow(&n_int)?;
                if next_pow_n.compare(&mag) != core::cmp::Ordering::Greater {
                    x = x_plus_1;
                } else {
                    break;
                }
            }
        }

        if negative_odd_root {
            x.sign = Sign::Negative;
        }
        Ok(x)
    }

    /// `self^p` via square-and-multiply. `p` must be non-negative (there is
    /// no fractional/rational result type here); `self == 0` with `p == 0`
    /// is `1` by the usual convention, but `self == 0` with `p < 0` would be
    /// a division by zero and `p < 0` is rejected outright since this
    /// method has no way to return a non-integer result.
    pub fn pow(&self, p: &Int) -> Result<Int> {
        if p.is_negative() {
            return Err(Error::MathDomainError("pow: negative exponent"));
        }
        if p.is_zero() {
            return Ok(Int::from_u64(1));
        }
        if p.compare_digit(1) == core::cmp::Ordering::Equal {
            return Ok(self.clone_mutable());
        }
        if p.compare_digit(2) == core::cmp::Ordering::Equal {
            return self.sqr();
        }
        if self.is_zero() {
            return Ok(Int::new());
        }

        let mut base = self.clone_mutable();
        let mut exp = p.clone_mutable();
        let mut result = Int::from_u64(1);
        while !exp.is_zero() {
            if exp.is_odd() {
                result = result.mul(&base)?;
            }
            exp.shr1_()?;
            if !exp.is_zero() {
                base = base.sqr()?;
            }
        }
        Ok(result)
    }

    /// Integer logarithm of `self` base `base`: the largest `k` with
    /// `base^k <= self`. Requires `self >= 1` and `base >= 2`.
    ///
    /// Dispatches to a shift count for a power-of-two base, and to a direct
    /// `Word`-arithmetic comparison when `self` fits in a single limb;
    /// otherwise brackets `k` by doubling and bisects, testing each
    /// candidate with [`Int::pow`].
    pub fn log(&self, base: &Int) -> Result<u64> {
        if self.is_negative() || self.is_zero() {
            return Err(Error::MathDomainError("log: argument must be positive"));
        }
        if base.compare_digit(2) == core::cmp::Ordering::Less {
            return Err(Error::MathDomainError("log: base must be at least 2"));
        }
        if base.is_power_of_two() {
            return Ok(self.count_bits() - 1);
        }
        if self.used <= 1 && base.used <= 1 {
            let s = self.digit_or_zero() as u128;
            let b = base.digit_or_zero() as u128;
            let mut k = 0u64;
            let mut acc: u128 = 1;
            while acc * b <= s {
                acc *= b;
                k += 1;
            }
            return Ok(k);
        }

        // Bracket k by doubling, then bisect within [lo, hi].
        let mut hi: u64 = 1;
        while base.pow(&Int::from_u64(hi))?.compare(self) != core::cmp::Ordering::Greater {
            hi = hi.checked_mul(2).ok_or(Error::InvalidArgument {
                name: "log bracket",
                value: hi as i128,
            })?;
        }
        let mut lo: u64 = hi / 2;
        while lo + 1 < hi {
            let mid = lo + (hi - lo) / 2;
            if base.pow(&Int::from_u64(mid))?.compare(self) != core::cmp::Ordering::Greater {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Ok(lo)
    }

    fn digit_or_zero(&self) -> bigint_internals::Digit {
        if self.used == 0 {
            0
        } else {
            self.digit[0]
        }
    }

    /// `n!`. Dispatches to a small lookup-free iterative product below
    /// [`FACTORIAL_BINARY_SPLIT_CUTOFF`], and to a binary-split recursive
    /// product (pairing adjacent factors so the partial products stay
    /// balanced in size, which keeps each multiply in the Karatsuba/Toom
    /// range rather than degrading to repeated single-digit multiplies)
    /// above it.
    pub fn factorial(n: u64) -> Result<Int> {
        if n < 2 {
            return Ok(Int::from_u64(1));
        }
        if n < FACTORIAL_BINARY_SPLIT_CUTOFF {
            let mut acc = Int::from_u64(1);
            for k in 2..=n {
                acc = acc.mul_digit(k as bigint_internals::Digit)?;
            }
            Ok(acc)
        } else {
            Self::factorial_range(2, n)
        }
    }

    /// Product of `lo..=hi`, splitting the range in half recursively so
    /// both halves stay comparably sized.
    fn factorial_range(lo: u64, hi: u64) -> Result<Int> {
        if lo > hi {
            return Ok(Int::from_u64(1));
        }
        if lo == hi {
            return Ok(Int::from_u64(lo));
        }
        if hi - lo < 32 {
            let mut acc = Int::from_u64(lo);
            for k in (lo + 1)..=hi {
                acc = acc.mul_digit(k as bigint_internals::Digit)?;
            }
            return Ok(acc);
        }
        let mid = lo + (hi - lo) / 2;
        let left = Self::factorial_range(lo, mid)?;
        let right = Self::factorial_range(mid + 1, hi)?;
        left.mul(&right)
    }

    /// Greatest common divisor of `|self|` and `|other|`, via the quotient-
    /// free binary GCD algorithm (repeatedly strips common factors of two,
    /// then reduces the larger by subtracting the smaller). Always
    /// non-negative; `gcd(0, 0) == 0`.
    pub fn gcd(&self, other: &Int) -> Result<Int> {
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }
        let mut a = self.abs()?;
        let mut b = other.abs()?;
        let shift = a.count_trailing_zeros().min(b.count_trailing_zeros());
        a.shr_(a.count_trailing_zeros())?;
        b.shr_(b.count_trailing_zeros())?;
        loop {
            if a.compare(&b) == core::cmp::Ordering::Greater {
                a.swap(&mut b)?;
            }
            b = b.sub(&a)?;
            if b.is_zero() {
                break;
            }
            b.shr_(b.count_trailing_zeros())?;
        }
        a.shl_(shift)?;
        Ok(a)
    }

    /// Least common multiple: `|self| / gcd(self, other) * |other|`,
    /// dividing before multiplying so the intermediate product never grows
    /// past the size of the final result. `lcm(0, _) == 0`.
    pub fn lcm(&self, other: &Int) -> Result<Int> {
        if self.is_zero() || other.is_zero() {
            return Ok(Int::new());
        }
        let g = self.gcd(other)?;
        let reduced = self.abs()?.div(&g)?;
        reduced.mul(&other.abs()?)
    }

    /// `(self + other) mod m`, via the non-negative-remainder convention
    /// ([`Int::modulo`]).
    pub fn addmod(&self, other: &Int, m: &Int) -> Result<Int> {
        self.add(other)?.modulo(m)
    }

    /// `(self - other) mod m`.
    pub fn submod(&self, other: &Int, m: &Int) -> Result<Int> {
        self.sub(other)?.modulo(m)
    }

    /// `(self * other) mod m`.
    pub fn mulmod(&self, other: &Int, m: &Int) -> Result<Int> {
        self.mul(other)?.modulo(m)
    }

    /// `(self * self) mod m`.
    pub fn sqrmod(&self, m: &Int) -> Result<Int> {
        self.sqr()?.modulo(m)
    }

    pub(crate) fn from_u64(v: u64) -> Int {
        let mut out = Int::new();
        let _ = out.set_u64(v);
        out
    }
}
