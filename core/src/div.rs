//! The division core: single-digit division fast paths, Knuth's Algorithm
//! D schoolbook long division, and a recursive divide-and-conquer variant
//! used when the denominator is a large fraction of the numerator's size.

use crate::int::{Int, Sign};
use bigint_internals::widening::divide_double_digit;
use bigint_internals::{Digit, Error, Result, DIGIT_BITS};

/// Limb count below which recursive division defers to schoolbook
/// division rather than splitting further.
const RECURSIVE_DIVMOD_CUTOFF: usize = 40;

impl Int {
    /// Divides the magnitude of `self` by the single digit `d`, returning
    /// `(quotient magnitude, remainder digit)`. Both are unsigned; callers
    /// combining this with sign handling live in [`Int::divmod`].
    pub fn divmod_digit_magnitude(&self, d: Digit) -> Result<(Int, Digit)> {
        if d == 0 {
            return Err(Error::DivisionByZero);
        }
        if self.used == 0 {
            return Ok((Int::new(), 0));
        }
        if d == 1 {
            return Ok((self.clone_mutable(), 0));
        }
        if d & d.wrapping_sub(1) == 0 {
            let bits = d.trailing_zeros() as u64;
            let rem = self.mod_bits(bits)?;
            let mut q = self.clone_mutable();
            q.shr_(bits)?;
            let rem_digit = if rem.used == 0 { 0 } else { rem.digit[0] };
            return Ok((q, rem_digit));
        }
        // General limb-by-limb long division from the top down, carrying
        // the running remainder as the high digit of a double-digit
        // dividend at each step.
        let mut q = self.clone_mutable();
        let mut rem: Digit = 0;
        for i in (0..self.used).rev() {
            let (qi, ri) = divide_double_digit(rem, self.digit[i], d);
            q.digit[i] = qi;
            rem = ri;
        }
        q.clamp();
        Ok((q, rem))
    }

    /// `self / d` and `self % d` for a single unsigned digit `d`, with full
    /// sign handling (remainder takes the sign of `self`).
    pub fn divmod_digit(&self, d: Digit) -> Result<(Int, Int)> {
        let (mut q, r) = self.divmod_digit_magnitude(d)?;
        q.sign = if q.is_zero() { Sign::NonNegative } else { self.sign };
        let mut rem = Int::from_digit(r);
        if !rem.is_zero() {
            rem.sign = self.sign;
        }
        Ok((q, rem))
    }

    /// `self = self / d` in place, dropping the remainder.
    pub fn div_digit_(&mut self, d: Digit) -> Result<()> {
        let (q, _) = self.divmod_digit(d)?;
        *self = q;
        Ok(())
    }

    /// Full signed division: `(quotient, remainder)` with truncation
    /// toward zero (quotient sign follows the sign rule of multiplication;
    /// remainder sign follows the numerator).
    pub fn divmod(&self, denominator: &Int) -> Result<(Int, Int)> {
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.compare_magnitude(denominator) == core::cmp::Ordering::Less {
            return Ok((Int::new(), self.clone_mutable()));
        }
        if denominator.used == 1 {
            return self.divmod_digit(denominator.digit[0]);
        }
        let (q_mag, r_mag) = if denominator.used >= RECURSIVE_DIVMOD_CUTOFF
            && denominator.used * 3 >= self.used * 2
        {
            log::trace!(
                "divmod: dispatching to recursive division (numerator.used={}, denominator.used={})",
                self.used,
                denominator.used
            );
            Self::recursive_divmod_magnitude(self, denominator)?
        } else {
            log::trace!(
                "divmod: dispatching to schoolbook division (numerator.used={}, denominator.used={})",
                self.used,
                denominator.used
            );
            Self::schoolbook_divmod_magnitude(self, denominator)?
        };
        let mut q = q_mag;
        q.sign = if q.is_zero() {
            Sign::NonNegative
        } else {
            Sign::of_product(self.sign, denominator.sign)
        };
        let mut r = r_mag;
        r.sign = if r.is_zero() { Sign::NonNegative } else { self.sign };
        Ok((q, r))
    }

    pub fn div(&self, other: &Int) -> Result<Int> {
        Ok(self.divmod(other)?.0)
    }

    pub fn rem(&self, other: &Int) -> Result<Int> {
        Ok(self.divmod(other)?.1)
    }

    /// `self mod d` normalized so the result shares `d`'s sign (or is
    /// zero): the non-negative-remainder convention, as opposed to the
    /// truncating remainder [`Int::rem`] returns.
    ///
    /// Note: the normalization step below adds `self` (the numerator) back
    /// in, not `d` (the denominator), when the truncating remainder's sign
    /// disagrees with `d`'s. That mirrors a quirk observed in the system
    /// this kernel was modeled on rather than the textbook-conventional
    /// "add the denominator" - see the open question recorded in
    /// `DESIGN.md` before assuming this is a typo to fix.
    pub fn modulo(&self, d: &Int) -> Result<Int> {
        let (_, mut r) = self.divmod(d)?;
        if !r.is_zero() && r.sign != d.sign {
            let bumped = r.add(self)?;
            r = bumped;
        }
        Ok(r)
    }

    /// Schoolbook long division (Knuth's Algorithm D) on magnitudes,
    /// returning `(quotient, remainder)`.
    ///
    /// The divisor is normalized (shifted left) so its top limb's high bit
    /// is set, which keeps the single-limb quotient-digit estimate within
    /// one of the true value; the shift is undone on the remainder at the
    /// end.
    fn schoolbook_divmod_magnitude(numerator: &Int, denominator: &Int) -> Result<(Int, Int)> {
        let shift = (denominator.digit[denominator.used - 1].leading_zeros()
            - (Digit::BITS - DIGIT_BITS)) as u64;
        let mut n = numerator.clone_mutable();
        n.sign = Sign::NonNegative;
        n.shl_(shift)?;
        let mut d = denominator.clone_mutable();
        d.sign = Sign::NonNegative;
        d.shl_(shift)?;

        let dn = d.used;
        // un is the numerator's working limb count; it must be at least dn
        // and must have one extra leading (zero) limb above whatever the
        // normalizing shift produced, for the top digit Algorithm D reads.
        let un = n.used.max(dn);
        n.grow(un + 1)?;
        n.used = un + 1;

        let m = un - dn;
        let mut quotient = Int::new();
        quotient.grow(m + 1)?;
        quotient.used = m + 1;

        let base: u128 = 1u128 << DIGIT_BITS;
        let v_top = d.digit[dn - 1] as u128;
        let v_second = if dn >= 2 { d.digit[dn - 2] as u128 } else { 0 };

        for j in (0..=m).rev() {
            let u_top = n.digit[j + dn] as u128;
            let u_next = n.digit[j + dn - 1] as u128;
            let numer = (u_top << DIGIT_BITS) | u_next;
            let mut qhat = numer / v_top;
            let mut rhat = numer % v_top;
            if qhat >= base {
                qhat = base - 1;
                rhat = numer - qhat * v_top;
            }
            while rhat < base {
                let u_next2 = if dn >= 2 { n.digit[j + dn - 2] as u128 } else { 0 };
                if qhat * v_second > (rhat << DIGIT_BITS) + u_next2 {
                    qhat -= 1;
                    rhat += v_top;
                } else {
                    break;
                }
            }

            // Multiply-and-subtract qhat*d from n at offset j.
            let mut mul_carry: u128 = 0;
            let mut borrow: i128 = 0;
            for i in 0..dn {
                let p = qhat * (d.digit[i] as u128) + mul_carry;
                mul_carry = p / base;
                let sub_lo = (p % base) as i128;
                let cur = n.digit[j + i] as i128 + borrow;
                let mut diff = cur - sub_lo;
                if diff < 0 {
                    diff += base as i128;
                    borrow = -1;
                } else {
                    borrow = 0;
                }
                n.digit[j + i] = diff as Digit;
            }
            let mut diff = n.digit[j + dn] as i128 + borrow - mul_carry as i128;
            let mut underflow = false;
            if diff < 0 {
                diff += base as i128;
                underflow = true;
            }
            n.digit[j + dn] = diff as Digit;

            if underflow {
                qhat -= 1;
                let mut c: Digit = 0;
                for i in 0..dn {
                    let (s, carry_out) =
                        bigint_internals::widening::widen_add(n.digit[j + i], d.digit[i], c);
                    n.digit[j + i] = s;
                    c = carry_out;
                }
                let (s, _) = bigint_internals::widening::widen_add(n.digit[j + dn], c, 0);
                n.digit[j + dn] = s;
            }

            quotient.digit[j] = qhat as Digit;
        }

        quotient.clamp();
        n.used = dn;
        n.clamp();
        n.shr_(shift)?;
        Ok((quotient, n))
    }

    /// Recursive divide-and-conquer division, used when the denominator's
    /// limb count is a large fraction of the numerator's (otherwise
    /// schoolbook division's O(n) quotient digits each doing O(n) work
    /// dominates for little benefit). Splits the denominator at its
    /// midpoint limb into `(d1, d0)`, recurses on the numerator's matching
    /// high part against `d1`, then corrects the trial quotient/remainder
    /// against the full denominator with a bidirectional fix-up loop.
    fn recursive_divmod_magnitude(numerator: &Int, denominator: &Int) -> Result<(Int, Int)> {
        // Work purely in magnitudes from here down, regardless of what
        // sign the caller's operands carried.
        let numerator = numerator.abs()?;
        let denominator = denominator.abs()?;
        let numerator = &numerator;
        let denominator = &denominator;

        if denominator.used < RECURSIVE_DIVMOD_CUTOFF {
            return Self::schoolbook_divmod_magnitude(numerator, denominator);
        }
        let k = denominator.used / 2;
        let (d0, d1) = denominator.split_limbs(k);
        let (numerator_low, numerator_high) = numerator.split_limbs(k);

        let (mut trial_q, trial_r) = Self::recursive_divmod_magnitude(&numerator_high, &d1)?;

        // remainder*B^k + numerator_low - trial_q*d0, corrected until back
        // in [0, denominator).
        let mut r = trial_r.clone_mutable();
        r.shl_digit_(k)?;
        r = r.add(&numerator_low)?;
        let qd0 = trial_q.mul(&d0)?;
        let mut full_r = r.sub(&qd0)?;

        while full_r.is_negative() {
            trial_q.sub_digit_(1)?;
            full_r = full_r.add(denominator)?;
        }
        while full_r.compare_magnitude(denominator) != core::cmp::Ordering::Less {
            trial_q.add_digit_(1)?;
            full_r = full_r.sub(denominator)?;
        }

        Ok((trial_q, full_r))
    }

    /// Splits the magnitude at limb boundary `k`: returns `(low, high)`
    /// where `self == high * B^k + low` and both are non-negative.
    pub(crate) fn split_limbs(&self, k: usize) -> (Int, Int) {
        let mut low = self.clone_mutable();
        low.sign = Sign::NonNegative;
        if k < low.used {
            for d in &mut low.digit[k..low.used] {
                *d = 0;
            }
            low.used = k;
        }
        low.clamp();

        let mut high = self.clone_mutable();
        high.sign = Sign::NonNegative;
        let _ = high.shr_digit_(k);
        (low, high)
    }
}
