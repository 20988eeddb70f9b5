//! The multiplicative core: single-digit multiply, and general multiply/
//! squaring dispatched among schoolbook, Comba, Karatsuba, and Toom-Cook-3,
//! plus a balance variant for very unbalanced operand sizes.
//!
//! Every sub-algorithm here operates on non-negative magnitudes; [`Int::mul_`]
//! is the only place the result's sign is decided (the product of two
//! non-zero operands is negative iff exactly one operand was negative).

use crate::int::{Int, Sign};
use bigint_internals::widening::{widen_add, widen_mul_add};
use bigint_internals::{
    Digit, Result, Word, DIGIT_BITS, MAX_COMBA, MUL_KARATSUBA_CUTOFF, MUL_TOOM_CUTOFF,
    SQR_KARATSUBA_CUTOFF, SQR_TOOM_CUTOFF, WARRAY,
};

impl Int {
    /// `self = a * b`, full dispatch including sign.
    pub fn mul_(&mut self, a: &Int, b: &Int) -> Result<()> {
        if a.is_zero() || b.is_zero() {
            return self.set_zero();
        }
        let mag = Self::mul_magnitude(a, b)?;
        self.copy_from(&mag)?;
        self.sign = Sign::of_product(a.sign, b.sign);
        Ok(())
    }

    pub fn mul(&self, other: &Int) -> Result<Int> {
        let mut out = Int::new();
        out.mul_(self, other)?;
        Ok(out)
    }

    /// `self = a * a`. Uses its own dispatch thresholds
    /// ([`SQR_KARATSUBA_CUTOFF`], [`SQR_TOOM_CUTOFF`]) rather than the
    /// general multiply's, since a single operand squared can afford to
    /// switch tiers at a different size than two independent operands - but
    /// routes through the exact same Karatsuba/Toom/Comba/schoolbook
    /// kernels with both operands equal to `a`, since dedicated
    /// column-skipping squaring kernels are a hand-tuned optimization this
    /// crate doesn't implement.
    pub fn sqr_(&mut self, a: &Int) -> Result<()> {
        if a.is_zero() {
            return self.set_zero();
        }
        let mag = Self::sqr_magnitude(a)?;
        self.copy_from(&mag)?;
        self.sign = Sign::NonNegative;
        Ok(())
    }

    pub fn sqr(&self) -> Result<Int> {
        let mut out = Int::new();
        out.sqr_(self)?;
        Ok(out)
    }

    /// `self = a * m` for a single unsigned digit `m`, with fast paths for
    /// 0, 1, 2, and general powers of two.
    pub fn mul_digit_(&mut self, a: &Int, m: Digit) -> Result<()> {
        if m == 0 || a.is_zero() {
            return self.set_zero();
        }
        if m == 1 {
            return self.copy_from(a);
        }
        if m & m.wrapping_sub(1) == 0 {
            let mut out = a.clone_mutable();
            out.shl_(m.trailing_zeros() as u64)?;
            self.copy_from(&out)?;
            self.sign = a.sign;
            return Ok(());
        }
        let old_used = self.used;
        self.grow(a.used + 1)?;
        let mut carry: Word = 0;
        for i in 0..a.used {
            let wide = (a.digit[i] as Word) * (m as Word) + carry;
            self.digit[i] = (wide & (bigint_internals::MASK as Word)) as Digit;
            carry = wide >> DIGIT_BITS;
        }
        self.digit[a.used] = carry as Digit;
        self.used = a.used + 1;
        self.zero_unused(Some(old_used));
        self.sign = a.sign;
        self.clamp();
        Ok(())
    }

    pub fn mul_digit(&self, m: Digit) -> Result<Int> {
        let mut out = Int::new();
        out.mul_digit_(self, m)?;
        Ok(out)
    }

    /// Dispatches among schoolbook, Comba, Karatsuba, Toom-Cook-3, and the
    /// unbalanced-operand "balance" variant, returning a non-negative
    /// magnitude.
    fn mul_magnitude(a: &Int, b: &Int) -> Result<Int> {
        let small = a.used.min(b.used);
        let large = a.used.max(b.used);

        if small >= MUL_KARATSUBA_CUTOFF && large >= 2 * small {
            log::trace!("mul_magnitude: dispatching to balance (small={small}, large={large})");
            return Self::balance_mul(a, b);
        }
        if small >= MUL_TOOM_CUTOFF {
            log::trace!("mul_magnitude: dispatching to toom33 (small={small})");
            return Self::toom33_mul(a, b);
        }
        if small >= MUL_KARATSUBA_CUTOFF {
            log::trace!("mul_magnitude: dispatching to karatsuba (small={small})");
            return Self::karatsuba_mul(a, b);
        }
        if a.used + b.used + 1 < WARRAY && small <= MAX_COMBA {
            log::trace!("mul_magnitude: dispatching to comba (a.used={}, b.used={})", a.used, b.used);
            return Ok(Self::comba_mul(a, b));
        }
        log::trace!("mul_magnitude: dispatching to schoolbook (a.used={}, b.used={})", a.used, b.used);
        Ok(Self::schoolbook_mul(a, b))
    }

    /// Squaring's own dispatch, at [`SQR_TOOM_CUTOFF`]/[`SQR_KARATSUBA_CUTOFF`]
    /// rather than the general multiply's cutoffs, routed through the same
    /// kernels with both operands equal to `a`.
    fn sqr_magnitude(a: &Int) -> Result<Int> {
        if a.used >= SQR_TOOM_CUTOFF {
            log::trace!("sqr_magnitude: dispatching to toom33 (a.used={})", a.used);
            return Self::toom33_mul(a, a);
        }
        if a.used >= SQR_KARATSUBA_CUTOFF {
            log::trace!("sqr_magnitude: dispatching to karatsuba (a.used={})", a.used);
            return Self::karatsuba_mul(a, a);
        }
        if 2 * a.used + 1 < WARRAY && a.used < MAX_COMBA / 2 {
            log::trace!("sqr_magnitude: dispatching to comba (a.used={})", a.used);
            return Ok(Self::comba_mul(a, a));
        }
        log::trace!("sqr_magnitude: dispatching to schoolbook (a.used={})", a.used);
        Ok(Self::schoolbook_mul(a, a))
    }

    /// O(n*m) schoolbook multiply: for each non-zero limb of `a`, multiply
    /// it across all of `b`'s limbs with a `Word`-wide carry chain, then
    /// ripple any leftover carry on up through the result.
    fn schoolbook_mul(a: &Int, b: &Int) -> Int {
        let mut out = vec![0 as Digit; a.used + b.used];
        for i in 0..a.used {
            if a.digit[i] == 0 {
                continue;
            }
            let mut carry: Digit = 0;
            for j in 0..b.used {
                let (lo, hi) = widen_mul_add(a.digit[i], b.digit[j], out[i + j], carry);
                out[i + j] = lo;
                carry = hi;
            }
            let mut k = i + b.used;
            while carry != 0 {
                let (s, c) = widen_add(out[k], carry, 0);
                out[k] = s;
                carry = c;
                k += 1;
            }
        }
        Int::from_magnitude_digits(out)
    }

    /// Comba-style column summation: every column's contributing products
    /// are summed into a single `Word` accumulator (wide enough per
    /// [`MAX_COMBA`]) before the carry into the next column is resolved,
    /// rather than propagating a carry after every individual multiply.
    fn comba_mul(a: &Int, b: &Int) -> Int {
        let n = a.used + b.used;
        let mut out = vec![0 as Digit; n];
        let mut carry: Word = 0;
        for col in 0..n {
            let i_start = col.saturating_sub(b.used.saturating_sub(1));
            let i_end = col.min(a.used.saturating_sub(1));
            let mut col_sum = carry;
            if a.used > 0 && b.used > 0 && i_start <= i_end {
                for i in i_start..=i_end {
                    let j = col - i;
                    col_sum += (a.digit[i] as Word) * (b.digit[j] as Word);
                }
            }
            out[col] = (col_sum & (bigint_internals::MASK as Word)) as Digit;
            carry = col_sum >> DIGIT_BITS;
        }
        Int::from_magnitude_digits(out)
    }

    /// Recursive 2-way split: `a = a_hi*B^half + a_lo`, similarly for `b`.
    /// `z0 = a_lo*b_lo`, `z2 = a_hi*b_hi`, and the middle term is
    /// recovered as `(a_lo+a_hi)*(b_lo+b_hi) - z0 - z2` so only three
    /// half-sized multiplies are needed instead of four.
    fn karatsuba_mul(a: &Int, b: &Int) -> Result<Int> {
        let half = (a.used.max(b.used) + 1) / 2;
        if half == 0 || a.used <= half && b.used <= half {
            return Self::schoolbook_mul_or_recurse(a, b);
        }
        let (a_lo, a_hi) = a.split_limbs(half);
        let (b_lo, b_hi) = b.split_limbs(half);

        let z0 = Self::mul_magnitude(&a_lo, &b_lo)?;
        let z2 = Self::mul_magnitude(&a_hi, &b_hi)?;
        let a_mid = a_lo.add(&a_hi)?;
        let b_mid = b_lo.add(&b_hi)?;
        let z1_full = Self::mul_magnitude(&a_mid, &b_mid)?;
        let z1 = z1_full.sub(&z0)?.sub(&z2)?;

        let mut result = z2;
        result.shl_digit_(2 * half)?;
        let mut mid = z1;
        mid.shl_digit_(half)?;
        result = result.add(&mid)?;
        result = result.add(&z0)?;
        Ok(result)
    }

    /// 3-way split Toom-Cook: evaluate both operands at `x in {0, 1, -1,
    /// 2, infinity}`, multiply the five evaluation-point pairs (each
    /// about a third the size, recursing into the same dispatch), and
    /// interpolate the degree-4 product polynomial's coefficients back
    /// out using only exact division by 2 and 3 - exact because the
    /// interpolation matrix for these five points has integer entries and
    /// the underlying coefficients are themselves integers.
    fn toom33_mul(a: &Int, b: &Int) -> Result<Int> {
        let third = (a.used.max(b.used) + 2) / 3;
        if third == 0 {
            return Self::schoolbook_mul_or_recurse(a, b);
        }
        let (a0, a_rest) = a.split_limbs(third);
        let (a1, a2) = a_rest.split_limbs(third);
        let (b0, b_rest) = b.split_limbs(third);
        let (b1, b2) = b_rest.split_limbs(third);

        let r0 = Self::mul_magnitude(&a0, &b0)?;
        let r_inf = Self::mul_magnitude(&a2, &b2)?;

        let a_sum1 = a0.add(&a1)?.add(&a2)?;
        let b_sum1 = b0.add(&b1)?.add(&b2)?;
        let r1 = Self::mul_magnitude(&a_sum1, &b_sum1)?;

        let a_negx = a0.sub(&a1)?.add(&a2)?;
        let b_negx = b0.sub(&b1)?.add(&b2)?;
        let mut r_neg1 = Self::mul_magnitude(&a_negx, &b_negx)?;
        r_neg1.sign = Sign::of_product(a_negx.sign, b_negx.sign);

        let mut a1x2 = a1.clone_mutable();
        a1x2.shl_(1)?;
        let mut a2x4 = a2.clone_mutable();
        a2x4.shl_(2)?;
        let a_2 = a0.add(&a1x2)?.add(&a2x4)?;
        let mut b1x2 = b1.clone_mutable();
        b1x2.shl_(1)?;
        let mut b2x4 = b2.clone_mutable();
        b2x4.shl_(2)?;
        let b_2 = b0.add(&b1x2)?.add(&b2x4)?;
        let r2 = Self::mul_magnitude(&a_2, &b_2)?;

        // c0 and c4 (the outer coefficients) are read directly off the
        // evaluations at 0 and infinity.
        let c0 = r0;
        let c4 = r_inf;

        let a_ = r1.sub(&c0)?.sub(&c4)?;
        let b_ = r_neg1.sub(&c0)?.sub(&c4)?;
        let c2 = a_.add(&b_)?.exact_div_small(2)?;
        let c_ = a_.sub(&b_)?.exact_div_small(2)?; // c1 + c3

        let mut c4x16 = c4.clone_mutable();
        c4x16.shl_(4)?;
        let mut c2x4 = c2.clone_mutable();
        c2x4.shl_(2)?;
        let d_ = r2.sub(&c0)?.sub(&c4x16)?;
        let e_ = d_.sub(&c2x4)?;
        let f_ = e_.exact_div_small(2)?; // c1 + 4*c3

        let c3 = f_.sub(&c_)?.exact_div_small(3)?;
        let c1 = c_.sub(&c3)?;

        let mut result = c4;
        result.shl_digit_(4 * third)?;
        let mut t3 = c3;
        t3.shl_digit_(3 * third)?;
        result = result.add(&t3)?;
        let mut t2 = c2;
        t2.shl_digit_(2 * third)?;
        result = result.add(&t2)?;
        let mut t1 = c1;
        t1.shl_digit_(third)?;
        result = result.add(&t1)?;
        result = result.add(&c0)?;
        Ok(result)
    }

    /// Exact division of `self` by the small positive constant `d` (2 or
    /// 3), preserving sign. Used only by the Toom-Cook interpolation step,
    /// where the division is mathematically guaranteed to have zero
    /// remainder.
    fn exact_div_small(&self, d: Digit) -> Result<Int> {
        let (q, r) = self.divmod_digit_magnitude(d)?;
        debug_assert_eq!(r, 0, "toom-cook interpolation expected an exact division");
        let mut q = q;
        q.sign = if q.is_zero() { Sign::NonNegative } else { self.sign };
        Ok(q)
    }

    /// The "balance" variant for heavily unbalanced operand sizes: split
    /// the larger operand into chunks the size of the smaller one,
    /// multiply each chunk against the smaller operand, and accumulate
    /// the shifted partial products.
    fn balance_mul(a: &Int, b: &Int) -> Result<Int> {
        let (small, large) = if a.used <= b.used { (a, b) } else { (b, a) };
        let chunk = small.used.max(1);
        let mut result = Int::new();
        let mut offset = 0usize;
        let mut remaining = large.clone_mutable();
        while !remaining.is_zero() {
            let (lo, hi) = remaining.split_limbs(chunk);
            let mut partial = Self::mul_magnitude(&lo, small)?;
            partial.shl_digit_(offset)?;
            result = result.add(&partial)?;
            remaining = hi;
            offset += chunk;
        }
        Ok(result)
    }

    /// Karatsuba/Toom recursion bottoms out here once a split would no
    /// longer shrink either operand below its own size.
    fn schoolbook_mul_or_recurse(a: &Int, b: &Int) -> Result<Int> {
        if a.used + b.used + 1 < WARRAY && a.used.min(b.used) <= MAX_COMBA {
            Ok(Self::comba_mul(a, b))
        } else {
            Ok(Self::schoolbook_mul(a, b))
        }
    }

    pub(crate) fn from_magnitude_digits(mut digits: Vec<Digit>) -> Int {
        let mut used = digits.len();
        while used > 0 && digits[used - 1] == 0 {
            used -= 1;
        }
        if digits.len() < bigint_internals::MIN_DIGIT_COUNT {
            digits.resize(bigint_internals::MIN_DIGIT_COUNT, 0);
        }
        Int::from_raw_parts(Sign::NonNegative, used, digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn random_magnitude(limbs: usize, seed: u64) -> Int {
        let mut state = seed ^ 0x9E3779B97F4A7C15;
        let mut digits = vec![0 as Digit; limbs.max(1)];
        for d in &mut digits {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            *d = (state as Digit) & bigint_internals::MASK;
        }
        Int::from_magnitude_digits(digits)
    }

    #[test]
    fn toom33_matches_schoolbook_on_three_limb_operands() {
        for seed in 0..8u64 {
            let a = random_magnitude(3, seed);
            let b = random_magnitude(3, seed + 100);
            let toom = Int::toom33_mul(&a, &b).unwrap();
            let school = Int::schoolbook_mul(&a, &b);
            assert_eq!(toom, school, "seed={seed}");
        }
    }

    #[test]
    fn toom33_matches_schoolbook_on_unequal_operands() {
        let a = random_magnitude(7, 1);
        let b = random_magnitude(4, 2);
        let toom = Int::toom33_mul(&a, &b).unwrap();
        let school = Int::schoolbook_mul(&a, &b);
        assert_eq!(toom, school);
    }

    #[test]
    fn karatsuba_matches_schoolbook() {
        for seed in 0..8u64 {
            let a = random_magnitude(6, seed);
            let b = random_magnitude(5, seed + 50);
            let kara = Int::karatsuba_mul(&a, &b).unwrap();
            let school = Int::schoolbook_mul(&a, &b);
            assert_eq!(kara, school, "seed={seed}");
        }
    }

    #[test]
    fn comba_matches_schoolbook() {
        let a = random_magnitude(10, 7);
        let b = random_magnitude(9, 8);
        let comba = Int::comba_mul(&a, &b);
        let school = Int::schoolbook_mul(&a, &b);
        assert_eq!(comba, school);
    }
}
