//! Two's-complement `and`/`or`/`xor`/`not` emulated over the sign-magnitude
//! representation.
//!
//! A negative operand's limbs are converted to two's-complement form
//! on the fly: a running carry initialized to 1 complements each limb
//! under `MASK` (`~limb + carry`), which is exactly two's-complement
//! negation applied one limb at a time. The result is converted back the
//! same way if the computed sign calls for it.

use crate::int::{Int, Sign};
use bigint_internals::{Digit, Result, MASK};

/// Reads limb `i` of `x` in two's-complement form (sign-extended past
/// `x.used`), updating `carry` (initially 1 for a negative `x`, unused -
/// and irrelevant - for a non-negative one).
#[inline]
fn twos_complement_limb(x: &Int, i: usize, carry: &mut Digit) -> Digit {
    if x.is_positive() {
        return if i < x.used { x.digit[i] } else { 0 };
    }
    let raw = if i < x.used { x.digit[i] } else { 0 };
    let inverted = (!raw) & MASK;
    let (sum, carry_out) = bigint_internals::widening::widen_add(inverted, *carry, 0);
    *carry = carry_out;
    sum
}

impl Int {
    fn bitwise_combine(
        a: &Int,
        b: &Int,
        result_negative: bool,
        op: impl Fn(Digit, Digit) -> Digit,
    ) -> Result<Int> {
        let used = a.used.max(b.used) + 1;
        let mut carry_a: Digit = 1;
        let mut carry_b: Digit = 1;
        let mut out = vec![0 as Digit; used];
        for i in 0..used {
            let da = twos_complement_limb(a, i, &mut carry_a);
            let db = twos_complement_limb(b, i, &mut carry_b);
            out[i] = op(da, db);
        }
        if result_negative {
            let mut carry: Digit = 1;
            for d in &mut out {
                let inverted = (!*d) & MASK;
                let (sum, carry_out) = bigint_internals::widening::widen_add(inverted, carry, 0);
                *d = sum;
                carry = carry_out;
            }
        }
        let mut result = Int::from_magnitude_digits(out);
        if result_negative {
            result.sign = Sign::Negative;
        }
        result.clamp();
        Ok(result)
    }

    pub fn and_(&mut self, a: &Int, b: &Int) -> Result<()> {
        let negative = a.is_negative() && b.is_negative();
        let out = Self::bitwise_combine(a, b, negative, |x, y| x & y)?;
        self.copy_from(&out)
    }

    pub fn or_(&mut self, a: &Int, b: &Int) -> Result<()> {
        let negative = a.is_negative() || b.is_negative();
        let out = Self::bitwise_combine(a, b, negative, |x, y| x | y)?;
        self.copy_from(&out)
    }

    pub fn xor_(&mut self, a: &Int, b: &Int) -> Result<()> {
        let negative = a.is_negative() != b.is_negative();
        let out = Self::bitwise_combine(a, b, negative, |x, y| x ^ y)?;
        self.copy_from(&out)
    }

    pub fn and(&self, other: &Int) -> Result<Int> {
        let mut out = Int::new();
        out.and_(self, other)?;
        Ok(out)
    }

    pub fn or(&self, other: &Int) -> Result<Int> {
        let mut out = Int::new();
        out.or_(self, other)?;
        Ok(out)
    }

    pub fn xor(&self, other: &Int) -> Result<Int> {
        let mut out = Int::new();
        out.xor_(self, other)?;
        Ok(out)
    }

    /// `self = ~a = -a - 1`, computed by flipping `a`'s sign, subtracting
    /// one, then restoring the original sign on the copy used as scratch.
    pub fn complement_(&mut self, a: &Int) -> Result<()> {
        let mut t = a.clone_mutable();
        t.sign = if t.is_zero() {
            Sign::Negative
        } else {
            t.sign.negate()
        };
        t.sub_digit_(1)?;
        self.copy_from(&t)
    }

    pub fn complement(&self) -> Result<Int> {
        let mut out = Int::new();
        out.complement_(self)?;
        Ok(out)
    }
}
