//! Bitwise and whole-limb shifts.
//!
//! Shift amounts are taken as `u64` and validated: a negative shift has no
//! representation here (the type is unsigned), but an unreasonably large
//! one is still rejected via `MAX_BIT_COUNT` rather than being allowed to
//! drive an allocation request that could overflow `usize`.

use crate::int::Int;
use bigint_internals::{Error, Result, DIGIT_BITS, MASK, MAX_BIT_COUNT};

fn check_bits(bits: u64) -> Result<()> {
    if bits > MAX_BIT_COUNT {
        return Err(Error::InvalidArgument {
            name: "bits",
            value: bits as i128,
        });
    }
    Ok(())
}

impl Int {
    /// `self * 2` in place.
    pub fn shl1_(&mut self) -> Result<()> {
        let old_used = self.used;
        self.grow(self.used + 1)?;
        let mut carry = 0 as crate::Digit;
        for i in 0..old_used {
            let d = self.digit[i];
            self.digit[i] = ((d << 1) | carry) & MASK;
            carry = d >> (DIGIT_BITS - 1);
        }
        if carry != 0 {
            self.digit[old_used] = carry;
            self.used = old_used + 1;
        }
        self.zero_unused(None);
        self.clamp();
        Ok(())
    }

    /// `self / 2` rounding toward zero, in place. Drops the low bit.
    pub fn shr1_(&mut self) -> Result<()> {
        let used = self.used;
        let mut carry = 0 as crate::Digit;
        for i in (0..used).rev() {
            let d = self.digit[i];
            self.digit[i] = (d >> 1) | (carry << (DIGIT_BITS - 1));
            carry = d & 1;
        }
        self.clamp();
        Ok(())
    }

    /// Shifts left by `n` whole limbs (multiplies by `2^(n*DIGIT_BITS)`).
    pub fn shl_digit_(&mut self, n: usize) -> Result<()> {
        if n == 0 || self.used == 0 {
            return Ok(());
        }
        let old_used = self.used;
        self.grow(old_used + n)?;
        for i in (0..old_used).rev() {
            self.digit[i + n] = self.digit[i];
        }
        for d in &mut self.digit[..n] {
            *d = 0;
        }
        self.used = old_used + n;
        self.zero_unused(None);
        Ok(())
    }

    /// Shifts right by `n` whole limbs (divides by `2^(n*DIGIT_BITS)`,
    /// truncating). `n >= used` yields zero.
    pub fn shr_digit_(&mut self, n: usize) -> Result<()> {
        if n >= self.used {
            return self.set_zero();
        }
        if n == 0 {
            return Ok(());
        }
        let old_used = self.used;
        for i in 0..(old_used - n) {
            self.digit[i] = self.digit[i + n];
        }
        self.used = old_used - n;
        self.zero_unused(Some(old_used));
        self.clamp();
        Ok(())
    }

    /// Shifts left by `bits` (combines a whole-limb shift with a sub-limb
    /// shift); multiplies the magnitude by `2^bits`.
    pub fn shl_(&mut self, bits: u64) -> Result<()> {
        check_bits(bits)?;
        let whole = (bits / DIGIT_BITS as u64) as usize;
        let rem = (bits % DIGIT_BITS as u64) as u32;
        if whole > 0 {
            self.shl_digit_(whole)?;
        }
        for _ in 0..rem {
            self.shl1_()?;
        }
        Ok(())
    }

    /// Shifts right by `bits`, truncating the magnitude toward zero;
    /// equivalent to [`Int::shrmod`] with the remainder discarded.
    pub fn shr_(&mut self, bits: u64) -> Result<()> {
        let (q, _) = self.shrmod(bits)?;
        *self = q;
        Ok(())
    }

    /// Shifts right by `bits`, returning `(quotient, remainder)` where
    /// `remainder` is the low `bits` bits of `self`'s magnitude (sign
    /// matching `self`, i.e. this is a magnitude split, not a modular
    /// reduction).
    pub fn shrmod(&self, bits: u64) -> Result<(Int, Int)> {
        check_bits(bits)?;
        let mut q = self.clone_mutable();
        let whole = (bits / DIGIT_BITS as u64) as usize;
        let rem = (bits % DIGIT_BITS as u64) as u32;
        q.shr_digit_(whole)?;
        for _ in 0..rem {
            q.shr1_()?;
        }
        let r = self.mod_bits(bits)?;
        Ok((q, r))
    }

    /// `self mod 2^bits` (the low `bits` bits of the magnitude, sign
    /// preserved as-is, no renormalization against a divisor's sign - use
    /// [`Int::modulo`] for that).
    pub fn mod_bits(&self, bits: u64) -> Result<Int> {
        check_bits(bits)?;
        let mut r = self.clone_mutable();
        let whole = (bits / DIGIT_BITS as u64) as usize;
        let rem = (bits % DIGIT_BITS as u64) as u32;
        if whole < r.used {
            for d in &mut r.digit[whole + 1..r.used] {
                *d = 0;
            }
            r.used = (whole + 1).min(r.used);
            if rem > 0 && whole < r.digit.len() {
                r.digit[whole] &= (1 << rem) - 1;
            } else if whole < r.digit.len() {
                r.digit[whole] = 0;
            }
        }
        r.clamp();
        Ok(r)
    }

    /// Arithmetic right shift under two's-complement semantics, emulated
    /// over the sign-magnitude representation: for non-negative `self`
    /// this is [`Int::shr_`]; for negative `self` it is
    /// `-((-self - 1) >> bits) - 1`, i.e. it rounds toward negative
    /// infinity rather than toward zero.
    pub fn shr_signed(&self, bits: u64) -> Result<Int> {
        check_bits(bits)?;
        if self.is_positive() {
            let mut out = self.clone_mutable();
            out.shr_(bits)?;
            return Ok(out);
        }
        // self is negative and non-zero: result = -(((|self| - 1) >> bits) + 1)
        let mut t = self.clone_mutable();
        t.sign = crate::int::Sign::NonNegative;
        t.sub_digit_(1)?;
        t.shr_(bits)?;
        t.add_digit_(1)?;
        t.sign = crate::int::Sign::Negative;
        Ok(t)
    }
}
