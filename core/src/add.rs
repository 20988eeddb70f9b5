//! The additive core: magnitude add/sub (HAC Algorithms 14.7/14.9), signed
//! dispatch on top of them, and single-digit fast paths.

use crate::int::{Int, Sign};
use bigint_internals::widening::{widen_add, widen_sub};
use bigint_internals::{Digit, Result};

impl Int {
    /// `self = |a| + |b|`, ignoring both operands' signs. HAC Algorithm
    /// 14.7: propagate a carry across the shorter operand's limbs, then
    /// through the longer operand's remaining limbs, finishing with one
    /// extra limb for any carry left over.
    pub fn add_unsigned_(&mut self, a: &Int, b: &Int) -> Result<()> {
        let (hi, lo) = if a.used >= b.used { (a, b) } else { (b, a) };
        let old_used = self.used;
        self.grow(hi.used + 1)?;
        let mut carry: Digit = 0;
        for i in 0..lo.used {
            let (s, c) = widen_add(hi.digit[i], lo.digit[i], carry);
            self.digit[i] = s;
            carry = c;
        }
        for i in lo.used..hi.used {
            let (s, c) = widen_add(hi.digit[i], 0, carry);
            self.digit[i] = s;
            carry = c;
        }
        self.digit[hi.used] = carry;
        self.used = hi.used + 1;
        self.zero_unused(Some(old_used));
        self.sign = Sign::NonNegative;
        self.clamp();
        Ok(())
    }

    /// `self = |number| - |decrease|`. Precondition: `|number| >=
    /// |decrease|`. HAC Algorithm 14.9: the borrow is the complement of
    /// the top bit of the underflowed digit.
    pub fn sub_unsigned_(&mut self, number: &Int, decrease: &Int) -> Result<()> {
        debug_assert!(number.compare_magnitude(decrease) != core::cmp::Ordering::Less);
        let old_used = self.used;
        self.grow(number.used)?;
        let mut borrow: Digit = 0;
        for i in 0..decrease.used {
            let (d, b) = widen_sub(number.digit[i], decrease.digit[i], borrow);
            self.digit[i] = d;
            borrow = b;
        }
        for i in decrease.used..number.used {
            let (d, b) = widen_sub(number.digit[i], 0, borrow);
            self.digit[i] = d;
            borrow = b;
        }
        debug_assert_eq!(borrow, 0, "sub_unsigned_ precondition violated");
        self.used = number.used;
        self.zero_unused(Some(old_used));
        self.sign = Sign::NonNegative;
        self.clamp();
        Ok(())
    }

    /// `self = a + b`, full signed dispatch.
    pub fn add_(&mut self, a: &Int, b: &Int) -> Result<()> {
        if a.sign == b.sign {
            self.add_unsigned_(a, b)?;
            self.sign = if self.is_zero() { Sign::NonNegative } else { a.sign };
            Ok(())
        } else if a.compare_magnitude(b) != core::cmp::Ordering::Less {
            self.sub_unsigned_(a, b)?;
            self.sign = if self.is_zero() { Sign::NonNegative } else { a.sign };
            Ok(())
        } else {
            self.sub_unsigned_(b, a)?;
            self.sign = if self.is_zero() { Sign::NonNegative } else { b.sign };
            Ok(())
        }
    }

    /// `self = a - b`, full signed dispatch.
    pub fn sub_(&mut self, a: &Int, b: &Int) -> Result<()> {
        if a.sign != b.sign {
            self.add_unsigned_(a, b)?;
            self.sign = if self.is_zero() { Sign::NonNegative } else { a.sign };
            Ok(())
        } else if a.compare_magnitude(b) != core::cmp::Ordering::Less {
            self.sub_unsigned_(a, b)?;
            self.sign = if self.is_zero() { Sign::NonNegative } else { a.sign };
            Ok(())
        } else {
            self.sub_unsigned_(b, a)?;
            self.sign = if self.is_zero() { Sign::NonNegative } else { b.sign.negate() };
            Ok(())
        }
    }

    pub fn neg_(&mut self, a: &Int) -> Result<()> {
        self.copy_from(a)?;
        if !self.is_zero() {
            self.sign = self.sign.negate();
        }
        Ok(())
    }

    pub fn abs_(&mut self, a: &Int) -> Result<()> {
        self.copy_from(a)?;
        self.sign = Sign::NonNegative;
        Ok(())
    }

    /// `self = a + d` for an unsigned single-limb `d`.
    pub fn add_digit_(&mut self, d: Digit) -> Result<()> {
        let a = self.clone_mutable();
        let digit_int = Int::from_digit(d);
        self.add_(&a, &digit_int)
    }

    /// `self = a - d` for an unsigned single-limb `d`.
    pub fn sub_digit_(&mut self, d: Digit) -> Result<()> {
        let a = self.clone_mutable();
        let digit_int = Int::from_digit(d);
        self.sub_(&a, &digit_int)
    }

    pub fn add(&self, other: &Int) -> Result<Int> {
        let mut out = Int::new();
        out.add_(self, other)?;
        Ok(out)
    }

    pub fn sub(&self, other: &Int) -> Result<Int> {
        let mut out = Int::new();
        out.sub_(self, other)?;
        Ok(out)
    }

    pub fn neg(&self) -> Result<Int> {
        let mut out = Int::new();
        out.neg_(self)?;
        Ok(out)
    }

    pub fn abs(&self) -> Result<Int> {
        let mut out = Int::new();
        out.abs_(self)?;
        Ok(out)
    }

    pub(crate) fn from_digit(d: Digit) -> Int {
        let mut out = Int::new();
        if d != 0 {
            out.digit = vec![0; bigint_internals::MIN_DIGIT_COUNT];
            out.digit[0] = d & bigint_internals::MASK;
            out.used = 1;
        }
        out
    }
}
